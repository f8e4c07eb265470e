//! Signed-in user cached in client storage.

use serde::{Deserialize, Serialize};

/// Role of the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserType {
    /// Submits bills.
    #[default]
    Employee,
    /// Reviews bills.
    Admin,
}

/// Identity of the current session, read once and passed to containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// User role.
    #[serde(rename = "type")]
    pub user_type: UserType,
    /// User email, used to attribute bills and uploads.
    pub email: String,
}

impl SessionUser {
    /// Creates an employee session.
    #[must_use]
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            user_type: UserType::Employee,
            email: email.into(),
        }
    }

    /// Creates an admin session.
    #[must_use]
    pub fn admin(email: impl Into<String>) -> Self {
        Self {
            user_type: UserType::Admin,
            email: email.into(),
        }
    }

    /// Returns whether the user is an employee.
    #[must_use]
    pub const fn is_employee(&self) -> bool {
        matches!(self.user_type, UserType::Employee)
    }
}
