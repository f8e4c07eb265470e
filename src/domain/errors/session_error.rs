//! Session error types.

use thiserror::Error;

/// Session lookup error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum SessionError {
    #[error("no signed-in user")]
    Missing,

    #[error("stored user is malformed: {reason}")]
    Malformed { reason: String },

    #[error("client storage error: {message}")]
    Storage { message: String },
}

impl SessionError {
    /// Creates malformed error.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }

    /// Creates storage error.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
