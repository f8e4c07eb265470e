//! Session use case: the signed-in user cached in client storage.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::SessionUser;
use crate::domain::errors::SessionError;
use crate::domain::ports::{ClientStoragePort, USER_KEY};

/// Reads and writes the cached session user.
#[derive(Clone)]
pub struct SessionUseCase {
    storage: Arc<dyn ClientStoragePort>,
}

impl SessionUseCase {
    /// Creates new session use case.
    #[must_use]
    pub fn new(storage: Arc<dyn ClientStoragePort>) -> Self {
        Self { storage }
    }

    /// Returns the signed-in user.
    ///
    /// # Errors
    /// Returns `Missing` when nobody is signed in and `Malformed` when the
    /// stored value is not a user record.
    pub fn current_user(&self) -> Result<SessionUser, SessionError> {
        let raw = self.storage.get_item(USER_KEY)?.ok_or_else(|| {
            debug!("No user in client storage");
            SessionError::Missing
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            warn!(error = %e, "Stored user could not be parsed");
            SessionError::malformed(e.to_string())
        })
    }

    /// Caches `user` as the signed-in user.
    ///
    /// # Errors
    /// Returns error if the storage cannot be written.
    pub fn sign_in(&self, user: &SessionUser) -> Result<(), SessionError> {
        let raw = serde_json::to_string(user).map_err(|e| SessionError::storage(e.to_string()))?;
        self.storage.set_item(USER_KEY, &raw)?;
        info!(email = %user.email, user_type = ?user.user_type, "Signed in");
        Ok(())
    }

    /// Forgets everything held in client storage.
    ///
    /// # Errors
    /// Returns error if the storage cannot be cleared.
    pub fn sign_out(&self) -> Result<(), SessionError> {
        self.storage.clear()?;
        info!("Signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockClientStorage;

    #[test]
    fn test_current_user_reads_stored_json() {
        let storage = Arc::new(MockClientStorage::with_user(
            r#"{"type":"Employee","email":"employee@test.com"}"#,
        ));
        let session = SessionUseCase::new(storage);

        let user = session.current_user().unwrap();
        assert_eq!(user, SessionUser::employee("employee@test.com"));
    }

    #[test]
    fn test_current_user_missing() {
        let session = SessionUseCase::new(Arc::new(MockClientStorage::new()));
        assert!(matches!(session.current_user(), Err(SessionError::Missing)));
    }

    #[test]
    fn test_current_user_malformed() {
        let storage = Arc::new(MockClientStorage::with_user(r#"{"type":"Employee"}"#));
        let session = SessionUseCase::new(storage);

        assert!(matches!(
            session.current_user(),
            Err(SessionError::Malformed { .. })
        ));
    }

    #[test]
    fn test_sign_in_then_sign_out() {
        let storage = Arc::new(MockClientStorage::new());
        let session = SessionUseCase::new(storage.clone());

        session.sign_in(&SessionUser::employee("a@b.c")).unwrap();
        assert_eq!(session.current_user().unwrap().email, "a@b.c");

        session.sign_out().unwrap();
        assert_eq!(storage.len(), 0);
        assert!(matches!(session.current_user(), Err(SessionError::Missing)));
    }
}
