//! Sign-out control.

use std::sync::Arc;

use crate::application::use_cases::SessionUseCase;
use crate::domain::errors::SessionError;
use crate::presentation::router::{Navigator, Route};

/// Signs the user out and returns to the sign-in view.
pub struct Logout {
    session: SessionUseCase,
    navigator: Arc<dyn Navigator>,
}

impl Logout {
    /// Creates the control.
    #[must_use]
    pub fn new(session: SessionUseCase, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }

    /// Clears client storage and navigates to the sign-in view.
    ///
    /// # Errors
    /// Returns error if client storage cannot be cleared; no navigation
    /// happens then.
    pub fn handle_click(&self) -> Result<(), SessionError> {
        self.session.sign_out()?;
        self.navigator.on_navigate(Route::Login);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SessionUser;
    use crate::domain::ports::ClientStoragePort;
    use crate::infrastructure::storage::MemoryClientStorage;
    use crate::presentation::page::Page;
    use crate::presentation::router::Router;

    #[test]
    fn test_logout_clears_session_and_shows_login() {
        let storage = Arc::new(MemoryClientStorage::new());
        let session = SessionUseCase::new(storage.clone());
        session.sign_in(&SessionUser::employee("employee@test.com")).unwrap();
        storage.set_item("jwt", "token").unwrap();

        let router = Arc::new(Router::new(Page::new()));
        router.on_navigate(Route::Bills);

        Logout::new(session.clone(), router.clone())
            .handle_click()
            .unwrap();

        assert!(matches!(session.current_user(), Err(SessionError::Missing)));
        assert_eq!(storage.get_item("jwt").unwrap(), None);
        assert_eq!(router.current(), Some(Route::Login));
        assert!(router.page().contains(r#"data-testid="login-page""#));
    }
}
