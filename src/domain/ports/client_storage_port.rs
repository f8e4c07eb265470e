//! Client-side key/value storage port definition.

use crate::domain::errors::SessionError;

/// Key holding the JSON-encoded signed-in user.
pub const USER_KEY: &str = "user";

/// Key holding the store access token.
pub const JWT_KEY: &str = "jwt";

/// Port for the local key/value store that survives between runs.
pub trait ClientStoragePort: Send + Sync {
    /// Returns the value stored under `key`.
    ///
    /// # Errors
    /// Returns error if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Stores `value` under `key`.
    ///
    /// # Errors
    /// Returns error if the backing store cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Removes `key`.
    ///
    /// # Errors
    /// Returns error if the backing store cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), SessionError>;

    /// Removes every key.
    ///
    /// # Errors
    /// Returns error if the backing store cannot be written.
    fn clear(&self) -> Result<(), SessionError>;
}
