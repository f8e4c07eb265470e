//! In-process client storage.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::errors::SessionError;
use crate::domain::ports::ClientStoragePort;

/// Client storage that lives for the current process only.
#[derive(Default)]
pub struct MemoryClientStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryClientStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClientStoragePort for MemoryClientStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.items.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        self.items.write().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.items.write().clear();
        Ok(())
    }
}
