//! JSON-file client storage.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::domain::errors::SessionError;
use crate::domain::ports::ClientStoragePort;

/// Client storage persisted as a flat JSON object of strings.
pub struct FileClientStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileClientStorage {
    /// Creates storage backed by `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, SessionError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            SessionError::storage(format!("failed to read {}: {e}", self.path.display()))
        })?;

        match serde_json::from_str(&content) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Client storage is corrupted, starting empty"
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn save(&self, items: &BTreeMap<String, String>) -> Result<(), SessionError> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(|e| SessionError::storage(e.to_string()))?;

        let content =
            serde_json::to_string_pretty(items).map_err(|e| SessionError::storage(e.to_string()))?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)
            .map_err(|e| SessionError::storage(e.to_string()))?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| SessionError::storage(e.to_string()))?;
        temp_file
            .persist(&self.path)
            .map_err(|e| SessionError::storage(e.error.to_string()))?;

        debug!(path = %self.path.display(), keys = items.len(), "Client storage saved");
        Ok(())
    }

    fn modify(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<(), SessionError> {
        let _guard = self.lock.lock();
        let mut items = self.load()?;
        f(&mut items);
        self.save(&items)
    }
}

impl ClientStoragePort for FileClientStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        let _guard = self.lock.lock();
        Ok(self.load()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.modify(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        self.modify(|items| {
            items.remove(key);
        })
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.modify(BTreeMap::clear)
    }
}
