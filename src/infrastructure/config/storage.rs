//! Locating, creating and reading `config.toml`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};

const CONFIG_FILE_NAME: &str = "config.toml";

const CONFIG_HEADER: &str = "\
# billed configuration
#
# api_url      bill store base URL (overridden by --api-url or BILLED_API_URL)
# log_level    trace | debug | info | warn | error
# log_path     log file; logs go to stderr when unset
# storage_path session file; defaults to the platform data directory
#
# [preview]
# modal_width  receipt preview overlay width in pixels

";

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform has no configuration directory for this user.
    #[error("failed to determine config directory")]
    ConfigDirNotFound,

    /// Reading or writing a configuration path failed.
    #[error("failed to access {path}: {source}")]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The default configuration could not be rendered.
    #[error("failed to render default config: {0}")]
    Render(#[from] toml::ser::Error),
}

impl ConfigError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Owns the directory holding `config.toml`.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Uses the platform configuration directory for `billed`.
    ///
    /// # Errors
    /// Returns `ConfigDirNotFound` when the platform has none.
    pub fn new() -> Result<Self, ConfigError> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| Self::with_dir(dirs.config_dir().to_path_buf()))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    /// Uses `config_dir` instead of the platform directory.
    #[must_use]
    pub const fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Returns the configuration directory.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the file that [`load_config`](Self::load_config) reads.
    #[must_use]
    pub fn config_path(&self, path_override: Option<&Path>) -> PathBuf {
        path_override.map_or_else(|| self.config_dir.join(CONFIG_FILE_NAME), Path::to_path_buf)
    }

    /// Reads the configuration.
    ///
    /// A missing file is created with documented defaults. Missing keys take
    /// their defaults; an unparsable file is left untouched and ignored.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, or the default file cannot be
    /// written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let path = self.config_path(path_override);

        if !path.exists() {
            info!(path = %path.display(), "No config file, writing defaults");
            let config = AppConfig::default();
            Self::write_default(&path, &config)?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::io(&path, e))?;
        match toml::from_str::<AppConfig>(&content) {
            Ok(config) => {
                debug!(path = %path.display(), api_url = %config.api_url, "Config loaded");
                Ok(config)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Config file is invalid, using defaults");
                Ok(AppConfig::default())
            }
        }
    }

    fn write_default(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
        let content = format!("{CONFIG_HEADER}{}", toml::to_string_pretty(config)?);

        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;

        let mut file =
            tempfile::NamedTempFile::new_in(parent).map_err(|e| ConfigError::io(parent, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| ConfigError::io(path, e))?;
        file.persist(path).map_err(|e| ConfigError::io(path, e.error))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_written_with_documented_defaults() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().join("billed"));

        let config = manager.load_config(None).unwrap();
        assert_eq!(config.api_url, "http://localhost:5678");
        assert_eq!(config.preview.modal_width, 800);

        let written = fs::read_to_string(manager.config_path(None)).unwrap();
        assert!(written.starts_with("# billed configuration"));
        assert!(written.contains("api_url = \"http://localhost:5678\""));
        assert!(written.contains("modal_width = 800"));

        let reread = manager.load_config(None).unwrap();
        assert_eq!(reread.preview.modal_width, 800);
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_missing_keys() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        fs::write(
            manager.config_path(None),
            "log_level = \"debug\"\n\n[preview]\nmodal_width = 1024\n",
        )
        .unwrap();

        let config = manager.load_config(None).unwrap();

        assert_eq!(config.log_level.to_string(), "debug");
        assert_eq!(config.preview.modal_width, 1024);
        assert_eq!(config.api_url, "http://localhost:5678");
        assert_eq!(config.storage_path, None);
    }

    #[test]
    fn test_invalid_file_is_ignored_and_left_untouched() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        let path = manager.config_path(None);
        fs::write(&path, "[preview]\nmodal_width = \"wide\"\n").unwrap();

        let config = manager.load_config(None).unwrap();

        assert_eq!(config.preview.modal_width, 800);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[preview]\nmodal_width = \"wide\"\n"
        );
    }

    #[test]
    fn test_override_path_is_created_in_missing_directory() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().join("unused"));
        let custom = dir.path().join("profiles").join("staging.toml");

        manager.load_config(Some(&custom)).unwrap();

        assert!(custom.exists());
        assert!(!manager.config_dir().exists());
    }

    #[test]
    fn test_unreadable_config_reports_path() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        fs::create_dir(manager.config_path(None)).unwrap();

        let error = manager.load_config(None).unwrap_err();

        assert!(matches!(&error, ConfigError::Io { path, .. } if path.ends_with(CONFIG_FILE_NAME)));
    }
}
