//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;

pub(super) const APP_NAME: &str = "billed";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "billed";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and overridden by CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bill store base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Log file path. Logs go to stderr when unset.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Client storage file path.
    #[serde(default)]
    pub storage_path: Option<PathBuf>,

    /// Receipt preview configuration.
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// Receipt preview configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Width of the preview overlay in pixels. Receipts render at half of it.
    #[serde(default = "default_modal_width")]
    pub modal_width: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            modal_width: default_modal_width(),
        }
    }
}

fn default_api_url() -> String {
    "http://localhost:5678".to_string()
}

const fn default_modal_width() -> u32 {
    800
}

impl AppConfig {
    /// Applies command line overrides.
    pub fn merge_args(&mut self, args: &CliArgs) {
        if let Some(api_url) = &args.api_url {
            self.api_url.clone_from(api_url);
        }
        if let Some(level) = args.log_level {
            self.log_level = level;
        }
        if let Some(path) = &args.log_path {
            self.log_path = Some(path.clone());
        }
        if let Some(path) = &args.storage_path {
            self.storage_path = Some(path.clone());
        }
    }

    /// Returns default client storage path.
    #[must_use]
    pub fn default_storage_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("storage.json"))
    }

    /// Returns effective client storage path.
    #[must_use]
    pub fn effective_storage_path(&self) -> Option<PathBuf> {
        self.storage_path.clone().or_else(Self::default_storage_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            log_level: LogLevel::Info,
            log_path: None,
            storage_path: None,
            preview: PreviewConfig::default(),
        }
    }
}
