//! Infrastructure layer with external service adapters.

/// Bill store REST client.
pub mod api;
/// Application configuration.
pub mod config;
/// Client storage adapters.
pub mod storage;

pub use api::HttpBillStore;
pub use config::{AppConfig, CliArgs, Command, LogLevel, StorageManager};
pub use storage::{FileClientStorage, MemoryClientStorage};
