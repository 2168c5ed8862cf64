//! Application configuration.

/// Configuration model and defaults.
pub mod app_config;
/// Command-line arguments.
pub mod args;
/// Config file storage.
pub mod storage;

pub use app_config::{
    ApiConfig, AppConfig, LogLevel, SessionConfig, SpeechConfig, ThemeConfig, UiConfig,
};
pub use args::CliArgs;
pub use storage::{ConfigError, StorageManager};
