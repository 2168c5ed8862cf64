//! Infrastructure layer with external service adapters.

/// System clipboard adapter.
pub mod clipboard;
/// Application configuration.
pub mod config;
/// Text-to-speech adapter.
pub mod speech;
/// Translation API client.
pub mod translate;

pub use clipboard::ClipboardService;
pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
pub use speech::{CommandSpeechService, SpeechBackend};
pub use translate::HttpTranslationClient;
