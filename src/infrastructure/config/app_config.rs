//! Application configuration.

use crate::domain::entities::{ApiKey, Language};
use crate::domain::keybinding::Action;
use crate::infrastructure::translate::{DEFAULT_API_KEY, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use super::storage::ConfigError;

pub(crate) const APP_NAME: &str = "transterm";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "linuxmobile";

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

/// Application configuration, read from `config.toml` and merged with CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Translation API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Initial language pair.
    #[serde(default)]
    pub session: SessionConfig,

    /// Text-to-speech settings.
    #[serde(default)]
    pub speech: SpeechConfig,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Custom keybindings, e.g. `"Ctrl+t" = "Translate"`.
    #[serde(default)]
    pub keybindings: HashMap<String, Action>,
}

/// Translation API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Endpoint receiving the POST request.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Static key sent as `X-API-Key` and bearer token.
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: default_api_key(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Initial language pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Source language code.
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code.
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            target_language: default_target_language(),
        }
    }
}

/// Text-to-speech settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Enable speech playback.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Speech command overriding auto-detection.
    /// Supports `{lang}` and `{text}` placeholders.
    #[serde(default)]
    pub command: Option<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: None,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Enable mouse capture.
    #[serde(default)]
    pub mouse: bool,

    /// Notification duration in seconds.
    #[serde(default = "default_notification_duration")]
    pub notification_duration: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse: false,
            notification_duration: default_notification_duration(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_api_key() -> String {
    DEFAULT_API_KEY.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "zh".to_string()
}

fn default_accent_color() -> String {
    "LightBlue".to_string()
}

fn default_true() -> bool {
    true
}

fn default_notification_duration() -> u64 {
    5
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(endpoint) = args.endpoint {
            self.api.endpoint = endpoint;
        }
        if let Some(api_key) = args.api_key {
            self.api.api_key = api_key;
        }
        if let Some(timeout_secs) = args.timeout_secs {
            self.api.timeout_secs = timeout_secs;
        }
        if let Some(source) = args.source {
            self.session.source_language = source;
        }
        if let Some(target) = args.target {
            self.session.target_language = target;
        }
        if let Some(speech_command) = args.speech_command {
            self.speech.command = Some(speech_command);
        }
        if args.no_speech {
            self.speech.enabled = false;
        }
        if let Some(mouse) = args.mouse {
            self.ui.mouse = mouse;
        }
        if let Some(notification_duration) = args.notification_duration {
            self.ui.notification_duration = notification_duration;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
    }

    /// Resolves the configured language pair.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownLanguage` for codes outside the catalog.
    pub fn language_pair(&self) -> Result<(Language, Language), ConfigError> {
        let resolve = |code: &str| {
            Language::find(code).ok_or_else(|| ConfigError::UnknownLanguage {
                code: code.to_string(),
            })
        };
        Ok((
            resolve(&self.session.source_language)?,
            resolve(&self.session.target_language)?,
        ))
    }

    /// Returns the validated API key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidApiKey` if the key is blank or malformed.
    pub fn api_key(&self) -> Result<ApiKey, ConfigError> {
        ApiKey::new(self.api.api_key.as_str()).ok_or(ConfigError::InvalidApiKey)
    }

    /// Request timeout. Zero falls back to the default.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        if self.api.timeout_secs == 0 {
            DEFAULT_TIMEOUT
        } else {
            Duration::from_secs(self.api.timeout_secs)
        }
    }

    /// Toast display duration.
    #[must_use]
    pub fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.ui.notification_duration)
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("transterm.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            api: ApiConfig::default(),
            session: SessionConfig::default(),
            speech: SpeechConfig::default(),
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
            keybindings: HashMap::new(),
        }
    }
}
