use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "transterm",
    version,
    about = "A small terminal client for a remote translation API",
    long_about = None
)]
/// Command-line flags. Set flags override the config file.
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Translation endpoint URL.
    #[arg(long, value_name = "URL", env = "TRANSTERM_ENDPOINT")]
    pub endpoint: Option<String>,

    /// API key sent with every request.
    #[arg(long, value_name = "KEY", env = "TRANSTERM_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Initial source language code.
    #[arg(short, long, value_name = "CODE")]
    pub source: Option<String>,

    /// Initial target language code.
    #[arg(short, long, value_name = "CODE")]
    pub target: Option<String>,

    /// Speech command, with optional `{lang}` and `{text}` placeholders.
    #[arg(long, value_name = "COMMAND")]
    pub speech_command: Option<String>,

    /// Disable text-to-speech.
    #[arg(long)]
    pub no_speech: bool,

    /// Enable mouse capture.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Notification duration in seconds.
    #[arg(long)]
    pub notification_duration: Option<u64>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
