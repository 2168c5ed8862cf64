use std::io::stdout;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use transterm::domain::Session;
use transterm::infrastructure::{
    AppConfig, CliArgs, ClipboardService, CommandSpeechService, HttpTranslationClient,
    StorageManager,
};
use transterm::presentation::{App, AppPorts, CommandRegistry, Theme};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn create_app(config: &AppConfig) -> Result<App> {
    let (source, target) = config.language_pair()?;

    let translation = Arc::new(HttpTranslationClient::new(
        &config.api.endpoint,
        config.api_key()?,
        config.request_timeout(),
    )?);

    let speech = if config.speech.enabled {
        CommandSpeechService::detect(config.speech.command.as_deref())
    } else {
        info!("Speech disabled by configuration");
        CommandSpeechService::with_backend(None)
    };

    let ports = AppPorts {
        translation,
        clipboard: Arc::new(ClipboardService::new()),
        speech: Arc::new(speech),
    };

    Ok(App::new(
        Session::new(source, target),
        ports,
        CommandRegistry::with_overrides(&config.keybindings),
        Theme::new(&config.theme.accent_color),
        config.notification_duration(),
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let config = load_config()?;
    init_logging(&config)?;

    info!(
        version = transterm::VERSION,
        endpoint = %config.api.endpoint,
        "Starting transterm"
    );

    let app = create_app(&config)?;

    let mut terminal = ratatui::init();
    if let Err(e) = execute!(stdout(), EnableBracketedPaste) {
        warn!(error = %e, "Failed to enable bracketed paste");
    }
    if config.ui.mouse
        && let Err(e) = execute!(stdout(), EnableMouseCapture)
    {
        warn!(error = %e, "Failed to enable mouse capture");
    }

    let result = app.run(&mut terminal).await;

    if config.ui.mouse {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
    let _ = execute!(stdout(), DisableBracketedPaste);
    ratatui::restore();

    result
}
