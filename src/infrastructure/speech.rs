//! Text-to-speech through a system speech program.

use std::env::consts::EXE_SUFFIX;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::domain::entities::Language;
use crate::domain::errors::SpeechError;
use crate::domain::ports::SpeechPort;

/// Programs probed in order when no command is configured.
const CANDIDATES: [&str; 4] = ["say", "espeak-ng", "espeak", "spd-say"];

const TEXT_PLACEHOLDER: &str = "{text}";
const LANG_PLACEHOLDER: &str = "{lang}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BackendKind {
    Say,
    Espeak,
    SpeechDispatcher,
    Custom,
}

/// A resolved speech program and how to call it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechBackend {
    program: String,
    extra_args: Vec<String>,
    kind: BackendKind,
}

impl SpeechBackend {
    fn known(program: &str) -> Option<Self> {
        let kind = match program {
            "say" => BackendKind::Say,
            "espeak-ng" | "espeak" => BackendKind::Espeak,
            "spd-say" => BackendKind::SpeechDispatcher,
            _ => return None,
        };
        Some(Self {
            program: program.to_string(),
            extra_args: Vec::new(),
            kind,
        })
    }

    /// Parses a user supplied command line such as `piper --lang {lang}`.
    ///
    /// `{lang}` expands to the language code and `{text}` to the text. When
    /// `{text}` is absent the text is passed as the last argument.
    #[must_use]
    pub fn custom(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(ToString::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            extra_args: parts.collect(),
            kind: BackendKind::Custom,
        })
    }

    /// Program name or path.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    fn args(&self, text: &str, language: Language) -> Vec<String> {
        let code = language.code().to_string();
        match self.kind {
            BackendKind::Say => vec!["--".to_string(), text.to_string()],
            BackendKind::Espeak => vec!["-v".to_string(), code, "--".to_string(), text.to_string()],
            BackendKind::SpeechDispatcher => vec![
                "-w".to_string(),
                "-l".to_string(),
                code,
                "--".to_string(),
                text.to_string(),
            ],
            BackendKind::Custom => {
                let mut has_text = false;
                let mut args: Vec<String> = self
                    .extra_args
                    .iter()
                    .map(|arg| {
                        if arg.contains(TEXT_PLACEHOLDER) {
                            has_text = true;
                        }
                        arg.replace(LANG_PLACEHOLDER, &code)
                            .replace(TEXT_PLACEHOLDER, text)
                    })
                    .collect();
                if !has_text {
                    args.push(text.to_string());
                }
                args
            }
        }
    }
}

/// Speech service that shells out to a speech program.
#[derive(Debug, Clone, Default)]
pub struct CommandSpeechService {
    backend: Option<SpeechBackend>,
}

impl CommandSpeechService {
    /// Uses the configured command, or probes `PATH` for a known program.
    #[must_use]
    pub fn detect(configured: Option<&str>) -> Self {
        if let Some(command) = configured {
            let backend = SpeechBackend::custom(command);
            if backend.is_none() {
                warn!("Configured speech command is empty, speech disabled");
            }
            return Self { backend };
        }

        let backend = std::env::var_os("PATH").and_then(|path| {
            let dirs: Vec<PathBuf> = std::env::split_paths(&path).collect();
            CANDIDATES
                .iter()
                .find(|program| find_in_dirs(program, &dirs).is_some())
                .and_then(|program| SpeechBackend::known(program))
        });

        match &backend {
            Some(b) => info!(program = %b.program, "Speech backend detected"),
            None => info!("No speech backend found"),
        }

        Self { backend }
    }

    /// Creates a service around a fixed backend.
    #[must_use]
    pub fn with_backend(backend: Option<SpeechBackend>) -> Self {
        Self { backend }
    }

    /// Resolved backend, `None` when speech is disabled.
    #[must_use]
    pub fn backend(&self) -> Option<&SpeechBackend> {
        self.backend.as_ref()
    }
}

/// Looks up `program` with the platform's executable suffix.
fn find_in_dirs(program: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    let file_name = format!("{program}{EXE_SUFFIX}");
    dirs.iter()
        .map(|dir| dir.join(&file_name))
        .find(|candidate| candidate.is_file())
}

#[async_trait]
impl SpeechPort for CommandSpeechService {
    fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    async fn speak(&self, text: &str, language: Language) -> Result<(), SpeechError> {
        let backend = self.backend.as_ref().ok_or(SpeechError::Unavailable)?;

        debug!(
            program = %backend.program,
            language = language.speech_tag(),
            chars = text.chars().count(),
            "Speaking text"
        );

        let status = Command::new(&backend.program)
            .args(backend.args(text, language))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|e| SpeechError::Spawn {
                program: backend.program.clone(),
                message: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(SpeechError::Failed {
                program: backend.program.clone(),
                status: status.to_string(),
            })
        }
    }
}
