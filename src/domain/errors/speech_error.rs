//! Speech playback error types.

use thiserror::Error;

/// Speech playback error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum SpeechError {
    #[error("no text-to-speech backend is available")]
    Unavailable,

    #[error("failed to start speech backend `{program}`: {message}")]
    Spawn { program: String, message: String },

    #[error("speech backend `{program}` exited with {status}")]
    Failed { program: String, status: String },
}
