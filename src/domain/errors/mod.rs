//! Domain error types.

mod speech_error;
mod translate_error;

pub use speech_error::SpeechError;
pub use translate_error::TranslateError;
