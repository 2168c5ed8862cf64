mod clipboard_port;
mod speech_port;
mod translation_port;

pub use clipboard_port::ClipboardPort;
pub use speech_port::SpeechPort;
pub use translation_port::{TranslationPort, TranslationRequest};
