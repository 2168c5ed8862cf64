//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Toast notifications.
pub mod notification;
/// Port definitions.
pub mod ports;

pub use entities::{ApiKey, Language, Pane, Session};
pub use errors::{SpeechError, TranslateError};
pub use notification::{Notification, NotificationLevel};
pub use ports::{ClipboardPort, SpeechPort, TranslationPort, TranslationRequest};
