use arboard::Clipboard;
use tracing::{debug, error, warn};

use crate::domain::ports::ClipboardPort;

/// System clipboard backed by `arboard`.
#[derive(Clone, Default)]
pub struct ClipboardService {}

impl ClipboardService {
    /// Creates the clipboard adapter.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl ClipboardPort for ClipboardService {
    fn set_text(&self, text: String) {
        tokio::task::spawn_blocking(move || match Clipboard::new() {
            Ok(mut cb) => {
                let chars = text.chars().count();
                if let Err(e) = cb.set_text(text) {
                    error!("Failed to set clipboard text: {}", e);
                } else {
                    debug!(chars, "Copied text to clipboard");
                }
            }
            Err(e) => {
                warn!("Failed to initialize clipboard for copy: {}", e);
            }
        });
    }
}
