/// Port for writing to the system clipboard.
pub trait ClipboardPort: Send + Sync {
    /// Writes text to the clipboard without blocking the caller.
    fn set_text(&self, text: String);
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    pub struct MockClipboard {
        pub contents: Arc<Mutex<Vec<String>>>,
    }

    impl MockClipboard {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn last(&self) -> Option<String> {
            self.contents.lock().unwrap().last().cloned()
        }
    }

    impl ClipboardPort for MockClipboard {
        fn set_text(&self, text: String) {
            self.contents.lock().unwrap().push(text);
        }
    }
}
