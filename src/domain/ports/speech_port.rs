//! Text-to-speech port definition.

use async_trait::async_trait;

use crate::domain::entities::Language;
use crate::domain::errors::SpeechError;

/// Port for text-to-speech playback.
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Whether a speech backend can be used at all.
    fn is_available(&self) -> bool;

    /// Speaks the text in the given language, returning once playback ends.
    async fn speak(&self, text: &str, language: Language) -> Result<(), SpeechError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    pub struct MockSpeech {
        available: bool,
        pub spoken: Mutex<Vec<(String, String)>>,
    }

    impl MockSpeech {
        pub fn new(available: bool) -> Self {
            Self {
                available,
                spoken: Mutex::new(Vec::new()),
            }
        }

        pub fn spoken(&self) -> Vec<(String, String)> {
            self.spoken.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SpeechPort for MockSpeech {
        fn is_available(&self) -> bool {
            self.available
        }

        async fn speak(&self, text: &str, language: Language) -> Result<(), SpeechError> {
            if !self.available {
                return Err(SpeechError::Unavailable);
            }
            self.spoken
                .lock()
                .unwrap()
                .push((text.to_string(), language.speech_tag().to_string()));
            Ok(())
        }
    }
}
