//! Translation service port definition.

use async_trait::async_trait;

use crate::domain::entities::Language;
use crate::domain::errors::TranslateError;

/// A single translation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Raw, unencoded source text.
    pub text: String,
    /// Language of `text`.
    pub source: Language,
    /// Language to translate into.
    pub target: Language,
}

impl TranslationRequest {
    /// Request to translate `text` from `source` into `target`.
    #[must_use]
    pub fn new(text: impl Into<String>, source: Language, target: Language) -> Self {
        Self {
            text: text.into(),
            source,
            target,
        }
    }
}

/// Port for the remote translation service.
#[async_trait]
pub trait TranslationPort: Send + Sync {
    /// Translates the request text.
    ///
    /// A successful response without a translated text yields an empty string.
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Canned outcome returned by [`MockTranslationPort`].
    #[derive(Debug, Clone)]
    pub enum MockReply {
        Text(String),
        Status(u16),
        NetworkFailure,
    }

    /// Mock translation port for testing.
    pub struct MockTranslationPort {
        reply: Mutex<MockReply>,
        requests: Mutex<Vec<TranslationRequest>>,
    }

    impl MockTranslationPort {
        pub fn new(reply: MockReply) -> Self {
            Self {
                reply: Mutex::new(reply),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn replying(text: impl Into<String>) -> Self {
            Self::new(MockReply::Text(text.into()))
        }

        pub fn set_reply(&self, reply: MockReply) {
            *self.reply.lock().unwrap() = reply;
        }

        pub fn requests(&self) -> Vec<TranslationRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TranslationPort for MockTranslationPort {
        async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
            self.requests.lock().unwrap().push(request.clone());
            match self.reply.lock().unwrap().clone() {
                MockReply::Text(text) => Ok(text),
                MockReply::Status(status) => Err(TranslateError::rejected(status)),
                MockReply::NetworkFailure => Err(TranslateError::network("mock connection refused")),
            }
        }
    }
}
