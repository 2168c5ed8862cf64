//! Translation error types.

use thiserror::Error;

/// Translation error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum TranslateError {
    #[error("invalid translation request: {reason}")]
    InvalidRequest { reason: String },

    #[error("translation service rejected the request with HTTP {status}")]
    Rejected { status: u16 },

    #[error("network error during translation: {message}")]
    Network { message: String },

    #[error("failed to decode translation response: {message}")]
    Decode { message: String },

    #[error("unexpected translation error: {message}")]
    Unexpected { message: String },
}

impl TranslateError {
    /// Creates invalid request error.
    #[must_use]
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }

    /// Creates rejected error from an HTTP status code.
    #[must_use]
    pub const fn rejected(status: u16) -> Self {
        Self::Rejected { status }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether the service answered with a non-success status.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
