//! Translate use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::errors::TranslateError;
use crate::domain::ports::{TranslationPort, TranslationRequest};

/// Submits one translation request to the translation service.
#[derive(Clone)]
pub struct TranslateUseCase {
    translation_port: Arc<dyn TranslationPort>,
}

impl TranslateUseCase {
    /// Creates new translate use case.
    #[must_use]
    pub const fn new(translation_port: Arc<dyn TranslationPort>) -> Self {
        Self { translation_port }
    }

    /// Executes the request and returns the translated text.
    ///
    /// # Errors
    /// Returns error if the text is empty, the service rejects the request,
    /// or the response cannot be read.
    pub async fn execute(&self, request: TranslationRequest) -> Result<String, TranslateError> {
        if request.text.is_empty() {
            return Err(TranslateError::invalid_request("source text is empty"));
        }

        debug!(
            source = request.source.code(),
            target = request.target.code(),
            chars = request.text.chars().count(),
            "Submitting translation"
        );

        match self.translation_port.translate(&request).await {
            Ok(translated) => {
                info!(
                    source = request.source.code(),
                    target = request.target.code(),
                    empty = translated.is_empty(),
                    "Translation received"
                );
                Ok(translated)
            }
            Err(e) => {
                warn!(error = %e, "Translation failed");
                Err(e)
            }
        }
    }
}
