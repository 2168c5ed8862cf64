use serde::{Deserialize, Serialize};

/// Translation API request body.
#[derive(Debug, Serialize)]
pub struct TranslateBody<'a> {
    /// URL-encoded source text.
    pub text: String,
    /// Source language code.
    pub source: &'a str,
    /// Target language code.
    pub target: &'a str,
}

/// Translation API response envelope.
#[derive(Debug, Default, Deserialize)]
pub struct TranslateEnvelope {
    /// Missing when the service returns an empty body.
    #[serde(default)]
    pub response: Option<TranslatedPayload>,
}

/// Payload nested under `response`.
#[derive(Debug, Default, Deserialize)]
pub struct TranslatedPayload {
    /// Translated text.
    #[serde(default)]
    pub translated_text: Option<String>,
}

impl TranslateEnvelope {
    /// Translated text, empty when the service omitted it.
    #[must_use]
    pub fn into_translated_text(self) -> String {
        self.response
            .and_then(|payload| payload.translated_text)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_envelope() {
        let envelope: TranslateEnvelope =
            serde_json::from_str(r#"{"response":{"translated_text":"你好"}}"#).unwrap();
        assert_eq!(envelope.into_translated_text(), "你好");
    }

    #[test]
    fn test_missing_fields_yield_empty_text() {
        for body in [
            r"{}",
            r#"{"response":{}}"#,
            r#"{"response":null}"#,
            r#"{"response":{"translated_text":null}}"#,
            r#"{"response":{"detected":"en"},"ok":true}"#,
        ] {
            let envelope: TranslateEnvelope = serde_json::from_str(body).unwrap();
            assert_eq!(envelope.into_translated_text(), "", "body: {body}");
        }
    }

    #[test]
    fn test_body_serialization_order() {
        let body = TranslateBody {
            text: "hi".to_string(),
            source: "en",
            target: "ja",
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"text":"hi","source":"en","target":"ja"}"#
        );
    }
}
