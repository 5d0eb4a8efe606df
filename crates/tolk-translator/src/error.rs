use std::fmt;

/// Payload of a failed provider response
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    Json(serde_json::Value),
    /// Body that was not valid JSON, kept verbatim
    Raw(String),
}

impl ErrorBody {
    /// Parse a response body, falling back to the raw text
    pub fn parse(body: &str) -> Self {
        match serde_json::from_str(body) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Raw(body.to_string()),
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Raw(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranslatorError {
    #[error("NotFound: Google Api Key not set.")]
    MissingCredential,

    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: ErrorBody },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    Parse(String),

    #[error("Translation to {0} is not supported")]
    UnsupportedTarget(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_keeps_raw_text() {
        let body = ErrorBody::parse("<html>502 Bad Gateway</html>");
        assert_eq!(body, ErrorBody::Raw("<html>502 Bad Gateway</html>".to_string()));
    }

    #[test]
    fn test_api_error_display() {
        let err = TranslatorError::Api {
            status: 403,
            body: ErrorBody::parse(r#"{"error":{"code":403}}"#),
        };
        let msg = err.to_string();
        assert!(msg.contains("403"));
        assert!(msg.contains(r#""code":403"#));
    }
}
