use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BangumiError>;

/// A non-2xx response, flattened to the three fields callers branch on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub status_text: String,
    pub data: Value,
}

impl ErrorResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: &[u8]) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            data: body_to_value(body),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {} {}: {}", self.status, self.status_text, self.data)
    }
}

#[derive(Debug, Error)]
pub enum BangumiError {
    #[error("Bangumi API error ({0})")]
    Status(ErrorResponse),

    #[error(transparent)]
    Transport(#[from] anyhow::Error),

    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),
}

impl BangumiError {
    pub fn status(&self) -> Option<u16> {
        self.response().map(|r| r.status)
    }

    pub fn response(&self) -> Option<&ErrorResponse> {
        match self {
            BangumiError::Status(resp) => Some(resp),
            _ => None,
        }
    }
}

/// Empty bodies become `null`; anything that is not JSON is kept as a string.
pub(crate) fn body_to_value(body: &[u8]) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_response_keeps_json_body() {
        let resp = ErrorResponse::new(
            404,
            "Not Found",
            br#"{"title":"Not Found","description":"resource can't be found"}"#,
        );
        assert_eq!(resp.status, 404);
        assert_eq!(resp.status_text, "Not Found");
        assert_eq!(resp.data["title"], "Not Found");
    }

    #[test]
    fn error_response_wraps_plain_text_and_empty_bodies() {
        let text = ErrorResponse::new(502, "Bad Gateway", b"upstream down");
        assert_eq!(text.data, json!("upstream down"));

        let empty = ErrorResponse::new(401, "Unauthorized", b"");
        assert_eq!(empty.data, Value::Null);
    }

    #[test]
    fn status_helpers_only_match_status_errors() {
        let err = BangumiError::Status(ErrorResponse::new(400, "Bad Request", b"{}"));
        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().contains("HTTP 400 Bad Request"));

        let transport = BangumiError::from(anyhow::anyhow!("connection refused"));
        assert_eq!(transport.status(), None);
        assert!(transport.response().is_none());
    }
}
