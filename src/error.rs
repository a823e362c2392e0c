use hyper::StatusCode;
use thiserror::Error;

/// Reasons an Authorization header cannot yield an API key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiKeyError {
    /// Header absent, or its first value is the empty string
    #[error("no authorization header included")]
    MissingHeader,

    /// Header present but not of the form `ApiKey <key>`
    #[error("malformed authorization header")]
    MalformedHeader,
}

impl ApiKeyError {
    /// HTTP status a caller should answer with
    pub fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    /// Stable machine-readable tag, used in response bodies and log context
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiKeyError::MissingHeader => "missing_header",
            ApiKeyError::MalformedHeader => "malformed_header",
        }
    }

    /// Convert to the JSON body sent with a rejection
    pub fn to_error_body(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type for API key extraction
pub type AuthResult<T> = Result<T, ApiKeyError>;
