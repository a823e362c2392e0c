//! API key authentication for HTTP requests
//!
//! `api_key` holds the header parsing. This module wraps it into a request
//! gate that turns failures into 401 responses and logs the outcome.
//! Whether a key is actually valid is left to the caller.

pub mod api_key;

use api_key::get_api_key;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{CONTENT_TYPE, HeaderValue};
use hyper::{Request, Response};
use serde_json::json;

use crate::config::AuthConfig;
use crate::error::ApiKeyError;
use crate::types::LogEntry;

/// Check the API key on an HTTP request
///
/// # Returns
/// * `Ok(None)` if authentication is disabled in `config`
/// * `Ok(Some(key))` if the request carries a well-formed `ApiKey` header
/// * `Err(Response)` with 401 Unauthorized otherwise
pub fn check_authentication<B>(
    req: &Request<B>,
    config: &AuthConfig,
) -> Result<Option<String>, Response<Full<Bytes>>> {
    if !config.required {
        return Ok(None);
    }

    match get_api_key(req.headers()) {
        Ok(key) => {
            LogEntry::debug("API key accepted")
                .with_context(json!({
                    "method": req.method().as_str(),
                    "path": req.uri().path(),
                    "key_preview": create_safe_key_preview(key),
                }))
                .emit(config.log_level);
            Ok(Some(key.to_string()))
        }
        Err(err) => {
            LogEntry::warn(format!("API key rejected: {err}"))
                .with_context(json!({
                    "method": req.method().as_str(),
                    "path": req.uri().path(),
                    "error_type": err.error_type(),
                }))
                .emit(config.log_level);
            Err(unauthorized_response(&err))
        }
    }
}

/// Build the JSON rejection for an extraction failure
pub fn unauthorized_response(err: &ApiKeyError) -> Response<Full<Bytes>> {
    let body = err.to_error_body().to_string();

    let mut response = Response::new(Full::new(Bytes::from(body)));
    *response.status_mut() = err.status_code();
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

/// Safely create a preview of an API key for logging
///
/// At most a quarter of the key (capped at 4 characters) is shown.
pub fn create_safe_key_preview(key: &str) -> String {
    let shown = (key.chars().count() / 4).min(4);
    if shown == 0 {
        return "***".to_string();
    }
    let head: String = key.chars().take(shown).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;
    use hyper::header::AUTHORIZATION;

    fn request(auth: Option<&'static str>) -> Request<()> {
        let mut builder = Request::builder().uri("/v1/resource");
        if let Some(value) = auth {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap()
    }

    #[test]
    fn test_check_authentication_accepts_key() {
        let config = AuthConfig::default();
        let result = check_authentication(&request(Some("ApiKey secret123")), &config);
        assert_eq!(result.unwrap(), Some("secret123".to_string()));
    }

    #[test]
    fn test_check_authentication_rejects() {
        let config = AuthConfig::default();

        let response = check_authentication(&request(None), &config).unwrap_err();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let response =
            check_authentication(&request(Some("Bearer token123")), &config).unwrap_err();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_check_authentication_disabled() {
        let config = AuthConfig {
            required: false,
            ..AuthConfig::default()
        };
        assert_eq!(check_authentication(&request(None), &config).unwrap(), None);
    }

    #[test]
    fn test_create_safe_key_preview() {
        assert_eq!(create_safe_key_preview("abc"), "***");
        assert_eq!(create_safe_key_preview("abcd"), "a...");
        assert_eq!(create_safe_key_preview("secret123"), "se...");
        assert_eq!(
            create_safe_key_preview("sk_live_123456789abcdef"),
            "sk_l..."
        );

        // Multi-byte characters must not split
        assert_eq!(create_safe_key_preview("éééééééé"), "éé...");
    }

    #[test]
    fn test_key_preview_never_contains_key() {
        for key in ["a", "ab", "abc", "secret12", "secret123", "k3y", "é"] {
            let preview = create_safe_key_preview(key);
            assert!(!preview.contains(key), "{key} leaked as {preview}");
        }

        let long = "x".repeat(100);
        assert!(!create_safe_key_preview(&long).contains(&long));
    }
}
