//! API key extraction from HTTP Authorization headers
//!
//! This module handles extracting keys sent as `Authorization: ApiKey <key>`.
//! The scheme match is exact and case-sensitive, and the key is returned
//! exactly as sent.

use hyper::HeaderMap;
use hyper::header::AUTHORIZATION;

use crate::error::{ApiKeyError, AuthResult};

/// Scheme expected in front of the key
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Extract the API key from a request's headers
///
/// Only the first Authorization value is considered when the header is
/// repeated.
///
/// # Returns
/// * `Ok(key)` if the first Authorization value is `ApiKey <key>`
/// * `Err(ApiKeyError::MissingHeader)` if the header is absent or empty
/// * `Err(ApiKeyError::MalformedHeader)` for any other value
///
/// # Examples
/// ```
/// use apikey_auth::auth::api_key::get_api_key;
/// use apikey_auth::error::ApiKeyError;
/// use hyper::HeaderMap;
/// use hyper::header::{AUTHORIZATION, HeaderValue};
///
/// let mut headers = HeaderMap::new();
/// assert_eq!(get_api_key(&headers), Err(ApiKeyError::MissingHeader));
///
/// headers.insert(AUTHORIZATION, HeaderValue::from_static("ApiKey secret123"));
/// assert_eq!(get_api_key(&headers), Ok("secret123"));
/// ```
pub fn get_api_key(headers: &HeaderMap) -> AuthResult<&str> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(ApiKeyError::MissingHeader)?;

    if value.is_empty() {
        return Err(ApiKeyError::MissingHeader);
    }

    // Any UTF-8 is accepted in the key; only undecodable bytes are malformed.
    let value =
        std::str::from_utf8(value.as_bytes()).map_err(|_| ApiKeyError::MalformedHeader)?;

    parse_authorization(value)
}

/// Parse a single raw Authorization value
///
/// An empty value counts as a missing header, matching [`get_api_key`].
/// Otherwise splits on the first space only. Nothing is trimmed, so
/// `"ApiKey  secret"` yields `" secret"`.
pub fn parse_authorization(value: &str) -> AuthResult<&str> {
    if value.is_empty() {
        return Err(ApiKeyError::MissingHeader);
    }

    let (scheme, key) = value
        .split_once(' ')
        .ok_or(ApiKeyError::MalformedHeader)?;

    if scheme != API_KEY_SCHEME || key.is_empty() {
        return Err(ApiKeyError::MalformedHeader);
    }

    Ok(key)
}
