pub mod auth;
pub mod config;
pub mod error;
pub mod types;

pub use auth::api_key::{API_KEY_SCHEME, get_api_key};
pub use error::ApiKeyError;
