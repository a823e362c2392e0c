use crate::types::LogLevel;

pub const AUTH_REQUIRED_VAR: &str = "APIKEY_AUTH_REQUIRED";
pub const LOG_LEVEL_VAR: &str = "APIKEY_AUTH_LOG_LEVEL";

/// Settings for the request gate in [`crate::auth`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthConfig {
    /// When false, requests pass without an Authorization header check
    pub required: bool,
    pub log_level: LogLevel,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            required: true,
            log_level: LogLevel::default(),
        }
    }
}

impl AuthConfig {
    /// Read settings from the environment
    ///
    /// Authentication stays required unless `APIKEY_AUTH_REQUIRED` is
    /// `false` or `0`.
    pub fn from_env() -> Self {
        Self {
            required: std::env::var(AUTH_REQUIRED_VAR)
                .map(|v| parse_required(&v))
                .unwrap_or(true),
            log_level: LogLevel::from_env(LOG_LEVEL_VAR),
        }
    }
}

fn parse_required(value: &str) -> bool {
    value.to_lowercase() != "false" && value != "0"
}
