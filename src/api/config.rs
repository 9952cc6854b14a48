//! API endpoint configuration parsed from environment variables.

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const API_BASE_URL_ENV: &str = "CARLOT_API_BASE_URL";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base URL: {0:?} (expected http:// or https://)")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme + host + port, without a trailing slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Validate and normalize a base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not absolute http(s).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let host = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"));
        match host {
            Some(host) if !host.is_empty() => Ok(Self { base_url: trimmed.to_owned() }),
            _ => Err(ConfigError::InvalidBaseUrl(base_url.to_owned())),
        }
    }

    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `CARLOT_API_BASE_URL`: default `http://127.0.0.1:8000`
    ///
    /// # Errors
    ///
    /// Returns an error if the configured URL is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured URL is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(API_BASE_URL_ENV) {
            Some(raw) if !raw.trim().is_empty() => Self::new(&raw),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
