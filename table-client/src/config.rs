//! Client configuration

use crate::error::{ClientError, ClientResult};

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the restaurant API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3001")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Reads an optional `.env` first. `TABLE_API_URL` overrides the base URL,
    /// `TABLE_API_TIMEOUT` the timeout in seconds.
    pub fn from_env() -> ClientResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] but with an explicit variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let base_url = lookup("TABLE_API_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup("TABLE_API_TIMEOUT").filter(|s| !s.trim().is_empty()) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ClientError::Config(format!("TABLE_API_TIMEOUT must be a number of seconds, got {raw:?}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self::new(base_url).with_timeout(timeout);
        config.validate()?;
        Ok(config)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Reject configurations the HTTP client cannot use
    pub fn validate(&self) -> ClientResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        if self.timeout == 0 {
            return Err(ClientError::Config("timeout must be greater than zero".into()));
        }
        Ok(())
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "http://localhost:3001");
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("TABLE_API_URL", "https://api.example.com"),
            ("TABLE_API_TIMEOUT", "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout, 5);
    }

    #[test]
    fn test_bad_values_are_config_errors() {
        let err = ClientConfig::from_lookup(lookup(&[("TABLE_API_TIMEOUT", "soon")])).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));

        let err = ClientConfig::from_lookup(lookup(&[("TABLE_API_URL", "localhost:3001")])).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));

        assert!(ClientConfig::default().with_timeout(0).validate().is_err());
    }
}
