//! Client configuration
//!
//! Holds the places-search credential, endpoint, request timeout and cache
//! TTL. A missing credential is a valid configuration: lookups then serve the
//! deterministic fallback listings without touching the network.

use std::time::Duration;

use crate::cache::DEFAULT_CACHE_TTL;

/// Environment variable holding the places-search API key
pub const API_KEY_ENV: &str = "SERPER_API_KEY";

/// Places-search endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "https://google.serper.dev/places";

/// Upper bound on a single upstream request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for `AdvisorClient`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API key sent in the `X-API-KEY` header; `None` disables upstream lookups
    pub api_key: Option<String>,
    /// URL of the places-search endpoint
    pub endpoint: String,
    /// Request timeout, after which the lookup falls back
    pub timeout: Duration,
    /// How long fetched listings stay fresh in the cache
    pub cache_ttl: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

impl ClientConfig {
    /// Sets the API key; blank keys count as absent
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_cache_ttl(mut self, cache_ttl: Duration) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }

    /// Whether upstream lookups are enabled
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.api_key.is_none());
        assert!(!config.has_credential());
        assert_eq!(config.endpoint, "https://google.serper.dev/places");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.cache_ttl, Duration::from_secs(3600));
    }

    #[test]
    fn test_blank_api_key_counts_as_absent() {
        let config = ClientConfig::default().with_api_key(Some("   ".to_string()));
        assert!(!config.has_credential());

        let config = ClientConfig::default().with_api_key(Some(String::new()));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_builders_override_defaults() {
        let config = ClientConfig::default()
            .with_api_key(Some("secret".to_string()))
            .with_endpoint("http://127.0.0.1:9999/places")
            .with_timeout(Duration::from_millis(250))
            .with_cache_ttl(Duration::from_secs(60));

        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.endpoint, "http://127.0.0.1:9999/places");
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
    }
}
