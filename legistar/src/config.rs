use std::path::PathBuf;
use std::sync::Arc;

use legistar_webapi::Configuration as WebApiConfiguration;

use crate::colors::ColorMode;

/// Configuration for the Legistar client
#[derive(Debug, Clone)]
pub struct LegistarConfig {
    /// Web API client configuration
    pub webapi_config: Arc<WebApiConfiguration>,
    /// Directory where fetched payloads are cached as `<query>.txt`
    pub cache_dir: PathBuf,
    /// User agent for HTTP requests
    pub user_agent: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
    /// Color output mode for the CLI
    pub color_mode: ColorMode,
}

impl Default for LegistarConfig {
    fn default() -> Self {
        Self {
            webapi_config: Arc::new(WebApiConfiguration::default()),
            cache_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            user_agent: "legistar-rs/0.1".to_string(),
            request_timeout_secs: 30,
            color_mode: ColorMode::default(),
        }
    }
}

impl LegistarConfig {
    /// Create a new configuration with defaults (NYC site, no token)
    pub fn new() -> Self {
        Self::default()
    }

    /// Target a different Legistar site (the `{client}` path segment)
    pub fn with_site<S: Into<String>>(mut self, site: S) -> Self {
        let mut webapi_config = (*self.webapi_config).clone();
        webapi_config.site = site.into();
        self.webapi_config = Arc::new(webapi_config);
        self
    }

    /// Supply an access token for sites that require one
    pub fn with_token<S: Into<String>>(mut self, token: S) -> Self {
        let mut webapi_config = (*self.webapi_config).clone();
        webapi_config.token = Some(token.into());
        self.webapi_config = Arc::new(webapi_config);
        self
    }

    /// Point at a different API endpoint (used by tests and self-hosted sites)
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        let mut webapi_config = (*self.webapi_config).clone();
        webapi_config.base_path = base_url.into();
        self.webapi_config = Arc::new(webapi_config);
        self
    }

    /// Set the cache directory for persisted payloads
    pub fn with_cache_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.cache_dir = dir.into();
        self
    }

    /// Set custom user agent
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        let mut webapi_config = (*self.webapi_config).clone();
        webapi_config.user_agent = Some(self.user_agent.clone());
        self.webapi_config = Arc::new(webapi_config);
        self
    }

    /// Set request timeout
    pub fn with_request_timeout(mut self, timeout_secs: u64) -> Self {
        self.request_timeout_secs = timeout_secs;
        self
    }

    /// Set color output mode
    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    /// Path of the cache file for a query, `<cache_dir>/<query>.txt`
    pub fn cache_path(&self, query: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.txt", query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LegistarConfig::new();
        assert_eq!(config.webapi_config.site, "nyc");
        assert_eq!(config.webapi_config.token, None);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_builder_updates_webapi_config() {
        let config = LegistarConfig::new()
            .with_site("seattle")
            .with_token("tok")
            .with_user_agent("custom/2.0");

        assert_eq!(config.webapi_config.site, "seattle");
        assert_eq!(config.webapi_config.token.as_deref(), Some("tok"));
        assert_eq!(config.webapi_config.user_agent.as_deref(), Some("custom/2.0"));
    }

    #[test]
    fn test_cache_path_uses_query_name() {
        let config = LegistarConfig::new().with_cache_dir("/tmp/cache");
        assert_eq!(
            config.cache_path("events"),
            PathBuf::from("/tmp/cache/events.txt")
        );
    }
}
