use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;

use legistar_webapi::{Configuration as WebApiConfiguration, WebApiClient};

use crate::config::LegistarConfig;
use crate::error::{LegistarError, Result};
use crate::frame::Frame;

/// High-level client for exploring Legistar datasets
///
/// Wraps the web API client and adds the workflow pieces: caching fetched
/// payloads to disk, loading cached payloads back, and reporting the column
/// names a dataset carries via [`Frame`].
///
/// Fetch-and-inspect works entirely in memory; the on-disk cache is a
/// deliberate, separate step. [`cache`](LegistarClient::cache) and
/// [`load_cached`](LegistarClient::load_cached) are independent operations
/// on the same `<query>.txt` file.
#[derive(Debug)]
pub struct LegistarClient {
    webapi: WebApiClient,
    config: LegistarConfig,
}

impl LegistarClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(LegistarConfig::new())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: LegistarConfig) -> Result<Self> {
        // One HTTP client for all requests, with timeout and user agent
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;

        let mut webapi_config: WebApiConfiguration = (*config.webapi_config).clone();
        webapi_config.client = http_client;
        let webapi = WebApiClient::new(Arc::new(webapi_config));

        Ok(Self { webapi, config })
    }

    // === Fetching ===

    /// Fetch a resource and return its JSON payload
    ///
    /// # Arguments
    /// * `query` - Resource path segment naming the dataset (e.g. "events")
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use legistar::LegistarClient;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = LegistarClient::new()?;
    /// let payload = client.fetch("bodies").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch(&self, query: &str) -> Result<Value> {
        let value = self.webapi.fetch_resource(query).await?;
        Ok(value)
    }

    /// Ordered column names of a dataset, inferred in memory
    ///
    /// Fetches the payload and infers columns directly from the JSON; no
    /// file is written or read.
    pub async fn headers(&self, query: &str) -> Result<Vec<String>> {
        let value = self.fetch(query).await?;
        Ok(Frame::from_value(&value)?.into_columns())
    }

    // === Cache ===

    /// Fetch a resource and persist its payload to `<query>.txt`
    ///
    /// The file lands in the configured cache directory and is overwritten
    /// on every call. Returns the payload together with the path written.
    pub async fn cache(&self, query: &str) -> Result<(Value, PathBuf)> {
        let value = self.fetch(query).await?;
        let path = self.cache_path(query);

        // Nested queries like "events/1234/eventitems" need parent dirs
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let body = serde_json::to_string(&value)?;
        tokio::fs::write(&path, body).await?;

        Ok((value, path))
    }

    /// Load a previously cached payload into a [`Frame`]
    ///
    /// Fails with an I/O error when the query was never cached, and a JSON
    /// error when the file content is malformed.
    pub async fn load_cached(&self, query: &str) -> Result<Frame> {
        let path = self.cache_path(query);
        let body = tokio::fs::read_to_string(&path).await?;
        body.parse()
    }

    /// Ordered column names via the disk round trip: fetch, persist,
    /// reload, infer
    ///
    /// Equivalent to [`headers`](LegistarClient::headers) for well-formed
    /// payloads, but leaves `<query>.txt` behind for later use.
    pub async fn cached_headers(&self, query: &str) -> Result<Vec<String>> {
        self.cache(query).await?;
        let frame = self.load_cached(query).await?;
        Ok(frame.into_columns())
    }

    /// Path where a query's payload is (or would be) cached
    pub fn cache_path(&self, query: &str) -> PathBuf {
        self.config.cache_path(query)
    }

    // === Utility Methods ===

    /// Check that the cache directory exists and is writable
    pub async fn validate_cache_dir(&self) -> Result<()> {
        let cache_dir = &self.config.cache_dir;

        if !cache_dir.exists() {
            tokio::fs::create_dir_all(cache_dir).await?;
        }

        if !cache_dir.is_dir() {
            return Err(LegistarError::config(format!(
                "Cache path is not a directory: {:?}",
                cache_dir
            )));
        }

        // Test write permissions by creating a temporary file
        let test_file = cache_dir.join(".write_test");
        tokio::fs::write(&test_file, b"test").await?;
        tokio::fs::remove_file(&test_file).await?;

        Ok(())
    }

    /// The configured cache directory
    pub fn cache_dir(&self) -> &Path {
        &self.config.cache_dir
    }

    /// The configured site identifier
    pub fn site(&self) -> &str {
        &self.config.webapi_config.site
    }

    /// The configured API endpoint
    pub fn base_url(&self) -> &str {
        &self.config.webapi_config.base_path
    }

    /// True when an access token is configured
    pub fn has_token(&self) -> bool {
        self.config.webapi_config.token.is_some()
    }

    /// Get the underlying web API client for advanced operations
    pub fn webapi_client(&self) -> &WebApiClient {
        &self.webapi
    }
}
