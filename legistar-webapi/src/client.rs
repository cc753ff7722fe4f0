use crate::models;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

/// Configuration for the Legistar web API client
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Base URL for the web API (e.g., "https://webapi.legistar.com/v1")
    pub base_path: String,
    /// Legistar site identifier, the `{client}` path segment in the API's
    /// own documentation (e.g., "nyc", "chicago", "seattle")
    pub site: String,
    /// Access token sent as the `Token` query parameter; most sites answer
    /// read requests without one
    pub token: Option<String>,
    /// User agent string for HTTP requests
    pub user_agent: Option<String>,
    /// HTTP client instance
    pub client: reqwest::Client,
}

impl Configuration {
    /// Create a new configuration with default values
    pub fn new() -> Configuration {
        Configuration::default()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            base_path: "https://webapi.legistar.com/v1".to_owned(),
            site: "nyc".to_owned(),
            token: None,
            user_agent: Some("legistar-rs/0.1".to_owned()),
            client: reqwest::Client::new(),
        }
    }
}

/// # Legistar Web API Client
///
/// A minimal Rust client for the Granicus Legistar web API, the REST
/// interface behind the Legistar legislative management system used by
/// municipal governments.
///
/// Every dataset is addressed by a resource path segment under the site,
/// e.g. `events`, `bodies`, `matters`, or nested paths like
/// `events/1234/eventitems`. [`WebApiClient::fetch_resource`] returns the
/// raw JSON for any such segment; typed helpers are provided for the most
/// common top-level resources.
///
/// ## Usage
///
/// ```rust,no_run
/// use legistar_webapi::{Configuration, WebApiClient};
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Arc::new(Configuration {
///         site: "nyc".to_string(),
///         token: std::env::var("LEGISTAR_API_TOKEN").ok(),
///         ..Configuration::default()
///     });
///
///     let client = WebApiClient::new(config);
///
///     let bodies = client.bodies().await?;
///     for body in bodies {
///         println!("{}: {}", body.body_id, body.body_name.unwrap_or_default());
///     }
///
///     Ok(())
/// }
/// ```
pub struct WebApiClient {
    configuration: Arc<Configuration>,
}

impl std::fmt::Debug for WebApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebApiClient")
            .field("base_path", &self.configuration.base_path)
            .field("site", &self.configuration.site)
            .finish()
    }
}

/// Errors that can occur when interacting with the Legistar web API
#[derive(Debug)]
pub enum WebApiError {
    /// Network, HTTP, or other request-level errors
    ///
    /// This includes connection failures, timeouts, DNS resolution issues,
    /// and malformed request URLs.
    RequestError(Box<dyn std::error::Error + Send + Sync>),

    /// JSON parsing or deserialization errors
    ///
    /// Occurs when a 2xx response carries a body that is not valid JSON, or
    /// when the JSON does not match the expected model shape.
    ParseError(serde_json::Error),

    /// Non-2xx response from the API
    ///
    /// Legistar answers unknown resources and bad tokens with plain HTTP
    /// status codes (404 for an unknown resource, 400 for a malformed
    /// request, 403 for a rejected token). The body, when present, is
    /// carried verbatim in `message`.
    ApiError {
        /// HTTP status code from the API
        status: u16,
        /// Response body, usually a short diagnostic string
        message: String,
    },
}

impl std::fmt::Display for WebApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WebApiError::RequestError(e) => write!(f, "Request error: {}", e),
            WebApiError::ParseError(e) => write!(f, "Parse error: {}", e),
            WebApiError::ApiError { status, message } => {
                write!(f, "Legistar API error ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for WebApiError {}

impl WebApiClient {
    /// Create a new web API client instance
    ///
    /// # Examples
    ///
    /// ```rust
    /// use legistar_webapi::{Configuration, WebApiClient};
    /// use std::sync::Arc;
    ///
    /// let config = Arc::new(Configuration {
    ///     site: "seattle".to_string(),
    ///     ..Configuration::default()
    /// });
    ///
    /// let client = WebApiClient::new(config);
    /// ```
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self { configuration }
    }

    /// Build the full request URL for a resource segment
    ///
    /// The resource is interpolated between the site segment and the query
    /// string; the access token, when configured, is appended as the
    /// `Token` parameter.
    pub fn resource_url(&self, resource: &str) -> Result<Url, WebApiError> {
        let raw = format!(
            "{}/{}/{}",
            self.configuration.base_path.trim_end_matches('/'),
            self.configuration.site,
            resource.trim_start_matches('/')
        );

        let mut url = Url::parse(&raw).map_err(|e| WebApiError::RequestError(Box::new(e)))?;

        if let Some(token) = &self.configuration.token {
            url.query_pairs_mut().append_pair("Token", token);
        }

        Ok(url)
    }

    /// Fetch an arbitrary resource and return its raw JSON value
    ///
    /// This is the generic entry point: any path segment the API serves can
    /// be requested, including nested segments like `events/1234/eventitems`.
    /// The caller gets whatever JSON the API returned, usually an array of
    /// records.
    ///
    /// A 2xx response with an empty body is a valid, empty result and is
    /// returned as an empty JSON array rather than an error. Non-2xx
    /// statuses become [`WebApiError::ApiError`] with the response body as
    /// the message.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use legistar_webapi::{Configuration, WebApiClient};
    /// # use std::sync::Arc;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = WebApiClient::new(Arc::new(Configuration::default()));
    /// let events = client.fetch_resource("events").await?;
    ///
    /// if let Some(records) = events.as_array() {
    ///     println!("{} events", records.len());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_resource(&self, resource: &str) -> Result<Value, WebApiError> {
        let url = self.resource_url(resource)?;

        let mut request = self.configuration.client.get(url);
        if let Some(user_agent) = &self.configuration.user_agent {
            request = request.header(reqwest::header::USER_AGENT, user_agent.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| WebApiError::RequestError(Box::new(e)))?;

        if response.status().is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| WebApiError::RequestError(Box::new(e)))?;

            // An empty 2xx body is a valid empty result, not a failure
            if body.trim().is_empty() {
                return Ok(Value::Array(Vec::new()));
            }

            serde_json::from_str(&body).map_err(WebApiError::ParseError)
        } else {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(WebApiError::ApiError { status, message })
        }
    }

    /// Fetch the site's calendar events as typed records
    pub async fn events(&self) -> Result<Vec<models::Event>, WebApiError> {
        let value = self.fetch_resource("events").await?;
        serde_json::from_value(value).map_err(WebApiError::ParseError)
    }

    /// Fetch the site's legislative bodies (committees, councils, boards)
    pub async fn bodies(&self) -> Result<Vec<models::Body>, WebApiError> {
        let value = self.fetch_resource("bodies").await?;
        serde_json::from_value(value).map_err(WebApiError::ParseError)
    }

    /// Fetch the site's matters (legislation items)
    pub async fn matters(&self) -> Result<Vec<models::Matter>, WebApiError> {
        let value = self.fetch_resource("matters").await?;
        serde_json::from_value(value).map_err(WebApiError::ParseError)
    }
}
