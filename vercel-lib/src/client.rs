//! Reusable API client

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::FetchError;
use crate::fetch::{API_ORIGIN, FetchOptions, build_headers, parse_body};

/// Client for authenticated requests against one API origin.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads safely.
///
/// # Example
///
/// ```ignore
/// use vercel_lib::ApiClient;
///
/// let client = ApiClient::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
///
/// let user: serde_json::Value = client.fetch("v2/user", &token, None).await?;
/// ```
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    base_url: Url,
    http_client: Client,
    timeout: Option<Duration>,
}

impl ApiClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    /// Returns the origin paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Resolve `path` against the base URL.
    ///
    /// Relative paths are joined onto the base; absolute URLs replace it.
    pub fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        self.inner
            .base_url
            .join(path)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", path, e)))
    }

    /// Send an authenticated request and decode the JSON response.
    ///
    /// `token` is sent as `Authorization: Bearer <token>`; a caller header
    /// with the same name replaces it. The body is parsed whatever the
    /// status, and a non-success status becomes [`FetchError::Http`]
    /// carrying the parsed body.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
        options: Option<FetchOptions>,
    ) -> Result<T, FetchError> {
        let url = self.resolve(path)?;
        let options = options.unwrap_or_default();
        let headers = build_headers(token, &options.headers)?;

        log::debug!("{} {}", options.method, url);

        let mut request = self
            .inner
            .http_client
            .request(options.method.clone(), url.clone())
            .headers(headers);

        if let Some(body) = &options.body {
            request = request.json(body);
        }

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            log::warn!("{} {} failed with {}", options.method, url, status);
            // Keep non-JSON error pages as a string rather than losing the status.
            let info = parse_body(&text).unwrap_or(serde_json::Value::String(text));
            return Err(FetchError::http(status.as_u16(), info));
        }

        let value = parse_body(&text)?;
        serde_json::from_value(value).map_err(|e| FetchError::parse_with_body(e.to_string(), text))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}

/// Builder for constructing an [`ApiClient`].
///
/// # Example
///
/// ```ignore
/// let client = ApiClient::builder()
///     .base_url("http://127.0.0.1:8080/")
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub struct ApiClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl ApiClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: API_ORIGIN.to_string(),
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the origin paths are resolved against.
    ///
    /// Defaults to [`API_ORIGIN`]. Keep the trailing slash, otherwise the
    /// last path segment is replaced when joining.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout. Requests never time out by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`ApiClient`].
    pub fn build(self) -> Result<ApiClient, FetchError> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(ApiClient {
            inner: Arc::new(ApiClientInner {
                base_url,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
