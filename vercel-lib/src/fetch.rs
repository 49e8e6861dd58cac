//! One-shot authenticated fetch

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;

use crate::client::ApiClient;
use crate::error::FetchError;

/// Origin every relative path is resolved against.
pub const API_ORIGIN: &str = "https://api.vercel.com/";

/// Per-request options.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub method: Method,
    /// Extra headers; these win over the bearer token header.
    pub headers: Vec<(String, String)>,
    /// JSON request body.
    pub body: Option<serde_json::Value>,
}

impl FetchOptions {
    pub fn get() -> Self {
        Self::default()
    }

    /// A POST carrying `body` as JSON.
    pub fn post(body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            body: Some(body),
            ..Self::default()
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

static DEFAULT_CLIENT: OnceCell<ApiClient> = OnceCell::const_new();

/// Fetch `path` from [`API_ORIGIN`] with a bearer token.
///
/// `key` is `(path, token)`. Uses a process-wide client; build an
/// [`ApiClient`] for a different origin or a timeout.
///
/// # Example
///
/// ```ignore
/// let projects: serde_json::Value = fetch_with_auth(("v9/projects", &token), None).await?;
/// ```
pub async fn fetch_with_auth<T: DeserializeOwned>(
    key: (&str, &str),
    options: Option<FetchOptions>,
) -> Result<T, FetchError> {
    let (path, token) = key;
    let client = DEFAULT_CLIENT
        .get_or_try_init(|| async { ApiClient::builder().build() })
        .await?;
    client.fetch(path, token, options).await
}

/// Authorization header first, then caller headers replacing same-named ones.
pub(crate) fn build_headers(
    token: &str,
    extra: &[(String, String)],
) -> Result<HeaderMap, FetchError> {
    let mut headers = HeaderMap::new();
    let bearer = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
        FetchError::InvalidHeader {
            name: AUTHORIZATION.to_string(),
        }
    })?;
    headers.insert(AUTHORIZATION, bearer);

    for (name, value) in extra {
        let invalid = || FetchError::InvalidHeader { name: name.clone() };
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}

/// Parse a response body as JSON; an empty body is `null`.
pub(crate) fn parse_body(text: &str) -> Result<serde_json::Value, FetchError> {
    if text.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(text).map_err(|e| FetchError::parse_with_body(e.to_string(), text))
}
