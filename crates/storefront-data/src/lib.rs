//! HTTP fetch for the storefront.
//!
//! A thin GET client over `reqwest`: resolve a path against an optional base
//! URL, send, and hand back a fully read [`Response`].
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::FetchClient;
//!
//! let client = FetchClient::new().with_base_url("http://localhost:3000");
//!
//! let body: serde_json::Value = client
//!     .get("/api/products")
//!     .accept("application/json")
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod error;
mod request;
mod response;

pub use error::FetchError;
pub use response::Response;

use request::GetRequest;

/// HTTP client for outbound GET requests.
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    inner: reqwest::Client,
    base_url: Option<String>,
}

impl FetchClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `base_url` to every relative path.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Start a GET request for `url`.
    pub fn get(&self, url: impl Into<String>) -> PendingGet {
        PendingGet {
            client: self.inner.clone(),
            request: GetRequest::new(resolve_url(self.base_url.as_deref(), url.into())),
        }
    }
}

fn resolve_url(base_url: Option<&str>, url: String) -> String {
    match base_url {
        Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
            format!("{}{}", base.trim_end_matches('/'), url)
        }
        _ => url,
    }
}

/// A GET request bound to a client, not yet sent.
#[derive(Debug)]
pub struct PendingGet {
    client: reqwest::Client,
    request: GetRequest,
}

impl PendingGet {
    /// Set the Accept header.
    pub fn accept(mut self, content_type: impl Into<String>) -> Self {
        self.request = self.request.accept(content_type);
        self
    }

    /// The fully resolved request URL.
    pub fn url(&self) -> &str {
        &self.request.url
    }

    /// Send the request and read the whole body.
    ///
    /// Non-2xx statuses come back as a normal `Response`; see
    /// [`Response::error_for_status`].
    pub async fn send(self) -> Result<Response, FetchError> {
        let GetRequest { url, headers } = self.request;
        tracing::debug!(url = %url, "sending GET");

        let mut request = self.client.get(&url);
        for (key, value) in &headers {
            request = request.header(key.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else if e.is_builder() {
                FetchError::InvalidUrl(url.clone())
            } else {
                FetchError::Transport(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?
            .to_vec();

        Ok(Response::new(status, body))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Response};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_url_joins_base() {
        let client = FetchClient::new().with_base_url("http://localhost:3000/");
        let req = client.get("/api/products");
        assert_eq!(req.url(), "http://localhost:3000/api/products");
    }

    #[test]
    fn test_absolute_url_ignores_base() {
        let client = FetchClient::new().with_base_url("http://localhost:3000");
        let req = client.get("https://shop.example.com/api/products");
        assert_eq!(req.url(), "https://shop.example.com/api/products");
    }

    #[test]
    fn test_no_base_url_passthrough() {
        let client = FetchClient::new();
        assert_eq!(client.get("/api/products").url(), "/api/products");
        assert!(client.base_url().is_none());
    }

    #[tokio::test]
    async fn test_send_relative_url_without_base_fails() {
        let client = FetchClient::new();
        let result = client.get("/api/products").send().await;
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }
}
