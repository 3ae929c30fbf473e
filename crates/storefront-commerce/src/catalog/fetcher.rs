//! Catalog fetch: one request per view activation, no retry.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use storefront_data::FetchClient;
use tracing::{info, warn};

use crate::catalog::Product;
use crate::config::CatalogConfig;
use crate::error::CatalogError;

/// Source of the product collection.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Load the full product list.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Short description used in logs.
    fn describe(&self) -> String;
}

/// Body of `GET /api/products`.
#[derive(Debug, Deserialize)]
struct ProductsEnvelope {
    products: Vec<Product>,
}

/// Product source backed by the HTTP catalog endpoint.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: FetchClient,
    path: String,
}

impl HttpProductSource {
    /// Create a source that issues `GET {path}` through `client`.
    pub fn new(client: FetchClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }

    /// Build the source from the `[catalog]` config section.
    pub fn from_config(config: &CatalogConfig) -> Self {
        let client = match &config.base_url {
            Some(base) => FetchClient::new().with_base_url(base.clone()),
            None => FetchClient::new(),
        };
        Self::new(client, config.products_path.clone())
    }

    /// Fully resolved endpoint URL.
    pub fn url(&self) -> String {
        self.client.get(self.path.as_str()).url().to_string()
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let envelope: ProductsEnvelope = self
            .client
            .get(self.path.as_str())
            .accept("application/json")
            .send()
            .await?
            .error_for_status()?
            .json()?;
        Ok(envelope.products)
    }

    fn describe(&self) -> String {
        self.url()
    }
}

/// In-memory product source for development and tests.
///
/// Answers every request with the same outcome and counts requests.
#[derive(Debug, Default)]
pub struct InMemoryProductSource {
    products: Vec<Product>,
    fail_with: Option<String>,
    calls: AtomicUsize,
}

impl InMemoryProductSource {
    /// A source that succeeds with `products`.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            fail_with: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// A source whose every request fails.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            products: Vec::new(),
            fail_with: Some(reason.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of requests served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductSource for InMemoryProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(reason) => Err(CatalogError::Transport(reason.clone())),
            None => Ok(self.products.clone()),
        }
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}

/// Loads the product collection from an injected source.
#[derive(Clone)]
pub struct CatalogFetcher {
    source: Arc<dyn ProductSource>,
}

impl CatalogFetcher {
    /// Create a fetcher over a shared source.
    pub fn new(source: Arc<dyn ProductSource>) -> Self {
        Self { source }
    }

    /// Create a fetcher talking to the configured HTTP endpoint.
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(Arc::new(HttpProductSource::from_config(config)))
    }

    /// Issue exactly one request. Failures are logged and returned, never
    /// retried.
    pub async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        let source = self.source.describe();
        info!(source = %source, "loading product catalog");

        match self.source.fetch_products().await {
            Ok(products) => {
                info!(source = %source, count = products.len(), "product catalog loaded");
                Ok(products)
            }
            Err(e) => {
                warn!(source = %source, error = %e, "failed to load product catalog");
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for CatalogFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogFetcher")
            .field("source", &self.source.describe())
            .finish()
    }
}
