//! Storefront configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_observability::LoggingConfig;

/// Path of the product collection endpoint.
pub const DEFAULT_PRODUCTS_PATH: &str = "/api/products";

/// Message shown in place of the product list when loading fails.
pub const DEFAULT_CATALOG_ERROR: &str = "Problemas ao carregar a lista!";

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Catalog endpoint.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// User-facing text.
    #[serde(default)]
    pub messages: Messages,

    /// Logging setup.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Install the global log subscriber described by `[logging]`.
    pub fn init_logging(&self) -> Result<()> {
        storefront_observability::init_logging(&self.logging)?;
        Ok(())
    }

    /// Set the catalog base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.catalog.base_url = Some(base_url.into());
        self
    }

    /// Set the catalog error message.
    pub fn with_catalog_error(mut self, message: impl Into<String>) -> Self {
        self.messages.catalog_error = message.into();
        self
    }
}

/// Where the product collection lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Origin prepended to `products_path`; `None` means `products_path` is
    /// already absolute.
    pub base_url: Option<String>,
    /// Path of the products endpoint.
    pub products_path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            products_path: DEFAULT_PRODUCTS_PATH.to_string(),
        }
    }
}

/// Localizable text used by the views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub catalog_error: String,
    pub loading: String,
    pub empty_cart: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            catalog_error: DEFAULT_CATALOG_ERROR.to_string(),
            loading: "Carregando...".to_string(),
            empty_cart: "Carrinho vazio".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use storefront_observability::{LogFormat, LogLevel};

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.catalog.products_path, "/api/products");
        assert_eq!(config.messages.catalog_error, "Problemas ao carregar a lista!");
        assert!(config.catalog.base_url.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            [catalog]
            base_url = "http://localhost:3000"

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.base_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(config.catalog.products_path, DEFAULT_PRODUCTS_PATH);
        assert_eq!(config.messages, Messages::default());
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_json_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"messages": {{"catalog_error": "Problems loading the list!"}}}}"#
        )
        .unwrap();

        let config = StorefrontConfig::load(file.path()).unwrap();
        assert_eq!(config.messages.catalog_error, "Problems loading the list!");
        assert_eq!(config.messages.loading, Messages::default().loading);
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = StorefrontConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_builders() {
        let config = StorefrontConfig::default()
            .with_base_url("https://shop.example.com")
            .with_catalog_error("oops");
        assert_eq!(config.catalog.base_url.as_deref(), Some("https://shop.example.com"));
        assert_eq!(config.messages.catalog_error, "oops");
    }
}
