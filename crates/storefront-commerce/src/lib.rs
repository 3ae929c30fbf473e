//! Cart state, catalog fetch and search for the storefront.
//!
//! - **Catalog**: products and the fetcher that loads `GET /api/products`
//! - **Search**: case-insensitive title filter over the loaded baseline
//! - **Cart**: the shared cart state manager and per-line quantities
//! - **View**: headless catalog page, product card and cart drawer
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_commerce::prelude::*;
//!
//! let config = StorefrontConfig::load("storefront.toml")?;
//! let cart = CartManager::new();
//!
//! let mut page = CatalogPage::new(
//!     CatalogFetcher::from_config(&config.catalog),
//!     cart.clone(),
//!     config.messages.clone(),
//! );
//! let mut drawer = CartDrawer::new(cart.clone(), config.messages.empty_cart.clone());
//!
//! page.activate().await;
//! page.submit_search("relógio");
//!
//! if let Some(product) = page.visible_products().first() {
//!     page.add_to_cart(product);
//! }
//! println!("{}", drawer.render());
//! ```

pub mod config;
pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod view;

pub use config::StorefrontConfig;
pub use error::CatalogError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{CatalogConfig, Messages, StorefrontConfig};
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;

    // Catalog
    pub use crate::catalog::{
        CatalogFetcher, HttpProductSource, InMemoryProductSource, Product, ProductSource,
    };

    // Cart
    pub use crate::cart::{CartChange, CartManager, CartState, LineQuantity, Subscription};

    // Search
    pub use crate::search::apply_search;

    // Views
    pub use crate::view::{
        Activation, ActivationOutcome, CardEvent, CartDrawer, CartLine, CatalogPage, DrawerEvent,
        LoadState, ProductCard,
    };
}
