//! Catalog product type.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Owned by the catalog source; the storefront never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Price as decimal text, e.g. `"22.33"`.
    pub price: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
}

impl Product {
    /// Create a product without an image.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price: price.into(),
            image: String::new(),
        }
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}
