//! Product catalog module.
//!
//! Contains the product type and the fetcher that loads the collection.

mod fetcher;
mod product;

pub use fetcher::{CatalogFetcher, HttpProductSource, InMemoryProductSource, ProductSource};
pub use product::Product;
