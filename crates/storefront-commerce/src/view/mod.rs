//! Headless views.
//!
//! Each view holds its own UI state, talks to the cart through a
//! [`CartManager`](crate::cart::CartManager) handle and renders to markup text.

mod cart_drawer;
mod catalog_page;
mod product_card;

pub use cart_drawer::{CartDrawer, CartLine, DrawerEvent};
pub use catalog_page::{Activation, ActivationOutcome, CatalogPage, LoadState};
pub use product_card::{CardEvent, ProductCard};

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
