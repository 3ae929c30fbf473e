//! Shopping cart module.
//!
//! Contains the shared cart state manager and the per-line quantity counter.

mod manager;
mod quantity;

pub use manager::{CartChange, CartManager, CartState, Subscription};
pub use quantity::LineQuantity;
