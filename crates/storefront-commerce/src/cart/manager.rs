//! Shared cart state.
//!
//! `CartManager` is a cheap, clonable handle. Every clone points at the same
//! `CartState`, so the catalog cards, the drawer and its lines all observe one
//! instance. State is only reachable through the manager's operations; readers
//! get snapshots.
//!
//! Single-threaded by construction (`Rc<RefCell<..>>`): operations run to
//! completion before returning and listeners are invoked synchronously after
//! the state borrow is released, so a listener may call back into the manager.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::Serialize;
use tracing::debug;

use crate::catalog::Product;
use crate::ids::ProductId;

/// Cart visibility and contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartState {
    /// Whether the cart drawer is shown.
    pub open: bool,
    /// Products in insertion order, at most one per id.
    pub items: Vec<Product>,
}

impl CartState {
    /// Check whether a product with `id` is in the cart.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.id == id)
    }
}

/// What an operation changed, passed to listeners with the new state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    Opened,
    Closed,
    Added(ProductId),
    Removed(ProductId),
    Cleared,
}

type Listener = Rc<dyn Fn(&CartChange, &CartState)>;

#[derive(Default)]
struct Inner {
    state: CartState,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

/// Handle to the shared cart.
#[derive(Clone, Default)]
pub struct CartManager {
    inner: Rc<RefCell<Inner>>,
}

impl CartManager {
    /// Create a closed, empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state snapshot.
    pub fn state(&self) -> CartState {
        self.inner.borrow().state.clone()
    }

    /// Show the cart. Notifies on every call.
    pub fn open(&self) -> CartState {
        self.inner.borrow_mut().state.open = true;
        debug!("cart opened");
        self.notify(CartChange::Opened)
    }

    /// Hide the cart. Notifies on every call.
    pub fn close(&self) -> CartState {
        self.inner.borrow_mut().state.open = false;
        debug!("cart closed");
        self.notify(CartChange::Closed)
    }

    /// Check whether `product` (by id) is in the cart.
    pub fn product_is_in_the_cart(&self, product: &Product) -> bool {
        self.inner.borrow().state.contains(&product.id)
    }

    /// Check whether the cart has any items.
    pub fn has_products(&self) -> bool {
        !self.inner.borrow().state.items.is_empty()
    }

    /// Append `product` unless a product with the same id is already present.
    pub fn add_product(&self, product: &Product) -> CartState {
        if self.product_is_in_the_cart(product) {
            debug!(product_id = %product.id, "product already in cart");
            return self.state();
        }

        let count = {
            let mut inner = self.inner.borrow_mut();
            inner.state.items.push(product.clone());
            inner.state.items.len()
        };
        debug!(product_id = %product.id, items = count, "product added to cart");
        self.notify(CartChange::Added(product.id.clone()))
    }

    /// Drop the product with `product_id`. Absent ids leave the cart untouched.
    pub fn remove_product(&self, product_id: &ProductId) -> CartState {
        let removed = {
            let mut inner = self.inner.borrow_mut();
            let before = inner.state.items.len();
            inner.state.items.retain(|p| &p.id != product_id);
            inner.state.items.len() < before
        };

        if !removed {
            return self.state();
        }
        debug!(product_id = %product_id, "product removed from cart");
        self.notify(CartChange::Removed(product_id.clone()))
    }

    /// Empty the cart without changing visibility.
    pub fn clear_products(&self) -> CartState {
        self.inner.borrow_mut().state.items.clear();
        debug!("cart products cleared");
        self.notify(CartChange::Cleared)
    }

    /// `clear_products` followed by `close`.
    pub fn clear_cart(&self) -> CartState {
        self.clear_products();
        self.close()
    }

    /// Register a listener called after each notifying operation.
    ///
    /// The listener stays registered until the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(&CartChange, &CartState) + 'static) -> Subscription {
        let listener: Listener = Rc::new(listener);
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push((id, listener));

        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Check whether two handles share the same cart.
    pub fn same_cart(&self, other: &CartManager) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn notify(&self, change: CartChange) -> CartState {
        let (snapshot, listeners) = {
            let inner = self.inner.borrow();
            let listeners: Vec<Listener> =
                inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
            (inner.state.clone(), listeners)
        };

        for listener in listeners {
            listener(&change, &snapshot);
        }
        snapshot
    }
}

impl fmt::Debug for CartManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("CartManager")
            .field("state", &inner.state)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

/// Guard returned by [`CartManager::subscribe`]. Unsubscribes on drop.
pub struct Subscription {
    inner: Weak<RefCell<Inner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
