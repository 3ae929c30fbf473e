//! Cart drawer and its lines.
//!
//! The drawer reads the cart on demand. Lines are matched to cart items by
//! product id so a line's quantity survives re-renders, and is dropped with
//! the line once its product leaves the cart.

use std::collections::HashMap;

use crate::cart::{CartManager, CartState, LineQuantity};
use crate::catalog::Product;
use crate::ids::ProductId;

use super::html_escape;

/// Events emitted by the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEvent {
    Close,
}

/// One product row in the drawer with its own quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    product: Product,
    quantity: LineQuantity,
}

impl CartLine {
    /// Line for `product` with quantity 1.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: LineQuantity::new(),
        }
    }

    /// The product on this line.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Current count shown between `-` and `+`.
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// The `+` button.
    pub fn click_increment(&mut self) -> u32 {
        self.quantity.increment()
    }

    /// The `-` button.
    pub fn click_decrement(&mut self) -> u32 {
        self.quantity.decrement()
    }

    /// Render the line with its quantity controls.
    pub fn render(&self) -> String {
        format!(
            r#"<li class="cart-item" data-testid="cart-item" data-product-id="{}">
    <h4>{}</h4>
    <span class="price">${}</span>
    <button data-testid="-">-</button>
    <span data-testid="quantity">{}</span>
    <button data-testid="+">+</button>
    <button data-testid="remove-item">Remove</button>
</li>"#,
            html_escape(self.product.id.as_str()),
            html_escape(&self.product.title),
            html_escape(&self.product.price),
            self.quantity.get(),
        )
    }
}

/// Slide-over showing the cart contents.
#[derive(Debug)]
pub struct CartDrawer {
    cart: CartManager,
    empty_message: String,
    lines: Vec<CartLine>,
    emitted: Vec<DrawerEvent>,
}

impl CartDrawer {
    /// Drawer over `cart`, showing `empty_message` when there are no items.
    pub fn new(cart: CartManager, empty_message: impl Into<String>) -> Self {
        Self {
            cart,
            empty_message: empty_message.into(),
            lines: Vec::new(),
            emitted: Vec::new(),
        }
    }

    /// Hidden unless the cart is open.
    pub fn is_hidden(&self) -> bool {
        !self.cart.state().open
    }

    /// The close button: emits [`DrawerEvent::Close`] and closes the cart.
    pub fn click_close(&mut self) -> CartState {
        self.emitted.push(DrawerEvent::Close);
        self.cart.close()
    }

    /// Events emitted so far, oldest first.
    pub fn emitted(&self) -> &[DrawerEvent] {
        &self.emitted
    }

    /// Lines in cart order.
    pub fn lines(&mut self) -> &[CartLine] {
        self.sync_lines();
        &self.lines
    }

    /// The line for `product_id`, if that product is in the cart.
    pub fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLine> {
        self.sync_lines();
        self.lines.iter_mut().find(|l| &l.product.id == product_id)
    }

    /// A line's remove button.
    pub fn remove(&mut self, product_id: &ProductId) -> CartState {
        let state = self.cart.remove_product(product_id);
        self.sync_lines();
        state
    }

    /// The clear button: empties and closes the cart.
    pub fn clear(&mut self) -> CartState {
        let state = self.cart.clear_cart();
        self.sync_lines();
        state
    }

    /// Sync lines with the cart and render the drawer.
    pub fn render(&mut self) -> String {
        self.sync_lines();

        let class = if self.is_hidden() { "cart hidden" } else { "cart" };
        let body = if self.cart.has_products() {
            let lines: String = self.lines.iter().map(CartLine::render).collect();
            format!(
                r#"<ul class="cart-items">{}</ul>
<button data-testid="clear-cart">Clear cart</button>"#,
                lines
            )
        } else {
            format!(
                r#"<p class="empty" data-testid="empty-cart">{}</p>"#,
                html_escape(&self.empty_message)
            )
        };

        format!(
            r#"<aside class="{}" data-testid="shopping-cart">
<button data-testid="close-button">Close</button>
{}
</aside>"#,
            class, body
        )
    }

    fn sync_lines(&mut self) {
        let mut previous: HashMap<ProductId, CartLine> = self
            .lines
            .drain(..)
            .map(|line| (line.product.id.clone(), line))
            .collect();

        self.lines = self
            .cart
            .state()
            .items
            .into_iter()
            .map(|product| {
                previous
                    .remove(&product.id)
                    .unwrap_or_else(|| CartLine::new(product))
            })
            .collect();
    }
}
