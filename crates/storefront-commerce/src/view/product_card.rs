//! Product card shown in the catalog grid.

use crate::catalog::Product;

use super::html_escape;

/// Events emitted by a product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardEvent {
    AddToCart { product: Product },
}

/// One card in the catalog grid.
#[derive(Debug, Clone)]
pub struct ProductCard {
    product: Product,
    emitted: Vec<CardEvent>,
}

impl ProductCard {
    /// Card for `product` with no events emitted yet.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            emitted: Vec::new(),
        }
    }

    /// The product shown on the card.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Click the add-to-cart button. Emits one event per click.
    pub fn click_add(&mut self) -> CardEvent {
        let event = CardEvent::AddToCart {
            product: self.product.clone(),
        };
        self.emitted.push(event.clone());
        event
    }

    /// Events emitted so far, oldest first.
    pub fn emitted(&self) -> &[CardEvent] {
        &self.emitted
    }

    /// Render the card with its add-to-cart button.
    pub fn render(&self) -> String {
        format!(
            r#"<article class="product-card" data-testid="product-card" data-product-id="{}">
    <img src="{}" alt="{}">
    <h3 class="product-title">{}</h3>
    <span class="product-price">${}</span>
    <button data-testid="add-to-cart">Add to cart</button>
</article>"#,
            html_escape(self.product.id.as_str()),
            html_escape(&self.product.image),
            html_escape(&self.product.title),
            html_escape(&self.product.title),
            html_escape(&self.product.price),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> ProductCard {
        ProductCard::new(
            Product::new(1u64, "Relógio bonito", "23.00")
                .with_image("https://images.example.com/watch.jpg"),
        )
    }

    #[test]
    fn test_renders_title_and_price() {
        let html = card().render();
        assert!(html.contains("Relógio bonito"));
        assert!(html.contains("23.00"));
        assert!(html.contains("https://images.example.com/watch.jpg"));
    }

    #[test]
    fn test_click_emits_add_to_cart_once() {
        let mut card = card();
        let event = card.click_add();

        assert_eq!(card.emitted().len(), 1);
        assert_eq!(
            event,
            CardEvent::AddToCart {
                product: card.product().clone()
            }
        );
    }

    #[test]
    fn test_title_is_escaped() {
        let card = ProductCard::new(Product::new(9u64, "<b>Promo</b>", "1.00"));
        assert!(card.render().contains("&lt;b&gt;Promo&lt;/b&gt;"));
    }
}
