//! Catalog page: product grid with search.

use std::cell::RefCell;
use std::future::Future;
use std::rc::{Rc, Weak};

use futures::future::{AbortHandle, Abortable, Aborted};
use tracing::debug;

use crate::cart::{CartManager, CartState};
use crate::catalog::{CatalogFetcher, Product};
use crate::config::Messages;
use crate::error::CatalogError;
use crate::search::apply_search;

use super::{html_escape, CardEvent, ProductCard};

/// Where the page is in its load cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Not activated yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Baseline available.
    Loaded,
    /// Request failed; no baseline.
    Failed,
}

/// How a detached activation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// The result was written into the page.
    Settled,
    /// The page was gone by the time the result arrived.
    Discarded,
    /// [`Activation::cancel`] was called first.
    Cancelled,
}

/// Handle to an in-flight detached activation.
#[derive(Debug, Clone)]
pub struct Activation {
    abort: AbortHandle,
}

impl Activation {
    /// Stop the activation. A result that has not been written yet never will be.
    pub fn cancel(&self) {
        self.abort.abort();
    }
}

/// Product list with search, wired to the shared cart.
#[derive(Debug)]
pub struct CatalogPage {
    fetcher: CatalogFetcher,
    cart: CartManager,
    messages: Messages,
    load_state: LoadState,
    /// Bumped by every load; a result is only applied while it still matches.
    generation: u64,
    baseline: Vec<Product>,
    search_term: String,
    visible: Vec<Product>,
}

impl CatalogPage {
    /// Create an idle page. Nothing is fetched until activation.
    pub fn new(fetcher: CatalogFetcher, cart: CartManager, messages: Messages) -> Self {
        Self {
            fetcher,
            cart,
            messages,
            load_state: LoadState::Idle,
            generation: 0,
            baseline: Vec::new(),
            search_term: String::new(),
            visible: Vec::new(),
        }
    }

    /// Load the catalog: one request, then settle.
    pub async fn activate(&mut self) {
        self.begin_loading();
        let outcome = self.fetcher.fetch().await;
        self.settle(outcome);
    }

    /// Load the catalog without borrowing the page across the request.
    ///
    /// The returned future holds only a weak reference to the page, so it can
    /// be spawned on a local executor. The response is discarded if the page
    /// is dropped first or a newer load has started since. If the page is
    /// borrowed when the response arrives, the write is retried after a yield.
    /// Cancelling restores the load state the page had before this call.
    pub fn activate_detached(
        page: &Rc<RefCell<Self>>,
    ) -> (impl Future<Output = ActivationOutcome>, Activation) {
        let (fetcher, generation, previous) = {
            let mut this = page.borrow_mut();
            let previous = this.begin_loading();
            (this.fetcher.clone(), this.generation, previous)
        };
        let weak = Rc::downgrade(page);
        let restore = weak.clone();
        let (abort, registration) = AbortHandle::new_pair();

        let task = async move {
            let outcome = fetcher.fetch().await;
            let applied = with_page(&weak, move |page| {
                if page.generation != generation {
                    return false;
                }
                page.settle(outcome);
                true
            })
            .await;

            match applied {
                Some(true) => ActivationOutcome::Settled,
                Some(false) => {
                    debug!(generation, "newer catalog load started, discarding result");
                    ActivationOutcome::Discarded
                }
                None => {
                    debug!("catalog page dropped before load finished, discarding result");
                    ActivationOutcome::Discarded
                }
            }
        };

        let future = async move {
            match Abortable::new(task, registration).await {
                Ok(outcome) => outcome,
                Err(Aborted) => {
                    with_page(&restore, move |page| {
                        if page.generation == generation {
                            page.load_state = previous;
                        }
                    })
                    .await;
                    ActivationOutcome::Cancelled
                }
            }
        };

        (future, Activation { abort })
    }

    /// Enter `Loading` under a new generation and return the state it
    /// replaced. The baseline stays until the result is settled.
    fn begin_loading(&mut self) -> LoadState {
        self.generation = self.generation.wrapping_add(1);
        std::mem::replace(&mut self.load_state, LoadState::Loading)
    }

    /// Store the result of a catalog request.
    pub fn settle(&mut self, outcome: Result<Vec<Product>, CatalogError>) {
        match outcome {
            Ok(products) => {
                self.baseline = products;
                self.visible = apply_search(&self.baseline, &self.search_term);
                self.load_state = LoadState::Loaded;
            }
            Err(_) => {
                self.baseline.clear();
                self.visible.clear();
                self.load_state = LoadState::Failed;
            }
        }
    }

    /// Submit the search form. The visible list is recomputed from the
    /// baseline.
    pub fn submit_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.visible = apply_search(&self.baseline, &self.search_term);
        debug!(
            term = %self.search_term,
            matches = self.visible.len(),
            "catalog search submitted"
        );
    }

    /// Term of the last submitted search.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Current load cycle state.
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Unfiltered products from the last successful load.
    pub fn baseline(&self) -> &[Product] {
        &self.baseline
    }

    /// Products currently shown.
    pub fn visible_products(&self) -> &[Product] {
        &self.visible
    }

    /// One card per visible product.
    pub fn cards(&self) -> Vec<ProductCard> {
        self.visible.iter().cloned().map(ProductCard::new).collect()
    }

    /// Cart handle shared with the drawer.
    pub fn cart(&self) -> &CartManager {
        &self.cart
    }

    /// Handle an event bubbled up from a card.
    pub fn on_card_event(&self, event: CardEvent) -> CartState {
        match event {
            CardEvent::AddToCart { product } => self.add_to_cart(&product),
        }
    }

    /// Put `product` in the cart and show the cart.
    pub fn add_to_cart(&self, product: &Product) -> CartState {
        self.cart.add_product(product);
        self.cart.open()
    }

    /// Render the search form and the state-dependent body.
    pub fn render(&self) -> String {
        let body = match self.load_state {
            LoadState::Idle | LoadState::Loading => format!(
                r#"<p class="loading">{}</p>"#,
                html_escape(&self.messages.loading)
            ),
            LoadState::Failed => format!(
                r#"<h3 class="error" data-testid="catalog-error">{}</h3>"#,
                html_escape(&self.messages.catalog_error)
            ),
            LoadState::Loaded => {
                let cards: String = self.cards().iter().map(ProductCard::render).collect();
                format!(r#"<div class="product-grid">{}</div>"#, cards)
            }
        };

        format!(
            r#"<main class="catalog">
<form class="search" data-testid="search-form">
    <input type="search" name="search" value="{}">
</form>
{}
</main>"#,
            html_escape(&self.search_term),
            body
        )
    }
}

/// Run `f` on the page once it can be borrowed mutably. `None` when the page
/// has been dropped.
async fn with_page<R>(
    page: &Weak<RefCell<CatalogPage>>,
    f: impl FnOnce(&mut CatalogPage) -> R,
) -> Option<R> {
    let mut f = Some(f);
    loop {
        let strong = page.upgrade()?;
        if let Ok(mut this) = strong.try_borrow_mut() {
            let f = f.take()?;
            return Some(f(&mut this));
        }
        drop(strong);
        debug!("catalog page busy, retrying after yield");
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryProductSource;
    use std::sync::Arc;

    fn page_with(source: InMemoryProductSource) -> CatalogPage {
        CatalogPage::new(
            CatalogFetcher::new(Arc::new(source)),
            CartManager::new(),
            Messages::default(),
        )
    }

    #[test]
    fn test_idle_page_renders_loading() {
        let page = page_with(InMemoryProductSource::new(vec![]));
        assert_eq!(page.load_state(), &LoadState::Idle);
        assert!(page.render().contains(&Messages::default().loading));
        assert!(page.cards().is_empty());
    }

    #[test]
    fn test_search_before_load_shows_nothing() {
        let mut page = page_with(InMemoryProductSource::new(vec![]));
        page.submit_search("relógio");
        assert_eq!(page.search_term(), "relógio");
        assert!(page.visible_products().is_empty());
    }

    #[test]
    fn test_settle_applies_pending_term() {
        let mut page = page_with(InMemoryProductSource::new(vec![]));
        page.submit_search("caneca");
        page.settle(Ok(vec![
            Product::new(1u64, "Caneca azul", "9.90"),
            Product::new(2u64, "Clock", "22.33"),
        ]));
        assert_eq!(page.baseline().len(), 2);
        assert_eq!(page.visible_products().len(), 1);
    }

    #[test]
    fn test_failed_settle_renders_error_without_cards() {
        let mut page = page_with(InMemoryProductSource::new(vec![]));
        page.settle(Err(CatalogError::Status { status: 500 }));

        let html = page.render();
        assert!(html.contains("Problemas ao carregar a lista!"));
        assert_eq!(html.matches(r#"data-testid="product-card""#).count(), 0);
    }

    #[tokio::test]
    async fn test_activate_loads_baseline() {
        let mut page = page_with(InMemoryProductSource::new(vec![Product::new(
            1u64, "Clock", "22.33",
        )]));
        page.activate().await;
        assert_eq!(page.load_state(), &LoadState::Loaded);
        assert_eq!(page.cards().len(), 1);
    }

    #[test]
    fn test_add_to_cart_opens_cart() {
        let page = page_with(InMemoryProductSource::new(vec![]));
        let state = page.add_to_cart(&Product::new(1u64, "Clock", "22.33"));
        assert!(state.open);
        assert_eq!(state.items.len(), 1);
    }
}
