//! Cart page view models and templates.
//!
//! The cart page is cleared and rebuilt from the persisted cart on every
//! mutation; at this data scale a full re-render is simpler than
//! incremental updates.

use askama::Template;
use rust_decimal::Decimal;

use crate::filters;
use crate::models::{Cart, CartItem, CartTotals};
use crate::repository::CartRepository;
use crate::storage::KeyValueStore;

/// Cart line display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    /// Positional row index, used to tag the per-row controls.
    pub index: usize,
    /// Product display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Unit count.
    pub qty: u32,
}

/// Cart page display data for templates.
#[derive(Debug, Clone)]
pub struct CartPageView {
    /// One view per cart line, in cart order.
    pub items: Vec<CartItemView>,
    /// Total unit count.
    pub count: u32,
    /// Sum of price times quantity.
    pub subtotal: Decimal,
    /// Flat fee, zero for an empty order.
    pub shipping: Decimal,
    /// Subtotal times the tax rate.
    pub taxes: Decimal,
    /// Subtotal plus shipping plus taxes.
    pub total: Decimal,
}

impl CartPageView {
    /// The empty-cart page: no rows, all totals zero.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
            subtotal: Decimal::ZERO,
            shipping: Decimal::ZERO,
            taxes: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    /// Whether the empty-state message should render instead of rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Build the page from the persisted cart.
    #[must_use]
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self::from(&CartRepository::new(store).load())
    }
}

impl From<&Cart> for CartPageView {
    fn from(cart: &Cart) -> Self {
        let totals = CartTotals::compute(cart);
        Self {
            items: cart
                .items()
                .iter()
                .enumerate()
                .map(CartItemView::from)
                .collect(),
            count: cart.item_count(),
            subtotal: totals.subtotal,
            shipping: totals.shipping,
            taxes: totals.taxes,
            total: totals.total,
        }
    }
}

impl From<(usize, &CartItem)> for CartItemView {
    fn from((index, item): (usize, &CartItem)) -> Self {
        Self {
            index,
            name: item.product.clone(),
            price: item.price,
            qty: item.qty.get(),
        }
    }
}

/// Cart items fragment template.
///
/// Renders the row list with per-row quantity and remove controls, or the
/// empty-state message.
#[derive(Template)]
#[template(path = "cart/items.html")]
pub struct CartItemsTemplate {
    /// The page view to render.
    pub cart: CartPageView,
}

/// Order summary fragment template (count and money totals).
#[derive(Template)]
#[template(path = "cart/summary.html")]
pub struct CartSummaryTemplate {
    /// The page view to render.
    pub cart: CartPageView,
}
