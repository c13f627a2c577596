//! Cart domain model.
//!
//! The cart is an ordered list of lines, unique by product name, persisted
//! as one JSON blob. Field names and leniency match the blob the original
//! storefront wrote: `qty` and `price` fall back to 1 and 0 when missing,
//! and `addedAt` is informational only.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stylehub_core::Quantity;

/// One line in the persisted cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Display name; also the de-duplication key.
    pub product: String,
    /// Unit price, non-negative.
    #[serde(default, with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Unit count, at least 1.
    #[serde(default)]
    pub qty: Quantity,
    /// When the line was first added. Informational only.
    #[serde(rename = "addedAt", default = "Utc::now")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.qty.get())
    }
}

/// An ordered cart, unique by product name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// All lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total unit count across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.qty.get()).sum()
    }

    /// The line at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CartItem> {
        self.items.get(index)
    }

    /// Add one unit of `product`.
    ///
    /// An existing line for the same product gains a unit; otherwise a new
    /// line with quantity 1 is appended.
    pub fn add(&mut self, product: &str, price: Decimal) {
        if let Some(existing) = self.items.iter_mut().find(|item| item.product == product) {
            existing.qty = existing.qty.increment();
        } else {
            self.items.push(CartItem {
                product: product.to_owned(),
                price,
                qty: Quantity::ONE,
                added_at: Utc::now(),
            });
        }
    }

    /// Remove the line at `index`. Out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Set the quantity of the line at `index`. Out-of-range indexes are
    /// ignored.
    pub fn set_qty(&mut self, index: usize, qty: Quantity) {
        if let Some(item) = self.items.get_mut(index) {
            item.qty = qty;
        }
    }

    /// Add a unit to the line at `index`. Out-of-range indexes are ignored.
    pub fn increment(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.qty = item.qty.increment();
        }
    }

    /// Drop a unit from the line at `index`, never below 1. Out-of-range
    /// indexes are ignored.
    pub fn decrement(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.qty = item.qty.decrement();
        }
    }
}
