//! Cart badge.

use askama::Template;

use crate::repository::CartRepository;
use crate::storage::KeyValueStore;

/// Cart count badge fragment template.
///
/// Every badge slot on the page shows the same count and is hidden exactly
/// when the count is zero.
#[derive(Debug, Clone, Copy, Template)]
#[template(path = "partials/cart_count.html")]
pub struct CartBadge {
    /// Total unit count across all cart rows.
    pub count: u32,
}

impl CartBadge {
    /// Recompute the badge from the persisted cart.
    #[must_use]
    pub fn refresh(store: &dyn KeyValueStore) -> Self {
        Self {
            count: CartRepository::new(store).load().item_count(),
        }
    }

    /// Whether the badge should be shown.
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.count > 0
    }
}
