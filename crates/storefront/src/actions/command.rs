//! Typed commands parsed from element markers.

use rust_decimal::Decimal;

use stylehub_core::{Quantity, money};

use super::markers::{ElementMarkers, attr};

/// Quantity adjustments for a cart row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QtyAdjustment {
    /// One fewer unit, floored at 1.
    Decrease,
    /// One more unit; no ceiling.
    Increase,
    /// Direct numeric input, already clamped by [`Quantity`].
    Set(Quantity),
}

/// A parsed interactive-element command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the page location to a target URL.
    Navigate {
        /// Target URL.
        target: String,
    },
    /// Clear the logged-in-user marker, then navigate away.
    Logout {
        /// Post-logout landing page.
        redirect: String,
    },
    /// Validate the newsletter email input and confirm.
    Subscribe,
    /// Jump to a product detail target.
    QuickView {
        /// Target URL.
        target: String,
    },
    /// Add one unit of a product to the persisted cart.
    AddToCart {
        /// Product display name.
        product: String,
        /// Unit price.
        price: Decimal,
    },
    /// Change a cart row's quantity.
    AdjustQty {
        /// Positional row index.
        index: usize,
        /// What kind of change.
        adjustment: QtyAdjustment,
    },
    /// Delete a cart row.
    Remove {
        /// Positional row index.
        index: usize,
    },
}

impl Command {
    /// Landing page after logout when the element names none.
    const LOGOUT_REDIRECT: &'static str = "index.html";

    /// Quick-view target when the element names none.
    const QUICK_VIEW_TARGET: &'static str = "Products Page.html";

    /// Product name used when the add-to-cart element carries none.
    const UNKNOWN_PRODUCT: &'static str = "Unknown product";

    /// Parse a command from an element's markers at bind time.
    ///
    /// Elements with a recognized action marker bind that action; elements
    /// with only a navigation marker bind plain navigation. Anything else
    /// binds nothing.
    #[must_use]
    pub fn parse(markers: &ElementMarkers) -> Option<Self> {
        match markers.get(attr::ACTION) {
            Some("logout") => Some(Self::Logout {
                redirect: markers
                    .get(attr::HREF)
                    .unwrap_or(Self::LOGOUT_REDIRECT)
                    .to_owned(),
            }),
            Some("subscribe") => Some(Self::Subscribe),
            Some("quick-view") => Some(Self::QuickView {
                target: markers
                    .get(attr::HREF)
                    .unwrap_or(Self::QUICK_VIEW_TARGET)
                    .to_owned(),
            }),
            Some("add-to-cart") => Some(Self::AddToCart {
                product: markers
                    .get(attr::PRODUCT)
                    .unwrap_or(Self::UNKNOWN_PRODUCT)
                    .to_owned(),
                price: money::parse_price(markers.get(attr::PRICE).unwrap_or_default()),
            }),
            Some("decrease") => Some(Self::AdjustQty {
                index: row_index(markers)?,
                adjustment: QtyAdjustment::Decrease,
            }),
            Some("increase") => Some(Self::AdjustQty {
                index: row_index(markers)?,
                adjustment: QtyAdjustment::Increase,
            }),
            Some("remove") => Some(Self::Remove {
                index: row_index(markers)?,
            }),
            // Unknown actions fall back to plain navigation, as does a bare
            // navigation marker.
            _ => Self::navigate(markers),
        }
    }

    /// The command for a cart row's direct quantity input.
    #[must_use]
    pub fn qty_input(index: usize, raw: &str) -> Self {
        Self::AdjustQty {
            index,
            adjustment: QtyAdjustment::Set(Quantity::parse(raw)),
        }
    }

    fn navigate(markers: &ElementMarkers) -> Option<Self> {
        markers
            .get(attr::HREF)
            .filter(|target| !target.is_empty())
            .map(|target| Self::Navigate {
                target: target.to_owned(),
            })
    }
}

fn row_index(markers: &ElementMarkers) -> Option<usize> {
    markers.get(attr::INDEX)?.trim().parse().ok()
}
