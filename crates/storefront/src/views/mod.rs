//! Rendered page fragments.
//!
//! View structs carry display-ready data; Askama templates turn them into
//! HTML fragments for the host page to swap in. Item names flow through
//! Askama's auto-escaping, so product names are safe to embed.

pub mod badge;
pub mod cart;

pub use badge::CartBadge;
pub use cart::{CartItemView, CartItemsTemplate, CartPageView, CartSummaryTemplate};
