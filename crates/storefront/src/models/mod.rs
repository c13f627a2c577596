//! Domain models for the storefront.

pub mod cart;
pub mod session;
pub mod totals;

pub use cart::{Cart, CartItem};
pub use totals::CartTotals;
