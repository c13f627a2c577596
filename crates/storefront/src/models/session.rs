//! Session-related storage keys.
//!
//! Names of the slots the storefront owns in the key-value store.

/// Storage keys for persisted storefront state.
pub mod keys {
    /// Key holding the serialized cart.
    pub const CART: &str = "stylehub_cart";

    /// Key holding the opaque logged-in-user marker, cleared on logout.
    pub const USER: &str = "stylehub_user";
}
