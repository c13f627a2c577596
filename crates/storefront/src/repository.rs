//! Cart repository over the key-value store.
//!
//! All cart reads and writes go through [`CartRepository`] so every call
//! site shares one parse-or-default path instead of duplicating it.

use tracing::warn;

use crate::models::Cart;
use crate::models::session::keys;
use crate::storage::{KeyValueStore, StorageError};

/// Repository for the persisted cart.
pub struct CartRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> CartRepository<'a> {
    /// Create a repository over `store`.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Load the persisted cart.
    ///
    /// A missing slot, an unavailable store, or a malformed blob all read as
    /// the empty cart; degradation is logged, never surfaced.
    #[must_use]
    pub fn load(&self) -> Cart {
        let raw = match self.store.get(keys::CART) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(e) => {
                warn!("cart store unavailable, treating as empty: {e}");
                return Cart::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cart) => cart,
            Err(e) => {
                warn!("malformed cart blob, treating as empty: {e}");
                Cart::new()
            }
        }
    }

    /// Persist the whole cart, replacing the previous blob.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the cart cannot be serialized or the
    /// store cannot be written.
    pub fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let raw = serde_json::to_string(cart)?;
        self.store.set(keys::CART, &raw)
    }

    /// Delete the persisted cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be written.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(keys::CART)
    }
}
