//! Shared helpers for StyleHub integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Once;

use stylehub_storefront::models::session::keys;
use stylehub_storefront::storage::{KeyValueStore, MemoryStore};

static INIT_LOGGING: Once = Once::new();

/// Initialize test logging once per process.
///
/// Honors `RUST_LOG`; quiet by default so degradation warnings only show
/// up when asked for.
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A store seeded with a raw cart blob, as another tab might have left it.
#[must_use]
pub fn store_with_cart_blob(blob: &str) -> MemoryStore {
    let store = MemoryStore::new();
    store
        .set(keys::CART, blob)
        .unwrap_or_else(|e| panic!("failed to seed store: {e}"));
    store
}
