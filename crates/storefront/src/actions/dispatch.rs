//! Exhaustive command dispatch.
//!
//! One handler for every [`Command`], decoupled from how the commands were
//! bound. Dispatch returns the side effects for the host page to apply;
//! the dispatcher itself only touches the key-value store.

use rust_decimal::Decimal;
use tracing::{error, instrument, warn};

use crate::models::session::keys;
use crate::newsletter::{self, SubscribeOutcome};
use crate::repository::CartRepository;
use crate::storage::KeyValueStore;

use super::command::{Command, QtyAdjustment};

/// Page state sampled at dispatch time rather than bind time.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchContext<'a> {
    /// Current value of the newsletter email input, or `None` when the page
    /// has no such input.
    pub email_input: Option<&'a str>,
}

/// Side effects the host page applies after a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Set the page location.
    Navigate(String),
    /// Show a blocking dialog.
    Dialog(String),
    /// Move focus into the newsletter email input.
    FocusEmailInput,
    /// Clear the newsletter email input.
    ClearEmailInput,
    /// Recompute the cart badges from the persisted cart.
    RefreshBadges,
    /// Rebuild the cart page from the persisted cart.
    RenderCart,
}

/// Dispatcher for bound page commands.
pub struct ActionDispatcher<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> ActionDispatcher<'a> {
    /// Create a dispatcher over `store`.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Execute one command, returning the effects to apply.
    #[instrument(skip(self, ctx))]
    pub fn dispatch(&self, command: &Command, ctx: &DispatchContext<'_>) -> Vec<Effect> {
        match command {
            Command::Navigate { target } | Command::QuickView { target } => {
                vec![Effect::Navigate(target.clone())]
            }
            Command::Logout { redirect } => self.logout(redirect),
            Command::Subscribe => Self::subscribe(ctx.email_input),
            Command::AddToCart { product, price } => self.add_to_cart(product, *price),
            Command::AdjustQty { index, adjustment } => self.adjust_qty(*index, *adjustment),
            Command::Remove { index } => self.remove(*index),
        }
    }

    fn logout(&self, redirect: &str) -> Vec<Effect> {
        // An unavailable store leaves a stale marker behind; the redirect
        // still happens.
        if let Err(e) = self.store.remove(keys::USER) {
            warn!("failed to clear user marker on logout: {e}");
        }
        vec![Effect::Navigate(redirect.to_owned())]
    }

    fn subscribe(email_input: Option<&str>) -> Vec<Effect> {
        let Some(raw) = email_input else {
            return vec![Effect::Dialog("Email input not found.".to_owned())];
        };

        match newsletter::subscribe(raw) {
            SubscribeOutcome::Success { email } => vec![
                Effect::Dialog(format!("Thanks for subscribing with {email}!")),
                Effect::ClearEmailInput,
            ],
            SubscribeOutcome::Error { message } => {
                vec![Effect::Dialog(message), Effect::FocusEmailInput]
            }
        }
    }

    fn add_to_cart(&self, product: &str, price: Decimal) -> Vec<Effect> {
        let repo = CartRepository::new(self.store);
        let mut cart = repo.load();
        cart.add(product, price);
        if let Err(e) = repo.save(&cart) {
            error!("failed to persist cart after add: {e}");
        }
        // The badge refresh runs after the dialog is dismissed.
        vec![
            Effect::Dialog(format!("Added to cart: {product}")),
            Effect::RefreshBadges,
        ]
    }

    fn adjust_qty(&self, index: usize, adjustment: QtyAdjustment) -> Vec<Effect> {
        let repo = CartRepository::new(self.store);
        let mut cart = repo.load();
        if cart.get(index).is_none() {
            return Vec::new();
        }

        match adjustment {
            QtyAdjustment::Decrease => cart.decrement(index),
            QtyAdjustment::Increase => cart.increment(index),
            QtyAdjustment::Set(qty) => cart.set_qty(index, qty),
        }

        if let Err(e) = repo.save(&cart) {
            error!("failed to persist cart after quantity change: {e}");
        }
        vec![Effect::RenderCart]
    }

    fn remove(&self, index: usize) -> Vec<Effect> {
        let repo = CartRepository::new(self.store);
        let mut cart = repo.load();
        if cart.get(index).is_none() {
            return Vec::new();
        }

        cart.remove(index);
        if let Err(e) = repo.save(&cart) {
            error!("failed to persist cart after remove: {e}");
        }
        vec![Effect::RenderCart]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use stylehub_core::Quantity;
    use stylehub_core::money::usd_cents;

    use crate::storage::MemoryStore;

    use super::*;

    fn add_command(product: &str, price_cents: i64) -> Command {
        Command::AddToCart {
            product: product.to_owned(),
            price: usd_cents(price_cents),
        }
    }

    #[test]
    fn test_navigate_and_quick_view() {
        let store = MemoryStore::new();
        let dispatcher = ActionDispatcher::new(&store);
        let ctx = DispatchContext::default();

        let effects = dispatcher.dispatch(
            &Command::Navigate {
                target: "cart.html".to_owned(),
            },
            &ctx,
        );
        assert_eq!(effects, vec![Effect::Navigate("cart.html".to_owned())]);

        let effects = dispatcher.dispatch(
            &Command::QuickView {
                target: "shirt.html".to_owned(),
            },
            &ctx,
        );
        assert_eq!(effects, vec![Effect::Navigate("shirt.html".to_owned())]);
    }

    #[test]
    fn test_logout_clears_user_marker() {
        let store = MemoryStore::new();
        store.set(keys::USER, "opaque-token").unwrap();

        let dispatcher = ActionDispatcher::new(&store);
        let effects = dispatcher.dispatch(
            &Command::Logout {
                redirect: "index.html".to_owned(),
            },
            &DispatchContext::default(),
        );

        assert_eq!(effects, vec![Effect::Navigate("index.html".to_owned())]);
        assert_eq!(store.get(keys::USER).unwrap(), None);
    }

    #[test]
    fn test_add_to_cart_twice_merges_rows() {
        let store = MemoryStore::new();
        let dispatcher = ActionDispatcher::new(&store);
        let ctx = DispatchContext::default();

        let effects = dispatcher.dispatch(&add_command("Linen Shirt", 2550), &ctx);
        assert_eq!(
            effects,
            vec![
                Effect::Dialog("Added to cart: Linen Shirt".to_owned()),
                Effect::RefreshBadges,
            ]
        );

        dispatcher.dispatch(&add_command("Linen Shirt", 2550), &ctx);

        let cart = CartRepository::new(&store).load();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(0).unwrap().qty.get(), 2);
    }

    #[test]
    fn test_subscribe_paths() {
        let store = MemoryStore::new();
        let dispatcher = ActionDispatcher::new(&store);

        // No email input on the page.
        let effects = dispatcher.dispatch(&Command::Subscribe, &DispatchContext::default());
        assert_eq!(
            effects,
            vec![Effect::Dialog("Email input not found.".to_owned())]
        );

        // Invalid address: error dialog, focus, and no store writes.
        let ctx = DispatchContext {
            email_input: Some("not-an-email"),
        };
        let effects = dispatcher.dispatch(&Command::Subscribe, &ctx);
        assert_eq!(
            effects,
            vec![
                Effect::Dialog("Please provide a valid email address.".to_owned()),
                Effect::FocusEmailInput,
            ]
        );
        assert_eq!(store.get(keys::CART).unwrap(), None);
        assert_eq!(store.get(keys::USER).unwrap(), None);

        // Valid address: confirmation and cleared input.
        let ctx = DispatchContext {
            email_input: Some("shopper@example.com"),
        };
        let effects = dispatcher.dispatch(&Command::Subscribe, &ctx);
        assert_eq!(
            effects,
            vec![
                Effect::Dialog("Thanks for subscribing with shopper@example.com!".to_owned()),
                Effect::ClearEmailInput,
            ]
        );
    }

    #[test]
    fn test_adjust_qty_clamps_and_persists() {
        let store = MemoryStore::new();
        let dispatcher = ActionDispatcher::new(&store);
        let ctx = DispatchContext::default();
        dispatcher.dispatch(&add_command("Shirt", 1000), &ctx);

        let effects = dispatcher.dispatch(
            &Command::AdjustQty {
                index: 0,
                adjustment: QtyAdjustment::Decrease,
            },
            &ctx,
        );
        assert_eq!(effects, vec![Effect::RenderCart]);
        assert_eq!(
            CartRepository::new(&store).load().get(0).unwrap().qty,
            Quantity::ONE
        );

        dispatcher.dispatch(
            &Command::AdjustQty {
                index: 0,
                adjustment: QtyAdjustment::Set(Quantity::new(5)),
            },
            &ctx,
        );
        assert_eq!(
            CartRepository::new(&store).load().get(0).unwrap().qty.get(),
            5
        );
    }

    #[test]
    fn test_row_commands_with_bad_index_do_nothing() {
        let store = MemoryStore::new();
        let dispatcher = ActionDispatcher::new(&store);
        let ctx = DispatchContext::default();
        dispatcher.dispatch(&add_command("Shirt", 1000), &ctx);

        let effects = dispatcher.dispatch(&Command::Remove { index: 7 }, &ctx);
        assert!(effects.is_empty());

        let effects = dispatcher.dispatch(
            &Command::AdjustQty {
                index: 7,
                adjustment: QtyAdjustment::Increase,
            },
            &ctx,
        );
        assert!(effects.is_empty());
        assert_eq!(CartRepository::new(&store).load().len(), 1);
    }

    #[test]
    fn test_remove_only_row_empties_cart() {
        let store = MemoryStore::new();
        let dispatcher = ActionDispatcher::new(&store);
        let ctx = DispatchContext::default();
        dispatcher.dispatch(&add_command("Shirt", 1000), &ctx);

        let effects = dispatcher.dispatch(&Command::Remove { index: 0 }, &ctx);
        assert_eq!(effects, vec![Effect::RenderCart]);
        assert!(CartRepository::new(&store).load().is_empty());
    }
}
