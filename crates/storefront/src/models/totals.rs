//! Order summary arithmetic.

use rust_decimal::Decimal;

use super::cart::Cart;

/// Flat shipping fee applied to any non-empty order.
pub const FLAT_SHIPPING: Decimal = Decimal::from_parts(800, 0, 0, false, 2);

/// Sales tax rate (8% of the subtotal).
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// The cart page's money summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of price times quantity across all lines.
    pub subtotal: Decimal,
    /// Flat fee, zero for an empty order.
    pub shipping: Decimal,
    /// Subtotal times the tax rate.
    pub taxes: Decimal,
    /// Subtotal plus shipping plus taxes.
    pub total: Decimal,
}

impl CartTotals {
    /// All-zero totals for the empty cart.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            shipping: Decimal::ZERO,
            taxes: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    /// Recompute the summary from a cart.
    #[must_use]
    pub fn compute(cart: &Cart) -> Self {
        let subtotal: Decimal = cart.items().iter().map(super::cart::CartItem::line_total).sum();
        let shipping = if subtotal > Decimal::ZERO {
            FLAT_SHIPPING
        } else {
            Decimal::ZERO
        };
        let taxes = subtotal * TAX_RATE;
        let total = subtotal + shipping + taxes;
        Self {
            subtotal,
            shipping,
            taxes,
            total,
        }
    }
}

impl Default for CartTotals {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use stylehub_core::money::usd_cents;

    use super::*;

    #[test]
    fn test_empty_cart_is_all_zero() {
        let totals = CartTotals::compute(&Cart::new());
        assert_eq!(totals, CartTotals::zero());
    }

    #[test]
    fn test_shipping_applies_only_to_non_empty_orders() {
        let mut cart = Cart::new();
        cart.add("Socks", usd_cents(1));
        let totals = CartTotals::compute(&cart);
        assert_eq!(totals.shipping, FLAT_SHIPPING);
    }

    #[test]
    fn test_three_item_summary() {
        // Prices 10.00 / 25.50 / 5.00 at quantities 2 / 1 / 3.
        let mut cart = Cart::new();
        cart.add("Tee", usd_cents(1000));
        cart.increment(0);
        cart.add("Shirt", usd_cents(2550));
        cart.add("Socks", usd_cents(500));
        cart.set_qty(2, stylehub_core::Quantity::new(3));

        let totals = CartTotals::compute(&cart);
        assert_eq!(totals.subtotal, usd_cents(6050));
        assert_eq!(totals.shipping, usd_cents(800));
        assert_eq!(totals.taxes, usd_cents(484));
        assert_eq!(totals.total, usd_cents(7334));
    }
}
