//! Cart quantity newtype.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A cart line quantity.
///
/// Quantities are always at least 1: a row with zero units does not exist,
/// it is removed instead. Every constructor clamps to that floor, so the
/// invariant holds everywhere a `Quantity` appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// The minimum (and default) quantity.
    pub const ONE: Self = Self(1);

    /// Create a quantity, clamping zero up to 1.
    #[must_use]
    pub const fn new(count: u32) -> Self {
        if count == 0 { Self(1) } else { Self(count) }
    }

    /// Parse a quantity from user input.
    ///
    /// Only the leading run of digits counts, so a decimal like `2.7`
    /// truncates to 2; input with no leading digits counts as 1.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let digits = raw
            .trim()
            .split(|c: char| !c.is_ascii_digit())
            .next()
            .unwrap_or_default();
        Self::new(digits.parse().unwrap_or(1))
    }

    /// The underlying count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// One more unit. No upper bound is enforced.
    #[must_use]
    pub const fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// One fewer unit, never dropping below 1.
    #[must_use]
    pub const fn decrement(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<u32> for Quantity {
    fn from(count: u32) -> Self {
        Self::new(count)
    }
}

impl From<Quantity> for u32 {
    fn from(qty: Quantity) -> Self {
        qty.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_zero() {
        assert_eq!(Quantity::new(0), Quantity::ONE);
        assert_eq!(Quantity::new(5).get(), 5);
    }

    #[test]
    fn test_decrement_floors_at_one() {
        assert_eq!(Quantity::ONE.decrement(), Quantity::ONE);
        assert_eq!(Quantity::new(3).decrement().get(), 2);
    }

    #[test]
    fn test_increment_has_no_ceiling() {
        assert_eq!(Quantity::new(99).increment().get(), 100);
        assert_eq!(Quantity(u32::MAX).increment().get(), u32::MAX);
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(Quantity::parse("4").get(), 4);
        assert_eq!(Quantity::parse(" 2 ").get(), 2);
        assert_eq!(Quantity::parse("0").get(), 1);
        assert_eq!(Quantity::parse("-3").get(), 1);
        assert_eq!(Quantity::parse("abc").get(), 1);
        assert_eq!(Quantity::parse("").get(), 1);
    }

    #[test]
    fn test_parse_truncates_decimal_input() {
        assert_eq!(Quantity::parse("2.7").get(), 2);
        assert_eq!(Quantity::parse("10.0").get(), 10);
        assert_eq!(Quantity::parse("3 pairs").get(), 3);
        assert_eq!(Quantity::parse("0.9").get(), 1);
        assert_eq!(Quantity::parse(".5").get(), 1);
    }

    #[test]
    fn test_serde_as_plain_number() {
        let qty = Quantity::new(3);
        assert_eq!(serde_json::to_string(&qty).unwrap(), "3");

        let parsed: Quantity = serde_json::from_str("2").unwrap();
        assert_eq!(parsed.get(), 2);

        // Stored zero deserializes to the floor, matching the old
        // `qty || 1` read path.
        let zero: Quantity = serde_json::from_str("0").unwrap();
        assert_eq!(zero, Quantity::ONE);
    }
}
