use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

/// A dollar amount backed by `rust_decimal::Decimal`.
///
/// Prices, payments, change and profit all flow through this type so that
/// cents are never lost to binary floating point. Anything that can grow
/// goes through the `checked_*` methods.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Largest unit price, and largest total paid into one session, the
    /// machine accepts. Change for anything up to this always fits in `u64` cents.
    pub const MAX: Self = Self(dec!(1000000000));

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Whether the amount is a whole number of cents.
    pub fn is_whole_cents(&self) -> bool {
        self.0.normalize().scale() <= 2
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Price of `quantity` units at this unit price.
    pub fn checked_times(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(quantity)).map(Self)
    }

    /// Whole cents contained in this amount, truncating fractions of a cent.
    /// `None` for negative amounts or amounts too large to count in `u64`.
    pub fn whole_cents(&self) -> Option<u64> {
        self.0
            .checked_mul(Decimal::ONE_HUNDRED)?
            .trunc()
            .to_u64()
    }
}

/// Renders with exactly two decimal places, e.g. `4.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(4.50));
        let b = Money::new(dec!(2.00));
        assert_eq!(a - b, Money::new(dec!(2.50)));
        assert_eq!(a.checked_add(b), Some(Money::new(dec!(6.50))));
        assert_eq!(Money::new(Decimal::MAX).checked_add(a), None);
    }

    #[test]
    fn test_times_quantity() {
        let price = Money::new(dec!(1.5));
        assert_eq!(price.checked_times(3), Some(Money::new(dec!(4.5))));
        assert_eq!(price.checked_times(0), Some(Money::ZERO));
        assert_eq!(Money::new(Decimal::MAX).checked_times(2), None);
    }

    #[test]
    fn test_whole_cents_truncates() {
        assert_eq!(Money::new(dec!(0.50)).whole_cents(), Some(50));
        assert_eq!(Money::new(dec!(2)).whole_cents(), Some(200));
        assert_eq!(Money::new(dec!(0.129)).whole_cents(), Some(12));
        assert_eq!(Money::new(dec!(-1)).whole_cents(), None);
    }

    #[test]
    fn test_whole_cents_out_of_range() {
        assert_eq!(Money::new(Decimal::MAX).whole_cents(), None);
        assert_eq!(
            Money::new(dec!(100000000000000000000)).whole_cents(),
            None
        );
        assert_eq!(Money::MAX.whole_cents(), Some(100_000_000_000));
    }

    #[test]
    fn test_whole_cents_check() {
        assert!(Money::new(dec!(1.50)).is_whole_cents());
        assert!(Money::new(dec!(1.500)).is_whole_cents());
        assert!(!Money::new(dec!(0.125)).is_whole_cents());
    }

    #[test]
    fn test_display_two_places() {
        assert_eq!(Money::new(dec!(4.5)).to_string(), "4.50");
        assert_eq!(Money::new(dec!(2)).to_string(), "2.00");
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::new(dec!(-0.01)).is_negative());
        assert!(!Money::ZERO.is_negative());
        assert!(!Money::ZERO.is_positive());
        assert!(Money::new(dec!(0.01)).is_positive());
    }
}
