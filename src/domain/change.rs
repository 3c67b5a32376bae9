use super::money::Money;
use serde::Serialize;

pub const DOLLAR_COIN_CENTS: u64 = 100;
pub const QUARTER_COIN_CENTS: u64 = 25;

/// Coins handed back to the buyer.
///
/// The machine only holds dollar coins and quarters. Whatever is left below
/// a quarter cannot be paid out and is reported in `dropped_cents`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Change {
    pub dollar_coins: u64,
    pub quarter_coins: u64,
    pub dropped_cents: u64,
}

impl Change {
    /// `None` when the amount is negative or too large to count in cents.
    pub fn for_amount(amount: Money) -> Option<Self> {
        let cents = amount.whole_cents()?;
        let remainder = cents % DOLLAR_COIN_CENTS;
        Some(Self {
            dollar_coins: cents / DOLLAR_COIN_CENTS,
            quarter_coins: remainder / QUARTER_COIN_CENTS,
            dropped_cents: remainder % QUARTER_COIN_CENTS,
        })
    }

    /// Value of the coins actually paid out.
    pub fn paid_cents(&self) -> u64 {
        self.dollar_coins * DOLLAR_COIN_CENTS + self.quarter_coins * QUARTER_COIN_CENTS
    }

    pub fn has_coins(&self) -> bool {
        self.dollar_coins > 0 || self.quarter_coins > 0
    }
}
