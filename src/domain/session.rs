use super::change::Change;
use super::money::Money;
use crate::error::{Result, VendingError};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Open,
    Fulfilled,
    Canceled,
}

impl SessionState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Result of a payment that was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Still short; the buyer owes `remaining`.
    Pending { remaining: Money },
    /// Paid in full. `change` is `None` on exact payment.
    Fulfilled { change: Option<Change> },
}

/// A single purchase waiting for money.
///
/// Opens when a priced purchase is accepted and closes exactly once, either
/// fulfilled by payment or canceled. A closed session accepts nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentSession {
    selection: usize,
    quantity: u32,
    total_due: Money,
    amount_received: Money,
    state: SessionState,
}

impl PaymentSession {
    pub fn new(selection: usize, quantity: u32, total_due: Money) -> Self {
        Self {
            selection,
            quantity,
            total_due,
            amount_received: Money::ZERO,
            state: SessionState::Open,
        }
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_due(&self) -> Money {
        self.total_due
    }

    pub fn amount_received(&self) -> Money {
        self.amount_received
    }

    /// What the buyer still owes. Zero once the session is closed.
    pub fn amount_due(&self) -> Money {
        if self.state.is_open() && self.amount_received < self.total_due {
            self.total_due - self.amount_received
        } else {
            Money::ZERO
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Accepts money towards the purchase.
    ///
    /// Negative amounts, and amounts above [`Money::MAX`], are rejected
    /// without touching the session.
    pub fn record_payment(&mut self, amount: Money) -> Result<PaymentOutcome> {
        if !self.is_open() {
            return Err(VendingError::SessionClosed);
        }
        if amount.is_negative() {
            return Err(VendingError::NegativePayment(amount.value()));
        }
        let too_large = || VendingError::AmountTooLarge(amount.value());
        if amount > Money::MAX {
            return Err(too_large());
        }
        let received = self
            .amount_received
            .checked_add(amount)
            .ok_or_else(too_large)?;

        if received < self.total_due {
            self.amount_received = received;
            return Ok(PaymentOutcome::Pending {
                remaining: self.amount_due(),
            });
        }

        let overpaid = received - self.total_due;
        let change = if overpaid.is_positive() {
            Some(Change::for_amount(overpaid).ok_or_else(too_large)?)
        } else {
            None
        };
        self.amount_received = received;
        self.state = SessionState::Fulfilled;
        Ok(PaymentOutcome::Fulfilled { change })
    }

    /// Closes the session and hands back everything received so far.
    ///
    /// Canceling a closed session does nothing and returns `None`.
    pub fn cancel(&mut self) -> Option<Change> {
        if !self.is_open() {
            return None;
        }
        self.state = SessionState::Canceled;
        // open sessions hold less than the total due, which is at most Money::MAX
        Change::for_amount(self.amount_received).filter(|_| self.amount_received.is_positive())
    }
}
