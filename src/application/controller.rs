use crate::domain::catalog::Catalog;
use crate::domain::change::Change;
use crate::domain::money::Money;
use crate::domain::session::{PaymentOutcome, PaymentSession, SessionState};
use crate::error::{Result, VendingError};
use tracing::{debug, info, warn};

/// What left the machine when a purchase was fulfilled.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispensed {
    pub selection: usize,
    pub name: String,
    pub quantity: u32,
    pub earned: Money,
}

/// Result of a payment accepted by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentReceipt {
    Pending {
        remaining: Money,
    },
    Dispensed {
        dispensed: Dispensed,
        change: Option<Change>,
    },
}

/// The main entry point for driving the machine.
///
/// `VendingController` owns the catalog, the single in-flight payment
/// session and the profit ledger. It is the only place the catalog is
/// mutated, and every operation completes synchronously.
#[derive(Debug, Default)]
pub struct VendingController {
    catalog: Catalog,
    session: Option<PaymentSession>,
    profit: Money,
}

impl VendingController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            session: None,
            profit: Money::ZERO,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Revenue recognised so far. Only grows when items are dispensed.
    pub fn profit(&self) -> Money {
        self.profit
    }

    pub fn session(&self) -> Option<&PaymentSession> {
        self.session.as_ref()
    }

    /// Whether a purchase is waiting for payment.
    pub fn is_processing(&self) -> bool {
        self.session.as_ref().is_some_and(PaymentSession::is_open)
    }

    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        price: Money,
        quantity: u32,
    ) -> Result<usize> {
        let selection = self.catalog.add_item(name, price, quantity)?;
        debug!(selection, quantity, %price, "item added");
        Ok(selection)
    }

    pub fn restock(&mut self, selection: usize, delta: i64) -> Result<u32> {
        let quantity = self.catalog.restock(selection, delta)?;
        debug!(selection, delta, quantity, "item restocked");
        Ok(quantity)
    }

    /// Checks that `quantity` units of `selection` can be sold right now and
    /// returns the quantity as a stock count.
    pub fn validate_purchase(&self, selection: usize, quantity: i64) -> Result<u32> {
        if quantity <= 0 {
            return Err(VendingError::InvalidQuantity(quantity));
        }

        let item = self.catalog.item(selection)?;
        if item.is_sold_out() {
            return Err(VendingError::OutOfStock {
                name: item.name().to_string(),
            });
        }

        let insufficient = || VendingError::InsufficientStock {
            name: item.name().to_string(),
            available: item.quantity(),
        };
        let quantity = u32::try_from(quantity).map_err(|_| insufficient())?;
        if !item.can_dispense(quantity) {
            return Err(insufficient());
        }

        Ok(quantity)
    }

    /// Opens a payment session for a validated purchase and returns the
    /// amount due.
    pub fn begin_transaction(&mut self, selection: usize, quantity: i64) -> Result<Money> {
        if let Some(session) = &self.session {
            warn!(
                selection = session.selection(),
                "purchase attempted while a transaction is in progress"
            );
            return Err(VendingError::TransactionConflict);
        }

        let quantity = self.validate_purchase(selection, quantity)?;
        let price = self.catalog.price_of(selection)?;
        let amount_due = price
            .checked_times(quantity)
            .filter(|amount_due| *amount_due <= Money::MAX)
            .ok_or_else(|| VendingError::AmountTooLarge(price.value()))?;
        self.session = Some(PaymentSession::new(selection, quantity, amount_due));

        info!(selection, quantity, %amount_due, "transaction started");
        Ok(amount_due)
    }

    /// Feeds money into the open session. A payment that settles the bill
    /// dispenses immediately.
    pub fn record_payment(&mut self, amount: Money) -> Result<PaymentReceipt> {
        let session = self
            .session
            .as_mut()
            .filter(|session| session.is_open())
            .ok_or(VendingError::NoOpenSession)?;

        match session.record_payment(amount)? {
            PaymentOutcome::Pending { remaining } => {
                debug!(%amount, %remaining, "partial payment received");
                Ok(PaymentReceipt::Pending { remaining })
            }
            PaymentOutcome::Fulfilled { change } => {
                let dispensed = self.complete_dispense()?;
                Ok(PaymentReceipt::Dispensed { dispensed, change })
            }
        }
    }

    /// Releases the goods for a fulfilled session and books the revenue.
    ///
    /// Fails with [`VendingError::NothingToDispense`] unless the current
    /// session has been paid in full and not yet dispensed.
    pub fn complete_dispense(&mut self) -> Result<Dispensed> {
        let session = self
            .session
            .as_ref()
            .filter(|session| session.state() == SessionState::Fulfilled)
            .ok_or(VendingError::NothingToDispense)?;

        let selection = session.selection();
        let quantity = session.quantity();
        let price = self.catalog.price_of(selection)?;
        let earned = price
            .checked_times(quantity)
            .ok_or_else(|| VendingError::AmountTooLarge(price.value()))?;
        let profit = self
            .profit
            .checked_add(earned)
            .ok_or_else(|| VendingError::AmountTooLarge(earned.value()))?;

        self.catalog.dispense(selection, quantity)?;
        self.profit = profit;
        self.session = None;

        let name = self.catalog.name_of(selection)?.to_string();
        info!(selection, quantity, %earned, item = %name, "items dispensed");

        Ok(Dispensed {
            selection,
            name,
            quantity,
            earned,
        })
    }

    /// Abandons the open transaction and returns any money received as
    /// change. Does nothing when no transaction is open.
    pub fn cancel(&mut self) -> Option<Change> {
        let mut session = self.session.take_if(|session| session.is_open())?;
        let change = session.cancel();
        info!(
            selection = session.selection(),
            refunded = %session.amount_received(),
            "transaction canceled"
        );
        change
    }
}
