//! Text front end for the machine.
//!
//! `Console` plays the part of the display panel: it turns raw button
//! presses into controller calls and keeps the message the buyer would see.

use super::csv::script_reader::{Action, ScriptStep};
use super::input::{parse_amount, parse_quantity, parse_selection};
use crate::application::controller::{PaymentReceipt, VendingController};
use crate::domain::change::Change;
use crate::error::VendingError;
use std::fmt::Write as _;
use tracing::warn;

pub const WAITING: &str = "Waiting for action...";
pub const INVALID_VALUES: &str = "INVALID VALUE(S) ENTERED";

pub struct Console {
    controller: VendingController,
    message: String,
}

impl Console {
    pub fn new(controller: VendingController) -> Self {
        Self {
            controller,
            message: WAITING.to_string(),
        }
    }

    pub fn controller(&self) -> &VendingController {
        &self.controller
    }

    pub fn into_controller(self) -> VendingController {
        self.controller
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Payment entry and the cancel button only work mid-transaction.
    pub fn accepting_payment(&self) -> bool {
        self.controller.is_processing()
    }

    /// "Confirm Selection".
    pub fn select(&mut self, selection: &str, quantity: &str) -> &str {
        if self.controller.is_processing() {
            self.message = format!("Unfinished transaction...\n{}", self.message);
            return &self.message;
        }

        let parsed = parse_selection(selection).and_then(|s| Ok((s, parse_quantity(quantity)?)));
        let result = parsed.and_then(|(selection, quantity)| {
            self.controller.begin_transaction(selection, quantity)
        });

        self.message = match result {
            Ok(due) => format!("Payment Due: ${due}"),
            Err(VendingError::InvalidInput { field, value }) => {
                warn!(field, %value, "rejected selection input");
                INVALID_VALUES.to_string()
            }
            Err(e) => {
                warn!("purchase rejected: {e}");
                format!("UNSUCCESSFUL PURCHASE: \n{}", purchase_reason(&e))
            }
        };
        &self.message
    }

    /// "Confirm Payment".
    pub fn pay(&mut self, amount: &str) -> &str {
        let result = parse_amount(amount).and_then(|amount| self.controller.record_payment(amount));

        match result {
            Ok(PaymentReceipt::Pending { remaining }) => {
                self.message = format!("Payment Due: ${remaining}");
            }
            Ok(PaymentReceipt::Dispensed { dispensed, change }) => {
                self.message = format!(
                    "Purchase of {} {} is completed! \nThank you!",
                    dispensed.quantity, dispensed.name
                );
                if let Some(change) = change {
                    self.message.push('\n');
                    self.message.push_str(&describe_change(&change));
                }
            }
            Err(VendingError::InvalidInput { value, .. }) => {
                warn!(%value, "rejected payment input");
                self.message = format!("{INVALID_VALUES}\n{}", self.message);
            }
            Err(VendingError::AmountTooLarge(amount)) => {
                warn!(%amount, "rejected oversized payment");
                self.message = format!("{INVALID_VALUES}\n{}", self.message);
            }
            Err(VendingError::NegativePayment(amount)) => {
                warn!(%amount, "ignored negative payment");
            }
            Err(e) => {
                warn!("payment rejected: {e}");
                self.message = capitalize(&e.to_string());
            }
        }
        &self.message
    }

    /// "Cancel".
    pub fn cancel(&mut self) -> &str {
        self.message = match self.controller.cancel() {
            Some(change) => format!("CANCELED...\n{}", describe_change(&change)),
            None => format!("Transaction is canceled!\n{WAITING}"),
        };
        &self.message
    }

    /// "Clear Selection". Only clears the panel; an open transaction stays open.
    pub fn reset(&mut self) -> &str {
        self.message = WAITING.to_string();
        &self.message
    }

    pub fn restock(&mut self, selection: &str, quantity: &str) -> &str {
        let parsed = parse_selection(selection).and_then(|s| Ok((s, parse_quantity(quantity)?)));
        let result = parsed.and_then(|(selection, delta)| {
            let quantity = self.controller.restock(selection, delta)?;
            let name = self.controller.catalog().name_of(selection)?;
            Ok(format!("Restocked {name}: {quantity} available"))
        });

        self.message = match result {
            Ok(message) => message,
            Err(VendingError::InvalidInput { .. }) => INVALID_VALUES.to_string(),
            Err(e) => {
                warn!("restock rejected: {e}");
                format!("UNSUCCESSFUL RESTOCK: \n{e}")
            }
        };
        &self.message
    }

    /// Full listing of the machine, as shown above the entry boxes.
    pub fn listing(&self) -> String {
        let mut out = String::from("\nVending Machine Items\n");
        for entry in self.controller.catalog().entries() {
            let _ = write!(out, "\n{entry}");
        }
        out.push_str("\n\nEnter the number for your selection and quantity in");
        out.push_str("\nthe boxes below and confirm your selection with the");
        out.push_str("\ncorresponding button to move on to payment\n");
        out
    }

    /// Runs one scripted step and returns the resulting panel text.
    pub fn handle(&mut self, step: &ScriptStep) -> String {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        match step.action {
            Action::Select => self
                .select(&field(&step.selection), &field(&step.quantity))
                .to_string(),
            Action::Pay => self.pay(&field(&step.amount)).to_string(),
            Action::Cancel => self.cancel().to_string(),
            Action::Reset => self.reset().to_string(),
            Action::Restock => self
                .restock(&field(&step.selection), &field(&step.quantity))
                .to_string(),
            Action::Show => self.listing(),
        }
    }
}

fn purchase_reason(error: &VendingError) -> String {
    match error {
        VendingError::InvalidQuantity(_) => "quantity must be > 0".to_string(),
        VendingError::InvalidSelection(_) => "not a valid selection".to_string(),
        other => other.to_string(),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `YOUR CHANGE: 1 dollar coin(s) and 2 quarter coin(s)`; coin kinds with a
/// zero count are left out.
pub fn describe_change(change: &Change) -> String {
    if !change.has_coins() {
        return "YOUR CHANGE:".to_string();
    }
    let mut coins = Vec::with_capacity(2);
    if change.dollar_coins > 0 {
        coins.push(format!("{} dollar coin(s)", change.dollar_coins));
    }
    if change.quarter_coins > 0 {
        coins.push(format!("{} quarter coin(s)", change.quarter_coins));
    }
    format!("YOUR CHANGE: {}", coins.join(" and "))
}
