use super::money::Money;
use crate::error::{Result, VendingError};
use serde::Serialize;

/// A product slot in the machine.
///
/// Quantity only moves through [`Item::add_to_quantity`] and
/// [`Item::reduce_quantity`]; the latter refuses to go below zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    name: String,
    price: Money,
    quantity: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, price: Money, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn is_sold_out(&self) -> bool {
        self.quantity == 0
    }

    pub fn can_dispense(&self, quantity: u32) -> bool {
        self.quantity >= quantity
    }

    /// Fails without touching the stock if the new count would not fit.
    pub fn add_to_quantity(&mut self, quantity: u32) -> Result<()> {
        self.quantity = self.quantity.checked_add(quantity).ok_or_else(|| {
            VendingError::InvalidInput {
                field: "quantity",
                value: quantity.to_string(),
            }
        })?;
        Ok(())
    }

    pub fn reduce_quantity(&mut self, quantity: u32) -> Result<()> {
        self.quantity = self.quantity.checked_sub(quantity).ok_or_else(|| {
            VendingError::InsufficientStock {
                name: self.name.clone(),
                available: self.quantity,
            }
        })?;
        Ok(())
    }
}
