use thiserror::Error;

#[derive(Error, Debug)]
pub enum VendingError {
    #[error("invalid value for {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },
    #[error("not a valid selection: {0}")]
    InvalidSelection(usize),
    #[error("quantity must be > 0, got {0}")]
    InvalidQuantity(i64),
    #[error("there is no more {name}")]
    OutOfStock { name: String },
    #[error("there are only {available} of {name} left")]
    InsufficientStock { name: String, available: u32 },
    #[error("transaction already in progress")]
    TransactionConflict,
    #[error("payment amount cannot be negative: {0}")]
    NegativePayment(rust_decimal::Decimal),
    #[error("amount exceeds what the machine can handle: {0}")]
    AmountTooLarge(rust_decimal::Decimal),
    #[error("invalid price: {0}")]
    InvalidPrice(rust_decimal::Decimal),
    #[error("item {0:?} already exists")]
    DuplicateItem(String),
    #[error("cannot restock with a negative quantity: {0}")]
    NegativeRestock(i64),
    #[error("no transaction in progress")]
    NoOpenSession,
    #[error("payment session is already closed")]
    SessionClosed,
    #[error("no fulfilled payment awaiting dispense")]
    NothingToDispense,
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl VendingError {
    /// Rejections a buyer can recover from by entering something else.
    pub fn is_user_facing(&self) -> bool {
        !matches!(
            self,
            Self::CsvError(_) | Self::IoError(_) | Self::JsonError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, VendingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_classification() {
        assert!(VendingError::TransactionConflict.is_user_facing());
        assert!(VendingError::InvalidQuantity(0).is_user_facing());
        let io = std::io::Error::other("disk");
        assert!(!VendingError::from(io).is_user_facing());
    }

    #[test]
    fn test_stock_messages() {
        let err = VendingError::InsufficientStock {
            name: "Matcha Pocky".to_string(),
            available: 2,
        };
        assert_eq!(err.to_string(), "there are only 2 of Matcha Pocky left");
        let err = VendingError::OutOfStock {
            name: "Matcha Pocky".to_string(),
        };
        assert_eq!(err.to_string(), "there is no more Matcha Pocky");
    }
}
