//! Typed parsing of raw text typed into the machine's entry boxes.

use crate::domain::money::Money;
use crate::error::{Result, VendingError};
use rust_decimal::Decimal;
use std::str::FromStr;

fn invalid(field: &'static str, raw: &str) -> VendingError {
    VendingError::InvalidInput {
        field,
        value: raw.to_string(),
    }
}

/// Parses a 1-based selection number. Negative numbers are well-formed but
/// can never name a slot, so they are reported as an invalid selection.
pub fn parse_selection(raw: &str) -> Result<usize> {
    let value: i64 = raw.trim().parse().map_err(|_| invalid("selection", raw))?;
    usize::try_from(value).map_err(|_| VendingError::InvalidSelection(0))
}

/// Parses a requested quantity. Zero and negative values parse successfully
/// and are rejected later by purchase validation.
pub fn parse_quantity(raw: &str) -> Result<i64> {
    raw.trim().parse().map_err(|_| invalid("quantity", raw))
}

/// Parses a payment amount such as `0.25` or `5`. Amounts above
/// [`Money::MAX`] are treated as unreadable.
pub fn parse_amount(raw: &str) -> Result<Money> {
    Decimal::from_str(raw.trim())
        .map(Money::new)
        .ok()
        .filter(|amount| *amount <= Money::MAX)
        .ok_or_else(|| invalid("amount", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection(" 2 ").unwrap(), 2);
        assert!(matches!(
            parse_selection("two"),
            Err(VendingError::InvalidInput { field: "selection", .. })
        ));
        assert!(matches!(
            parse_selection("1.5"),
            Err(VendingError::InvalidInput { .. })
        ));
        assert!(matches!(
            parse_selection("-1"),
            Err(VendingError::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3").unwrap(), 3);
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert_eq!(parse_quantity("-4").unwrap(), -4);
        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("lots").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("0.25").unwrap(), Money::new(dec!(0.25)));
        assert_eq!(parse_amount("5").unwrap(), Money::new(dec!(5)));
        assert_eq!(parse_amount("-2.00").unwrap(), Money::new(dec!(-2)));
        assert!(matches!(
            parse_amount("five dollars"),
            Err(VendingError::InvalidInput { field: "amount", .. })
        ));
    }

    #[test]
    fn test_parse_amount_out_of_range() {
        assert_eq!(parse_amount("1000000000").unwrap(), Money::MAX);
        for raw in ["1000000000.01", "100000000000000000000", "79228162514264337593543950335"] {
            assert!(matches!(
                parse_amount(raw),
                Err(VendingError::InvalidInput { field: "amount", .. })
            ));
        }
    }
}
