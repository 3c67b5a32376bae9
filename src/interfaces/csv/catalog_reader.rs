use crate::domain::catalog::Catalog;
use crate::domain::money::Money;
use crate::error::{Result, VendingError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use tracing::warn;

/// One row of a catalog file: `name, price, quantity`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CatalogRecord {
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub quantity: Option<u32>,
}

/// Reads the initial stock of the machine from a CSV source.
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CatalogReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn records(self) -> impl Iterator<Item = Result<CatalogRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(VendingError::from))
    }

    /// Builds a catalog in file order.
    ///
    /// Rows that cannot be read, carry a price the catalog refuses (negative
    /// or finer than a cent) or repeat an earlier name are logged and skipped.
    pub fn into_catalog(self) -> Catalog {
        let mut catalog = Catalog::new();
        for record in self.records() {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    warn!("skipping unreadable catalog row: {e}");
                    continue;
                }
            };
            if let Err(e) = catalog.add_item(
                record.name,
                Money::new(record.price),
                record.quantity.unwrap_or(0),
            ) {
                warn!("skipping catalog row: {e}");
            }
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "name, price, quantity\nGreen Tea KitKat, 1.5, 10\nMatcha Pocky, 2, 0";
        let reader = CatalogReader::new(data.as_bytes());
        let results: Vec<Result<CatalogRecord>> = reader.records().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.name, "Green Tea KitKat");
        assert_eq!(first.price, dec!(1.5));
        assert_eq!(first.quantity, Some(10));
    }

    #[test]
    fn test_missing_quantity_defaults_to_zero() {
        let data = "name, price, quantity\nGreen Tea Oreo, 5, ";
        let catalog = CatalogReader::new(data.as_bytes()).into_catalog();
        assert_eq!(catalog.quantity_of(1).unwrap(), 0);
    }

    #[test]
    fn test_bad_rows_are_skipped() {
        let data = "name, price, quantity\n\
                    Green Tea KitKat, 1.5, 10\n\
                    Matcha Pocky, cheap, 10\n\
                    Green Tea KitKat, 9, 1\n\
                    Refund Candy, -1, 3\n\
                    Instant Matcha Latte, 1, 10";
        let catalog = CatalogReader::new(data.as_bytes()).into_catalog();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.name_of(2).unwrap(), "Instant Matcha Latte");
        assert_eq!(catalog.price_of(1).unwrap(), Money::new(dec!(1.5)));
    }

    #[test]
    fn test_sub_cent_price_is_skipped() {
        let data = "name, price, quantity
                    Yuzu Soda, 0.125, 4
                    Green Tea KitKat, 1.50, 10";
        let catalog = CatalogReader::new(data.as_bytes()).into_catalog();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.name_of(1).unwrap(), "Green Tea KitKat");
    }
}
