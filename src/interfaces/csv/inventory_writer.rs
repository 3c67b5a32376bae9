use crate::domain::catalog::Catalog;
use crate::domain::money::Money;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct InventoryRow {
    pub selection: usize,
    pub name: String,
    pub price: String,
    pub quantity: u32,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct InventoryReport {
    pub items: Vec<InventoryRow>,
    pub profit: String,
}

impl InventoryReport {
    pub fn new(catalog: &Catalog, profit: Money) -> Self {
        let items = catalog
            .entries()
            .map(|entry| InventoryRow {
                selection: entry.selection,
                name: entry.item.name().to_string(),
                price: entry.item.price().to_string(),
                quantity: entry.item.quantity(),
            })
            .collect();
        Self {
            items,
            profit: profit.to_string(),
        }
    }
}

/// Writes the end-of-run stock and profit summary.
pub struct InventoryWriter<W: Write> {
    writer: W,
}

impl<W: Write> InventoryWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// `selection,name,price,quantity` rows followed by a `profit,<amount>` line.
    pub fn write_csv(&mut self, report: &InventoryReport) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_writer(&mut self.writer);
        wtr.write_record(["selection", "name", "price", "quantity"])?;
        for row in &report.items {
            wtr.serialize(row)?;
        }
        wtr.write_record(["profit", report.profit.as_str()])?;
        wtr.flush()?;
        Ok(())
    }

    pub fn write_json(&mut self, report: &InventoryReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        Ok(())
    }
}
