use crate::domain::catalog::Catalog;
use crate::domain::money::Money;
use crate::error::Result;
use clap::{Parser, ValueEnum};
use rust_decimal_macros::dec;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Scripted session CSV (`action, selection, quantity, amount`). Reads stdin when omitted.
    pub script: Option<PathBuf>,

    /// Catalog CSV (`name, price, quantity`) used to stock the machine.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Format of the inventory report printed after the session.
    #[arg(long, value_enum, default_value_t = ReportFormat::Csv)]
    pub format: ReportFormat,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// The stock a fresh machine ships with.
pub fn default_catalog() -> Result<Catalog> {
    let mut catalog = Catalog::new();
    catalog.add_item("Green Tea KitKat", Money::new(dec!(1.50)), 10)?;
    catalog.add_item("Matcha Pocky", Money::new(dec!(2.00)), 10)?;
    catalog.add_item("Instant Matcha Latte", Money::new(dec!(1.00)), 10)?;
    catalog.add_item("Green Tea Oreo", Money::new(dec!(5.00)), 10)?;
    Ok(catalog)
}
