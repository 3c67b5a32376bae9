use crate::error::{Result, VendingError};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Select,
    Pay,
    Cancel,
    Reset,
    Restock,
    Show,
}

/// One scripted button press.
///
/// Field values stay as raw text so they go through the same parsing as
/// anything a buyer would type.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ScriptStep {
    pub action: Action,
    #[serde(default)]
    pub selection: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
}

/// Reads a scripted session from CSV with the header
/// `action, selection, quantity, amount`.
pub struct ScriptReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ScriptReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily yields steps in file order.
    pub fn steps(self) -> impl Iterator<Item = Result<ScriptStep>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(VendingError::from))
    }
}
