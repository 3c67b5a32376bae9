//! Everything that talks to the outside: raw input parsing, the text console
//! and CSV/JSON file formats.

pub mod console;
pub mod csv;
pub mod input;
