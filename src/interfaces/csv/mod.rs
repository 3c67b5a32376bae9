pub mod catalog_reader;
pub mod inventory_writer;
pub mod script_reader;
