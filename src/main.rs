use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Read, Write};
use vending_machine::application::controller::VendingController;
use vending_machine::config::{self, Cli, ReportFormat};
use vending_machine::interfaces::console::Console;
use vending_machine::interfaces::csv::catalog_reader::CatalogReader;
use vending_machine::interfaces::csv::inventory_writer::{InventoryReport, InventoryWriter};
use vending_machine::interfaces::csv::script_reader::ScriptReader;
use vending_machine::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let catalog = match &cli.catalog {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            CatalogReader::new(file).into_catalog()
        }
        None => config::default_catalog().into_diagnostic()?,
    };
    tracing::info!(items = catalog.len(), "machine stocked");

    let mut console = Console::new(VendingController::new(catalog));

    let source: Box<dyn Read> = match &cli.script {
        Some(path) => Box::new(File::open(path).into_diagnostic()?),
        None => Box::new(io::stdin()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Run the session
    for step in ScriptReader::new(source).steps() {
        match step {
            Ok(step) => {
                let message = console.handle(&step);
                writeln!(out, "{message}").into_diagnostic()?;
            }
            Err(e) => {
                eprintln!("Error reading step: {}", e);
            }
        }
    }

    if console.accepting_payment() {
        tracing::warn!("session ended with a transaction still open");
    }

    let controller = console.into_controller();
    let report = InventoryReport::new(controller.catalog(), controller.profit());
    let mut writer = InventoryWriter::new(out);
    match cli.format {
        ReportFormat::Csv => writer.write_csv(&report).into_diagnostic()?,
        ReportFormat::Json => writer.write_json(&report).into_diagnostic()?,
    }

    Ok(())
}
