use std::io::Write;
use tempfile::NamedTempFile;

pub const SCRIPT_HEADER: &str = "action, selection, quantity, amount";

/// Writes a scripted session, one `action, selection, quantity, amount` row per entry.
pub fn script(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{SCRIPT_HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

pub fn catalog(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "name, price, quantity").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}
