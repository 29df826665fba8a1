// Ledger file ingestion: spreadsheet streams and files into reconciliation tables

pub mod csv;
pub mod xlsx;

use std::io::Read;
use std::path::Path;

use ledgercheck_recon::{compare_tables, ComparisonResult, Ledger, ReconError, Table};

/// File extensions accepted as ledger exports.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xls", "xlsx", "xlsm", "xlsb", "ods", "csv"];

/// Lower-cased extension of `path` if it is a supported ledger format.
pub fn supported_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    SUPPORTED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Read a ledger export from disk, choosing the reader by extension.
pub fn open_table(path: &Path, ledger: Ledger) -> Result<Table, ReconError> {
    let ingest = |message: String| ReconError::Ingest { ledger, message };

    match supported_extension(path).as_deref() {
        Some("csv") => csv::import(path).map_err(ingest),
        Some(_) => xlsx::import(path).map_err(ingest),
        None => Err(ingest(format!(
            "unsupported file type '{}' (expected one of: {})",
            path.display(),
            SUPPORTED_EXTENSIONS.join(", ")
        ))),
    }
}

/// Read a spreadsheet stream for `ledger`.
pub fn read_table<R: Read>(reader: R, ledger: Ledger) -> Result<Table, ReconError> {
    xlsx::import_from_reader(reader).map_err(|message| ReconError::Ingest { ledger, message })
}

/// Reconcile two spreadsheet streams. Each stream is read to completion.
pub fn compare_streams<B: Read, D: Read>(balance: B, ddp: D) -> Result<ComparisonResult, ReconError> {
    let balance = read_table(balance, Ledger::Balance)?;
    let ddp = read_table(ddp, Ledger::Ddp)?;
    compare_tables(&balance, &ddp)
}

/// Reconcile two ledger files.
pub fn compare_files(balance: &Path, ddp: &Path) -> Result<ComparisonResult, ReconError> {
    let balance = open_table(balance, Ledger::Balance)?;
    let ddp = open_table(ddp, Ledger::Ddp)?;
    compare_tables(&balance, &ddp)
}
