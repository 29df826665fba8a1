use std::fmt;

use crate::model::Ledger;

#[derive(Debug)]
pub enum ReconError {
    /// The source could not be read as a spreadsheet at all.
    Ingest { ledger: Ledger, message: String },
    /// The table has data rows but is narrower than the ledger layout.
    MissingColumn {
        ledger: Ledger,
        column: &'static str,
        width: usize,
    },
}

impl ReconError {
    /// Ledger the failure belongs to, when known.
    pub fn ledger(&self) -> Option<Ledger> {
        match self {
            Self::Ingest { ledger, .. } | Self::MissingColumn { ledger, .. } => Some(*ledger),
        }
    }
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ingest { ledger, message } => {
                write!(f, "{ledger} file: cannot read spreadsheet: {message}")
            }
            Self::MissingColumn { ledger, column, width } => {
                write!(f, "{ledger} file: missing {column} column (sheet has {width} columns)")
            }
        }
    }
}

impl std::error::Error for ReconError {}
