//! Fixed positional layouts of the two ledger exports.

use crate::model::Ledger;

/// Where each field lives in a ledger export. Columns are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerLayout {
    pub ledger: Ledger,
    /// Rows above the first data row.
    pub header_rows: usize,
    pub id_column: usize,
    pub name_column: usize,
    pub amount_column: usize,
}

/// Accounting export: id, name, then the balance in the sixth column.
pub const BALANCE_LAYOUT: LedgerLayout = LedgerLayout {
    ledger: Ledger::Balance,
    header_rows: 7,
    id_column: 0,
    name_column: 1,
    amount_column: 5,
};

/// Payments export: name, provider number, amount.
pub const DDP_LAYOUT: LedgerLayout = LedgerLayout {
    ledger: Ledger::Ddp,
    header_rows: 2,
    id_column: 2,
    name_column: 1,
    amount_column: 3,
};

impl LedgerLayout {
    /// Minimum table width that covers every referenced column.
    pub fn required_width(&self) -> usize {
        self.id_column.max(self.name_column).max(self.amount_column) + 1
    }

    pub fn column_label(&self, col: usize) -> &'static str {
        if col == self.id_column {
            "provider id"
        } else if col == self.name_column {
            "provider name"
        } else if col == self.amount_column {
            "amount"
        } else {
            "unused"
        }
    }
}
