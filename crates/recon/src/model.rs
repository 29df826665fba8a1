use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A type-preserving cell value as read from a spreadsheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Int(i64),
    Bool(bool),
    /// Spreadsheet error value (`#N/A`, `#DIV/0!`, ...).
    Error(String),
}

impl Cell {
    /// Render the cell as text, or `None` for empty and error cells.
    ///
    /// Integral floats drop their fractional part so that a numeric id cell
    /// such as `400001234.0` reads the same as its text form.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty | Cell::Error(_) => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Int(n) => Some(n.to_string()),
            Cell::Number(n) => {
                if n.is_nan() {
                    None
                } else if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    Some(format!("{}", *n as i64))
                } else {
                    Some(n.to_string())
                }
            }
            Cell::Bool(b) => Some(b.to_string()),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

/// Rows × columns of cells, addressed from the sheet's top-left corner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Cell at absolute `(row, col)`. Out-of-range positions read as empty.
    pub fn get(&self, row: usize, col: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Which source ledger a table or record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ledger {
    Balance,
    Ddp,
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Balance => write!(f, "Balance"),
            Self::Ddp => write!(f, "DDP"),
        }
    }
}

// ---------------------------------------------------------------------------
// Loaded ledgers
// ---------------------------------------------------------------------------

/// One cleaned provider row. `provider_id` is unique within a loaded ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderRecord {
    pub provider_id: String,
    pub provider_name: String,
    pub amount: f64,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Observation {
    ExcessInDdp,
    ExcessInBalance,
    Balanced,
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExcessInDdp => write!(f, "excess in DDP"),
            Self::ExcessInBalance => write!(f, "excess in BALANCE"),
            Self::Balanced => write!(f, "balanced"),
        }
    }
}

/// A provider present in both ledgers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub provider_id: String,
    pub provider_name: String,
    pub balance_amount: f64,
    pub ddp_amount: f64,
    pub difference: f64,
    pub observation: Observation,
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub balance: f64,
    pub ddp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub matches: Vec<MatchRecord>,
    pub differences: Vec<MatchRecord>,
    pub only_in_balance: Vec<ProviderRecord>,
    pub only_in_ddp: Vec<ProviderRecord>,
    pub totals: Totals,
    /// Record counts of the loaded ledgers, before the join.
    #[serde(skip)]
    pub loaded: LoadedCounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LoadedCounts {
    pub balance: usize,
    pub ddp: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSummary {
    pub matched: usize,
    pub with_differences: usize,
    pub balanced: usize,
    pub excess_in_ddp: usize,
    pub excess_in_balance: usize,
    pub net_difference: f64,
    pub balance_records: usize,
    pub ddp_records: usize,
    pub unmatched_balance: usize,
    pub unmatched_ddp: usize,
}
