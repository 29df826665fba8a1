//! `ledgercheck-recon` — Balance ↔ DDP provider reconciliation engine.
//!
//! Pure engine crate: receives tables of cells, returns classified results.
//! No CLI or IO dependencies.

pub mod aggregate;
pub mod classify;
pub mod clean;
pub mod engine;
pub mod error;
pub mod layout;
pub mod loader;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod summary;

pub use engine::{compare_tables, reconcile};
pub use error::ReconError;
pub use loader::{load_balance_records, load_ddp_records};
pub use model::{
    Cell, ComparisonResult, ComparisonSummary, Ledger, MatchRecord, Observation, ProviderRecord,
    Table, Totals,
};
