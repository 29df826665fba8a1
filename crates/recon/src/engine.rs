use crate::classify::{classify_pair, is_difference};
use crate::error::ReconError;
use crate::loader::{load_balance_records, load_ddp_records};
use crate::matcher::join_by_id;
use crate::model::{ComparisonResult, LoadedCounts, MatchRecord, ProviderRecord, Table, Totals};

/// Load both ledgers from their tables and reconcile them.
pub fn compare_tables(balance: &Table, ddp: &Table) -> Result<ComparisonResult, ReconError> {
    let balance_records = load_balance_records(balance)?;
    let ddp_records = load_ddp_records(ddp)?;
    Ok(reconcile(&balance_records, &ddp_records))
}

/// Reconcile two loaded ledgers.
///
/// Only providers present in both ledgers are reported; one-sided providers
/// still count towards the totals.
pub fn reconcile(balance: &[ProviderRecord], ddp: &[ProviderRecord]) -> ComparisonResult {
    let joined = join_by_id(balance, ddp);

    let matches: Vec<MatchRecord> = joined.matched.iter().map(classify_pair).collect();
    let differences: Vec<MatchRecord> = matches.iter().filter(|m| is_difference(m)).cloned().collect();

    log::debug!(
        "reconciled {} provider(s): {} with differences, {} balance-only and {} ddp-only not reported",
        matches.len(),
        differences.len(),
        joined.balance_only.len(),
        joined.ddp_only.len()
    );

    ComparisonResult {
        matches,
        differences,
        only_in_balance: Vec::new(),
        only_in_ddp: Vec::new(),
        totals: Totals {
            balance: balance.iter().map(|r| r.amount).sum(),
            ddp: ddp.iter().map(|r| r.amount).sum(),
        },
        loaded: LoadedCounts {
            balance: balance.len(),
            ddp: ddp.len(),
        },
    }
}
