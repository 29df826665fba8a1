use crate::model::{ComparisonResult, ComparisonSummary, Observation};

/// Compute summary statistics from a comparison.
pub fn compute_summary(result: &ComparisonResult) -> ComparisonSummary {
    let mut balanced = 0;
    let mut excess_in_ddp = 0;
    let mut excess_in_balance = 0;
    let mut net_difference = 0.0;

    for m in &result.matches {
        match m.observation {
            Observation::Balanced => balanced += 1,
            Observation::ExcessInDdp => excess_in_ddp += 1,
            Observation::ExcessInBalance => excess_in_balance += 1,
        }
        net_difference += m.difference;
    }

    let matched = result.matches.len();
    ComparisonSummary {
        matched,
        with_differences: result.differences.len(),
        balanced,
        excess_in_ddp,
        excess_in_balance,
        net_difference,
        balance_records: result.loaded.balance,
        ddp_records: result.loaded.ddp,
        unmatched_balance: result.loaded.balance.saturating_sub(matched),
        unmatched_ddp: result.loaded.ddp.saturating_sub(matched),
    }
}

impl ComparisonResult {
    pub fn summary(&self) -> ComparisonSummary {
        compute_summary(self)
    }

    pub fn has_differences(&self) -> bool {
        !self.differences.is_empty()
    }
}
