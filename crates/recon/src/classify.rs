use crate::matcher::JoinedPair;
use crate::model::{MatchRecord, Observation};

/// A match is listed as a difference only when its net difference exceeds this.
pub const DIFFERENCE_TOLERANCE: f64 = 0.0001;

/// Magnitudes are compared against the tolerance at nano-unit precision, so
/// binary representation noise in the amounts (`100.0 - 100.0001` is
/// `-0.000100000000003`) does not push a difference across the threshold.
const COMPARISON_SCALE: f64 = 1e9;

/// Label a net difference. Strict sign test, no tolerance: any nonzero
/// difference reads as an excess even when it stays under
/// [`DIFFERENCE_TOLERANCE`].
pub fn observe(difference: f64) -> Observation {
    if difference > 0.0 {
        Observation::ExcessInDdp
    } else if difference < 0.0 {
        Observation::ExcessInBalance
    } else {
        Observation::Balanced
    }
}

/// Whether a match belongs in the difference list. The cutoff sits at
/// `0.0001 + 0.5e-9`: magnitudes up to that round down onto the tolerance and
/// are left out.
pub fn is_difference(record: &MatchRecord) -> bool {
    let magnitude = (record.difference.abs() * COMPARISON_SCALE).round() / COMPARISON_SCALE;
    magnitude > DIFFERENCE_TOLERANCE
}

/// Build the match record for a joined pair.
///
/// The ledgers use opposite signs for the same quantity, so the net
/// difference is their sum.
pub fn classify_pair(pair: &JoinedPair<'_>) -> MatchRecord {
    let difference = pair.ddp.amount + pair.balance.amount;
    let provider_name = if pair.balance.provider_name.is_empty() {
        pair.ddp.provider_name.clone()
    } else {
        pair.balance.provider_name.clone()
    };

    MatchRecord {
        provider_id: pair.balance.provider_id.clone(),
        provider_name,
        balance_amount: pair.balance.amount,
        ddp_amount: pair.ddp.amount,
        difference,
        observation: observe(difference),
    }
}
