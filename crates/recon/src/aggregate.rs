//! Per-ledger reduction of cleaned rows into one record per provider id.
//!
//! The two ledgers reduce differently: a repeated id in the Balance export is
//! a duplicate listing, a repeated id in the DDP export is another payment.

use std::collections::{BTreeMap, HashSet};

use crate::model::ProviderRecord;

/// Balance reduction: the first row for an id wins, later rows are dropped.
/// Output keeps first-seen order.
pub fn keep_first(rows: Vec<ProviderRecord>) -> Vec<ProviderRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut records = Vec::with_capacity(rows.len());
    let mut discarded = 0usize;

    for row in rows {
        if seen.insert(row.provider_id.clone()) {
            records.push(row);
        } else {
            discarded += 1;
        }
    }

    if discarded > 0 {
        log::debug!("balance: discarded {discarded} duplicate row(s)");
    }
    records
}

/// DDP reduction: amounts of rows sharing an id are summed, the name is the
/// first non-empty one. Output is ordered by id.
pub fn sum_merge(rows: Vec<ProviderRecord>) -> Vec<ProviderRecord> {
    let input_rows = rows.len();
    let mut groups: BTreeMap<String, (String, f64)> = BTreeMap::new();

    for row in rows {
        let entry = groups
            .entry(row.provider_id)
            .or_insert_with(|| (String::new(), 0.0));
        if entry.0.is_empty() {
            entry.0 = row.provider_name;
        }
        entry.1 += row.amount;
    }

    let merged = input_rows - groups.len();
    if merged > 0 {
        log::debug!("ddp: merged {merged} row(s) into existing providers");
    }

    groups
        .into_iter()
        .map(|(provider_id, (provider_name, amount))| ProviderRecord {
            provider_id,
            provider_name,
            amount,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: &str, name: &str, amount: f64) -> ProviderRecord {
        ProviderRecord {
            provider_id: id.into(),
            provider_name: name.into(),
            amount,
        }
    }

    #[test]
    fn keep_first_discards_later_duplicates() {
        let rows = vec![
            rec("400001234", "First", -100.0),
            rec("400002000", "Other", -5.0),
            rec("400001234", "Second", -999.0),
        ];
        let records = keep_first(rows);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], rec("400001234", "First", -100.0));
        assert_eq!(records[1].provider_id, "400002000");
    }

    #[test]
    fn keep_first_preserves_row_order() {
        let rows = vec![rec("400009000", "", 1.0), rec("400001000", "", 2.0)];
        let ids: Vec<_> = keep_first(rows).into_iter().map(|r| r.provider_id).collect();
        assert_eq!(ids, ["400009000", "400001000"]);
    }

    #[test]
    fn sum_merge_adds_amounts() {
        let rows = vec![
            rec("400001234", "Acme", 100.0),
            rec("400001234", "Acme", 50.0),
        ];
        let records = sum_merge(rows);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount, 150.0);
    }

    #[test]
    fn sum_merge_takes_first_non_empty_name() {
        let rows = vec![
            rec("400001234", "", 10.0),
            rec("400001234", "Acme", 20.0),
            rec("400001234", "Acme Renamed", 30.0),
        ];
        let records = sum_merge(rows);
        assert_eq!(records[0].provider_name, "Acme");
        assert_eq!(records[0].amount, 60.0);
    }

    #[test]
    fn sum_merge_orders_by_id() {
        let rows = vec![rec("400009000", "b", 1.0), rec("400001000", "a", 2.0)];
        let ids: Vec<_> = sum_merge(rows).into_iter().map(|r| r.provider_id).collect();
        assert_eq!(ids, ["400001000", "400009000"]);
    }
}
