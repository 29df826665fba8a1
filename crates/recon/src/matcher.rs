use std::collections::BTreeMap;

use crate::model::ProviderRecord;

/// A provider id present in both ledgers.
#[derive(Debug, Clone, Copy)]
pub struct JoinedPair<'a> {
    pub balance: &'a ProviderRecord,
    pub ddp: &'a ProviderRecord,
}

#[derive(Debug)]
pub struct JoinOutput<'a> {
    /// Ascending by provider id.
    pub matched: Vec<JoinedPair<'a>>,
    pub balance_only: Vec<&'a ProviderRecord>,
    pub ddp_only: Vec<&'a ProviderRecord>,
}

/// Join both ledgers on exact provider id.
pub fn join_by_id<'a>(balance: &'a [ProviderRecord], ddp: &'a [ProviderRecord]) -> JoinOutput<'a> {
    let balance_map: BTreeMap<&str, &ProviderRecord> =
        balance.iter().map(|r| (r.provider_id.as_str(), r)).collect();
    let ddp_map: BTreeMap<&str, &ProviderRecord> =
        ddp.iter().map(|r| (r.provider_id.as_str(), r)).collect();

    let mut matched = Vec::new();
    let mut balance_only = Vec::new();

    for (id, balance_rec) in &balance_map {
        match ddp_map.get(id) {
            Some(ddp_rec) => matched.push(JoinedPair {
                balance: balance_rec,
                ddp: ddp_rec,
            }),
            None => balance_only.push(*balance_rec),
        }
    }

    let ddp_only = ddp_map
        .iter()
        .filter(|(id, _)| !balance_map.contains_key(*id))
        .map(|(_, r)| *r)
        .collect();

    JoinOutput {
        matched,
        balance_only,
        ddp_only,
    }
}
