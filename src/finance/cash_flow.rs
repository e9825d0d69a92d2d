use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{CashEntry, CashEntryType, MovementType};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowSummary {
    pub total_entries: f64,
    pub total_exits: f64,
    pub balance: f64,
    /// Signed total per movement type: entries add, exits subtract
    pub by_movement_type: BTreeMap<MovementType, f64>,
}

pub fn summarize(entries: &[CashEntry]) -> CashFlowSummary {
    let mut summary = CashFlowSummary::default();

    for entry in entries {
        let signed = match entry.kind {
            CashEntryType::Entry => {
                summary.total_entries += entry.amount;
                entry.amount
            }
            CashEntryType::Exit => {
                summary.total_exits += entry.amount;
                -entry.amount
            }
        };
        *summary.by_movement_type.entry(entry.movement_type).or_insert(0.0) += signed;
    }

    summary.balance = summary.total_entries - summary.total_exits;
    summary
}

/// Ledger order: most recent date first, ties keep input order
pub fn entries_by_date_desc(entries: &[CashEntry]) -> Vec<&CashEntry> {
    let mut sorted: Vec<&CashEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}
