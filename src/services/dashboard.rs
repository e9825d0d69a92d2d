use serde::Serialize;

use crate::domain::ClubSnapshot;
use crate::finance::{self, CashFlowSummary};
use crate::ranking::Standing;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Active regardless of membership type
    pub active_players: usize,
    pub total_matches: usize,
    pub cash_flow: CashFlowSummary,
    pub leader: Option<Standing>,
}

impl DashboardSummary {
    pub fn build(snapshot: &ClubSnapshot, standings: &[Standing]) -> Self {
        Self {
            active_players: snapshot.players.iter().filter(|p| p.active).count(),
            total_matches: snapshot.matches.len(),
            cash_flow: finance::summarize(&snapshot.cash_entries),
            leader: standings.first().cloned(),
        }
    }
}
