use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::models::{CashEntry, Match, Penalty, Player};

/// Complete, consistent view of the club data at one point in time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubSnapshot {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(default)]
    pub penalties: Vec<Penalty>,
    #[serde(default)]
    pub cash_entries: Vec<CashEntry>,
}

impl ClubSnapshot {
    /// Load a snapshot from a JSON document
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;
        let snapshot = Self::from_json(&json)
            .with_context(|| format!("Failed to parse snapshot file: {}", path.display()))?;

        info!(
            "Loaded snapshot from {}: {} players, {} matches, {} penalties, {} cash entries",
            path.display(),
            snapshot.players.len(),
            snapshot.matches.len(),
            snapshot.penalties.len(),
            snapshot.cash_entries.len()
        );
        Ok(snapshot)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to deserialize snapshot data")
    }

    pub fn find_player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT_JSON: &str = r#"{
        "players": [
            {"id": "p1", "name": "Carlos Silva", "membershipType": "monthly", "position": "goalkeeper", "active": true},
            {"id": "p2", "name": "Bruno Almeida", "membershipType": "guest", "active": true}
        ],
        "matches": [
            {"id": "m1", "date": "2024-01-20", "teamA": ["p1"], "teamB": ["p2"], "goalsTeamA": 5, "goalsTeamB": 2}
        ]
    }"#;

    #[test]
    fn test_missing_collections_default_to_empty() {
        let snapshot = ClubSnapshot::from_json(SNAPSHOT_JSON).unwrap();

        assert_eq!(snapshot.players.len(), 2);
        assert_eq!(snapshot.matches.len(), 1);
        assert!(snapshot.penalties.is_empty());
        assert!(snapshot.cash_entries.is_empty());
        assert_eq!(snapshot.find_player("p2").map(|p| p.name.as_str()), Some("Bruno Almeida"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("club.json");
        fs::write(&path, SNAPSHOT_JSON).unwrap();

        let snapshot = ClubSnapshot::load(&path).unwrap();

        assert_eq!(snapshot.matches[0].goals_team_a, 5);
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClubSnapshot::load(dir.path().join("missing.json")).unwrap_err();

        assert!(err.to_string().contains("Failed to read snapshot file"));
    }

    #[test]
    fn test_unknown_membership_is_rejected() {
        let json = r#"{"players": [{"id": "p1", "name": "X", "membershipType": "vip", "active": true}]}"#;

        assert!(ClubSnapshot::from_json(json).is_err());
    }
}
