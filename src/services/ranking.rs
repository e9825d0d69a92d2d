use std::path::Path;

use anyhow::Result;
use log::info;

use crate::config::settings::AppConfig;
use crate::domain::ClubSnapshot;
use crate::ranking::{self, PlayerStats, Standing};
use crate::validation::{ValidationReport, Validator};

pub struct RankingService {
    config: AppConfig,
}

impl RankingService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Falls back to the configured snapshot path when none is given
    pub fn load_snapshot(&self, path: Option<&Path>) -> Result<ClubSnapshot> {
        let path = path.unwrap_or(self.config.storage.snapshot_path.as_path());
        ClubSnapshot::load(path)
    }

    pub fn validate(&self, snapshot: &ClubSnapshot) -> Result<ValidationReport> {
        let validator = Validator::new()?;
        Ok(validator.validate_snapshot(snapshot))
    }

    /// Loads a snapshot and refuses it if any record is malformed
    pub fn load_validated(&self, path: Option<&Path>) -> Result<ClubSnapshot> {
        let snapshot = self.load_snapshot(path)?;
        self.validate(&snapshot)?.into_result()?;
        Ok(snapshot)
    }

    pub fn standings(&self, snapshot: &ClubSnapshot) -> Vec<Standing> {
        let standings = ranking::calculate_standings(
            &snapshot.players,
            &snapshot.matches,
            &snapshot.penalties,
            &self.config.ranking,
        );
        info!("  → Ranked {} eligible players", standings.len());
        standings
    }

    pub fn player_stats(&self, snapshot: &ClubSnapshot, player_id: &str) -> Result<PlayerStats> {
        if snapshot.find_player(player_id).is_none() {
            anyhow::bail!("Player {} not found in snapshot", player_id);
        }
        Ok(ranking::player_stats(player_id, &snapshot.matches))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CARLOS: &str = "6f1c2a7e-3b4d-4c5e-8f90-1a2b3c4d5e6f";
    const JOAO: &str = "0a9b8c7d-6e5f-4a3b-9c2d-1e0f9a8b7c6d";

    fn snapshot_json(penalty_value: i32) -> String {
        format!(
            r#"{{
                "players": [
                    {{"id": "{CARLOS}", "name": "Carlos Silva", "membershipType": "monthly", "active": true}},
                    {{"id": "{JOAO}", "name": "João Santos", "membershipType": "monthly", "active": true}}
                ],
                "matches": [
                    {{"id": "m1", "date": "2024-01-20", "teamA": ["{CARLOS}"], "teamB": ["{JOAO}"], "goalsTeamA": 5, "goalsTeamB": 0}}
                ],
                "penalties": [
                    {{"id": "pen1", "date": "2024-01-20", "playerId": "{JOAO}", "value": {penalty_value}, "reason": "Atraso na chegada"}}
                ]
            }}"#
        )
    }

    fn write_snapshot(dir: &tempfile::TempDir, json: &str) -> std::path::PathBuf {
        let path = dir.path().join("club.json");
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_standings_from_validated_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_snapshot(&dir, &snapshot_json(-1));
        let service = RankingService::new(AppConfig::default());

        let snapshot = service.load_validated(Some(&path)).unwrap();
        let standings = service.standings(&snapshot);

        assert_eq!(standings[0].player_name, "Carlos Silva");
        assert_eq!(standings[0].points, 4);
        assert_eq!(standings[1].points, 0);
        assert_eq!(standings[1].penalty_points, -1);
    }

    #[test]
    fn test_malformed_snapshot_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_snapshot(&dir, &snapshot_json(-7));
        let service = RankingService::new(AppConfig::default());

        let err = service.load_validated(Some(&path)).unwrap_err();

        assert!(err.to_string().contains("validation issue"));
    }

    #[test]
    fn test_player_stats_requires_known_player() {
        let snapshot = ClubSnapshot::from_json(&snapshot_json(-1)).unwrap();
        let service = RankingService::new(AppConfig::default());

        let stats = service.player_stats(&snapshot, JOAO).unwrap();
        assert_eq!(stats.losses, 1);
        assert!(service.player_stats(&snapshot, "ghost").is_err());
    }
}
