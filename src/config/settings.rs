use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RankingSettings {
    pub participation_points: i64,
    pub win_bonus: i64,
    pub blowout_win_bonus: i64,
    pub draw_bonus: i64,
    pub blowout_goal_diff: u32,
    pub unknown_player_name: &'static str,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            participation_points: 1,
            win_bonus: 2,
            blowout_win_bonus: 3,
            draw_bonus: 1,
            blowout_goal_diff: 5,
            unknown_player_name: "Desconhecido",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub database_path: PathBuf,
    pub snapshot_path: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("club_ranking.db"),
            snapshot_path: PathBuf::from("club.json"),
        }
    }
}

impl StorageSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_path: env_path("DATABASE_PATH").unwrap_or(defaults.database_path),
            snapshot_path: env_path("SNAPSHOT_PATH").unwrap_or(defaults.snapshot_path),
        }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub ranking: RankingSettings,
    pub storage: StorageSettings,
}

impl AppConfig {
    /// Reads storage locations from the environment; scoring rules are fixed.
    pub fn new() -> Self {
        Self {
            ranking: RankingSettings::default(),
            storage: StorageSettings::from_env(),
        }
    }
}
