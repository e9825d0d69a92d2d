use anyhow::Result;
use chrono::Utc;
use log::info;

use crate::config::settings::StorageSettings;
use crate::database::{self, entries, runs, setup, DbPool, DbRun};
use crate::ranking::{compare_with_previous, PositionChange, Standing};

#[derive(Debug, Clone)]
pub struct RecordedRun {
    pub run_id: i64,
    pub previous_run_id: Option<i64>,
    pub movements: Vec<PositionChange>,
}

/// Downstream recorder of computed tables; nothing here feeds back into ranking
pub struct HistoryService {
    pool: DbPool,
}

impl HistoryService {
    pub fn open(storage: &StorageSettings) -> Result<Self> {
        let pool = database::create_pool(&storage.database_path)?;
        let mut conn = database::get_connection(&pool)?;
        setup::ensure_schema(&mut conn)?;

        info!("History database: {}", storage.database_path.display());
        Ok(Self { pool })
    }

    pub fn record(&self, standings: &[Standing]) -> Result<RecordedRun> {
        let mut conn = database::get_connection(&self.pool)?;

        let previous_run = runs::latest_run(&mut conn)?;
        let previous = match &previous_run {
            Some(run) => entries::load_run_standings(&mut conn, run.id)?,
            None => Vec::new(),
        };

        let run_id = runs::record_run(&mut conn, standings, Utc::now().naive_utc())?;
        info!("  → Recorded standings run #{} ({} players)", run_id, standings.len());

        Ok(RecordedRun {
            run_id,
            previous_run_id: previous_run.map(|run| run.id),
            movements: compare_with_previous(standings, &previous),
        })
    }

    pub fn recent_runs(&self, limit: usize) -> Result<Vec<DbRun>> {
        let mut conn = database::get_connection(&self.pool)?;
        runs::list_runs(&mut conn, limit)
    }

    pub fn run_standings(&self, run_id: i64) -> Result<(DbRun, Vec<Standing>)> {
        let mut conn = database::get_connection(&self.pool)?;
        let run = runs::find_by_id(&mut conn, run_id)?
            .ok_or_else(|| anyhow::anyhow!("Standings run #{} not found", run_id))?;
        let standings = entries::load_run_standings(&mut conn, run_id)?;
        Ok((run, standings))
    }
}
