use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::DbRun;
use crate::ranking::Standing;

const RUN_COLUMNS: &str = "id, calculated_at, player_count, created_at";

/// Stores one computed table as a new run; returns the run id.
pub fn record_run(
    conn: &mut DbConn,
    standings: &[Standing],
    calculated_at: NaiveDateTime,
) -> Result<i64> {
    let tx = conn.transaction().context("Failed to start history transaction")?;

    tx.execute(
        "INSERT INTO standings_runs (calculated_at, player_count) VALUES (?1, ?2)",
        params![calculated_at, standings.len() as i64],
    )
    .context("Failed to insert standings run")?;
    let run_id = tx.last_insert_rowid();

    {
        let mut stmt = tx.prepare(
            "INSERT INTO standings_entries (run_id, player_id, player_name, position, points, penalty_points, matches, wins, blowout_wins, draws, losses, win_rate) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        )?;
        for standing in standings {
            stmt.execute(params![
                run_id,
                standing.player_id,
                standing.player_name,
                standing.position as i64,
                standing.points,
                standing.penalty_points,
                standing.matches,
                standing.wins,
                standing.blowout_wins,
                standing.draws,
                standing.losses,
                standing.win_rate,
            ])
            .with_context(|| format!("Failed to insert standing for player {}", standing.player_id))?;
        }
    }

    tx.commit().context("Failed to commit standings run")?;
    Ok(run_id)
}

fn parse_run_row(row: &rusqlite::Row) -> rusqlite::Result<DbRun> {
    Ok(DbRun {
        id: row.get(0)?,
        calculated_at: row.get(1)?,
        player_count: row.get(2)?,
        created_at: row.get(3)?,
    })
}

/// Most recent runs first
pub fn list_runs(conn: &mut DbConn, limit: usize) -> Result<Vec<DbRun>> {
    let sql = format!("SELECT {RUN_COLUMNS} FROM standings_runs ORDER BY id DESC LIMIT ?1");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![limit as i64], parse_run_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn latest_run(conn: &mut DbConn) -> Result<Option<DbRun>> {
    let sql = format!("SELECT {RUN_COLUMNS} FROM standings_runs ORDER BY id DESC LIMIT 1");

    conn.query_row(&sql, [], parse_run_row)
        .optional()
        .context("Failed to query latest standings run")
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<DbRun>> {
    let sql = format!("SELECT {RUN_COLUMNS} FROM standings_runs WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_run_row)
        .optional()
        .context("Failed to query standings run by id")
}
