use anyhow::Result;
use rusqlite::params;

use super::connection::DbConn;
use super::models::DbStandingEntry;
use crate::ranking::Standing;

fn parse_entry_row(row: &rusqlite::Row) -> rusqlite::Result<DbStandingEntry> {
    Ok(DbStandingEntry {
        id: row.get(0)?,
        run_id: row.get(1)?,
        player_id: row.get(2)?,
        player_name: row.get(3)?,
        position: row.get(4)?,
        points: row.get(5)?,
        penalty_points: row.get(6)?,
        matches: row.get(7)?,
        wins: row.get(8)?,
        blowout_wins: row.get(9)?,
        draws: row.get(10)?,
        losses: row.get(11)?,
        win_rate: row.get(12)?,
    })
}

pub fn list_by_run(conn: &mut DbConn, run_id: i64) -> Result<Vec<DbStandingEntry>> {
    let sql = "SELECT id, run_id, player_id, player_name, position, points, penalty_points, matches, wins, blowout_wins, draws, losses, win_rate FROM standings_entries WHERE run_id = ?1 ORDER BY position ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![run_id], parse_entry_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Rebuilds the table exactly as it was recorded
pub fn load_run_standings(conn: &mut DbConn, run_id: i64) -> Result<Vec<Standing>> {
    let rows = list_by_run(conn, run_id)?;
    Ok(rows.into_iter().map(Standing::from).collect())
}

impl From<DbStandingEntry> for Standing {
    fn from(row: DbStandingEntry) -> Self {
        Standing {
            player_id: row.player_id,
            player_name: row.player_name,
            points: to_u32(row.points),
            penalty_points: i32::try_from(row.penalty_points).unwrap_or(i32::MIN),
            matches: to_u32(row.matches),
            wins: to_u32(row.wins),
            blowout_wins: to_u32(row.blowout_wins),
            draws: to_u32(row.draws),
            losses: to_u32(row.losses),
            win_rate: row.win_rate,
            position: usize::try_from(row.position).unwrap_or(0),
        }
    }
}

fn to_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
