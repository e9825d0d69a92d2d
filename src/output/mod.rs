pub mod tables;

use anyhow::{Context, Result};
use serde::Serialize;

pub use tables::{
    render_ledger, render_player_stats, render_runs, render_standings, render_summary,
    render_validation,
};

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}
