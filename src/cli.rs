use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "club-ranking: standings, stats and cash flow for an amateur football club")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Compute and print the current standings
    Ranking {
        /// Snapshot file (defaults to $SNAPSHOT_PATH or club.json)
        #[arg(short, long)]
        snapshot: Option<PathBuf>,
        /// Store the result in the history database and show movement
        #[arg(short, long)]
        record: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show match statistics for one player
    Player {
        /// Player id
        #[arg(short, long)]
        id: String,
        #[arg(short, long)]
        snapshot: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Dashboard overview: players, matches, cash balance and leader
    Summary {
        #[arg(short, long)]
        snapshot: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// List every malformed record in a snapshot
    Validate {
        #[arg(short, long)]
        snapshot: Option<PathBuf>,
    },
    /// List recorded standings runs, or show one of them
    History {
        /// Number of runs to list
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
        /// Show the table recorded by this run
        #[arg(long)]
        run: Option<i64>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
