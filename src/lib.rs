pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod finance;
pub mod output;
pub mod ranking;
pub mod services;
pub mod validation;

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::dashboard::DashboardSummary;
use crate::services::history::HistoryService;
use crate::services::ranking::RankingService;

const RECENT_LEDGER_ENTRIES: usize = 10;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_ranking(snapshot: Option<&Path>, record: bool, json: bool) -> Result<()> {
    let service = RankingService::new(AppConfig::new());
    let club = service.load_validated(snapshot)?;
    let standings = service.standings(&club);

    let recorded = if record {
        let history = HistoryService::open(&service.config().storage)?;
        Some(history.record(&standings)?)
    } else {
        None
    };

    if json {
        println!("{}", output::to_json(&standings)?);
        return Ok(());
    }

    let movements = recorded
        .as_ref()
        .filter(|run| run.previous_run_id.is_some())
        .map(|run| run.movements.as_slice());
    print!("{}", output::render_standings(&standings, movements));
    if let Some(run) = recorded {
        println!("Recorded as run #{}", run.run_id);
    }
    Ok(())
}

pub fn handle_player(snapshot: Option<&Path>, player_id: &str, json: bool) -> Result<()> {
    let service = RankingService::new(AppConfig::new());
    let club = service.load_validated(snapshot)?;
    let stats = service.player_stats(&club, player_id)?;

    if json {
        println!("{}", output::to_json(&stats)?);
    } else if let Some(player) = club.find_player(player_id) {
        print!("{}", output::render_player_stats(player, &stats));
    }
    Ok(())
}

pub fn handle_summary(snapshot: Option<&Path>, json: bool) -> Result<()> {
    let service = RankingService::new(AppConfig::new());
    let club = service.load_validated(snapshot)?;
    let standings = service.standings(&club);
    let summary = DashboardSummary::build(&club, &standings);

    if json {
        println!("{}", output::to_json(&summary)?);
    } else {
        print!("{}", output::render_summary(&summary));
        let ledger = finance::entries_by_date_desc(&club.cash_entries);
        if !ledger.is_empty() {
            println!("Recent cash entries:");
            print!("{}", output::render_ledger(&ledger, RECENT_LEDGER_ENTRIES));
        }
    }
    Ok(())
}

pub fn handle_validate(snapshot: Option<&Path>) -> Result<()> {
    let service = RankingService::new(AppConfig::new());
    let club = service.load_snapshot(snapshot)?;
    let report = service.validate(&club)?;

    print!("{}", output::render_validation(&report));
    report.into_result()
}

pub fn handle_history(limit: usize, run: Option<i64>) -> Result<()> {
    let config = AppConfig::new();
    let history = HistoryService::open(&config.storage)?;

    match run {
        Some(run_id) => {
            let (run, standings) = history.run_standings(run_id)?;
            println!(
                "Run #{} calculated at {}",
                run.id,
                run.calculated_at.format("%Y-%m-%d %H:%M")
            );
            print!("{}", output::render_standings(&standings, None));
        }
        None => print!("{}", output::render_runs(&history.recent_runs(limit)?)),
    }
    Ok(())
}

pub fn handle_completions(shell: clap_complete::Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
}
