use anyhow::Result;

use club_ranking::cli::Command;
use club_ranking::{
    handle_completions, handle_history, handle_player, handle_ranking, handle_summary,
    handle_validate, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Ranking { snapshot, record, json } => handle_ranking(snapshot.as_deref(), *record, *json),
        Command::Player { id, snapshot, json } => handle_player(snapshot.as_deref(), id, *json),
        Command::Summary { snapshot, json } => handle_summary(snapshot.as_deref(), *json),
        Command::Validate { snapshot } => handle_validate(snapshot.as_deref()),
        Command::History { limit, run } => handle_history(*limit, *run),
        Command::Completions { shell } => {
            handle_completions(*shell);
            Ok(())
        }
    }
}
