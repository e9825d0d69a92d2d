use std::collections::HashMap;
use std::fmt::Write as _;

use colored::Colorize;

use crate::database::DbRun;
use crate::domain::{CashEntry, CashEntryType, Player};
use crate::ranking::{Movement, PlayerStats, PositionChange, Standing};
use crate::services::dashboard::DashboardSummary;
use crate::validation::ValidationReport;

const NAME_WIDTH: usize = 24;

pub fn render_standings(standings: &[Standing], movements: Option<&[PositionChange]>) -> String {
    if standings.is_empty() {
        return "No eligible players to rank.\n".to_string();
    }

    let movement_by_player: HashMap<&str, Movement> = movements
        .unwrap_or_default()
        .iter()
        .map(|change| (change.player_id.as_str(), change.movement))
        .collect();

    let mut out = String::new();
    let header = format!(
        "{:>3}  {:<NAME_WIDTH$} {:>4} {:>4} {:>3} {:>3} {:>3} {:>3} {:>3} {:>7}",
        "#", "Player", "Pts", "Pen", "P", "W", "BW", "D", "L", "Rate"
    );
    let _ = writeln!(out, "{}", header.bold());

    for standing in standings {
        let row = format!(
            "{:>3}  {:<NAME_WIDTH$} {:>4} {:>4} {:>3} {:>3} {:>3} {:>3} {:>3} {:>6.1}%",
            standing.position,
            truncate(&standing.player_name, NAME_WIDTH),
            standing.points,
            standing.penalty_points,
            standing.matches,
            standing.wins,
            standing.blowout_wins,
            standing.draws,
            standing.losses,
            standing.win_rate,
        );
        let row = if standing.position == 1 {
            row.yellow().bold().to_string()
        } else if standing.penalty_points < 0 {
            row.red().to_string()
        } else {
            row
        };

        match movement_by_player.get(standing.player_id.as_str()) {
            Some(movement) => {
                let _ = writeln!(out, "{}  {}", row, render_movement(*movement));
            }
            None => {
                let _ = writeln!(out, "{}", row);
            }
        }
    }

    out
}

fn render_movement(movement: Movement) -> String {
    match movement {
        Movement::Up(places) => format!("▲{}", places).green().to_string(),
        Movement::Down(places) => format!("▼{}", places).red().to_string(),
        Movement::Same => "=".dimmed().to_string(),
        Movement::New => "new".cyan().to_string(),
    }
}

pub fn render_player_stats(player: &Player, stats: &PlayerStats) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}, {}{})",
        player.name.bold(),
        player.membership_type.label(),
        player.position.label(),
        if player.active { "" } else { ", inactive" }
    );
    let _ = writeln!(
        out,
        "Matches: {}  W/D/L: {}/{}/{}  Goals: {}-{}  Rate: {:.1}%",
        stats.matches,
        stats.wins,
        stats.draws,
        stats.losses,
        stats.goals_for,
        stats.goals_against,
        stats.win_rate
    );

    for record in &stats.history {
        let _ = writeln!(
            out,
            "  {}  {}  {}-{}  ({})",
            record.date,
            record.result.as_letter(),
            record.goals_for,
            record.goals_against,
            record.match_id
        );
    }

    out
}

pub fn render_summary(summary: &DashboardSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Active players: {}", summary.active_players);
    let _ = writeln!(out, "Matches:        {}", summary.total_matches);

    let balance = format!("R$ {:.2}", summary.cash_flow.balance);
    let balance = if summary.cash_flow.balance >= 0.0 {
        balance.green()
    } else {
        balance.red()
    };
    let _ = writeln!(out, "Balance:        {}", balance);
    let _ = writeln!(
        out,
        "  entries R$ {:.2} / exits R$ {:.2}",
        summary.cash_flow.total_entries, summary.cash_flow.total_exits
    );
    for (movement_type, total) in &summary.cash_flow.by_movement_type {
        let _ = writeln!(out, "  {:<16} R$ {:>10.2}", movement_type.label(), total);
    }

    match &summary.leader {
        Some(leader) => {
            let _ = writeln!(out, "Leader:         {} ({} pts)", leader.player_name.bold(), leader.points);
        }
        None => {
            let _ = writeln!(out, "Leader:         -");
        }
    }

    out
}

pub fn render_ledger(entries: &[&CashEntry], limit: usize) -> String {
    let mut out = String::new();
    for entry in entries.iter().take(limit) {
        let amount = match entry.kind {
            CashEntryType::Entry => format!("+{:.2}", entry.amount).green(),
            CashEntryType::Exit => format!("-{:.2}", entry.amount).red(),
        };
        let _ = writeln!(
            out,
            "  {}  {:>10}  {:<14} {}",
            entry.date,
            amount,
            entry.movement_type.label(),
            entry.player_or_recipient
        );
    }
    out
}

pub fn render_validation(report: &ValidationReport) -> String {
    if report.is_valid() {
        return format!("{}\n", "Snapshot is valid.".green());
    }

    let mut out = format!("{} issue(s) found:\n", report.issues.len());
    for issue in &report.issues {
        let _ = writeln!(out, "  - {}", issue);
    }
    out
}

pub fn render_runs(runs: &[DbRun]) -> String {
    if runs.is_empty() {
        return "No recorded runs.\n".to_string();
    }

    let mut out = String::new();
    for run in runs {
        let _ = writeln!(
            out,
            "#{:<5} {}  {} players",
            run.id,
            run.calculated_at.format("%Y-%m-%d %H:%M"),
            run.player_count
        );
    }
    out
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        return name.to_string();
    }
    let mut cut: String = name.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(id: &str, name: &str, position: usize, penalty_points: i32) -> Standing {
        Standing {
            player_id: id.to_string(),
            player_name: name.to_string(),
            points: 4,
            penalty_points,
            matches: 1,
            wins: 1,
            blowout_wins: 1,
            draws: 0,
            losses: 0,
            win_rate: 100.0,
            position,
        }
    }

    #[test]
    fn test_standings_table_lists_every_player() {
        let table = vec![standing("a", "Carlos Silva", 1, 0), standing("b", "João Santos", 2, -2)];
        let movements = vec![PositionChange {
            player_id: "b".to_string(),
            position: 2,
            movement: Movement::Down(1),
        }];

        let rendered = render_standings(&table, Some(&movements));

        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.contains("Carlos Silva"));
        assert!(rendered.contains("João Santos"));
        assert!(rendered.contains("100.0%"));
        assert!(rendered.contains('▼'));
    }

    #[test]
    fn test_empty_standings() {
        assert_eq!(render_standings(&[], None), "No eligible players to rank.\n");
    }

    #[test]
    fn test_ledger_respects_limit() {
        let entry = CashEntry {
            id: "c1".to_string(),
            date: "2024-01-20".to_string(),
            kind: CashEntryType::Exit,
            amount: 200.0,
            movement_type: crate::domain::MovementType::FieldRental,
            player_or_recipient: "Campo Society Central".to_string(),
            comment: None,
        };
        let entries = vec![&entry, &entry, &entry];

        let rendered = render_ledger(&entries, 2);

        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.contains("200.00"));
        assert!(rendered.contains("Aluguel Campo"));
    }

    #[test]
    fn test_truncate_long_names() {
        assert_eq!(truncate("Ana", 5), "Ana");
        assert_eq!(truncate("Alexandre", 5), "Alex…");
    }
}
