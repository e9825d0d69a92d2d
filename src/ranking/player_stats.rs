use serde::Serialize;

use super::types::{weighted_win_rate, MatchOutcome};
use crate::domain::Match;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub match_id: String,
    pub date: String,
    pub result: MatchOutcome,
    pub goals_for: u32,
    pub goals_against: u32,
}

/// Per-player record across every match, regardless of ranking eligibility
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub player_id: String,
    pub matches: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub win_rate: f64,
    pub goals_for: u32,
    pub goals_against: u32,
    /// Most recent first
    pub history: Vec<MatchRecord>,
}

pub fn player_stats(player_id: &str, matches: &[Match]) -> PlayerStats {
    let mut history: Vec<MatchRecord> = matches
        .iter()
        .filter_map(|game| build_record(player_id, game))
        .collect();
    history.sort_by(|a, b| b.date.cmp(&a.date));

    let count = |outcome: MatchOutcome| history.iter().filter(|r| r.result == outcome).count() as u32;
    let wins = count(MatchOutcome::Win);
    let draws = count(MatchOutcome::Draw);
    let losses = count(MatchOutcome::Loss);
    let total = wins + draws + losses;

    PlayerStats {
        player_id: player_id.to_string(),
        matches: total,
        wins,
        draws,
        losses,
        win_rate: weighted_win_rate(wins, draws, total),
        goals_for: history.iter().map(|r| r.goals_for).sum(),
        goals_against: history.iter().map(|r| r.goals_against).sum(),
        history,
    }
}

fn build_record(player_id: &str, game: &Match) -> Option<MatchRecord> {
    let side = game.side_of(player_id)?;
    let (goals_for, goals_against) = game.score_for(side);

    Some(MatchRecord {
        match_id: game.id.clone(),
        date: game.date.clone(),
        result: MatchOutcome::from_score(goals_for, goals_against),
        goals_for,
        goals_against,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: &str, date: &str, team_a: &[&str], team_b: &[&str], goals: (u32, u32)) -> Match {
        Match {
            id: id.to_string(),
            date: date.to_string(),
            team_a: team_a.iter().map(|s| s.to_string()).collect(),
            team_b: team_b.iter().map(|s| s.to_string()).collect(),
            goals_team_a: goals.0,
            goals_team_b: goals.1,
        }
    }

    #[test]
    fn test_stats_follow_player_side() {
        let matches = vec![
            game("m1", "2024-01-06", &["p1"], &["p2"], (4, 6)),
            game("m2", "2024-01-20", &["p2"], &["p1"], (2, 5)),
            game("m3", "2024-01-13", &["p1"], &["p2"], (3, 3)),
            game("m4", "2024-01-27", &["p3"], &["p2"], (1, 0)),
        ];

        let stats = player_stats("p1", &matches);

        assert_eq!(stats.matches, 3);
        assert_eq!((stats.wins, stats.draws, stats.losses), (1, 1, 1));
        assert_eq!(stats.goals_for, 12);
        assert_eq!(stats.goals_against, 11);
        assert!((stats.win_rate - 4.0 / 9.0 * 100.0).abs() < 1e-9);

        let order: Vec<&str> = stats.history.iter().map(|r| r.match_id.as_str()).collect();
        assert_eq!(order, vec!["m2", "m3", "m1"]);
        assert_eq!(stats.history[0].result, MatchOutcome::Win);
    }

    #[test]
    fn test_absent_player_has_empty_record() {
        let matches = vec![game("m1", "2024-01-06", &["p1"], &["p2"], (1, 0))];

        let stats = player_stats("nobody", &matches);

        assert_eq!(stats.matches, 0);
        assert_eq!(stats.win_rate, 0.0);
        assert!(stats.history.is_empty());
    }
}
