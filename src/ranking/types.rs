use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;

/// One player's row in the standings table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub player_id: PlayerId,
    pub player_name: String,
    pub points: u32,
    pub penalty_points: i32,
    pub matches: u32,
    pub wins: u32,
    pub blowout_wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub win_rate: f64,
    pub position: usize,
}

/// Running counters for one eligible player; discarded after each computation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    pub points: i64,
    pub penalty_points: i32,
    pub matches: u32,
    pub wins: u32,
    pub blowout_wins: u32,
    pub draws: u32,
    pub losses: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub fn from_score(goals_for: u32, goals_against: u32) -> Self {
        if goals_for > goals_against {
            MatchOutcome::Win
        } else if goals_for == goals_against {
            MatchOutcome::Draw
        } else {
            MatchOutcome::Loss
        }
    }

    pub fn as_letter(&self) -> char {
        match self {
            MatchOutcome::Win => 'W',
            MatchOutcome::Draw => 'D',
            MatchOutcome::Loss => 'L',
        }
    }
}

/// Weighted performance: a win counts fully, a draw a third.
pub fn weighted_win_rate(wins: u32, draws: u32, matches: u32) -> f64 {
    if matches == 0 {
        return 0.0;
    }
    let earned = f64::from(wins) * 3.0 + f64::from(draws);
    let available = f64::from(matches) * 3.0;
    earned / available * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_win_rate() {
        assert_eq!(weighted_win_rate(0, 0, 0), 0.0);
        assert_eq!(weighted_win_rate(1, 0, 1), 100.0);
        assert_eq!(weighted_win_rate(1, 1, 2), 4.0 / 6.0 * 100.0);
        assert!((weighted_win_rate(0, 1, 1) - 33.333).abs() < 0.001);
    }

    #[test]
    fn test_outcome_from_score() {
        assert_eq!(MatchOutcome::from_score(3, 1), MatchOutcome::Win);
        assert_eq!(MatchOutcome::from_score(2, 2), MatchOutcome::Draw);
        assert_eq!(MatchOutcome::from_score(0, 4), MatchOutcome::Loss);
        assert_eq!(MatchOutcome::Loss.as_letter(), 'L');
    }
}
