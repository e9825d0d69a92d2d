use std::cmp::Ordering;
use std::collections::HashMap;

use log::debug;

use super::types::{weighted_win_rate, MatchOutcome, Standing, Tally};
use crate::config::settings::RankingSettings;
use crate::domain::{Match, Penalty, Player};

/// Computes the standings table with the club's default scoring rules.
pub fn compute_standings(
    players: &[Player],
    matches: &[Match],
    penalties: &[Penalty],
) -> Vec<Standing> {
    calculate_standings(players, matches, penalties, &RankingSettings::default())
}

/// Builds a fully ordered standings table from complete snapshots of players,
/// matches and penalties.
///
/// Only active monthly members get a row. Match or penalty references to any
/// other id are dropped without error. The result is a pure function of the
/// inputs: positions run 1..=N with no ties.
pub fn calculate_standings(
    players: &[Player],
    matches: &[Match],
    penalties: &[Penalty],
    config: &RankingSettings,
) -> Vec<Standing> {
    let mut board = Scoreboard::for_eligible(players);
    debug!(
        "Computing standings for {} eligible players from {} matches and {} penalties",
        board.len(),
        matches.len(),
        penalties.len()
    );

    for game in matches {
        board.apply_match(game, config);
    }
    for penalty in penalties {
        board.apply_penalty(penalty);
    }

    let mut standings = board.into_standings(players, config);
    standings.sort_by(compare_standings);
    assign_positions(&mut standings);
    standings
}

/// Accumulators keyed by player id, kept in roster order
struct Scoreboard<'a> {
    tallies: Vec<(&'a str, Tally)>,
    index: HashMap<&'a str, usize>,
}

impl<'a> Scoreboard<'a> {
    fn for_eligible(players: &'a [Player]) -> Self {
        let mut tallies = Vec::new();
        let mut index = HashMap::new();

        for player in players.iter().filter(|p| p.is_ranking_eligible()) {
            let id = player.id.as_str();
            if !index.contains_key(id) {
                index.insert(id, tallies.len());
                tallies.push((id, Tally::default()));
            }
        }

        Self { tallies, index }
    }

    fn len(&self) -> usize {
        self.tallies.len()
    }

    fn tally_mut(&mut self, player_id: &str) -> Option<&mut Tally> {
        let idx = *self.index.get(player_id)?;
        Some(&mut self.tallies[idx].1)
    }

    fn apply_match(&mut self, game: &Match, config: &RankingSettings) {
        let blowout = game.goal_diff() >= config.blowout_goal_diff;

        for player_id in game.participants() {
            let Some(side) = game.side_of(player_id) else {
                continue;
            };
            let Some(tally) = self.tally_mut(player_id) else {
                continue;
            };

            let (goals_for, goals_against) = game.score_for(side);
            tally.matches += 1;
            tally.points += config.participation_points;

            match MatchOutcome::from_score(goals_for, goals_against) {
                MatchOutcome::Win => {
                    tally.wins += 1;
                    if blowout {
                        tally.blowout_wins += 1;
                        tally.points += config.blowout_win_bonus;
                    } else {
                        tally.points += config.win_bonus;
                    }
                }
                MatchOutcome::Draw => {
                    tally.draws += 1;
                    tally.points += config.draw_bonus;
                }
                MatchOutcome::Loss => tally.losses += 1,
            }
        }
    }

    fn apply_penalty(&mut self, penalty: &Penalty) {
        if let Some(tally) = self.tally_mut(&penalty.player_id) {
            tally.points += i64::from(penalty.value);
            tally.penalty_points += penalty.value;
        }
    }

    fn into_standings(self, players: &[Player], config: &RankingSettings) -> Vec<Standing> {
        let names = index_names(players);

        self.tallies
            .into_iter()
            .map(|(player_id, tally)| {
                let player_name = names
                    .get(player_id)
                    .copied()
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or(config.unknown_player_name);
                build_standing(player_id, player_name, &tally)
            })
            .collect()
    }
}

fn index_names(players: &[Player]) -> HashMap<&str, &str> {
    let mut names = HashMap::with_capacity(players.len());
    for player in players {
        names.entry(player.id.as_str()).or_insert(player.name.as_str());
    }
    names
}

fn build_standing(player_id: &str, player_name: &str, tally: &Tally) -> Standing {
    Standing {
        player_id: player_id.to_string(),
        player_name: player_name.to_string(),
        points: clamp_points(tally.points),
        penalty_points: tally.penalty_points,
        matches: tally.matches,
        wins: tally.wins,
        blowout_wins: tally.blowout_wins,
        draws: tally.draws,
        losses: tally.losses,
        win_rate: weighted_win_rate(tally.wins, tally.draws, tally.matches),
        position: 0,
    }
}

fn clamp_points(raw: i64) -> u32 {
    u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
}

// Player id is the last resort so that equal names never depend on input order.
fn compare_standings(a: &Standing, b: &Standing) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.win_rate.total_cmp(&a.win_rate))
        .then_with(|| a.player_name.cmp(&b.player_name))
        .then_with(|| a.player_id.cmp(&b.player_id))
}

fn assign_positions(standings: &mut [Standing]) {
    for (idx, standing) in standings.iter_mut().enumerate() {
        standing.position = idx + 1;
    }
}
