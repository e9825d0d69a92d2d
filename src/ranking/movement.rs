use std::collections::HashMap;

use serde::Serialize;

use super::types::Standing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "places")]
pub enum Movement {
    Up(usize),
    Down(usize),
    Same,
    New,
}

impl Movement {
    pub fn between(previous: Option<usize>, current: usize) -> Self {
        match previous {
            None => Movement::New,
            Some(prev) if prev > current => Movement::Up(prev - current),
            Some(prev) if prev < current => Movement::Down(current - prev),
            Some(_) => Movement::Same,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionChange {
    pub player_id: String,
    pub position: usize,
    pub movement: Movement,
}

/// Position movement of every current row relative to an earlier table.
/// Players that dropped out of the table are not reported.
pub fn compare_with_previous(current: &[Standing], previous: &[Standing]) -> Vec<PositionChange> {
    let previous_positions: HashMap<&str, usize> = previous
        .iter()
        .map(|s| (s.player_id.as_str(), s.position))
        .collect();

    current
        .iter()
        .map(|standing| PositionChange {
            player_id: standing.player_id.clone(),
            position: standing.position,
            movement: Movement::between(
                previous_positions.get(standing.player_id.as_str()).copied(),
                standing.position,
            ),
        })
        .collect()
}
