pub mod movement;
pub mod player_stats;
pub mod standings;
pub mod types;

pub use movement::{compare_with_previous, Movement, PositionChange};
pub use player_stats::{player_stats, MatchRecord, PlayerStats};
pub use standings::{calculate_standings, compute_standings};
pub use types::{weighted_win_rate, MatchOutcome, Standing};
