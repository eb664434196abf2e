//! Domain layer: pure scoring logic and game state. No I/O, no logging.

pub mod game;
pub mod history;
pub mod player;
pub mod round;
pub mod rules;
pub mod score;
pub mod settlement;
pub mod snapshot;
pub mod standings;
pub mod wind;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_history;
#[cfg(test)]
mod tests_props_settlement;
#[cfg(test)]
mod tests_settlement;

// Re-exports for ergonomics
pub use game::{Game, GamePhase, RoundTransition};
pub use history::{final_standings_table, round_history_table, RoundRecord, StandingRecord};
pub use player::{format_points, Player, Roster};
pub use round::Round;
pub use rules::{is_game_over, next_round_wind, winner_points_for_rank, PLAYERS};
pub use score::{Score, ScoreInput};
pub use settlement::{settle, NetPoints, RoundEntry, RoundInput};
pub use snapshot::GameSnapshot;
pub use standings::{standings_from_points, Standing};
pub use wind::{Wind, WindTable};
