use crate::domain::wind::Wind;
use crate::errors::domain::DomainError;

pub const PLAYERS: usize = 4;
/// Unordered pairs among four players.
pub const PAIRINGS: usize = 6;

/// The six unordered seat pairs, each listed once with the earlier wind first.
pub const PAIRS: [(Wind, Wind); PAIRINGS] = [
    (Wind::East, Wind::South),
    (Wind::East, Wind::West),
    (Wind::East, Wind::North),
    (Wind::South, Wind::West),
    (Wind::South, Wind::North),
    (Wind::West, Wind::North),
];

/// Round wind for the next hand.
///
/// The round-wind holder keeps the bonus by winning. Any other result moves
/// the bonus to the successor of the current round wind, regardless of which
/// wind actually won.
pub fn next_round_wind(round_wind: Wind, winner: Wind) -> Result<Wind, DomainError> {
    if winner == round_wind {
        return Ok(round_wind);
    }
    round_wind.successor()
}

/// The session ends once North holds the round wind and loses it.
#[inline]
pub fn is_game_over(round_wind: Wind, winner: Wind) -> bool {
    round_wind == Wind::North && winner != Wind::North
}

/// Session-level award used when comparing many sessions: two points for
/// first place, one for second, nothing otherwise. Shared ranks share the award.
#[inline]
pub fn winner_points_for_rank(rank: usize) -> u32 {
    match rank {
        1 => 2,
        2 => 1,
        _ => 0,
    }
}
