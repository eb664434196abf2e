// Proptest generators for domain types.
// Values stay well inside the default settlement limits so every generated
// round settles without overflow.

use proptest::prelude::*;

use crate::domain::settlement::{RoundEntry, RoundInput};
use crate::domain::{ScoreInput, Wind, WindTable};

pub const MAX_GROSS: i64 = 2_000;
pub const MAX_DOUBLINGS: i64 = 6;

/// Generate a random Wind
pub fn wind() -> impl Strategy<Value = Wind> {
    prop_oneof![
        Just(Wind::East),
        Just(Wind::South),
        Just(Wind::West),
        Just(Wind::North),
    ]
}

/// Generate a valid score input
pub fn score_input() -> impl Strategy<Value = ScoreInput> {
    (0..=MAX_GROSS, 0..=MAX_DOUBLINGS)
        .prop_map(|(gross, doublings)| ScoreInput::new(gross, doublings))
}

/// Generate four valid score inputs, one per seat
pub fn score_table() -> impl Strategy<Value = WindTable<ScoreInput>> {
    prop::array::uniform4(score_input()).prop_map(WindTable::new)
}

/// Generate a complete round input
pub fn round_input() -> impl Strategy<Value = RoundInput> {
    (score_table(), wind()).prop_map(|(scores, winner)| RoundInput::new(scores, winner))
}

/// Generate the loose wire entries of a round in arbitrary order
pub fn shuffled_entries() -> impl Strategy<Value = (WindTable<ScoreInput>, Vec<RoundEntry>)> {
    score_table().prop_flat_map(|scores| {
        let entries: Vec<RoundEntry> = scores
            .iter()
            .map(|(wind, input)| RoundEntry {
                wind,
                gross_points: input.gross_points,
                doublings: input.doublings,
            })
            .collect();
        (Just(scores), Just(entries).prop_shuffle())
    })
}

/// Generate point totals for ranking
pub fn point_totals() -> impl Strategy<Value = Vec<i64>> {
    // Narrow range so ties show up often
    prop::collection::vec(-5i64..=5, 0..=8)
}
