#![allow(dead_code)]

use scorekeeper::{RoundInput, ScoreInput, Wind, WindTable};

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    scorekeeper_test_support::logging::init();
}

pub const NAMES: [&str; 4] = ["Ann", "Ben", "Cid", "Dee"];

/// Round input from `(gross, doublings)` per wind in East..North order.
pub fn round(values: [(i64, i64); 4], winner: Wind) -> RoundInput {
    RoundInput::new(
        WindTable::from_fn(|wind| {
            let (gross, doublings) = values[wind.index()];
            ScoreInput::new(gross, doublings)
        }),
        winner,
    )
}
