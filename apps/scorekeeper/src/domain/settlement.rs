//! Pairwise point settlement for a single round.
//!
//! Every one of the six seat pairs settles on its own:
//! - a pair containing the winner: the other seat pays the winner's
//!   calculated points;
//! - any other pair: the lower seat pays the difference of calculated points.
//!
//! A pair touching the round-wind seat settles at double rate. Net results
//! always sum to zero.

use serde::{Deserialize, Serialize};

use crate::domain::rules::PAIRS;
use crate::domain::score::{Score, ScoreInput};
use crate::domain::wind::{Wind, WindTable};
use crate::errors::domain::{DomainError, ValidationKind};

/// Settlement result: signed point change per seat.
pub type NetPoints = WindTable<i64>;

/// Everything the input collaborator supplies for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundInput {
    pub scores: WindTable<ScoreInput>,
    pub winner: Wind,
}

/// Unvalidated wire shape of a round entry: a list of seats plus an optional winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEntry {
    pub wind: Wind,
    pub gross_points: i64,
    #[serde(default)]
    pub doublings: i64,
}

impl RoundInput {
    pub fn new(scores: WindTable<ScoreInput>, winner: Wind) -> Self {
        Self { scores, winner }
    }

    /// Validate a loose list of seat entries into a round input.
    pub fn try_from_entries(
        entries: impl IntoIterator<Item = RoundEntry>,
        winner: Option<Wind>,
    ) -> Result<Self, DomainError> {
        let winner = winner.ok_or_else(|| {
            DomainError::validation(ValidationKind::MissingWinner, "No winner selected")
        })?;
        let scores = WindTable::try_from_entries(
            entries
                .into_iter()
                .map(|e| (e.wind, ScoreInput::new(e.gross_points, e.doublings))),
        )?;
        Ok(Self { scores, winner })
    }
}

/// Rate for a pair: doubled if either seat holds the round wind.
#[inline]
pub fn pair_multiplier(round_wind: Wind, a: Wind, b: Wind) -> i64 {
    if a == round_wind || b == round_wind {
        2
    } else {
        1
    }
}

/// Compute net point changes for one round. Pure: neither `scores` nor any
/// other state is modified.
pub fn settle(
    round_wind: Wind,
    winner: Wind,
    scores: &WindTable<Score>,
) -> Result<NetPoints, DomainError> {
    if let Some((wind, score)) = scores.iter().find(|(wind, score)| score.wind() != *wind) {
        return Err(DomainError::validation_other(format!(
            "Score for {} filed under {wind}",
            score.wind()
        )));
    }

    let mut net = NetPoints::default();
    for (a, b) in PAIRS {
        let (giver, recipient, amount) =
            pair_transfer(round_wind, winner, &scores[a], &scores[b])?;
        net[giver] = net[giver].checked_sub(amount).ok_or_else(|| overflow(giver))?;
        net[recipient] = net[recipient]
            .checked_add(amount)
            .ok_or_else(|| overflow(recipient))?;
    }
    Ok(net)
}

/// `(giver, recipient, amount)` for one pair. `amount` may be negative for a
/// non-winner pair, in which case the direction is effectively reversed.
fn pair_transfer(
    round_wind: Wind,
    winner: Wind,
    a: &Score,
    b: &Score,
) -> Result<(Wind, Wind, i64), DomainError> {
    let multiplier = pair_multiplier(round_wind, a.wind(), b.wind());
    let (giver, recipient, base) = if a.wind() == winner {
        (b.wind(), a.wind(), a.calculated_points())
    } else if b.wind() == winner {
        (a.wind(), b.wind(), b.calculated_points())
    } else {
        let diff = a
            .calculated_points()
            .checked_sub(b.calculated_points())
            .ok_or_else(|| overflow(a.wind()))?;
        (b.wind(), a.wind(), diff)
    };
    let amount = base
        .checked_mul(multiplier)
        .ok_or_else(|| overflow(recipient))?;
    Ok((giver, recipient, amount))
}

fn overflow(wind: Wind) -> DomainError {
    DomainError::overflow(format!("Net points for {wind} out of range"))
}
