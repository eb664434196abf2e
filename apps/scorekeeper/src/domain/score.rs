use serde::{Deserialize, Serialize};

use crate::config::SettlementLimits;
use crate::domain::wind::Wind;
use crate::errors::domain::{DomainError, StateKind, ValidationKind};

/// Raw per-seat entry for one round, as typed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreInput {
    pub gross_points: i64,
    #[serde(default)]
    pub doublings: i64,
}

impl ScoreInput {
    pub const fn new(gross_points: i64, doublings: i64) -> Self {
        Self {
            gross_points,
            doublings,
        }
    }
}

/// One seat's validated score for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    wind: Wind,
    gross_points: i64,
    doublings: u32,
    calculated_points: i64,
    net_points: Option<i64>,
}

impl Score {
    /// Validate an input and derive `gross × 2^doublings`.
    pub fn from_input(
        wind: Wind,
        input: ScoreInput,
        limits: &SettlementLimits,
    ) -> Result<Self, DomainError> {
        if input.gross_points < 0 {
            return Err(DomainError::validation(
                ValidationKind::NegativeGrossPoints,
                format!("{wind}: gross points must not be negative ({})", input.gross_points),
            ));
        }
        if input.doublings < 0 {
            return Err(DomainError::validation(
                ValidationKind::NegativeDoublings,
                format!("{wind}: doublings must not be negative ({})", input.doublings),
            ));
        }
        if input.doublings > i64::from(limits.max_doublings) {
            return Err(DomainError::validation(
                ValidationKind::DoublingsAboveLimit,
                format!(
                    "{wind}: {} doublings exceed the limit of {}",
                    input.doublings, limits.max_doublings
                ),
            ));
        }
        let doublings = input.doublings as u32;
        let calculated_points = calculate_points(input.gross_points, doublings)
            .filter(|&points| points <= limits.max_calculated_points)
            .ok_or_else(|| {
                DomainError::overflow(format!(
                    "{wind}: {} × 2^{doublings} exceeds {}",
                    input.gross_points, limits.max_calculated_points
                ))
            })?;

        Ok(Self {
            wind,
            gross_points: input.gross_points,
            doublings,
            calculated_points,
            net_points: None,
        })
    }

    pub fn wind(&self) -> Wind {
        self.wind
    }

    pub fn gross_points(&self) -> i64 {
        self.gross_points
    }

    pub fn doublings(&self) -> u32 {
        self.doublings
    }

    /// Gross points after doublings.
    pub fn calculated_points(&self) -> i64 {
        self.calculated_points
    }

    /// Points won or lost in settlement. Fails until the round is settled.
    pub fn net_points(&self) -> Result<i64, DomainError> {
        self.net_points.ok_or_else(|| {
            DomainError::state(
                StateKind::NetPointsUnsettled,
                format!("{}: net points read before settlement", self.wind),
            )
        })
    }

    pub fn is_settled(&self) -> bool {
        self.net_points.is_some()
    }

    pub(crate) fn record_net_points(&mut self, net: i64) {
        self.net_points = Some(net);
    }
}

/// `gross × 2^doublings`, or `None` if it does not fit an i64.
pub fn calculate_points(gross_points: i64, doublings: u32) -> Option<i64> {
    2i64.checked_pow(doublings)
        .and_then(|factor| gross_points.checked_mul(factor))
}
