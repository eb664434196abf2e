use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const DEFAULT_MAX_DOUBLINGS: u32 = 16;
pub const DEFAULT_MAX_CALCULATED_POINTS: i64 = 1_000_000_000;

/// Bounds applied when a score is turned into calculated points.
///
/// A score whose doubling count exceeds `max_doublings`, or whose
/// `gross × 2^doublings` exceeds `max_calculated_points`, is rejected rather
/// than settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementLimits {
    pub max_doublings: u32,
    pub max_calculated_points: i64,
}

impl Default for SettlementLimits {
    fn default() -> Self {
        Self {
            max_doublings: DEFAULT_MAX_DOUBLINGS,
            max_calculated_points: DEFAULT_MAX_CALCULATED_POINTS,
        }
    }
}

impl SettlementLimits {
    /// Limits from `SCOREKEEPER_MAX_DOUBLINGS` and
    /// `SCOREKEEPER_MAX_CALCULATED_POINTS`, defaulting each one that is unset.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let max_doublings =
            optional_var("SCOREKEEPER_MAX_DOUBLINGS")?.unwrap_or(defaults.max_doublings);
        let max_calculated_points = optional_var("SCOREKEEPER_MAX_CALCULATED_POINTS")?
            .unwrap_or(defaults.max_calculated_points);

        let limits = Self {
            max_doublings,
            max_calculated_points,
        };
        limits.validate()?;
        Ok(limits)
    }

    /// Reject limits no score could ever satisfy or that cannot be computed.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_calculated_points <= 0 {
            return Err(AppError::config(format!(
                "Maximum calculated points must be positive, but got: {}",
                self.max_calculated_points
            )));
        }
        // 2^63 does not fit an i64 even for a gross value of 1
        if self.max_doublings > 62 {
            return Err(AppError::config(format!(
                "Maximum doublings must be at most 62, but got: {}",
                self.max_doublings
            )));
        }
        Ok(())
    }

    pub fn with_max_doublings(mut self, max_doublings: u32) -> Self {
        self.max_doublings = max_doublings;
        self
    }

    pub fn with_max_calculated_points(mut self, max_calculated_points: i64) -> Self {
        self.max_calculated_points = max_calculated_points;
        self
    }
}

/// Parse an environment variable if present; a present but malformed value is an error.
fn optional_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            AppError::config(format!(
                "Environment variable '{name}' has an invalid value: '{raw}'"
            ))
        }),
        Err(_) => Ok(None),
    }
}
