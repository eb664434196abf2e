//! Players and the four-seat roster.

use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;
use crate::domain::wind::{Wind, WindTable};
use crate::errors::domain::{DomainError, ValidationKind};

/// A seated player. Identity is the `(name, wind)` pair; `points` is the
/// cumulative total and only changes when a settled round is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub wind: Wind,
    pub points: i64,
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.wind == other.wind
    }
}

impl Eq for Player {}

impl Player {
    pub fn new(name: impl Into<String>, wind: Wind) -> Self {
        Self {
            name: name.into(),
            wind,
            points: 0,
        }
    }

    /// `[East] Alice`
    pub fn display(&self) -> String {
        format!("[{}] {}", self.wind, self.name)
    }

    /// `[East] Alice - 1.200 points`
    pub fn display_with_points(&self) -> String {
        format!("{} - {} points", self.display(), format_points(self.points))
    }
}

/// Group thousands with `.`, the way score sheets print them: `-12.500`.
pub fn format_points(points: i64) -> String {
    let digits = points.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if points < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// The four players of a game, one per wind.
pub type Roster = WindTable<Player>;

/// Bind four ordered names to East, South, West and North.
pub fn roster_from_names<S: AsRef<str>>(names: &[S]) -> Result<Roster, DomainError> {
    if names.len() != PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::WrongPlayerCount,
            format!("Expected {PLAYERS} player names, got {}", names.len()),
        ));
    }
    for (wind, name) in Wind::ALL.iter().zip(names) {
        if name.as_ref().trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::BlankPlayerName,
                format!("Player name for {wind} is empty"),
            ));
        }
    }
    Ok(WindTable::from_fn(|wind| {
        Player::new(names[wind.index()].as_ref().trim(), wind)
    }))
}
