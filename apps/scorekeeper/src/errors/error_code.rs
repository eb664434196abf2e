//! Error codes for scorekeeper failures.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and are what a UI keys its messages on.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Round input validation
    /// Gross points below zero
    NegativeGrossPoints,
    /// Doubling count below zero
    NegativeDoublings,
    /// Doubling count above the configured limit
    DoublingsAboveLimit,
    /// No winner selected
    MissingWinner,
    /// Not exactly four scores
    WrongScoreCount,
    /// Two scores for the same wind
    DuplicateWind,
    /// A wind without a score
    MissingWind,
    /// Not exactly four player names
    WrongPlayerCount,
    /// Empty player name
    BlankPlayerName,
    /// General validation error
    ValidationError,

    // Usage / state
    PlayersNotSet,
    PlayersLocked,
    GameFinished,
    RoundWindExhausted,
    NetPointsUnsettled,
    RoundAlreadyEnded,

    // Arithmetic
    /// Calculated points out of range
    PointOverflow,

    // Application boundary
    ConfigError,
    IoError,
    InvalidScript,
    SerializationError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NegativeGrossPoints => "NEGATIVE_GROSS_POINTS",
            Self::NegativeDoublings => "NEGATIVE_DOUBLINGS",
            Self::DoublingsAboveLimit => "DOUBLINGS_ABOVE_LIMIT",
            Self::MissingWinner => "MISSING_WINNER",
            Self::WrongScoreCount => "WRONG_SCORE_COUNT",
            Self::DuplicateWind => "DUPLICATE_WIND",
            Self::MissingWind => "MISSING_WIND",
            Self::WrongPlayerCount => "WRONG_PLAYER_COUNT",
            Self::BlankPlayerName => "BLANK_PLAYER_NAME",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::PlayersNotSet => "PLAYERS_NOT_SET",
            Self::PlayersLocked => "PLAYERS_LOCKED",
            Self::GameFinished => "GAME_FINISHED",
            Self::RoundWindExhausted => "ROUND_WIND_EXHAUSTED",
            Self::NetPointsUnsettled => "NET_POINTS_UNSETTLED",
            Self::RoundAlreadyEnded => "ROUND_ALREADY_ENDED",
            Self::PointOverflow => "POINT_OVERFLOW",
            Self::ConfigError => "CONFIG_ERROR",
            Self::IoError => "IO_ERROR",
            Self::InvalidScript => "INVALID_SCRIPT",
            Self::SerializationError => "SERIALIZATION_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
