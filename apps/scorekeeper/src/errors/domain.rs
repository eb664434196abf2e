//! Domain-level error type used by the settlement engine and game tracker.
//!
//! This error type is I/O- and UI-agnostic. Application code converts it into
//! `crate::error::AppError` through the provided `From` implementation; UIs
//! map it to a user-visible message through [`DomainError::code`].

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::ErrorCode;

/// Which input constraint a rejected request violated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    NegativeGrossPoints,
    NegativeDoublings,
    DoublingsAboveLimit,
    MissingWinner,
    WrongScoreCount,
    DuplicateWind,
    MissingWind,
    WrongPlayerCount,
    BlankPlayerName,
    Other(String),
}

/// Which usage rule a rejected call broke. These point at a caller bug.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StateKind {
    PlayersNotSet,
    PlayersLocked,
    GameFinished,
    RoundWindExhausted,
    NetPointsUnsettled,
    RoundAlreadyEnded,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input rejected before any state was touched
    Validation(ValidationKind, String),
    /// Operation not allowed in the current state
    State(StateKind, String),
    /// Point arithmetic left the configured or representable range
    Overflow(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::State(kind, d) => write!(f, "invalid state {kind:?}: {d}"),
            DomainError::Overflow(d) => write!(f, "point overflow: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn state(kind: StateKind, detail: impl Into<String>) -> Self {
        Self::State(kind, detail.into())
    }
    pub fn overflow(detail: impl Into<String>) -> Self {
        Self::Overflow(detail.into())
    }

    /// Stable code for user-facing messages.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::NegativeGrossPoints => ErrorCode::NegativeGrossPoints,
                ValidationKind::NegativeDoublings => ErrorCode::NegativeDoublings,
                ValidationKind::DoublingsAboveLimit => ErrorCode::DoublingsAboveLimit,
                ValidationKind::MissingWinner => ErrorCode::MissingWinner,
                ValidationKind::WrongScoreCount => ErrorCode::WrongScoreCount,
                ValidationKind::DuplicateWind => ErrorCode::DuplicateWind,
                ValidationKind::MissingWind => ErrorCode::MissingWind,
                ValidationKind::WrongPlayerCount => ErrorCode::WrongPlayerCount,
                ValidationKind::BlankPlayerName => ErrorCode::BlankPlayerName,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::State(kind, _) => match kind {
                StateKind::PlayersNotSet => ErrorCode::PlayersNotSet,
                StateKind::PlayersLocked => ErrorCode::PlayersLocked,
                StateKind::GameFinished => ErrorCode::GameFinished,
                StateKind::RoundWindExhausted => ErrorCode::RoundWindExhausted,
                StateKind::NetPointsUnsettled => ErrorCode::NetPointsUnsettled,
                StateKind::RoundAlreadyEnded => ErrorCode::RoundAlreadyEnded,
            },
            DomainError::Overflow(_) => ErrorCode::PointOverflow,
        }
    }

    /// True for input problems the user can fix by re-entering the round.
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(..) | DomainError::Overflow(_))
    }
}
