#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use config::SettlementLimits;
pub use domain::{
    Game, GamePhase, GameSnapshot, RoundEntry, RoundInput, RoundRecord, ScoreInput,
    StandingRecord, Wind, WindTable,
};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode, StateKind, ValidationKind};
pub use services::{RoundOutcome, Session, SessionExport, SessionMetadata};
pub use telemetry::init_tracing;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    scorekeeper_test_support::logging::init();
}
