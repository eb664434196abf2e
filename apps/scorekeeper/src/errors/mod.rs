//! Error handling for the scorekeeper domain.

pub mod domain;
pub mod error_code;

pub use domain::{DomainError, StateKind, ValidationKind};
pub use error_code::ErrorCode;
