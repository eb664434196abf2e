use thiserror::Error;

use crate::errors::{DomainError, ErrorCode};

/// Application-boundary error: everything a caller outside the pure domain
/// can run into.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Invalid script at line {line}: {detail}")]
    Script {
        line: usize,
        detail: String,
        /// The rule the line broke, when the domain rejected it.
        #[source]
        source: Option<DomainError>,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Timestamp formatting error: {0}")]
    Time(#[from] time::error::Format),
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn script(line: usize, detail: impl Into<String>) -> Self {
        Self::Script {
            line,
            detail: detail.into(),
            source: None,
        }
    }

    /// A script line the domain refused.
    pub fn script_rejected(line: usize, source: DomainError) -> Self {
        Self::Script {
            line,
            detail: source.to_string(),
            source: Some(source),
        }
    }

    /// Error code for user-visible messaging.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Domain(e) => e.code(),
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Script {
                source: Some(e), ..
            } => e.code(),
            AppError::Script { .. } => ErrorCode::InvalidScript,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Json(_) | AppError::Time(_) => ErrorCode::SerializationError,
        }
    }

    /// The wrapped domain error, if any.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            AppError::Domain(e)
            | AppError::Script {
                source: Some(e), ..
            } => Some(e),
            _ => None,
        }
    }
}
