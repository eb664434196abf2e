use std::path::PathBuf;

use scorekeeper::{AppError, DomainError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Session directory {path} is incomplete: {detail}")]
    IncompleteSession { path: PathBuf, detail: String },
}

impl From<DomainError> for ToolError {
    fn from(e: DomainError) -> Self {
        ToolError::App(AppError::from(e))
    }
}
