//! Error types for the oic-app service layer.

use crate::session::Mode;
use oic_solver::SolverError;
use std::path::PathBuf;

/// Application error shared by every front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read case file: {path}")]
    CaseFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write case file: {path}")]
    CaseFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Case error: {0}")]
    Case(String),

    #[error("No {mode} result in this session")]
    NoResult { mode: Mode },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for oic-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<oic_fluids::FluidError> for AppError {
    fn from(err: oic_fluids::FluidError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
