//! Error taxonomy shared by every solver.

use oic_core::CoreError;
use oic_fluids::FluidError;
use thiserror::Error;

/// Why a solve was aborted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// A field is missing, non-finite or outside its domain.
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Well-formed inputs that describe a contradictory physical situation.
    #[error("Physically invalid {what}: {detail}")]
    PhysicallyInvalid { what: &'static str, detail: String },

    /// The property backend rejected a query.
    #[error("Property lookup failed for {context}: {source}")]
    PropertyLookupFailed {
        context: &'static str,
        source: FluidError,
    },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl SolverError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SolverError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn physically_invalid(what: &'static str, detail: impl Into<String>) -> Self {
        SolverError::PhysicallyInvalid {
            what,
            detail: detail.into(),
        }
    }

    /// Adapter for `map_err` on backend calls.
    pub fn lookup(context: &'static str) -> impl FnOnce(FluidError) -> SolverError {
        move |source| SolverError::PropertyLookupFailed { context, source }
    }
}

impl From<CoreError> for SolverError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::NonFinite { what, value } => {
                SolverError::invalid(what, format!("must be a finite number, got {value}"))
            }
            CoreError::NotPositive { what, value } => {
                SolverError::invalid(what, format!("must be greater than zero, got {value}"))
            }
        }
    }
}
