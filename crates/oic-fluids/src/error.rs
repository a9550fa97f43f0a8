//! Fluid property errors.

use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during fluid property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative density, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// State point outside the fluid's validity envelope.
    #[error("State outside valid range: {context}")]
    OutOfRange { context: String },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Fluid name not present in the catalog.
    #[error("Unknown fluid: {name}")]
    UnknownFluid { name: String },

    /// Operation not supported by the backend (e.g. saturation on a perfect gas).
    #[error("Not supported: {what}")]
    NotSupported { what: &'static str },

    /// Backend (CoolProp) error that could not be classified.
    #[error("Backend error: {message}")]
    Backend { message: String },
}

impl FluidError {
    /// Classify an opaque backend message.
    ///
    /// CoolProp reports failures as free text; range violations are
    /// recognised by substring so callers can tell an out-of-envelope state
    /// from a genuine backend fault.
    pub fn from_backend_message(message: impl Into<String>) -> Self {
        const OUT_OF_RANGE_MARKERS: &[&str] = &[
            "not in range",
            "out of range",
            "outside the range of validity",
            "must be in range",
            "must be between",
            "quality must be",
            "is below",
            "is above",
        ];

        let message = message.into();
        let lowered = message.to_lowercase();
        if OUT_OF_RANGE_MARKERS
            .iter()
            .any(|marker| lowered.contains(marker))
        {
            FluidError::OutOfRange { context: message }
        } else {
            FluidError::Backend { message }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FluidError::NonPhysical { what: "pressure" };
        assert!(err.to_string().contains("pressure"));

        let err = FluidError::Backend {
            message: "CoolProp failed".into(),
        };
        assert!(err.to_string().contains("CoolProp"));
    }

    #[test]
    fn classifies_range_messages() {
        let err = FluidError::from_backend_message(
            "Temperature to QT_flash [500 K] must be in range [169.85 K, 374.21 K]",
        );
        assert!(matches!(err, FluidError::OutOfRange { .. }));

        let err = FluidError::from_backend_message("something odd happened");
        assert!(matches!(err, FluidError::Backend { .. }));
    }
}
