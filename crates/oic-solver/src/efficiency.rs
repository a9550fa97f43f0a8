//! Efficiency basis resolution: shaft-referenced vs input-referenced ratios.

use crate::error::{SolverError, SolverResult};
use oic_core::units::{Power, w};
use oic_core::{ensure_finite, ensure_positive};
use serde::{Deserialize, Serialize};

/// Which efficiency the user supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EfficiencyBasis {
    /// Referenced to compressor shaft power: `eta_shaft = W_ideal / W_shaft`.
    Shaft { eta_shaft: f64 },
    /// Referenced to electrical input power: `eta_total = W_ideal / W_input`.
    Input { eta_total: f64 },
}

/// Supplied efficiency plus the motor efficiency linking shaft and input power.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EfficiencySpec {
    pub basis: EfficiencyBasis,
    #[serde(default)]
    pub motor_efficiency: Option<f64>,
}

impl EfficiencySpec {
    pub fn shaft(eta_shaft: f64, motor_efficiency: f64) -> Self {
        Self {
            basis: EfficiencyBasis::Shaft { eta_shaft },
            motor_efficiency: Some(motor_efficiency),
        }
    }

    pub fn input(eta_total: f64, motor_efficiency: f64) -> Self {
        Self {
            basis: EfficiencyBasis::Input { eta_total },
            motor_efficiency: Some(motor_efficiency),
        }
    }

    /// Validate the supplied ratios without resolving power.
    pub fn validate(&self) -> SolverResult<(f64, f64)> {
        let given = match self.basis {
            EfficiencyBasis::Shaft { eta_shaft } => ensure_positive(eta_shaft, "eta_shaft")?,
            EfficiencyBasis::Input { eta_total } => ensure_positive(eta_total, "eta_total")?,
        };
        let motor = self.motor_efficiency.ok_or_else(|| {
            SolverError::invalid(
                "motor_efficiency",
                "required to relate shaft and input power",
            )
        })?;
        let motor = ensure_positive(motor, "motor_efficiency")?;
        Ok((given, motor))
    }
}

/// Shaft/input power pair implied by an ideal work and an efficiency basis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerSplit {
    pub basis: EfficiencyBasis,
    pub w_ideal: Power,
    pub w_shaft: Power,
    pub w_input: Power,
    pub eta_shaft: f64,
    pub eta_total: f64,
    pub motor_efficiency: f64,
}

/// Resolve `{W_shaft, W_input, eta_shaft, eta_total}` from the ideal work.
///
/// ```text
/// shaft: W_shaft = W_ideal / eta_shaft,  W_input = W_shaft / eta_motor, eta_total = W_ideal / W_input
/// input: W_input = W_ideal / eta_total,  W_shaft = W_input · eta_motor, eta_shaft = W_ideal / W_shaft
/// ```
///
/// # Errors
/// `InvalidInput` for a non-positive efficiency or a missing/non-positive motor
/// efficiency, `PhysicallyInvalid` for a non-positive ideal work.
pub fn resolve_power(spec: &EfficiencySpec, w_ideal_w: f64) -> SolverResult<PowerSplit> {
    let (given, motor) = spec.validate()?;
    let w_ideal_w = ensure_finite(w_ideal_w, "ideal work")?;
    if w_ideal_w <= 0.0 {
        return Err(SolverError::physically_invalid(
            "ideal work",
            format!("reference compression work must be positive, got {w_ideal_w:.3} W"),
        ));
    }

    let (w_shaft, w_input) = match spec.basis {
        EfficiencyBasis::Shaft { .. } => {
            let w_shaft = w_ideal_w / given;
            (w_shaft, w_shaft / motor)
        }
        EfficiencyBasis::Input { .. } => {
            let w_input = w_ideal_w / given;
            (w_input * motor, w_input)
        }
    };

    Ok(PowerSplit {
        basis: spec.basis,
        w_ideal: w(w_ideal_w),
        w_shaft: w(w_shaft),
        w_input: w(w_input),
        eta_shaft: w_ideal_w / w_shaft,
        eta_total: w_ideal_w / w_input,
        motor_efficiency: motor,
    })
}
