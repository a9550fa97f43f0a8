//! Theoretical (geometric) volume flow of the compressor.

use crate::error::SolverResult;
use oic_core::units::{VolumeRate, convert, m3ps};
use oic_core::{ensure_finite, ensure_positive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the swept volume flow is specified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlowSpec {
    /// Rotational speed and swept volume per revolution.
    BySpeed { rpm: f64, displacement_cm3: f64 },
    /// Theoretical volume flow given directly.
    ByVolume { flow_m3_h: f64 },
}

impl FlowSpec {
    /// Resolve to the theoretical volume flow.
    ///
    /// ```text
    /// by_speed:  V_th = rpm · (displacement_cm3 / 1e6) / 60
    /// by_volume: V_th = flow_m3_h / 3600
    /// ```
    ///
    /// # Errors
    /// `InvalidInput` when a field is not finite or not positive, or the result is not positive.
    pub fn theoretical_flow(&self) -> SolverResult<VolumeRate> {
        let v_th = match *self {
            FlowSpec::BySpeed {
                rpm,
                displacement_cm3,
            } => {
                let rpm = ensure_positive(rpm, "rpm")?;
                let disp = ensure_positive(displacement_cm3, "displacement_cm3")?;
                convert::rpm_to_rps(rpm) * convert::cm3_to_m3(disp)
            }
            FlowSpec::ByVolume { flow_m3_h } => {
                convert::m3h_to_m3s(ensure_positive(flow_m3_h, "flow_m3_h")?)
            }
        };
        let v_th = ensure_positive(ensure_finite(v_th, "theoretical flow")?, "theoretical flow")?;
        Ok(m3ps(v_th))
    }
}

impl fmt::Display for FlowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowSpec::BySpeed {
                rpm,
                displacement_cm3,
            } => write!(f, "RPM: {rpm}, Disp: {displacement_cm3} cm³"),
            FlowSpec::ByVolume { flow_m3_h } => write!(f, "Flow: {flow_m3_h} m³/h"),
        }
    }
}
