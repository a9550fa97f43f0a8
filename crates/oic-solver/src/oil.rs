//! Oil/gas heat split from a known discharge temperature.

use crate::error::{SolverError, SolverResult};
use oic_core::units::{MassRate, Power, Pressure, Temperature, w};
use oic_fluids::{FluidError, FluidState, PropertyBackend, Species};
use serde::Serialize;

/// Discharge state fixed by a temperature and the resulting energy split.
///
/// ```text
/// Q_gas = m_dot · (h2a − h1)
/// Q_oil = W_shaft − Q_gas
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasuredDischarge {
    pub discharge: FluidState,
    pub q_gas: Power,
    pub q_oil: Power,
}

/// Mode 1 oil split: computed, or unavailable with the backend's reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OilSplit {
    Available(MeasuredDischarge),
    Unavailable { reason: String },
}

impl OilSplit {
    pub fn available(&self) -> Option<&MeasuredDischarge> {
        match self {
            OilSplit::Available(split) => Some(split),
            OilSplit::Unavailable { .. } => None,
        }
    }
}

/// Evaluate the discharge state at `(t2a, p_out)` and split the shaft power.
///
/// Returns the raw backend error so callers decide whether a failed lookup
/// aborts the solve.
pub fn split_at(
    backend: &dyn PropertyBackend,
    fluid: Species,
    suction: &FluidState,
    m_dot: MassRate,
    w_shaft: Power,
    t2a: Temperature,
    p_out: Pressure,
) -> Result<MeasuredDischarge, FluidError> {
    let discharge = backend.state_tp(fluid, t2a, p_out)?;
    let q_gas = m_dot.value * (discharge.enthalpy() - suction.enthalpy());
    Ok(MeasuredDischarge {
        discharge,
        q_gas: w(q_gas),
        q_oil: w(w_shaft.value - q_gas),
    })
}

/// As [`split_at`], aborting on lookup failure and on a negative oil load.
pub(crate) fn require_split(
    backend: &dyn PropertyBackend,
    fluid: Species,
    suction: &FluidState,
    m_dot: MassRate,
    w_shaft: Power,
    t2a: Temperature,
    p_out: Pressure,
) -> SolverResult<MeasuredDischarge> {
    let split = split_at(backend, fluid, suction, m_dot, w_shaft, t2a, p_out)
        .map_err(SolverError::lookup("discharge state"))?;
    if split.q_oil.value < 0.0 {
        return Err(SolverError::physically_invalid(
            "oil load",
            format!(
                "discharge at {:.2} K needs {:.3} kW in the gas but only {:.3} kW of shaft power is available (Q_oil = {:.3} kW)",
                t2a.value,
                split.q_gas.value / 1e3,
                w_shaft.value / 1e3,
                split.q_oil.value / 1e3,
            ),
        ));
    }
    Ok(split)
}
