//! Desuperheater / aftercooler stage downstream of the compressor.

use crate::error::{SolverError, SolverResult};
use oic_core::ensure_finite;
use oic_core::units::{MassRate, Power, Temperature, convert, degc, w};
use oic_fluids::{FluidState, PropertyBackend, Species};
use serde::{Deserialize, Serialize};

/// Requested outlet temperature of the cooling stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoolerSpec {
    pub target_c: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoolerResult {
    pub outlet: FluidState,
    /// Heat removed by the stage.
    pub heat_removed: Power,
    /// Condenser duty left after the stage (refrigeration mode only).
    pub remaining_duty: Option<Power>,
}

/// Cool `inlet` at constant pressure to the target temperature.
///
/// The target must lie strictly below the inlet temperature and, when
/// `floor` is given, strictly above it.
pub(crate) fn cool(
    backend: &dyn PropertyBackend,
    fluid: Species,
    m_dot: MassRate,
    inlet: &FluidState,
    spec: &CoolerSpec,
    floor: Option<Temperature>,
) -> SolverResult<CoolerResult> {
    let target = degc(ensure_finite(spec.target_c, "cooler.target_c")?);
    let ceiling = inlet.temperature();
    if target.value >= ceiling.value {
        return Err(SolverError::invalid(
            "cooler.target_c",
            format!(
                "must be below the oil-free discharge temperature {:.2} °C, got {:.2} °C",
                convert::kelvin_to_celsius(ceiling.value),
                spec.target_c
            ),
        ));
    }
    if let Some(floor) = floor
        && target.value <= floor.value
    {
        return Err(SolverError::invalid(
            "cooler.target_c",
            format!(
                "must be above the condensing temperature {:.2} °C, got {:.2} °C",
                convert::kelvin_to_celsius(floor.value),
                spec.target_c
            ),
        ));
    }

    let outlet = backend
        .state_tp(fluid, target, inlet.pressure())
        .map_err(SolverError::lookup("cooler outlet state"))?;
    let heat_removed = m_dot.value * (inlet.enthalpy() - outlet.enthalpy());
    Ok(CoolerResult {
        outlet,
        heat_removed: w(heat_removed),
        remaining_duty: None,
    })
}
