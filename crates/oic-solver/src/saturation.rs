//! Saturation pressures and the superheated/subcooled line states of a
//! vapour-compression cycle.

use crate::error::{SolverError, SolverResult};
use oic_core::units::{Pressure, Temperature, k};
use oic_fluids::{FluidState, PropertyBackend, Species};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    /// Suction line: `T = T_sat + superheat`.
    Vapour,
    /// Liquid line: `T = T_sat − subcooling`.
    Liquid,
}

/// Evaporating (dew) and condensing pressures.
///
/// `condensing_quality` picks the dew (1) or bubble (0) point for `Pc`; the
/// two coincide for pure fluids.
pub(crate) fn cycle_pressures(
    backend: &dyn PropertyBackend,
    fluid: Species,
    te: Temperature,
    tc: Temperature,
    condensing_quality: f64,
) -> SolverResult<(Pressure, Pressure)> {
    let pe = backend
        .saturation_pressure(fluid, te, 1.0)
        .map_err(SolverError::lookup("evaporating pressure"))?;
    let pc = backend
        .saturation_pressure(fluid, tc, condensing_quality)
        .map_err(SolverError::lookup("condensing pressure"))?;
    Ok((pe, pc))
}

/// State offset from saturation by `offset_k` at pressure `p`.
///
/// A zero offset sits exactly on the saturation line and is resolved from
/// temperature and quality instead of temperature and pressure.
pub(crate) fn line_state(
    backend: &dyn PropertyBackend,
    fluid: Species,
    t_sat: Temperature,
    p: Pressure,
    offset_k: f64,
    side: Side,
) -> SolverResult<FluidState> {
    let (context, quality, t) = match side {
        Side::Vapour => ("suction state", 1.0, t_sat.value + offset_k),
        Side::Liquid => ("liquid line state", 0.0, t_sat.value - offset_k),
    };
    let state = if offset_k == 0.0 {
        backend.state_tq(fluid, t_sat, quality)
    } else {
        backend.state_tp(fluid, k(t), p)
    };
    state.map_err(SolverError::lookup(context))
}
