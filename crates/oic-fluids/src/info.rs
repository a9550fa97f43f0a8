//! Informational fluid summary (critical point, molar mass, family).

use crate::backend::PropertyBackend;
use crate::catalog::{FluidFamily, entry_for};
use crate::error::FluidResult;
use crate::species::Species;
use oic_core::units::{Pressure, Temperature};
use serde::Serialize;
use tracing::debug;

/// What the calculator shows next to a fluid selection.
#[derive(Debug, Clone, Serialize)]
pub struct FluidInfo {
    pub species: Species,
    pub display_name: &'static str,
    pub family: FluidFamily,
    /// Molar mass [kg/mol]
    pub molar_mass: f64,
    /// Critical temperature, when the backend knows it.
    pub critical_temperature: Option<Temperature>,
    /// Critical pressure, when the backend knows it.
    pub critical_pressure: Option<Pressure>,
}

/// Gather display information for `species` from `backend`.
///
/// A failing critical-point lookup is logged and left empty; the molar mass is required.
pub fn fluid_info(backend: &dyn PropertyBackend, species: Species) -> FluidResult<FluidInfo> {
    let entry = entry_for(species);
    let molar_mass = backend.molar_mass(species)?;
    let critical = match backend.critical_point(species) {
        Some(Ok(point)) => Some(point),
        Some(Err(err)) => {
            debug!(fluid = %species, error = %err, "critical point unavailable");
            None
        }
        None => None,
    };

    Ok(FluidInfo {
        species,
        display_name: entry.display_name,
        family: entry.family,
        molar_mass,
        critical_temperature: critical.map(|(t, _)| t),
        critical_pressure: critical.map(|(_, p)| p),
    })
}
