//! CoolProp-based property backend.

use crate::backend::{PropertyBackend, validation};
use crate::error::{FluidError, FluidResult};
use crate::key::PropertyKey;
use crate::species::Species;
use oic_core::units::{Pressure, Temperature, k, pa};
use rfluids::prelude::*;

/// Molar gas constant [J/(mol·K)] (CODATA 2018), for backends without their own.
pub const MOLAR_GAS_CONSTANT: f64 = 8.314_462_618;

/// CoolProp backend for fluid properties.
///
/// Supports the pure fluids of the catalog. Every query builds a fresh
/// rfluids `Fluid`, so the model holds no state and is trivially `Send + Sync`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CoolPropModel;

impl CoolPropModel {
    /// Create a new CoolProp model.
    pub fn new() -> Self {
        Self
    }

    fn fluid_input(key: PropertyKey, value: f64) -> FluidResult<FluidInput> {
        match key {
            PropertyKey::P => Ok(FluidInput::pressure(value)),
            PropertyKey::T => Ok(FluidInput::temperature(value)),
            PropertyKey::H => Ok(FluidInput::enthalpy(value)),
            PropertyKey::S => Ok(FluidInput::entropy(value)),
            PropertyKey::D => Ok(FluidInput::density(value)),
            PropertyKey::Q => Ok(FluidInput::quality(value)),
            PropertyKey::GasConstant | PropertyKey::MolarMass => Err(FluidError::InvalidArg {
                what: "per-fluid constants cannot fix a state",
            }),
        }
    }

    /// Create a Fluid instance at the state fixed by two inputs.
    fn fluid_in_state(
        &self,
        fluid: Species,
        key1: PropertyKey,
        value1: f64,
        key2: PropertyKey,
        value2: f64,
    ) -> FluidResult<Fluid> {
        validation::input_pair(key1, key2)?;
        validation::finite(value1, "state input must be finite")?;
        validation::finite(value2, "state input must be finite")?;

        Fluid::from(fluid.rfluids_pure())
            .in_state(
                Self::fluid_input(key1, value1)?,
                Self::fluid_input(key2, value2)?,
            )
            .map_err(|e| {
                FluidError::from_backend_message(format!(
                    "{fluid} at {key1}={value1}, {key2}={value2}: {e}"
                ))
            })
    }

    fn critical_state(&self, fluid: Species) -> FluidResult<(Temperature, Pressure)> {
        let mut state = Fluid::from(fluid.rfluids_pure());
        let t_crit = state
            .critical_temperature()
            .map_err(|e| FluidError::from_backend_message(format!("{fluid} critical T: {e}")))?;
        let p_crit = state
            .critical_pressure()
            .map_err(|e| FluidError::from_backend_message(format!("{fluid} critical P: {e}")))?;
        let t_crit = validation::positive(t_crit, "critical temperature must be positive")?;
        let p_crit = validation::positive(p_crit, "critical pressure must be positive")?;
        Ok((k(t_crit), pa(p_crit)))
    }
}

impl PropertyBackend for CoolPropModel {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn property(
        &self,
        output: PropertyKey,
        key1: PropertyKey,
        value1: f64,
        key2: PropertyKey,
        value2: f64,
        fluid: Species,
    ) -> FluidResult<f64> {
        let in_state = || self.fluid_in_state(fluid, key1, value1, key2, value2);
        let value = match output {
            PropertyKey::MolarMass => return self.molar_mass(fluid),
            PropertyKey::GasConstant => return self.gas_constant(fluid),
            PropertyKey::P => in_state()?.pressure(),
            PropertyKey::T => in_state()?.temperature(),
            PropertyKey::H => in_state()?.enthalpy(),
            PropertyKey::S => in_state()?.entropy(),
            PropertyKey::D => in_state()?.density(),
            PropertyKey::Q => in_state()?.quality(),
        }
        .map_err(|e| {
            FluidError::from_backend_message(format!(
                "{fluid}: {output} at {key1}={value1}, {key2}={value2}: {e}"
            ))
        })?;

        validation::finite(value, "backend returned a non-finite value")
    }

    fn molar_mass(&self, fluid: Species) -> FluidResult<f64> {
        let mut state = Fluid::from(fluid.rfluids_pure());
        let m = state
            .molar_mass()
            .map_err(|e| FluidError::from_backend_message(format!("{fluid} molar mass: {e}")))?;
        validation::positive(m, "molar mass must be positive and finite")
    }

    /// The equation of state's own molar gas constant, which may differ from
    /// [`MOLAR_GAS_CONSTANT`] in the last digits.
    fn gas_constant(&self, fluid: Species) -> FluidResult<f64> {
        let r = CoolProp::props1_si(FluidTrivialParam::GasConstant, fluid.coolprop_name())
            .map_err(|e| FluidError::from_backend_message(format!("{fluid} gas constant: {e}")))?;
        validation::positive(r, "gas constant must be positive and finite")
    }

    fn critical_point(&self, fluid: Species) -> Option<FluidResult<(Temperature, Pressure)>> {
        Some(self.critical_state(fluid))
    }
}
