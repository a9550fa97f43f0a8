//! The property backend contract and helpers built on top of it.

use crate::error::{FluidError, FluidResult};
use crate::key::PropertyKey;
use crate::species::Species;
use crate::state::{FluidState, SpecEntropy};
use oic_core::units::{Pressure, Temperature, k, kgpm3, pa};

/// Equation-of-state backend.
///
/// The single functional contract is [`property`](Self::property): given two
/// independent intensive properties and a fluid, return a third. Everything
/// else on this trait is derived from it. Implementations must be thread-safe
/// and free of observable side effects; failures are deterministic for a
/// given input.
pub trait PropertyBackend: Send + Sync {
    /// Backend name (for logging and reports).
    fn name(&self) -> &str;

    /// Evaluate `output` at the state fixed by `(key1, value1)` and `(key2, value2)`.
    ///
    /// Fails when the pair is not supported, the state lies outside the
    /// fluid's envelope or the result is not a finite number.
    fn property(
        &self,
        output: PropertyKey,
        key1: PropertyKey,
        value1: f64,
        key2: PropertyKey,
        value2: f64,
        fluid: Species,
    ) -> FluidResult<f64>;

    /// Molar mass [kg/mol].
    fn molar_mass(&self, fluid: Species) -> FluidResult<f64>;

    /// Molar gas constant [J/(mol·K)] used by the fluid's equation of state.
    fn gas_constant(&self, fluid: Species) -> FluidResult<f64>;

    /// Critical point `(T_crit, p_crit)` for informational display.
    ///
    /// Default implementation returns None (not available from this backend).
    fn critical_point(&self, _fluid: Species) -> Option<FluidResult<(Temperature, Pressure)>> {
        None
    }

    /// Specific gas constant `R / M` [J/(kg·K)].
    fn specific_gas_constant(&self, fluid: Species) -> FluidResult<f64> {
        let r = self.gas_constant(fluid)?;
        let m = self.molar_mass(fluid)?;
        validation::positive(m, "molar mass must be positive and finite")?;
        validation::positive(r / m, "specific gas constant must be positive and finite")
    }

    /// Saturation pressure at temperature `t` and vapour quality `quality`.
    fn saturation_pressure(
        &self,
        fluid: Species,
        t: Temperature,
        quality: f64,
    ) -> FluidResult<Pressure> {
        validation::temperature(t)?;
        validation::quality(quality)?;
        let p = self.property(
            PropertyKey::P,
            PropertyKey::T,
            t.value,
            PropertyKey::Q,
            quality,
            fluid,
        )?;
        validation::positive(p, "saturation pressure must be positive and finite")?;
        Ok(pa(p))
    }

    /// Full state (h, s, ρ) at temperature and pressure.
    fn state_tp(&self, fluid: Species, t: Temperature, p: Pressure) -> FluidResult<FluidState> {
        validation::temperature(t)?;
        validation::pressure(p)?;
        let at = |output: PropertyKey| {
            self.property(
                output,
                PropertyKey::T,
                t.value,
                PropertyKey::P,
                p.value,
                fluid,
            )
        };
        let h = at(PropertyKey::H)?;
        let s = at(PropertyKey::S)?;
        let rho = at(PropertyKey::D)?;
        FluidState::new(t, p, h)?
            .with_entropy(s)?
            .with_density(kgpm3(rho))
    }

    /// Full saturated state (h, s, ρ) at temperature and vapour quality.
    ///
    /// Used instead of [`state_tp`](Self::state_tp) exactly on the saturation
    /// line, where temperature and pressure do not fix the phase.
    fn state_tq(&self, fluid: Species, t: Temperature, quality: f64) -> FluidResult<FluidState> {
        validation::temperature(t)?;
        validation::quality(quality)?;
        let at = |output: PropertyKey| {
            self.property(
                output,
                PropertyKey::T,
                t.value,
                PropertyKey::Q,
                quality,
                fluid,
            )
        };
        let p = validation::positive(at(PropertyKey::P)?, "saturation pressure must be positive")?;
        let h = at(PropertyKey::H)?;
        let s = at(PropertyKey::S)?;
        let rho = at(PropertyKey::D)?;
        FluidState::new(t, pa(p), h)?
            .with_entropy(s)?
            .with_density(kgpm3(rho))
    }

    /// State at pressure and specific enthalpy (temperature resolved by the backend).
    fn state_ph(&self, fluid: Species, p: Pressure, h: f64) -> FluidResult<FluidState> {
        validation::pressure(p)?;
        validation::finite(h, "enthalpy must be finite")?;
        let t = self.property(
            PropertyKey::T,
            PropertyKey::P,
            p.value,
            PropertyKey::H,
            h,
            fluid,
        )?;
        FluidState::new(k(t), p, h)
    }

    /// State at pressure and specific entropy (isentropic end point).
    fn state_ps(&self, fluid: Species, p: Pressure, s: SpecEntropy) -> FluidResult<FluidState> {
        validation::pressure(p)?;
        validation::finite(s, "entropy must be finite")?;
        let at = |output: PropertyKey| {
            self.property(output, PropertyKey::P, p.value, PropertyKey::S, s, fluid)
        };
        let t = at(PropertyKey::T)?;
        let h = at(PropertyKey::H)?;
        FluidState::new(k(t), p, h)?.with_entropy(s)
    }
}

/// Validation helpers shared by backends.
pub(crate) mod validation {
    use super::*;

    pub fn finite(v: f64, what: &'static str) -> FluidResult<f64> {
        if v.is_finite() {
            Ok(v)
        } else {
            Err(FluidError::NonPhysical { what })
        }
    }

    pub fn positive(v: f64, what: &'static str) -> FluidResult<f64> {
        if v.is_finite() && v > 0.0 {
            Ok(v)
        } else {
            Err(FluidError::NonPhysical { what })
        }
    }

    /// Ensure pressure is positive and finite.
    pub fn pressure(p: Pressure) -> FluidResult<()> {
        positive(p.value, "pressure must be positive and finite").map(|_| ())
    }

    /// Ensure temperature is positive and finite.
    pub fn temperature(t: Temperature) -> FluidResult<()> {
        positive(t.value, "temperature must be positive and finite").map(|_| ())
    }

    pub fn quality(q: f64) -> FluidResult<()> {
        if q.is_finite() && (0.0..=1.0).contains(&q) {
            Ok(())
        } else {
            Err(FluidError::InvalidArg {
                what: "vapour quality must be within [0, 1]",
            })
        }
    }

    /// Reject repeated or trivial keys as state inputs.
    pub fn input_pair(key1: PropertyKey, key2: PropertyKey) -> FluidResult<()> {
        if key1 == key2 {
            return Err(FluidError::InvalidArg {
                what: "state inputs must be two different properties",
            });
        }
        if key1.is_trivial() || key2.is_trivial() {
            return Err(FluidError::InvalidArg {
                what: "per-fluid constants cannot fix a state",
            });
        }
        Ok(())
    }
}
