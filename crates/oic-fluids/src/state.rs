//! Thermodynamic state points.

use crate::error::{FluidError, FluidResult};
use oic_core::units::{Density, Pressure, Temperature};
use serde::Serialize;

/// Specific enthalpy [J/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific entropy [J/(kg·K)].
pub type SpecEntropy = f64;

/// A resolved thermodynamic point.
///
/// Temperature, pressure and enthalpy are always present. Entropy and density
/// are filled when the producing call evaluated them. A state is never
/// mutated after construction; recomputation produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FluidState {
    t: Temperature,
    p: Pressure,
    h: SpecEnthalpy,
    s: Option<SpecEntropy>,
    rho: Option<Density>,
}

impl FluidState {
    /// Create a state from its defining properties.
    ///
    /// Validates that pressure and temperature are positive and that every
    /// supplied value is finite.
    pub fn new(t: Temperature, p: Pressure, h: SpecEnthalpy) -> FluidResult<Self> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        if !h.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "enthalpy must be finite",
            });
        }
        Ok(Self {
            t,
            p,
            h,
            s: None,
            rho: None,
        })
    }

    pub fn with_entropy(mut self, s: SpecEntropy) -> FluidResult<Self> {
        if !s.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "entropy must be finite",
            });
        }
        self.s = Some(s);
        Ok(self)
    }

    pub fn with_density(mut self, rho: Density) -> FluidResult<Self> {
        if !rho.value.is_finite() || rho.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "density must be positive and finite",
            });
        }
        self.rho = Some(rho);
        Ok(self)
    }

    pub fn temperature(&self) -> Temperature {
        self.t
    }

    pub fn pressure(&self) -> Pressure {
        self.p
    }

    pub fn enthalpy(&self) -> SpecEnthalpy {
        self.h
    }

    pub fn entropy(&self) -> Option<SpecEntropy> {
        self.s
    }

    pub fn density(&self) -> Option<Density> {
        self.rho
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oic_core::units::{k, kgpm3, pa};

    #[test]
    fn create_valid_state() {
        let state = FluidState::new(k(300.0), pa(101_325.0), 4.2e5)
            .and_then(|s| s.with_entropy(1.7e3))
            .and_then(|s| s.with_density(kgpm3(1.16)))
            .unwrap();
        assert_eq!(state.pressure().value, 101_325.0);
        assert_eq!(state.temperature().value, 300.0);
        assert_eq!(state.entropy(), Some(1.7e3));
        assert!(state.density().is_some());
    }

    #[test]
    fn optional_fields_start_empty() {
        let state = FluidState::new(k(300.0), pa(1e5), 0.0).unwrap();
        assert!(state.entropy().is_none());
        assert!(state.density().is_none());
    }

    #[test]
    fn reject_non_physical() {
        assert!(FluidState::new(k(300.0), pa(-100.0), 0.0).is_err());
        assert!(FluidState::new(k(0.0), pa(1e5), 0.0).is_err());
        assert!(FluidState::new(k(300.0), pa(1e5), f64::NAN).is_err());
        let state = FluidState::new(k(300.0), pa(1e5), 0.0).unwrap();
        assert!(state.with_density(kgpm3(0.0)).is_err());
    }
}
