//! Calorically perfect gas backend.
//!
//! An ideal-gas equation of state with a constant `cp`:
//!
//! ```text
//! p = ρ·R·T
//! h = cp·(T − T_ref)
//! s = cp·ln(T/T_ref) − R·ln(p/p_ref)
//! ```
//!
//! with `R = R_u / M`, `T_ref = 273.15 K` and `p_ref = 101 325 Pa`. Every
//! input pair among T, P, H, S and D is inverted in closed form. There is no
//! two-phase region, so vapour quality is neither accepted nor produced.

use crate::backend::{PropertyBackend, validation};
use crate::coolprop::MOLAR_GAS_CONSTANT;
use crate::error::{FluidError, FluidResult};
use crate::key::PropertyKey;
use crate::species::Species;
use std::collections::HashMap;

const T_REF: f64 = 273.15;
const P_REF: f64 = 101_325.0;

/// Constant parameters of one gas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGas {
    /// Molar mass [kg/mol]
    pub molar_mass: f64,
    /// Specific heat at constant pressure [J/(kg·K)]
    pub cp: f64,
}

impl PerfectGas {
    /// # Errors
    /// Returns error unless both values are positive and `cv = cp − R` stays positive.
    pub fn new(molar_mass: f64, cp: f64) -> FluidResult<Self> {
        validation::positive(molar_mass, "molar mass must be positive and finite")?;
        validation::positive(cp, "cp must be positive and finite")?;
        let gas = Self { molar_mass, cp };
        if cp <= gas.r() {
            return Err(FluidError::NonPhysical {
                what: "cp must exceed the specific gas constant",
            });
        }
        Ok(gas)
    }

    /// Specific gas constant [J/(kg·K)].
    pub fn r(&self) -> f64 {
        MOLAR_GAS_CONSTANT / self.molar_mass
    }

    fn h(&self, t: f64) -> f64 {
        self.cp * (t - T_REF)
    }

    fn s(&self, t: f64, p: f64) -> f64 {
        self.cp * (t / T_REF).ln() - self.r() * (p / P_REF).ln()
    }

    fn t_from_h(&self, h: f64) -> f64 {
        T_REF + h / self.cp
    }

    fn t_from_ps(&self, p: f64, s: f64) -> f64 {
        T_REF * ((s + self.r() * (p / P_REF).ln()) / self.cp).exp()
    }

    fn p_from_ts(&self, t: f64, s: f64) -> f64 {
        P_REF * ((self.cp * (t / T_REF).ln() - s) / self.r()).exp()
    }

    /// Resolve `(T, p)` from any supported input pair.
    fn solve_tp(&self, a: (PropertyKey, f64), b: (PropertyKey, f64)) -> FluidResult<(f64, f64)> {
        use PropertyKey::{D, H, P, S, T};

        // Canonical order so each pair is matched once.
        let rank = |key: PropertyKey| match key {
            T => 0,
            P => 1,
            H => 2,
            S => 3,
            D => 4,
            _ => 5,
        };
        let (first, second) = if rank(a.0) <= rank(b.0) { (a, b) } else { (b, a) };
        let r = self.r();

        let (t, p) = match (first, second) {
            ((T, t), (P, p)) => (t, p),
            ((T, t), (S, s)) => (t, self.p_from_ts(t, s)),
            ((T, t), (D, rho)) => (t, rho * r * t),
            ((P, p), (H, h)) => (self.t_from_h(h), p),
            ((P, p), (S, s)) => (self.t_from_ps(p, s), p),
            ((P, p), (D, rho)) => (p / (rho * r), p),
            ((H, h), (S, s)) => {
                let t = self.t_from_h(h);
                (t, self.p_from_ts(t, s))
            }
            ((H, h), (D, rho)) => {
                let t = self.t_from_h(h);
                (t, rho * r * t)
            }
            ((T, _), (H, _)) => {
                return Err(FluidError::InvalidArg {
                    what: "temperature and enthalpy are not independent for a perfect gas",
                });
            }
            _ => {
                return Err(FluidError::NotSupported {
                    what: "perfect gas has no two-phase region",
                });
            }
        };

        let t = validation::positive(t, "temperature must be positive and finite")?;
        let p = validation::positive(p, "pressure must be positive and finite")?;
        Ok((t, p))
    }
}

/// Perfect-gas backend with per-species parameters.
#[derive(Debug, Clone)]
pub struct PerfectGasModel {
    gases: HashMap<Species, PerfectGas>,
}

impl PerfectGasModel {
    /// Model with room-temperature parameters for the catalog's gases.
    pub fn new() -> Self {
        // (molar mass kg/mol, cp J/(kg·K)) near 300 K
        let defaults = [
            (Species::Air, 0.028_965, 1_005.0),
            (Species::N2, 0.028_014, 1_040.0),
            (Species::O2, 0.031_999, 918.0),
            (Species::H2, 0.002_016, 14_310.0),
            (Species::He, 0.004_003, 5_193.0),
            (Species::Ar, 0.039_948, 520.3),
            (Species::CH4, 0.016_043, 2_226.0),
            (Species::CO2, 0.044_010, 846.0),
        ];
        let gases = defaults
            .into_iter()
            .map(|(species, molar_mass, cp)| (species, PerfectGas { molar_mass, cp }))
            .collect();
        Self { gases }
    }

    /// Model with a single gas, replacing the defaults.
    pub fn single(species: Species, gas: PerfectGas) -> Self {
        Self {
            gases: HashMap::from([(species, gas)]),
        }
    }

    pub fn gas(&self, species: Species) -> FluidResult<&PerfectGas> {
        self.gases.get(&species).ok_or(FluidError::NotSupported {
            what: "no perfect-gas parameters for this fluid",
        })
    }
}

impl Default for PerfectGasModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyBackend for PerfectGasModel {
    fn name(&self) -> &str {
        "PerfectGas"
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
        let gas = self.gas(fluid)?;
        match output {
            PropertyKey::MolarMass => return Ok(gas.molar_mass),
            PropertyKey::GasConstant => return Ok(MOLAR_GAS_CONSTANT),
            PropertyKey::Q => {
                return Err(FluidError::NotSupported {
                    what: "perfect gas has no two-phase region",
                });
            }
            _ => {}
        }

        validation::input_pair(key1, key2)?;
        validation::finite(value1, "state input must be finite")?;
        validation::finite(value2, "state input must be finite")?;
        let (t, p) = gas.solve_tp((key1, value1), (key2, value2))?;

        let value = match output {
            PropertyKey::T => t,
            PropertyKey::P => p,
            PropertyKey::H => gas.h(t),
            PropertyKey::S => gas.s(t, p),
            PropertyKey::D => p / (gas.r() * t),
            PropertyKey::Q | PropertyKey::MolarMass | PropertyKey::GasConstant => {
                return Err(FluidError::InvalidArg {
                    what: "output handled before state resolution",
                });
            }
        };
        validation::finite(value, "perfect gas produced a non-finite value")
    }

    fn molar_mass(&self, fluid: Species) -> FluidResult<f64> {
        Ok(self.gas(fluid)?.molar_mass)
    }

    fn gas_constant(&self, fluid: Species) -> FluidResult<f64> {
        self.gas(fluid)?;
        Ok(MOLAR_GAS_CONSTANT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oic_core::units::{bar, k};

    fn close(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * a.abs().max(b.abs()).max(1e-12)
    }

    #[test]
    fn density_follows_ideal_gas_law() {
        let model = PerfectGasModel::new();
        let rho = model
            .property(
                PropertyKey::D,
                PropertyKey::T,
                300.0,
                PropertyKey::P,
                1e5,
                Species::N2,
            )
            .unwrap();
        let r = MOLAR_GAS_CONSTANT / 0.028_014;
        assert!(close(rho, 1e5 / (r * 300.0), 1e-12));
    }

    #[test]
    fn input_order_does_not_matter() {
        let model = PerfectGasModel::new();
        let a = model
            .property(PropertyKey::H, PropertyKey::T, 350.0, PropertyKey::P, 2e5, Species::Air)
            .unwrap();
        let b = model
            .property(PropertyKey::H, PropertyKey::P, 2e5, PropertyKey::T, 350.0, Species::Air)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn isentropic_end_point_matches_closed_form() {
        let model = PerfectGasModel::new();
        let gas = *model.gas(Species::Air).unwrap();
        let s1 = model.state_tp(Species::Air, k(300.0), bar(1.0)).unwrap();
        let s2 = model
            .state_ps(Species::Air, bar(5.0), s1.entropy().unwrap())
            .unwrap();
        let expected = 300.0 * 5.0_f64.powf(gas.r() / gas.cp);
        assert!(close(s2.temperature().value, expected, 1e-9));
    }

    #[test]
    fn ph_inverts_tp() {
        let model = PerfectGasModel::new();
        let s1 = model.state_tp(Species::He, k(320.0), bar(3.0)).unwrap();
        let back = model
            .state_ph(Species::He, bar(3.0), s1.enthalpy())
            .unwrap();
        assert!(close(back.temperature().value, 320.0, 1e-12));
    }

    #[test]
    fn saturation_is_not_supported() {
        let model = PerfectGasModel::new();
        let err = model
            .saturation_pressure(Species::N2, k(77.0), 1.0)
            .unwrap_err();
        assert!(matches!(err, FluidError::NotSupported { .. }));
    }

    #[test]
    fn unknown_species_is_not_supported() {
        let model = PerfectGasModel::new();
        assert!(model.molar_mass(Species::R134a).is_err());
    }

    #[test]
    fn custom_gas_validation() {
        assert!(PerfectGas::new(0.028, 1_040.0).is_ok());
        assert!(PerfectGas::new(0.028, 100.0).is_err());
        assert!(PerfectGas::new(-1.0, 1_040.0).is_err());
        let model = PerfectGasModel::single(Species::N2, PerfectGas::new(0.028, 1_000.0).unwrap());
        assert!(model.gas(Species::Air).is_err());
        assert!(model.gas(Species::N2).is_ok());
    }
}
