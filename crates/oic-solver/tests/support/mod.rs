//! Deterministic in-test property backend.
//!
//! A toy refrigerant with an exponential vapour-pressure curve, ideal-gas
//! vapour (constant cp) and incompressible liquid. There is no two-phase
//! interior: a (T, P) pair is vapour at or above saturation and liquid below.
//! Every query whose temperature exceeds `max_t` fails, which stands in for
//! a real backend's envelope limit.

#![allow(dead_code)]

use oic_fluids::{FluidError, FluidResult, MOLAR_GAS_CONSTANT, PropertyBackend, PropertyKey, Species};

const T0: f64 = 273.15;
const P0: f64 = 3.0e5;
const B: f64 = 10.0;
const R: f64 = 100.0;
const CP: f64 = 800.0;
const CL: f64 = 1_400.0;
const RHO_L: f64 = 1_200.0;
const H_FG: f64 = 200_000.0;
const S_FG: f64 = H_FG / T0;

#[derive(Debug, Clone, Copy)]
pub struct ToyRefrigerant {
    pub max_t: f64,
}

impl Default for ToyRefrigerant {
    fn default() -> Self {
        Self {
            max_t: f64::INFINITY,
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Phase {
    Vapour,
    Liquid,
}

impl ToyRefrigerant {
    pub fn with_max_temperature(max_t: f64) -> Self {
        Self { max_t }
    }

    pub fn psat(t: f64) -> f64 {
        P0 * (B * (1.0 - T0 / t)).exp()
    }

    pub fn tsat(p: f64) -> f64 {
        T0 / (1.0 - (p / P0).ln() / B)
    }

    pub fn h_vapour(t: f64) -> f64 {
        H_FG + CP * (t - T0)
    }

    fn h(phase: Phase, t: f64) -> f64 {
        match phase {
            Phase::Vapour => Self::h_vapour(t),
            Phase::Liquid => CL * (t - T0),
        }
    }

    fn s(phase: Phase, t: f64, p: f64) -> f64 {
        match phase {
            Phase::Vapour => S_FG + CP * (t / T0).ln() - R * (p / P0).ln(),
            Phase::Liquid => CL * (t / T0).ln(),
        }
    }

    fn rho(phase: Phase, t: f64, p: f64) -> f64 {
        match phase {
            Phase::Vapour => p / (R * t),
            Phase::Liquid => RHO_L,
        }
    }

    fn phase_at(t: f64, p: f64) -> Phase {
        if t >= Self::tsat(p) - 1e-9 {
            Phase::Vapour
        } else {
            Phase::Liquid
        }
    }

    /// Resolve (phase, T, P) from a supported input pair.
    fn resolve(&self, a: (PropertyKey, f64), b: (PropertyKey, f64)) -> FluidResult<(Phase, f64, f64)> {
        use PropertyKey::{H, P, Q, S, T};
        let (phase, t, p) = match (a, b) {
            ((T, t), (P, p)) | ((P, p), (T, t)) => (Self::phase_at(t, p), t, p),
            ((T, t), (Q, q)) | ((Q, q), (T, t)) => {
                let phase = if q >= 0.5 { Phase::Vapour } else { Phase::Liquid };
                (phase, t, Self::psat(t))
            }
            ((P, p), (S, s)) | ((S, s), (P, p)) => {
                let t = T0 * ((s - S_FG + R * (p / P0).ln()) / CP).exp();
                (Phase::Vapour, t, p)
            }
            ((P, p), (H, h)) | ((H, h), (P, p)) => {
                if h >= Self::h_vapour(Self::tsat(p)) {
                    (Phase::Vapour, T0 + (h - H_FG) / CP, p)
                } else {
                    (Phase::Liquid, T0 + h / CL, p)
                }
            }
            _ => {
                return Err(FluidError::NotSupported {
                    what: "input pair not supported by the toy refrigerant",
                });
            }
        };
        if t > self.max_t {
            return Err(FluidError::OutOfRange {
                context: format!("T = {t:.2} K above Tmax = {:.2} K", self.max_t),
            });
        }
        Ok((phase, t, p))
    }
}

impl PropertyBackend for ToyRefrigerant {
    fn name(&self) -> &str {
        "ToyRefrigerant"
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
        match output {
            PropertyKey::MolarMass => return self.molar_mass(fluid),
            PropertyKey::GasConstant => return self.gas_constant(fluid),
            _ => {}
        }
        let (phase, t, p) = self.resolve((key1, value1), (key2, value2))?;
        Ok(match output {
            PropertyKey::T => t,
            PropertyKey::P => p,
            PropertyKey::H => Self::h(phase, t),
            PropertyKey::S => Self::s(phase, t, p),
            PropertyKey::D => Self::rho(phase, t, p),
            PropertyKey::Q => match phase {
                Phase::Vapour => 1.0,
                Phase::Liquid => 0.0,
            },
            PropertyKey::MolarMass | PropertyKey::GasConstant => unreachable!(),
        })
    }

    fn molar_mass(&self, _fluid: Species) -> FluidResult<f64> {
        Ok(MOLAR_GAS_CONSTANT / R)
    }

    fn gas_constant(&self, _fluid: Species) -> FluidResult<f64> {
        Ok(MOLAR_GAS_CONSTANT)
    }
}
