//! Property keys accepted by [`PropertyBackend::property`](crate::PropertyBackend::property).

use crate::error::FluidError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A thermodynamic quantity that can be requested from, or supplied to, a backend.
///
/// Units are SI on both sides: Pa, K, J/kg, J/(kg·K), kg/m³, quality in [0, 1],
/// J/(mol·K) for the molar gas constant and kg/mol for molar mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKey {
    P,
    T,
    H,
    S,
    D,
    Q,
    GasConstant,
    MolarMass,
}

impl PropertyKey {
    pub const ALL: [PropertyKey; 8] = [
        PropertyKey::P,
        PropertyKey::T,
        PropertyKey::H,
        PropertyKey::S,
        PropertyKey::D,
        PropertyKey::Q,
        PropertyKey::GasConstant,
        PropertyKey::MolarMass,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            PropertyKey::P => "P",
            PropertyKey::T => "T",
            PropertyKey::H => "H",
            PropertyKey::S => "S",
            PropertyKey::D => "D",
            PropertyKey::Q => "Q",
            PropertyKey::GasConstant => "GAS_CONSTANT",
            PropertyKey::MolarMass => "MOLAR_MASS",
        }
    }

    /// Per-fluid constants that need no state inputs.
    pub fn is_trivial(&self) -> bool {
        matches!(self, PropertyKey::GasConstant | PropertyKey::MolarMass)
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for PropertyKey {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        PropertyKey::ALL
            .into_iter()
            .find(|key| key.symbol() == upper)
            .ok_or(FluidError::InvalidArg {
                what: "unknown property key",
            })
    }
}
