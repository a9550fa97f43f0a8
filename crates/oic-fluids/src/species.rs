//! Working fluids known to the calculator.

use crate::error::FluidError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Refrigerants and process gases handled by oil-injected compressors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Species {
    /// Refrigerant R134a
    R134a,
    /// Refrigerant R32
    R32,
    /// Refrigerant R125
    R125,
    /// Refrigerant R152a
    R152a,
    /// Refrigerant R245fa
    R245fa,
    /// Refrigerant R1234yf
    R1234yf,
    /// Ammonia (R717)
    Ammonia,
    /// Propane (R290)
    Propane,
    /// Isobutane (R600a)
    Isobutane,
    /// Propylene (R1270)
    Propylene,
    /// Carbon dioxide (R744)
    CO2,
    /// Air (pseudo-pure backend fluid)
    Air,
    /// Nitrogen (N₂)
    N2,
    /// Oxygen (O₂)
    O2,
    /// Hydrogen (H₂)
    H2,
    /// Helium (He)
    He,
    /// Argon (Ar)
    Ar,
    /// Methane (CH₄)
    CH4,
}

impl Species {
    pub const ALL: [Species; 18] = [
        Species::R134a,
        Species::R32,
        Species::R125,
        Species::R152a,
        Species::R245fa,
        Species::R1234yf,
        Species::Ammonia,
        Species::Propane,
        Species::Isobutane,
        Species::Propylene,
        Species::CO2,
        Species::Air,
        Species::N2,
        Species::O2,
        Species::H2,
        Species::He,
        Species::Ar,
        Species::CH4,
    ];

    /// Stable identifier used in case files.
    pub fn key(&self) -> &'static str {
        match self {
            Species::R134a => "R134a",
            Species::R32 => "R32",
            Species::R125 => "R125",
            Species::R152a => "R152a",
            Species::R245fa => "R245fa",
            Species::R1234yf => "R1234yf",
            Species::Ammonia => "Ammonia",
            Species::Propane => "Propane",
            Species::Isobutane => "Isobutane",
            Species::Propylene => "Propylene",
            Species::CO2 => "CO2",
            Species::Air => "Air",
            Species::N2 => "Nitrogen",
            Species::O2 => "Oxygen",
            Species::H2 => "Hydrogen",
            Species::He => "Helium",
            Species::Ar => "Argon",
            Species::CH4 => "Methane",
        }
    }

    /// CoolProp fluid name for this species.
    pub fn coolprop_name(&self) -> &'static str {
        match self {
            Species::R134a => "R134a",
            Species::R32 => "R32",
            Species::R125 => "R125",
            Species::R152a => "R152a",
            Species::R245fa => "R245fa",
            Species::R1234yf => "R1234yf",
            Species::Ammonia => "Ammonia",
            Species::Propane => "n-Propane",
            Species::Isobutane => "Isobutane",
            Species::Propylene => "Propylene",
            Species::CO2 => "CarbonDioxide",
            Species::Air => "Air",
            Species::N2 => "Nitrogen",
            Species::O2 => "Oxygen",
            Species::H2 => "Hydrogen",
            Species::He => "Helium",
            Species::Ar => "Argon",
            Species::CH4 => "Methane",
        }
    }

    /// Map to the rfluids substance used by the CoolProp backend.
    pub(crate) fn rfluids_pure(&self) -> rfluids::substance::Pure {
        use rfluids::substance::Pure;
        match self {
            Species::R134a => Pure::R134a,
            Species::R32 => Pure::R32,
            Species::R125 => Pure::R125,
            Species::R152a => Pure::R152a,
            Species::R245fa => Pure::R245fa,
            Species::R1234yf => Pure::R1234yf,
            Species::Ammonia => Pure::Ammonia,
            Species::Propane => Pure::nPropane,
            Species::Isobutane => Pure::Isobutane,
            Species::Propylene => Pure::Propylene,
            Species::CO2 => Pure::CarbonDioxide,
            Species::Air => Pure::Air,
            Species::N2 => Pure::Nitrogen,
            Species::O2 => Pure::Oxygen,
            Species::H2 => Pure::Hydrogen,
            Species::He => Pure::Helium,
            Species::Ar => Pure::Argon,
            Species::CH4 => Pure::Methane,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Species {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::catalog::resolve(s)
            .map(|entry| entry.species)
            .ok_or_else(|| FluidError::UnknownFluid {
                name: s.trim().to_string(),
            })
    }
}

impl TryFrom<String> for Species {
    type Error = FluidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Species> for String {
    fn from(species: Species) -> Self {
        species.key().to_string()
    }
}
