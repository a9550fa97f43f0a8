//! oic-fluids: fluid property backends for the compressor calculator.
//!
//! Provides:
//! - The [`PropertyBackend`] contract: two independent properties in, a third out
//! - Property keys, resolved state points and the fluid catalog
//! - CoolProp backend (via `rfluids`) for real-fluid and saturation properties
//! - Perfect-gas backend for quick gas-compression estimates
//!
//! # Example
//!
//! ```no_run
//! use oic_fluids::{CoolPropModel, PropertyBackend, Species};
//! use oic_core::units::degc;
//!
//! let model = CoolPropModel::new();
//! let p_sat = model.saturation_pressure(Species::R134a, degc(-10.0), 1.0).unwrap();
//! let suction = model.state_tp(Species::R134a, degc(-5.0), p_sat).unwrap();
//! println!("h1 = {:.0} J/kg", suction.enthalpy());
//! ```

pub mod backend;
pub mod catalog;
pub mod coolprop;
pub mod error;
pub mod info;
pub mod key;
pub mod perfect_gas;
pub mod species;
pub mod state;

pub use backend::PropertyBackend;
pub use catalog::{FluidCatalogEntry, FluidFamily, catalog, filter_catalog};
pub use coolprop::{CoolPropModel, MOLAR_GAS_CONSTANT};
pub use error::{FluidError, FluidResult};
pub use info::{FluidInfo, fluid_info};
pub use key::PropertyKey;
pub use perfect_gas::{PerfectGas, PerfectGasModel};
pub use species::Species;
pub use state::{FluidState, SpecEnthalpy, SpecEntropy};
