//! oic-solver: the three calculation modes of the compressor calculator.
//!
//! Provides:
//! - Flow resolution (speed × displacement, or direct volume flow)
//! - Efficiency basis resolution (shaft- vs input-referenced)
//! - Mode 1: evaluation of measured data (volumetric efficiency, oil/gas split)
//! - Mode 2: refrigeration / heat-pump prediction (isentropic reference)
//! - Mode 3: gas compression prediction (isothermal reference by default)
//!
//! Every solver is a stateless function of a backend and an input record.
//!
//! # Example
//!
//! ```no_run
//! use oic_fluids::{CoolPropModel, Species};
//! use oic_solver::{EfficiencySpec, FlowSpec, Mode3Inputs, ReferenceProcess, solve_mode3};
//!
//! let inputs = Mode3Inputs {
//!     fluid: Species::Air,
//!     flow: FlowSpec::ByVolume { flow_m3_h: 120.0 },
//!     pe_bar: 1.0,
//!     te_c: 20.0,
//!     pc_bar: 8.0,
//!     eta_v: 0.9,
//!     efficiency: EfficiencySpec::shaft(0.7, 0.94),
//!     reference: ReferenceProcess::Isothermal,
//!     t2a_actual_c: Some(85.0),
//!     aftercooler: None,
//! };
//! let result = solve_mode3(&CoolPropModel::new(), &inputs).unwrap();
//! println!("W_shaft = {:.2} kW", result.compression.power.w_shaft.value / 1e3);
//! ```

pub mod compression;
pub mod cooler;
pub mod efficiency;
pub mod error;
pub mod flow;
pub mod mode1;
pub mod mode2;
pub mod mode3;
pub mod oil;
pub mod options;
mod saturation;

pub use compression::{Compression, IdealWork, ReferenceProcess, compress, ideal_work};
pub use cooler::{CoolerResult, CoolerSpec};
pub use efficiency::{EfficiencyBasis, EfficiencySpec, PowerSplit, resolve_power};
pub use error::{SolverError, SolverResult};
pub use flow::FlowSpec;
pub use mode1::{CapacityMeasurement, Mode1Inputs, Mode1Result, PowerMeasurement, solve_mode1};
pub use mode2::{Mode2Inputs, Mode2Result, solve_mode2};
pub use mode3::{Mode3Inputs, Mode3Result, solve_mode3};
pub use oil::{MeasuredDischarge, OilSplit};
pub use options::{NoOilPolicy, SolverOptions};
