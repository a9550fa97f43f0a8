//! Mode 3: gas compression performance prediction.
//!
//! Suction and discharge are fixed by absolute pressures instead of
//! saturation temperatures. The efficiency baseline defaults to isothermal
//! work, the usual rating for oil-injected gas compressors.

use crate::compression::{Compression, ReferenceProcess, compress};
use crate::cooler::{CoolerResult, CoolerSpec, cool};
use crate::efficiency::EfficiencySpec;
use crate::error::{SolverError, SolverResult};
use crate::flow::FlowSpec;
use crate::oil::{MeasuredDischarge, require_split};
use oic_core::units::{Power, Pressure, bar, degc, w};
use oic_core::{ensure_finite, ensure_positive};
use oic_fluids::{FluidState, PropertyBackend, Species};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mode3Inputs {
    pub fluid: Species,
    pub flow: FlowSpec,
    /// Inlet pressure, absolute [bar]
    pub pe_bar: f64,
    /// Inlet temperature [°C]
    pub te_c: f64,
    /// Outlet pressure, absolute [bar]
    pub pc_bar: f64,
    pub eta_v: f64,
    pub efficiency: EfficiencySpec,
    #[serde(default)]
    pub reference: ReferenceProcess,
    /// Measured or estimated actual discharge temperature [°C]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t2a_actual_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aftercooler: Option<CoolerSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mode3Result {
    pub inputs: Mode3Inputs,
    pub pe: Pressure,
    pub pc: Pressure,
    pub suction: FluidState,
    pub compression: Compression,
    /// Heat added to the gas stream in the adiabatic-equivalent case.
    pub q_discharge: Power,
    /// Oil/gas split when an actual discharge temperature was given.
    pub measured: Option<MeasuredDischarge>,
    pub aftercooler: Option<CoolerResult>,
}

impl Mode3Result {
    /// Adiabatic-equivalent discharge, `h = h1 + W_shaft / m_dot`.
    pub fn adiabatic_discharge(&self) -> &FluidState {
        &self.compression.adiabatic_discharge
    }

    /// Ideal reference work (isothermal or isentropic).
    pub fn ideal_work(&self) -> Power {
        self.compression.ideal.work
    }
}

/// Predict gas-compression performance.
///
/// # Errors
/// - `InvalidInput`: non-positive pressures, `Pc <= Pe`, non-positive
///   efficiencies, bad flow spec or aftercooler target
/// - `PhysicallyInvalid`: negative oil load implied by `t2a_actual_c`
/// - `PropertyLookupFailed`: any state outside the fluid's envelope
pub fn solve_mode3(backend: &dyn PropertyBackend, inputs: &Mode3Inputs) -> SolverResult<Mode3Result> {
    let pe_bar = ensure_positive(inputs.pe_bar, "pe_bar")?;
    let pc_bar = ensure_positive(inputs.pc_bar, "pc_bar")?;
    if pc_bar <= pe_bar {
        return Err(SolverError::invalid(
            "pc_bar",
            format!("outlet pressure {pc_bar} bar must exceed inlet pressure {pe_bar} bar"),
        ));
    }
    let te_c = ensure_finite(inputs.te_c, "te_c")?;
    let t2a_c = inputs
        .t2a_actual_c
        .map(|t| ensure_finite(t, "t2a_actual_c"))
        .transpose()?;
    ensure_positive(inputs.eta_v, "eta_v")?;
    inputs.efficiency.validate()?;
    inputs.flow.theoretical_flow()?;

    let fluid = inputs.fluid;
    let (pe, pc) = (bar(pe_bar), bar(pc_bar));
    let suction = backend
        .state_tp(fluid, degc(te_c), pe)
        .map_err(SolverError::lookup("suction state"))?;

    let compression = compress(
        backend,
        fluid,
        &suction,
        pc,
        &inputs.flow,
        inputs.eta_v,
        &inputs.efficiency,
        inputs.reference,
    )?;
    let adiabatic = compression.adiabatic_discharge;
    let q_discharge = compression.m_dot.value * (adiabatic.enthalpy() - suction.enthalpy());

    let measured = match t2a_c {
        Some(t2a_c) => Some(require_split(
            backend,
            fluid,
            &suction,
            compression.m_dot,
            compression.power.w_shaft,
            degc(t2a_c),
            pc,
        )?),
        None => None,
    };

    let aftercooler = match &inputs.aftercooler {
        Some(spec) => Some(cool(backend, fluid, compression.m_dot, &adiabatic, spec, None)?),
        None => None,
    };

    debug!(
        fluid = %fluid,
        reference = %inputs.reference,
        m_dot = compression.m_dot.value,
        w_ideal = compression.ideal.work.value,
        w_shaft = compression.power.w_shaft.value,
        "Mode 3 solved"
    );

    Ok(Mode3Result {
        inputs: inputs.clone(),
        pe,
        pc,
        suction,
        compression,
        q_discharge: w(q_discharge),
        measured,
        aftercooler,
    })
}
