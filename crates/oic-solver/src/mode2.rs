//! Mode 2: refrigeration / heat-pump performance prediction.
//!
//! The actual discharge temperature is an input: oil injection holds it below
//! the adiabatic value, and the difference is the heat carried off by the oil.
//!
//! State points:
//! - 1: suction, `Te + superheat` at `Pe`
//! - 2s: isentropic discharge at `Pc`
//! - 2a: actual discharge, `T2a_est` at `Pc`
//! - 3: liquid line, `Tc − subcooling` at `Pc`
//! - 4: evaporator inlet, `h4 = h3`

use crate::compression::{Compression, ReferenceProcess, compress};
use crate::cooler::{CoolerResult, CoolerSpec, cool};
use crate::efficiency::EfficiencySpec;
use crate::error::{SolverError, SolverResult};
use crate::flow::FlowSpec;
use crate::mode1::non_negative;
use crate::oil::split_at;
use crate::options::{NoOilPolicy, SolverOptions};
use crate::saturation::{Side, cycle_pressures, line_state};
use oic_core::units::{Power, Pressure, degc, w};
use oic_core::{Tolerances, convert, ensure_finite, nearly_equal};
use oic_fluids::{FluidState, PropertyBackend};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mode2Inputs {
    pub fluid: oic_fluids::Species,
    pub flow: FlowSpec,
    pub te_c: f64,
    pub tc_c: f64,
    pub superheat_k: f64,
    pub subcooling_k: f64,
    pub eta_v: f64,
    /// Isentropic-referenced efficiency and motor efficiency.
    pub efficiency: EfficiencySpec,
    /// Estimated actual discharge temperature [°C]
    pub t2a_est_c: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desuperheater: Option<CoolerSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mode2Result {
    pub inputs: Mode2Inputs,
    pub pe: Pressure,
    pub pc: Pressure,
    pub suction: FluidState,
    pub isentropic_discharge: FluidState,
    /// Discharge state used for the heat balance (estimated, or oil-free when clamped).
    pub discharge: FluidState,
    pub liquid: FluidState,
    pub h4: f64,
    pub compression: Compression,
    pub q_evap: Power,
    pub q_cond: Power,
    pub q_gas: Power,
    pub q_oil: Power,
    pub q_total_heat: Power,
    pub cop_r: f64,
    pub cop_h_cond: f64,
    pub cop_h_total: f64,
    /// True when the no-oil floor was hit and `Q_oil` was pinned at zero.
    pub oil_clamped: bool,
    pub desuperheater: Option<CoolerResult>,
    pub notes: Vec<String>,
}

impl Mode2Result {
    /// Oil-free (adiabatic) discharge state, `h = h1 + W_shaft / m_dot`.
    pub fn adiabatic_discharge(&self) -> &FluidState {
        &self.compression.adiabatic_discharge
    }
}

/// Predict refrigeration-cycle performance of an oil-injected compressor.
///
/// # Errors
/// - `InvalidInput`: negative superheat or subcooling, non-positive efficiencies,
///   bad flow spec or desuperheater target
/// - `PhysicallyInvalid`: `T2a_est <= Tc`, `Pc <= Pe`, negative oil load under
///   [`NoOilPolicy::Reject`]
/// - `PropertyLookupFailed`: any state outside the fluid's envelope
pub fn solve_mode2(
    backend: &dyn PropertyBackend,
    inputs: &Mode2Inputs,
    options: &SolverOptions,
) -> SolverResult<Mode2Result> {
    let te_c = ensure_finite(inputs.te_c, "te_c")?;
    let tc_c = ensure_finite(inputs.tc_c, "tc_c")?;
    let t2a_est_c = ensure_finite(inputs.t2a_est_c, "t2a_est_c")?;
    let superheat = non_negative(inputs.superheat_k, "superheat_k")?;
    let subcooling = non_negative(inputs.subcooling_k, "subcooling_k")?;
    oic_core::ensure_positive(inputs.eta_v, "eta_v")?;
    inputs.efficiency.validate()?;
    inputs.flow.theoretical_flow()?;

    if t2a_est_c <= tc_c {
        return Err(SolverError::physically_invalid(
            "discharge temperature",
            format!(
                "estimated discharge {t2a_est_c} °C must exceed condensing temperature {tc_c} °C (short by {:.2} K)",
                tc_c - t2a_est_c
            ),
        ));
    }

    let fluid = inputs.fluid;
    let (pe, pc) = cycle_pressures(backend, fluid, degc(te_c), degc(tc_c), 1.0)?;
    if pc.value <= pe.value {
        return Err(SolverError::physically_invalid(
            "pressure ratio",
            format!(
                "condensing pressure {:.3} bar must exceed evaporating pressure {:.3} bar",
                convert::pa_to_bar(pc.value),
                convert::pa_to_bar(pe.value)
            ),
        ));
    }

    let suction = line_state(backend, fluid, degc(te_c), pe, superheat, Side::Vapour)?;
    let liquid = line_state(backend, fluid, degc(tc_c), pc, subcooling, Side::Liquid)?;
    let h4 = liquid.enthalpy();

    let compression = compress(
        backend,
        fluid,
        &suction,
        pc,
        &inputs.flow,
        inputs.eta_v,
        &inputs.efficiency,
        ReferenceProcess::Isentropic,
    )?;
    let isentropic_discharge = compression.ideal.outlet.ok_or_else(|| {
        SolverError::physically_invalid("isentropic discharge", "reference state missing")
    })?;
    let m_dot = compression.m_dot.value;
    let w_shaft = compression.power.w_shaft.value;
    let w_input = compression.power.w_input.value;

    // The estimate is only looked up when it is reachable with oil cooling.
    let mut notes = Vec::new();
    let no_oil = compression.adiabatic_discharge;
    let t2a_no_oil_c = convert::kelvin_to_celsius(no_oil.temperature().value);
    let (discharge, q_oil, oil_clamped) = if degc(t2a_est_c) <= no_oil.temperature() {
        let estimate = split_at(
            backend,
            fluid,
            &suction,
            compression.m_dot,
            compression.power.w_shaft,
            degc(t2a_est_c),
            pc,
        )
        .map_err(SolverError::lookup("estimated discharge state"))?;
        (estimate.discharge, estimate.q_oil.value, false)
    } else {
        match options.no_oil {
            NoOilPolicy::Reject => {
                return Err(SolverError::physically_invalid(
                    "oil load",
                    format!(
                        "estimated discharge {t2a_est_c:.2} °C is above the oil-free discharge {t2a_no_oil_c:.2} °C; the oil load would be negative"
                    ),
                ));
            }
            NoOilPolicy::Clamp => {
                warn!(
                    t2a_est_c,
                    t2a_no_oil_c, "Estimated discharge unreachable, clamping oil load to zero"
                );
                notes.push(format!(
                    "Estimated discharge {t2a_est_c:.2} °C is unreachable without oil cooling; using the oil-free discharge {t2a_no_oil_c:.2} °C with Q_oil = 0"
                ));
                (no_oil, 0.0, true)
            }
        }
    };

    let h1 = suction.enthalpy();
    let h2a = discharge.enthalpy();
    let q_evap = m_dot * (h1 - h4);
    let q_cond = m_dot * (h2a - liquid.enthalpy());
    let q_gas = m_dot * (h2a - h1);
    let q_total_heat = w_shaft + q_evap;

    if !nearly_equal(q_cond + q_oil, q_total_heat, Tolerances::ENERGY_BALANCE) {
        return Err(SolverError::physically_invalid(
            "energy balance",
            format!(
                "Q_cond + Q_oil = {:.3} W but W_shaft + Q_evap = {q_total_heat:.3} W",
                q_cond + q_oil
            ),
        ));
    }

    let desuperheater = match &inputs.desuperheater {
        Some(spec) => {
            let mut stage = cool(
                backend,
                fluid,
                compression.m_dot,
                &no_oil,
                spec,
                Some(degc(tc_c)),
            )?;
            stage.remaining_duty = Some(w(q_cond + q_oil - stage.heat_removed.value));
            Some(stage)
        }
        None => None,
    };

    debug!(
        fluid = %fluid,
        m_dot,
        w_shaft,
        q_evap,
        q_oil,
        "Mode 2 solved"
    );

    Ok(Mode2Result {
        inputs: inputs.clone(),
        pe,
        pc,
        suction,
        isentropic_discharge,
        discharge,
        liquid,
        h4,
        q_evap: w(q_evap),
        q_cond: w(q_cond),
        q_gas: w(q_gas),
        q_oil: w(q_oil),
        q_total_heat: w(q_total_heat),
        cop_r: q_evap / w_input,
        cop_h_cond: q_cond / w_input,
        cop_h_total: q_total_heat / w_input,
        oil_clamped,
        desuperheater,
        compression,
        notes,
    })
}
