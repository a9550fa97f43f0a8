//! Mode 1: performance evaluation from measured field data.
//!
//! Back-calculates volumetric efficiency and the oil/gas heat split from a
//! measured capacity, a measured power and a measured discharge temperature.

use crate::error::{SolverError, SolverResult};
use crate::flow::FlowSpec;
use crate::oil::{OilSplit, split_at};
use crate::saturation::{Side, cycle_pressures, line_state};
use oic_core::units::{MassRate, Power, Pressure, VolumeRate, degc, kgps, m3ps, w};
use oic_core::{convert, ensure_finite, ensure_positive};
use oic_fluids::{FluidState, PropertyBackend, Species};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Measured capacity, tagged by which side of the cycle it was measured on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CapacityMeasurement {
    Refrigeration { kw: f64 },
    Heating { kw: f64 },
}

/// Measured power, tagged by where it was measured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PowerMeasurement {
    Shaft { kw: f64 },
    Input { kw: f64, motor_efficiency: f64 },
}

impl PowerMeasurement {
    /// Motor efficiency when the power was measured at the electrical input.
    pub fn motor_efficiency(&self) -> Option<f64> {
        match *self {
            PowerMeasurement::Shaft { .. } => None,
            PowerMeasurement::Input {
                motor_efficiency, ..
            } => Some(motor_efficiency),
        }
    }
}

impl fmt::Display for CapacityMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityMeasurement::Refrigeration { kw } => write!(f, "{kw} kW (refrigeration)"),
            CapacityMeasurement::Heating { kw } => write!(f, "{kw} kW (heating)"),
        }
    }
}

impl fmt::Display for PowerMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerMeasurement::Shaft { kw } => write!(f, "{kw} kW (shaft)"),
            PowerMeasurement::Input {
                kw,
                motor_efficiency,
            } => write!(f, "{kw} kW (input, motor eff. {motor_efficiency})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mode1Inputs {
    pub fluid: Species,
    pub flow: FlowSpec,
    /// Evaporating temperature [°C]
    pub te_c: f64,
    /// Condensing temperature [°C]
    pub tc_c: f64,
    pub superheat_k: f64,
    pub subcooling_k: f64,
    pub capacity: CapacityMeasurement,
    pub power: PowerMeasurement,
    /// Measured discharge temperature [°C]
    pub t2a_c: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mode1Result {
    pub inputs: Mode1Inputs,
    pub pe: Pressure,
    pub pc: Pressure,
    pub suction: FluidState,
    pub liquid: FluidState,
    /// Evaporator inlet enthalpy, equal to the liquid line's [J/kg].
    pub h4: f64,
    pub v_th: VolumeRate,
    pub v_act: VolumeRate,
    pub eta_v: f64,
    pub m_dot: MassRate,
    pub w_shaft: Power,
    pub w_input: Option<Power>,
    pub q_evap: Power,
    pub q_heat: Power,
    pub oil: OilSplit,
    pub notes: Vec<String>,
}

/// Evaluate a compressor from measured data.
///
/// Every failure aborts the solve except the discharge-state lookup, which
/// degrades to [`OilSplit::Unavailable`].
pub fn solve_mode1(backend: &dyn PropertyBackend, inputs: &Mode1Inputs) -> SolverResult<Mode1Result> {
    let v_th = inputs.flow.theoretical_flow()?;
    let te_c = ensure_finite(inputs.te_c, "te_c")?;
    let tc_c = ensure_finite(inputs.tc_c, "tc_c")?;
    let t2a_c = ensure_finite(inputs.t2a_c, "t2a_c")?;
    let superheat = non_negative(inputs.superheat_k, "superheat_k")?;
    let subcooling = non_negative(inputs.subcooling_k, "subcooling_k")?;
    if tc_c <= te_c {
        return Err(SolverError::invalid(
            "tc_c",
            format!("condensing temperature {tc_c} °C must exceed evaporating temperature {te_c} °C"),
        ));
    }

    let (w_shaft, w_input) = match inputs.power {
        PowerMeasurement::Shaft { kw } => (convert::kw_to_w(ensure_positive(kw, "power.kw")?), None),
        PowerMeasurement::Input {
            kw,
            motor_efficiency,
        } => {
            let w_in = convert::kw_to_w(ensure_positive(kw, "power.kw")?);
            let motor = ensure_positive(motor_efficiency, "power.motor_efficiency")?;
            if motor > 1.0 {
                return Err(SolverError::invalid(
                    "power.motor_efficiency",
                    format!("must not exceed 1, got {motor}"),
                ));
            }
            (w_in * motor, Some(w_in))
        }
    };

    let (q_evap, q_heat) = match inputs.capacity {
        CapacityMeasurement::Refrigeration { kw } => {
            let qe = convert::kw_to_w(ensure_positive(kw, "capacity.kw")?);
            (qe, qe + w_shaft)
        }
        CapacityMeasurement::Heating { kw } => {
            let qh = convert::kw_to_w(ensure_positive(kw, "capacity.kw")?);
            let qe = qh - w_shaft;
            if qe <= 0.0 {
                return Err(SolverError::physically_invalid(
                    "refrigeration capacity",
                    format!(
                        "heating capacity {:.3} kW does not exceed shaft power {:.3} kW (Qe = {:.3} kW)",
                        qh / 1e3,
                        w_shaft / 1e3,
                        qe / 1e3
                    ),
                ));
            }
            (qe, qh)
        }
    };

    let fluid = inputs.fluid;
    let (pe, pc) = cycle_pressures(backend, fluid, degc(te_c), degc(tc_c), 0.0)?;
    let suction = line_state(backend, fluid, degc(te_c), pe, superheat, Side::Vapour)?;
    let liquid = line_state(backend, fluid, degc(tc_c), pc, subcooling, Side::Liquid)?;
    let h4 = liquid.enthalpy();

    let dh_evap = suction.enthalpy() - h4;
    if dh_evap <= 0.0 {
        return Err(SolverError::physically_invalid(
            "evaporator enthalpy difference",
            format!("h1 - h4 = {dh_evap:.1} J/kg must be positive"),
        ));
    }
    let m_dot = q_evap / dh_evap;
    let rho1 = suction.density().ok_or_else(|| {
        SolverError::physically_invalid("suction state", "density is not available")
    })?;
    let v_act = m_dot / rho1.value;
    let eta_v = v_act / v_th.value;
    debug!(
        fluid = %fluid,
        v_th = v_th.value,
        m_dot,
        eta_v,
        "Mode 1 flow evaluated"
    );

    let mut notes = Vec::new();
    let oil = match split_at(
        backend,
        fluid,
        &suction,
        kgps(m_dot),
        w(w_shaft),
        degc(t2a_c),
        pc,
    ) {
        Ok(split) => {
            if split.q_oil.value < 0.0 {
                warn!(q_oil = split.q_oil.value, "Measured data imply a negative oil load");
                notes.push(format!(
                    "Q_oil is negative ({:.3} kW): the measured discharge temperature carries more heat than the shaft power supplies",
                    split.q_oil.value / 1e3
                ));
            }
            OilSplit::Available(split)
        }
        Err(e) => {
            warn!(error = %e, "Discharge state unavailable, oil split skipped");
            OilSplit::Unavailable {
                reason: e.to_string(),
            }
        }
    };

    Ok(Mode1Result {
        inputs: inputs.clone(),
        pe,
        pc,
        suction,
        liquid,
        h4,
        v_th,
        v_act: m3ps(v_act),
        eta_v,
        m_dot: kgps(m_dot),
        w_shaft: w(w_shaft),
        w_input: w_input.map(w),
        q_evap: w(q_evap),
        q_heat: w(q_heat),
        oil,
        notes,
    })
}

pub(crate) fn non_negative(v: f64, what: &'static str) -> SolverResult<f64> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(SolverError::invalid(
            what,
            format!("must be zero or positive, got {v}"),
        ));
    }
    Ok(v)
}
