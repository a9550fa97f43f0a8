//! Shared compression core for the prediction modes.
//!
//! Both forward solvers run the same pipeline once their suction state is
//! known:
//!
//! ```text
//! V_act = V_th · eta_v
//! m_dot = V_act · ρ1
//! W_ideal = reference work (isothermal or isentropic)
//! {W_shaft, W_input} = resolve_power(efficiency, W_ideal)
//! h2a_noOil = h1 + W_shaft / m_dot       (adiabatic, oil-free discharge)
//! ```
//!
//! Only the reference process differs between modes.

use crate::efficiency::{EfficiencySpec, PowerSplit, resolve_power};
use crate::error::{SolverError, SolverResult};
use crate::flow::FlowSpec;
use oic_core::ensure_positive;
use oic_core::units::{MassRate, Power, Pressure, VolumeRate, kgps, m3ps, w};
use oic_fluids::{FluidState, PropertyBackend, Species};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Ideal compression process used as the efficiency baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceProcess {
    /// `W = m_dot · R · T1 · ln(p_out / p_in)`
    #[default]
    Isothermal,
    /// `W = m_dot · (h(p_out, s1) − h1)`
    Isentropic,
}

impl fmt::Display for ReferenceProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceProcess::Isothermal => write!(f, "isothermal"),
            ReferenceProcess::Isentropic => write!(f, "isentropic"),
        }
    }
}

/// Reference work and, for the isentropic process, its end state (2s).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdealWork {
    pub process: ReferenceProcess,
    pub work: Power,
    pub outlet: Option<FluidState>,
    /// Specific gas constant used by the isothermal process [J/(kg·K)].
    pub specific_gas_constant: Option<f64>,
}

/// Everything the prediction modes share after the suction state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compression {
    pub v_th: VolumeRate,
    pub v_act: VolumeRate,
    pub eta_v: f64,
    pub m_dot: MassRate,
    pub ideal: IdealWork,
    pub power: PowerSplit,
    /// Discharge state if all shaft work went into the gas.
    pub adiabatic_discharge: FluidState,
}

impl Compression {
    /// Oil-free specific enthalpy rise `W_shaft / m_dot` [J/kg].
    pub fn shaft_enthalpy_rise(&self) -> f64 {
        self.power.w_shaft.value / self.m_dot.value
    }
}

/// Reference compression work from `inlet` to `p_out`.
pub fn ideal_work(
    backend: &dyn PropertyBackend,
    fluid: Species,
    inlet: &FluidState,
    p_out: Pressure,
    m_dot: MassRate,
    process: ReferenceProcess,
) -> SolverResult<IdealWork> {
    match process {
        ReferenceProcess::Isothermal => {
            let r = backend
                .specific_gas_constant(fluid)
                .map_err(SolverError::lookup("specific gas constant"))?;
            let ratio = p_out.value / inlet.pressure().value;
            let work = m_dot.value * r * inlet.temperature().value * ratio.ln();
            Ok(IdealWork {
                process,
                work: w(work),
                outlet: None,
                specific_gas_constant: Some(r),
            })
        }
        ReferenceProcess::Isentropic => {
            let s1 = inlet.entropy().ok_or_else(|| {
                SolverError::physically_invalid("suction state", "entropy is not available")
            })?;
            let outlet = backend
                .state_ps(fluid, p_out, s1)
                .map_err(SolverError::lookup("isentropic discharge state"))?;
            let work = m_dot.value * (outlet.enthalpy() - inlet.enthalpy());
            Ok(IdealWork {
                process,
                work: w(work),
                outlet: Some(outlet),
                specific_gas_constant: None,
            })
        }
    }
}

/// Run the shared pipeline from a resolved suction state.
///
/// # Errors
/// `InvalidInput` for a bad flow spec, `eta_v` or efficiency; `PhysicallyInvalid`
/// for a non-positive ideal work; `PropertyLookupFailed` when the backend
/// cannot resolve the reference or adiabatic discharge state.
#[allow(clippy::too_many_arguments)]
pub fn compress(
    backend: &dyn PropertyBackend,
    fluid: Species,
    inlet: &FluidState,
    p_out: Pressure,
    flow: &FlowSpec,
    eta_v: f64,
    efficiency: &EfficiencySpec,
    process: ReferenceProcess,
) -> SolverResult<Compression> {
    let v_th = flow.theoretical_flow()?;
    let eta_v = ensure_positive(eta_v, "eta_v")?;
    let rho = inlet.density().ok_or_else(|| {
        SolverError::physically_invalid("suction state", "density is not available")
    })?;

    let v_act = v_th.value * eta_v;
    let m_dot = kgps(v_act * rho.value);
    debug!(
        v_th = v_th.value,
        v_act,
        m_dot = m_dot.value,
        %process,
        "Resolved suction flow"
    );

    let ideal = ideal_work(backend, fluid, inlet, p_out, m_dot, process)?;
    let power = resolve_power(efficiency, ideal.work.value)?;

    let h2a = inlet.enthalpy() + power.w_shaft.value / m_dot.value;
    let adiabatic_discharge = backend
        .state_ph(fluid, p_out, h2a)
        .map_err(SolverError::lookup("adiabatic discharge state"))?;

    Ok(Compression {
        v_th,
        v_act: m3ps(v_act),
        eta_v,
        m_dot,
        ideal,
        power,
        adiabatic_discharge,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use oic_core::units::{bar, k};
    use oic_fluids::PerfectGasModel;

    fn nitrogen_inlet(model: &PerfectGasModel) -> FluidState {
        model.state_tp(Species::N2, k(293.15), bar(1.0)).unwrap()
    }

    #[test]
    fn isothermal_work_is_closed_form() {
        let model = PerfectGasModel::new();
        let inlet = nitrogen_inlet(&model);
        let ideal = ideal_work(
            &model,
            Species::N2,
            &inlet,
            bar(5.0),
            kgps(0.1),
            ReferenceProcess::Isothermal,
        )
        .unwrap();
        let r = ideal.specific_gas_constant.unwrap();
        assert_eq!(ideal.work.value, 0.1 * r * 293.15 * 5.0_f64.ln());
        assert!(ideal.outlet.is_none());
    }

    #[test]
    fn isentropic_exceeds_isothermal() {
        let model = PerfectGasModel::new();
        let inlet = nitrogen_inlet(&model);
        let iso = ideal_work(
            &model,
            Species::N2,
            &inlet,
            bar(5.0),
            kgps(0.1),
            ReferenceProcess::Isothermal,
        )
        .unwrap();
        let isen = ideal_work(
            &model,
            Species::N2,
            &inlet,
            bar(5.0),
            kgps(0.1),
            ReferenceProcess::Isentropic,
        )
        .unwrap();
        assert!(isen.work.value > iso.work.value);
        assert!(isen.outlet.unwrap().temperature().value > 293.15);
    }

    #[test]
    fn adiabatic_discharge_carries_all_shaft_work() {
        let model = PerfectGasModel::new();
        let inlet = nitrogen_inlet(&model);
        let comp = compress(
            &model,
            Species::N2,
            &inlet,
            bar(5.0),
            &FlowSpec::ByVolume { flow_m3_h: 100.0 },
            0.9,
            &EfficiencySpec::shaft(0.6, 0.93),
            ReferenceProcess::Isothermal,
        )
        .unwrap();

        let rho = inlet.density().unwrap().value;
        assert!((comp.m_dot.value - 100.0 / 3600.0 * 0.9 * rho).abs() < 1e-12);
        let gas_heat =
            comp.m_dot.value * (comp.adiabatic_discharge.enthalpy() - inlet.enthalpy());
        assert!((gas_heat - comp.power.w_shaft.value).abs() < 1e-6);
        assert!(comp.adiabatic_discharge.temperature().value > inlet.temperature().value);
    }

    #[test]
    fn zero_volumetric_efficiency_is_invalid() {
        let model = PerfectGasModel::new();
        let inlet = nitrogen_inlet(&model);
        let err = compress(
            &model,
            Species::N2,
            &inlet,
            bar(5.0),
            &FlowSpec::ByVolume { flow_m3_h: 100.0 },
            0.0,
            &EfficiencySpec::shaft(0.6, 0.93),
            ReferenceProcess::Isothermal,
        )
        .unwrap_err();
        assert!(matches!(err, SolverError::InvalidInput { field: "eta_v", .. }));
    }
}
