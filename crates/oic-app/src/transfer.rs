//! Mode 1 → Mode 2 transfer: seed a prediction from an evaluation.

use crate::case::{Case, case_to_yaml};
use crate::error::AppResult;
use oic_solver::{EfficiencySpec, Mode1Result, Mode2Inputs, SolverOptions};
use serde::Serialize;
use tracing::warn;

/// Isentropic efficiency assumed on transfer; Mode 1 never computes one.
pub const DEFAULT_ETA_S: f64 = 0.70;
/// Volumetric efficiency used when the evaluated one is not a finite number.
pub const FALLBACK_ETA_V: f64 = 0.85;
/// Motor efficiency used when Mode 1 measured shaft power directly.
pub const DEFAULT_MOTOR_EFFICIENCY: f64 = 0.95;

/// Seeded Mode 2 inputs plus everything the consumer must be told about.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transfer {
    pub inputs: Mode2Inputs,
    pub notices: Vec<String>,
}

impl Transfer {
    pub fn to_case(&self, options: SolverOptions) -> Case {
        Case::Mode2 {
            options,
            inputs: self.inputs.clone(),
        }
    }

    /// Mode 2 case YAML with the notices as leading `#` comments, so the
    /// text stays loadable as a case file.
    pub fn to_case_yaml(&self, options: SolverOptions) -> AppResult<String> {
        let mut out = String::new();
        for notice in &self.notices {
            out.push_str(&format!("# {notice}\n"));
        }
        out.push_str(&case_to_yaml(&self.to_case(options))?);
        Ok(out)
    }
}

pub fn transfer_mode1_to_mode2(result: &Mode1Result) -> Transfer {
    let source = &result.inputs;
    let mut notices = Vec::new();

    let eta_v = if result.eta_v.is_finite() && result.eta_v > 0.0 {
        result.eta_v
    } else {
        notices.push(format!(
            "Volumetric efficiency from Mode 1 is unusable ({}); using {FALLBACK_ETA_V:.2}",
            result.eta_v
        ));
        FALLBACK_ETA_V
    };

    notices.push(format!(
        "Isentropic efficiency is not evaluated in Mode 1; using the default {DEFAULT_ETA_S:.2}"
    ));

    let motor_efficiency = match source.power.motor_efficiency() {
        Some(motor) => motor,
        None => {
            notices.push(format!(
                "Mode 1 measured shaft power; motor efficiency set to {DEFAULT_MOTOR_EFFICIENCY:.2}"
            ));
            DEFAULT_MOTOR_EFFICIENCY
        }
    };

    for notice in &notices {
        warn!(notice = notice.as_str(), "Transfer default applied");
    }

    Transfer {
        inputs: Mode2Inputs {
            fluid: source.fluid,
            flow: source.flow,
            te_c: source.te_c,
            tc_c: source.tc_c,
            superheat_k: source.superheat_k,
            subcooling_k: source.subcooling_k,
            eta_v,
            efficiency: EfficiencySpec::shaft(DEFAULT_ETA_S, motor_efficiency),
            t2a_est_c: source.t2a_c,
            desuperheater: None,
        },
        notices,
    }
}
