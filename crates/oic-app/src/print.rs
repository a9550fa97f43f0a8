//! Printable sheet: header, timestamp, input table and report text.

use crate::case::Case;
use chrono::NaiveDateTime;
use oic_solver::{EfficiencyBasis, EfficiencySpec, ReferenceProcess};

#[derive(Debug, Clone, PartialEq)]
pub struct PrintSheet {
    pub title: String,
    pub generated: NaiveDateTime,
    pub inputs: Vec<(String, String)>,
    pub report: String,
}

impl PrintSheet {
    /// The caller supplies the timestamp (usually `Local::now().naive_local()`).
    pub fn new(
        title: impl Into<String>,
        generated: NaiveDateTime,
        inputs: Vec<(String, String)>,
        report: String,
    ) -> Self {
        Self {
            title: title.into(),
            generated,
            inputs,
            report,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Oil-Injected Compressor Calculator - {}\n", self.title));
        out.push_str(&format!(
            "Generated: {}\n\n",
            self.generated.format("%Y-%m-%d %H:%M:%S")
        ));

        out.push_str("Inputs\n");
        let width = self
            .inputs
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        for (label, value) in &self.inputs {
            out.push_str(&format!("  {label:<width$}  {value}\n"));
        }
        out.push('\n');
        out.push_str(&self.report);
        out
    }
}

fn efficiency_rows(rows: &mut Vec<(String, String)>, spec: &EfficiencySpec, reference: &str) {
    let given = match spec.basis {
        EfficiencyBasis::Shaft { eta_shaft } => format!("{eta_shaft} (shaft basis)"),
        EfficiencyBasis::Input { eta_total } => format!("{eta_total} (input basis)"),
    };
    rows.push((format!("{reference} efficiency"), given));
    if let Some(motor) = spec.motor_efficiency {
        rows.push(("Motor efficiency".into(), motor.to_string()));
    }
}

/// Input table for a case, in the order the fields are entered.
pub fn inputs_table(case: &Case) -> Vec<(String, String)> {
    let mut rows: Vec<(String, String)> = Vec::new();
    match case {
        Case::Mode1 { inputs } => {
            rows.push(("Fluid".into(), inputs.fluid.to_string()));
            rows.push(("Flow".into(), inputs.flow.to_string()));
            rows.push(("Evaporating temperature".into(), format!("{} °C", inputs.te_c)));
            rows.push(("Condensing temperature".into(), format!("{} °C", inputs.tc_c)));
            rows.push(("Superheat".into(), format!("{} K", inputs.superheat_k)));
            rows.push(("Subcooling".into(), format!("{} K", inputs.subcooling_k)));
            rows.push(("Capacity".into(), inputs.capacity.to_string()));
            rows.push(("Power".into(), inputs.power.to_string()));
            rows.push(("Discharge temperature".into(), format!("{} °C", inputs.t2a_c)));
        }
        Case::Mode2 { options, inputs } => {
            rows.push(("Fluid".into(), inputs.fluid.to_string()));
            rows.push(("Flow".into(), inputs.flow.to_string()));
            rows.push(("Evaporating temperature".into(), format!("{} °C", inputs.te_c)));
            rows.push(("Condensing temperature".into(), format!("{} °C", inputs.tc_c)));
            rows.push(("Superheat".into(), format!("{} K", inputs.superheat_k)));
            rows.push(("Subcooling".into(), format!("{} K", inputs.subcooling_k)));
            rows.push(("Volumetric efficiency".into(), inputs.eta_v.to_string()));
            efficiency_rows(&mut rows, &inputs.efficiency, "Isentropic");
            rows.push((
                "Estimated discharge".into(),
                format!("{} °C", inputs.t2a_est_c),
            ));
            if let Some(stage) = &inputs.desuperheater {
                rows.push(("Desuperheater target".into(), format!("{} °C", stage.target_c)));
            }
            rows.push(("No-oil policy".into(), format!("{:?}", options.no_oil)));
        }
        Case::Mode3 { inputs } => {
            rows.push(("Fluid".into(), inputs.fluid.to_string()));
            rows.push(("Flow".into(), inputs.flow.to_string()));
            rows.push(("Inlet pressure".into(), format!("{} bar(a)", inputs.pe_bar)));
            rows.push(("Inlet temperature".into(), format!("{} °C", inputs.te_c)));
            rows.push(("Outlet pressure".into(), format!("{} bar(a)", inputs.pc_bar)));
            rows.push(("Volumetric efficiency".into(), inputs.eta_v.to_string()));
            let reference = match inputs.reference {
                ReferenceProcess::Isothermal => "Isothermal",
                ReferenceProcess::Isentropic => "Isentropic",
            };
            efficiency_rows(&mut rows, &inputs.efficiency, reference);
            if let Some(t) = inputs.t2a_actual_c {
                rows.push(("Discharge temperature".into(), format!("{t} °C")));
            }
            if let Some(stage) = &inputs.aftercooler {
                rows.push(("Aftercooler target".into(), format!("{} °C", stage.target_c)));
            }
        }
    }
    rows
}
