//! Plain-text reports for solver results.
//!
//! Each renderer is a pure function of its result and always emits the same
//! sections in the same order: overview, state points, power, efficiency and
//! performance, followed by the cooling stage and notes when present.

use crate::session::Mode;
use oic_core::convert;
use oic_core::units::{Power, Pressure, Temperature, VolumeRate};
use oic_fluids::FluidState;
use oic_solver::{
    CoolerResult, EfficiencyBasis, Mode1Result, Mode2Result, Mode3Result, OilSplit, PowerSplit,
};
use std::fmt::Display;

const RULE: &str = "============================================================";

struct Report {
    out: String,
}

impl Report {
    fn new(mode: Mode) -> Self {
        let mut report = Self { out: String::new() };
        report.out.push_str(RULE);
        report.out.push('\n');
        report.out.push_str(&format!("{mode}: {}\n", mode.title()));
        report.out.push_str(RULE);
        report.out.push('\n');
        report
    }

    fn section(&mut self, title: &str) {
        self.out.push_str(&format!("\n[{title}]\n"));
    }

    fn row(&mut self, label: &str, value: impl Display) {
        self.out.push_str(&format!("  {label:<28} {value}\n"));
    }

    fn state(&mut self, point: &str, state: &FluidState) {
        self.out.push_str(&format!(
            "  {point:<22} T = {:>8} °C   P = {:>8} bar   h = {:>8} kJ/kg\n",
            format!("{:.2}", celsius(state.temperature())),
            format!("{:.3}", bar(state.pressure())),
            format!("{:.2}", state.enthalpy() / 1e3),
        ));
    }

    fn notes(&mut self, notes: &[String]) {
        if notes.is_empty() {
            return;
        }
        self.section("Notes");
        for note in notes {
            self.out.push_str(&format!("  - {note}\n"));
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

fn celsius(t: Temperature) -> f64 {
    convert::kelvin_to_celsius(t.value)
}

fn bar(p: Pressure) -> f64 {
    convert::pa_to_bar(p.value)
}

fn kw(p: Power) -> String {
    format!("{:.3} kW", convert::w_to_kw(p.value))
}

fn m3h(v: VolumeRate) -> String {
    format!("{:.3} m³/h", convert::m3s_to_m3h(v.value))
}

fn percent(ratio: f64) -> String {
    format!("{:.1} %", ratio * 100.0)
}

fn power_rows(report: &mut Report, power: &PowerSplit, ideal_label: &str) {
    report.row(ideal_label, kw(power.w_ideal));
    report.row("Shaft power W_shaft", kw(power.w_shaft));
    report.row("Input power W_input", kw(power.w_input));
}

fn efficiency_rows(report: &mut Report, power: &PowerSplit, reference: &str) {
    let (shaft_tag, total_tag) = match power.basis {
        EfficiencyBasis::Shaft { .. } => (" (given)", " (derived)"),
        EfficiencyBasis::Input { .. } => (" (derived)", " (given)"),
    };
    report.row(
        &format!("{reference} eff. (shaft)"),
        format!("{}{shaft_tag}", percent(power.eta_shaft)),
    );
    report.row(
        &format!("{reference} eff. (total)"),
        format!("{}{total_tag}", percent(power.eta_total)),
    );
    report.row("Motor efficiency", percent(power.motor_efficiency));
}

fn cooler_rows(report: &mut Report, title: &str, stage: &CoolerResult) {
    report.section(title);
    report.row(
        "Outlet temperature",
        format!("{:.2} °C", celsius(stage.outlet.temperature())),
    );
    report.row("Heat removed", kw(stage.heat_removed));
    if let Some(remaining) = stage.remaining_duty {
        report.row("Remaining condenser duty", kw(remaining));
    }
}

pub fn render_mode1(result: &Mode1Result) -> String {
    let inputs = &result.inputs;
    let mut report = Report::new(Mode::Mode1);

    report.section("Overview");
    report.row("Fluid", inputs.fluid);
    report.row("Flow", inputs.flow);
    report.row("Evaporating / condensing", format!("{:.1} / {:.1} °C", inputs.te_c, inputs.tc_c));
    report.row(
        "Superheat / subcooling",
        format!("{:.1} / {:.1} K", inputs.superheat_k, inputs.subcooling_k),
    );
    report.row("Measured capacity", inputs.capacity);
    report.row("Measured power", inputs.power);
    report.row("Measured discharge", format!("{:.1} °C", inputs.t2a_c));

    report.section("State Points");
    report.state("1  suction", &result.suction);
    if let Some(split) = result.oil.available() {
        report.state("2a discharge (measured)", &split.discharge);
    }
    report.state("3  liquid line", &result.liquid);
    report.row("4  evaporator inlet h", format!("{:.2} kJ/kg", result.h4 / 1e3));
    report.row("Evaporating pressure", format!("{:.3} bar", bar(result.pe)));
    report.row("Condensing pressure", format!("{:.3} bar", bar(result.pc)));

    report.section("Power");
    report.row("Shaft power W_shaft", kw(result.w_shaft));
    if let Some(w_input) = result.w_input {
        report.row("Input power W_input", kw(w_input));
    }
    report.row("Refrigeration capacity Qe", kw(result.q_evap));
    report.row("Heating capacity Qh", kw(result.q_heat));

    report.section("Efficiency");
    report.row("Theoretical flow V_th", m3h(result.v_th));
    report.row("Actual suction flow V_act", m3h(result.v_act));
    report.row("Volumetric efficiency", percent(result.eta_v));

    report.section("Performance");
    report.row("Mass flow", format!("{:.5} kg/s", result.m_dot.value));
    match &result.oil {
        OilSplit::Available(split) => {
            report.row("Gas heat Q_gas", kw(split.q_gas));
            report.row("Oil heat Q_oil", kw(split.q_oil));
        }
        OilSplit::Unavailable { reason } => {
            report.row("Gas / oil heat", format!("unavailable ({reason})"));
        }
    }

    report.notes(&result.notes);
    report.finish()
}

pub fn render_mode2(result: &Mode2Result) -> String {
    let inputs = &result.inputs;
    let comp = &result.compression;
    let mut report = Report::new(Mode::Mode2);

    report.section("Overview");
    report.row("Fluid", inputs.fluid);
    report.row("Flow", inputs.flow);
    report.row("Evaporating / condensing", format!("{:.1} / {:.1} °C", inputs.te_c, inputs.tc_c));
    report.row(
        "Superheat / subcooling",
        format!("{:.1} / {:.1} K", inputs.superheat_k, inputs.subcooling_k),
    );
    report.row("Estimated discharge", format!("{:.1} °C", inputs.t2a_est_c));

    report.section("State Points");
    report.state("1  suction", &result.suction);
    report.state("2s isentropic discharge", &result.isentropic_discharge);
    report.state("2a actual discharge", &result.discharge);
    report.state("2a oil-free discharge", result.adiabatic_discharge());
    report.state("3  liquid line", &result.liquid);
    report.row("4  evaporator inlet h", format!("{:.2} kJ/kg", result.h4 / 1e3));

    report.section("Power");
    power_rows(&mut report, &comp.power, "Isentropic power W_s");

    report.section("Efficiency");
    report.row("Theoretical flow V_th", m3h(comp.v_th));
    report.row("Actual suction flow V_act", m3h(comp.v_act));
    report.row("Volumetric efficiency", percent(comp.eta_v));
    efficiency_rows(&mut report, &comp.power, "Isentropic");

    report.section("Performance");
    report.row("Mass flow", format!("{:.5} kg/s", comp.m_dot.value));
    report.row("Refrigeration capacity Qe", kw(result.q_evap));
    report.row("Condenser duty Q_cond", kw(result.q_cond));
    report.row("Gas heat Q_gas", kw(result.q_gas));
    report.row("Oil cooling load Q_oil", kw(result.q_oil));
    report.row("Total heat rejected", kw(result.q_total_heat));
    report.row("COP (refrigeration)", format!("{:.3}", result.cop_r));
    report.row("COP (heating, condenser)", format!("{:.3}", result.cop_h_cond));
    report.row("COP (heating, total)", format!("{:.3}", result.cop_h_total));

    if let Some(stage) = &result.desuperheater {
        cooler_rows(&mut report, "Desuperheater", stage);
    }
    report.notes(&result.notes);
    report.finish()
}

pub fn render_mode3(result: &Mode3Result) -> String {
    let inputs = &result.inputs;
    let comp = &result.compression;
    let reference = match comp.ideal.process {
        oic_solver::ReferenceProcess::Isothermal => "Isothermal",
        oic_solver::ReferenceProcess::Isentropic => "Isentropic",
    };
    let mut report = Report::new(Mode::Mode3);

    report.section("Overview");
    report.row("Fluid", inputs.fluid);
    report.row("Flow", inputs.flow);
    report.row("Inlet", format!("{:.3} bar, {:.1} °C", inputs.pe_bar, inputs.te_c));
    report.row("Outlet pressure", format!("{:.3} bar", inputs.pc_bar));
    report.row("Pressure ratio", format!("{:.3}", inputs.pc_bar / inputs.pe_bar));
    report.row("Reference process", reference);

    report.section("State Points");
    report.state("1  suction", &result.suction);
    if let Some(outlet) = &comp.ideal.outlet {
        report.state("2s isentropic discharge", outlet);
    }
    report.state("2a adiabatic discharge", result.adiabatic_discharge());
    if let Some(split) = &result.measured {
        report.state("2a measured discharge", &split.discharge);
    }

    report.section("Power");
    power_rows(&mut report, &comp.power, &format!("{reference} power W_ideal"));
    if let Some(r) = comp.ideal.specific_gas_constant {
        report.row("Specific gas constant", format!("{r:.3} J/(kg·K)"));
    }

    report.section("Efficiency");
    report.row("Theoretical flow V_th", m3h(comp.v_th));
    report.row("Actual suction flow V_act", m3h(comp.v_act));
    report.row("Volumetric efficiency", percent(comp.eta_v));
    efficiency_rows(&mut report, &comp.power, reference);

    report.section("Performance");
    report.row("Mass flow", format!("{:.5} kg/s", comp.m_dot.value));
    report.row("Heat to gas (adiabatic)", kw(result.q_discharge));
    if let Some(split) = &result.measured {
        report.row("Gas heat Q_gas", kw(split.q_gas));
        report.row("Oil cooling load Q_oil", kw(split.q_oil));
    }

    if let Some(stage) = &result.aftercooler {
        cooler_rows(&mut report, "Aftercooler", stage);
    }
    report.finish()
}
