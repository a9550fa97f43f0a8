//! Session behaviour: result lifecycle, transfer and reports.

use oic_app::{
    AppError, Case, DEFAULT_ETA_S, DEFAULT_MOTOR_EFFICIENCY, FALLBACK_ETA_V, Mode, PrintSheet,
    Session, Solved, inputs_table, parse_case, render_mode1, transfer_mode1_to_mode2,
};
use oic_fluids::{CoolPropModel, Species};
use oic_solver::{
    CapacityMeasurement, EfficiencyBasis, EfficiencySpec, FlowSpec, Mode1Inputs, Mode3Inputs,
    NoOilPolicy, PowerMeasurement, ReferenceProcess, SolverError, SolverOptions,
};
use std::sync::Arc;

fn session() -> Session {
    Session::new(Arc::new(CoolPropModel::new()))
}

fn field_case() -> Mode1Inputs {
    Mode1Inputs {
        fluid: Species::R134a,
        flow: FlowSpec::BySpeed {
            rpm: 2900.0,
            displacement_cm3: 180.0,
        },
        te_c: -10.0,
        tc_c: 45.0,
        superheat_k: 5.0,
        subcooling_k: 5.0,
        capacity: CapacityMeasurement::Refrigeration { kw: 10.0 },
        power: PowerMeasurement::Shaft { kw: 3.0 },
        t2a_c: 90.0,
    }
}

fn air_case() -> Mode3Inputs {
    Mode3Inputs {
        fluid: Species::Air,
        flow: FlowSpec::ByVolume { flow_m3_h: 120.0 },
        pe_bar: 1.0,
        te_c: 20.0,
        pc_bar: 8.0,
        eta_v: 0.9,
        efficiency: EfficiencySpec::shaft(0.7, 0.94),
        reference: ReferenceProcess::Isothermal,
        t2a_actual_c: Some(85.0),
        aftercooler: None,
    }
}

#[test]
fn transfer_requires_a_mode1_result() {
    let err = session().transfer_mode1_to_mode2().unwrap_err();
    assert!(matches!(err, AppError::NoResult { mode: Mode::Mode1 }));
}

#[test]
fn transfer_seeds_mode2_and_reports_defaults() {
    let mut session = session();
    let eta_v = session.solve_mode1(&field_case()).unwrap().eta_v;

    let transfer = session.transfer_mode1_to_mode2().unwrap();
    let inputs = &transfer.inputs;
    assert_eq!(inputs.fluid, Species::R134a);
    assert_eq!(inputs.flow, field_case().flow);
    assert_eq!(inputs.eta_v, eta_v);
    assert_eq!(inputs.t2a_est_c, 90.0);
    assert_eq!(
        inputs.efficiency.basis,
        EfficiencyBasis::Shaft {
            eta_shaft: DEFAULT_ETA_S
        }
    );
    assert_eq!(
        inputs.efficiency.motor_efficiency,
        Some(DEFAULT_MOTOR_EFFICIENCY)
    );
    // Isentropic default plus motor default
    assert_eq!(transfer.notices.len(), 2);
    assert!(transfer.notices.iter().any(|n| n.contains("0.70")));

    // Same suction state and flow, so the mass flow carries over.
    let measured = session.mode1_result().unwrap().m_dot.value;
    session.set_options(SolverOptions::clamping());
    let predicted = session.solve_mode2(&transfer.inputs).unwrap().compression.m_dot.value;
    assert!((predicted - measured).abs() / measured < 1e-9);
}

#[test]
fn transfer_keeps_measured_motor_efficiency() {
    let mut inputs = field_case();
    inputs.power = PowerMeasurement::Input {
        kw: 3.3,
        motor_efficiency: 0.91,
    };
    let mut session = session();
    session.solve_mode1(&inputs).unwrap();
    let transfer = session.transfer_mode1_to_mode2().unwrap();
    assert_eq!(transfer.inputs.efficiency.motor_efficiency, Some(0.91));
    assert_eq!(transfer.notices.len(), 1);
}

#[test]
fn transfer_replaces_unusable_volumetric_efficiency() {
    let mut session = session();
    let mut result = session.solve_mode1(&field_case()).unwrap().clone();
    result.eta_v = f64::NAN;
    let transfer = transfer_mode1_to_mode2(&result);
    assert_eq!(transfer.inputs.eta_v, FALLBACK_ETA_V);
    assert_eq!(transfer.notices.len(), 3);
}

#[test]
fn failure_clears_only_its_own_mode() {
    let mut session = session();
    session.solve_mode1(&field_case()).unwrap();
    session.solve_mode3(&air_case()).unwrap();

    let mut bad = air_case();
    bad.pc_bar = 0.5;
    let err = session.solve_mode3(&bad).unwrap_err();
    assert!(matches!(
        err,
        AppError::Solver(SolverError::InvalidInput { field: "pc_bar", .. })
    ));
    assert!(session.mode3_result().is_none());
    assert!(session.mode1_result().is_some());
}

#[test]
fn stale_results_are_discarded_until_resolved() {
    let mut session = session();
    session.solve_mode3(&air_case()).unwrap();
    assert!(!session.is_stale(Mode::Mode3));

    session.mark_stale(Mode::Mode3);
    assert!(session.is_stale(Mode::Mode3));
    assert!(!session.has_result(Mode::Mode3));

    session.solve_mode3(&air_case()).unwrap();
    assert!(!session.is_stale(Mode::Mode3));
    assert!(Mode::ALL.iter().filter(|m| session.has_result(**m)).count() == 1);
}

#[test]
fn solving_a_case_applies_its_options() {
    let mut session = session();
    session.solve_mode1(&field_case()).unwrap();
    let transfer = session.transfer_mode1_to_mode2().unwrap();

    let rejecting = Case::Mode2 {
        options: SolverOptions::default(),
        inputs: transfer.inputs.clone(),
    };
    assert!(matches!(
        session.solve_case(&rejecting),
        Err(AppError::Solver(SolverError::PhysicallyInvalid { .. }))
    ));

    let clamping = Case::Mode2 {
        options: SolverOptions::clamping(),
        inputs: transfer.inputs,
    };
    let solved = session.solve_case(&clamping).unwrap();
    assert_eq!(session.options().no_oil, NoOilPolicy::Clamp);
    assert_eq!(solved.mode(), Mode::Mode2);
    let Solved::Mode2(result) = &solved else {
        panic!("expected a mode 2 result");
    };
    assert!(result.oil_clamped);
    assert!(solved.render().contains("COP (refrigeration)"));
}

#[test]
fn reports_carry_every_section() {
    let mut session = session();
    let text = render_mode1(session.solve_mode1(&field_case()).unwrap());
    for section in ["[Overview]", "[State Points]", "[Power]", "[Efficiency]", "[Performance]"] {
        assert!(text.contains(section), "missing {section}");
    }
    assert!(text.contains("R134a"));

    let solved = session.solve_case(&Case::Mode3 { inputs: air_case() }).unwrap();
    let text = solved.render();
    assert!(text.contains("Isothermal power W_ideal"));
    assert!(text.contains("Oil cooling load Q_oil"));
}

#[test]
fn print_sheet_wraps_a_solved_case() {
    let case = Case::Mode3 { inputs: air_case() };
    let solved = session().solve_case(&case).unwrap();
    let stamp = chrono::NaiveDate::from_ymd_opt(2026, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();
    let sheet = PrintSheet::new("Mode 3", stamp, inputs_table(&case), solved.render());
    let text = sheet.render();
    assert!(text.contains("Generated: 2026-01-02 03:04:05"));
    assert!(text.contains("Outlet pressure"));
    assert!(text.contains("[Performance]"));
}

#[test]
fn options_change_invalidates_only_mode2() {
    let mut session =
        Session::new(Arc::new(CoolPropModel::new())).with_options(SolverOptions::clamping());
    assert!(!session.backend().name().is_empty());
    session.solve_mode1(&field_case()).unwrap();
    let transfer = session.transfer_mode1_to_mode2().unwrap();
    session.solve_mode2(&transfer.inputs).unwrap();

    session.set_options(SolverOptions::clamping());
    assert!(session.has_result(Mode::Mode2));

    session.set_options(SolverOptions::default());
    assert!(session.is_stale(Mode::Mode2));
    assert!(session.mode2_result().is_none());
    assert!(session.has_result(Mode::Mode1));
}

#[test]
fn transferred_case_text_loads_back_with_notices_as_comments() {
    let mut session = session();
    session.solve_mode1(&field_case()).unwrap();
    let transfer = session.transfer_mode1_to_mode2().unwrap();

    let yaml = transfer.to_case_yaml(SolverOptions::clamping()).unwrap();
    let comments: Vec<&str> = yaml.lines().take_while(|l| l.starts_with("# ")).collect();
    assert_eq!(comments.len(), transfer.notices.len());
    assert!(comments[0].contains(&transfer.notices[0]));

    let case = parse_case(&yaml).unwrap();
    assert_eq!(case, transfer.to_case(SolverOptions::clamping()));
}
