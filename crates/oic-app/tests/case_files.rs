use oic_app::{AppError, Case, Mode, load_case, save_case};
use std::path::PathBuf;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../cases")
        .join(name)
}

#[test]
fn demo_cases_load() {
    for (file, mode) in [
        ("mode1_r134a.yaml", Mode::Mode1),
        ("mode2_r134a.yaml", Mode::Mode2),
        ("mode3_air.yaml", Mode::Mode3),
    ] {
        let case = load_case(&demo(file)).unwrap();
        assert_eq!(case.mode(), mode, "{file}");
    }
}

#[test]
fn save_then_load_preserves_case() {
    let case = load_case(&demo("mode2_r134a.yaml")).unwrap();
    let path = std::env::temp_dir().join(format!("oic-case-{}.yaml", std::process::id()));
    save_case(&path, &case).unwrap();
    let back = load_case(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(case, back);
    let Case::Mode2 { inputs, .. } = back else {
        panic!("expected a mode 2 case");
    };
    assert_eq!(inputs.desuperheater.map(|d| d.target_c), Some(50.0));
}

#[test]
fn missing_file_names_the_path() {
    let path = demo("does-not-exist.yaml");
    let err = load_case(&path).unwrap_err();
    match err {
        AppError::CaseFileRead { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}
