//! Worked examples for a 250 x 500 beam, C30 concrete, HRB400 steel.

use flexure_core::equations::flexure::{alpha_s_max, solve_xi};
use flexure_core::{
    check,
    design,
    CalculationItem,
    CheckInput,
    ConcreteGrade,
    DesignInput,
    MaterialPair,
    RebarGrade,
    SectionExtra,
    SectionMode,
    SectionProperties,
};
use pretty_assertions::assert_eq;

fn beam() -> SectionProperties {
    SectionProperties::new(250.0, 500.0, 62.5, 40.0, 14.3, 360.0, 360.0)
}

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() < tol,
        "expected {expected} ± {tol}, got {actual}"
    );
}

#[test]
fn singly_reinforced_design() {
    let result = design(&DesignInput::new("L-1", beam(), 200.0)).unwrap();

    assert_eq!(result.mode(), SectionMode::Single);
    assert_eq!(result.h0_mm, 437.5);
    assert_close(result.alpha_s, 200.0e6 / (14.3 * 250.0 * 437.5_f64.powi(2)), 1e-15);
    assert!(result.alpha_s <= result.alpha_s_max);
    assert_close(result.xi(), 0.3555, 1e-4);
    assert_close(result.x_mm, 155.5, 0.1);
    assert_close(result.as_mm2, 1544.3, 0.1);
    assert_eq!(result.as_prime_mm2, 0.0);
}

#[test]
fn doubly_reinforced_design() {
    let result = design(&DesignInput::new("L-2", beam(), 325.0)).unwrap();

    assert_eq!(result.mode(), SectionMode::Double);
    assert_close(result.alpha_s, 0.4750, 1e-4);
    assert_eq!(result.x_mm, 0.518 * 437.5);
    assert_close(result.as_prime_mm2, 435.7, 0.1);
    assert_close(result.as_mm2, 2686.2, 0.1);
    assert_close(result.m_capacity_knm, 325.0, 1e-9);
}

#[test]
fn alpha_s_max_for_default_xi_b() {
    assert_eq!(alpha_s_max(0.518), 0.518 * (1.0 - 0.259));
    let result = design(&DesignInput::new("L-2", beam(), 325.0)).unwrap();
    assert_eq!(result.alpha_s_max, alpha_s_max(0.518));
}

#[test]
fn compression_depth_solve_limits() {
    assert!(solve_xi(0.6).is_err());
    assert!(solve_xi(-0.1).is_err());
    assert_eq!(solve_xi(0.5).unwrap(), 1.0);
}

#[test]
fn capacity_check() {
    let result = check(&CheckInput::new("L-3", beam(), 2600.0, 800.0)).unwrap();

    assert_eq!(result.h0_mm, 437.5);
    assert_close(result.x_mm, 226.6, 0.05);

    let SectionExtra::Check(extra) = result.extra else {
        panic!("expected check diagnostics, got {:?}", result.extra);
    };
    assert_close(extra.c_c_n, 810_184.375, 1e-6);
    assert_eq!(extra.t_s_n, 936_000.0);
    assert_close(
        extra.unbalanced_force_n,
        extra.t_s_n - extra.c_c_n - 360.0 * 800.0,
        1e-9,
    );
    assert_close(result.m_capacity_knm, extra.m_c_knm + extra.m_cs_knm, 1e-9);
}

#[test]
fn repeated_calls_are_identical() {
    let input = DesignInput::new("L-2", beam(), 325.0);
    assert_eq!(design(&input).unwrap(), design(&input).unwrap());

    let input = CheckInput::new("L-3", beam(), 2600.0, 800.0);
    assert_eq!(check(&input).unwrap(), check(&input).unwrap());
}

#[test]
fn catalogue_grades_reproduce_default_parameters() {
    let pair = MaterialPair::new(ConcreteGrade::C30, RebarGrade::Hrb400);
    let from_grades = SectionProperties::new(250.0, 500.0, 62.5, 40.0, 0.0, 0.0, 0.0)
        .with_materials(pair)
        .with_xi_b(0.518);
    assert_eq!(from_grades, beam());
}

#[test]
fn json_envelope_runs_end_to_end() {
    let json = r#"{
        "type": "Design",
        "label": "L-2",
        "b_mm": 250.0, "h_mm": 500.0, "a_s_mm": 62.5, "a_s_prime_mm": 40.0,
        "f_c_mpa": 14.3, "f_y_mpa": 360.0, "f_y_prime_mpa": 360.0,
        "alpha1": 1.0, "xi_b": 0.518,
        "moment_knm": 325.0
    }"#;
    let item: CalculationItem = serde_json::from_str(json).unwrap();
    let via_envelope = item.run().unwrap();
    let direct = design(&DesignInput::new("L-2", beam(), 325.0)).unwrap();
    assert_eq!(via_envelope, direct);

    let out = serde_json::to_value(via_envelope).unwrap();
    assert_eq!(out["extra"]["mode"], "double");
}
