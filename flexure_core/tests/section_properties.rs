//! Property-based tests for the section analyzer.
//!
//! These use proptest to generate realistic beam sections and verify:
//! 1. Branch selection: singly reinforced up to and including αs,max
//! 2. Doubly reinforced designs pin x at ξb·h0
//! 3. Purity: identical inputs give bit-identical results
//! 4. Designed reinforcement carries the design moment

use flexure_core::equations::flexure::solve_xi;
use flexure_core::{check, design, CheckInput, DesignInput, SectionMode, SectionProperties};
use proptest::prelude::*;

// -- Strategies --

/// Rectangular beam sections with strengths from the usual grade range.
fn section_strategy() -> impl Strategy<Value = SectionProperties> {
    (
        150.0..500.0f64,  // b
        300.0..1000.0f64, // h
        30.0..80.0f64,    // a_s
        25.0..60.0f64,    // a_s'
        9.6..27.5f64,     // fc
        270.0..435.0f64,  // fy
        0.94..=1.0f64,    // alpha1
        0.45..0.6f64,     // xi_b
    )
        .prop_map(|(b, h, a_s, a_s_prime, f_c, f_y, alpha1, xi_b)| {
            SectionProperties::new(b, h, a_s, a_s_prime, f_c, f_y, f_y)
                .with_alpha1(alpha1)
                .with_xi_b(xi_b)
        })
}

fn moment_strategy() -> impl Strategy<Value = f64> {
    0.0..1500.0f64
}

proptest! {
    #[test]
    fn design_branch_follows_alpha_s(section in section_strategy(), moment in moment_strategy()) {
        let result = design(&DesignInput::new("prop", section, moment)).unwrap();
        let h0 = section.h_mm - section.a_s_mm;
        prop_assert_eq!(result.h0_mm, h0);

        if result.alpha_s <= result.alpha_s_max {
            prop_assert_eq!(result.mode(), SectionMode::Single);
            prop_assert_eq!(result.as_prime_mm2, 0.0);
        } else {
            prop_assert_eq!(result.mode(), SectionMode::Double);
            prop_assert_eq!(result.x_mm, section.xi_b * h0);
            prop_assert!(result.as_prime_mm2 >= 0.0);
        }
        prop_assert_eq!(result.x_mm, result.xi() * h0);
    }

    #[test]
    fn design_capacity_matches_moment(section in section_strategy(), moment in 1.0..1500.0f64) {
        let result = design(&DesignInput::new("prop", section, moment)).unwrap();
        let relative = (result.m_capacity_knm - moment).abs() / moment;
        prop_assert!(relative < 1e-9, "M = {}, Mu = {}", moment, result.m_capacity_knm);
    }

    #[test]
    fn design_is_pure(section in section_strategy(), moment in moment_strategy()) {
        let input = DesignInput::new("prop", section, moment);
        let first = design(&input).unwrap();
        let second = design(&input).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn check_is_pure(
        section in section_strategy(),
        as_mm2 in 0.0..6000.0f64,
        as_prime_mm2 in 0.0..3000.0f64,
    ) {
        let input = CheckInput::new("prop", section, as_mm2, as_prime_mm2);
        let first = check(&input).unwrap();
        let second = check(&input).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.mode(), SectionMode::Check);
        prop_assert_eq!(first.x_mm, section.xi_b * first.h0_mm);
    }

    #[test]
    fn solve_xi_rejects_negative(alpha_s in -10.0..0.0f64) {
        prop_assume!(alpha_s < 0.0);
        prop_assert!(solve_xi(alpha_s).is_err());
    }

    #[test]
    fn solve_xi_rejects_above_half(alpha_s in 0.5..10.0f64) {
        prop_assume!(alpha_s > 0.5);
        prop_assert!(solve_xi(alpha_s).is_err());
    }

    #[test]
    fn solve_xi_stays_in_unit_interval(alpha_s in 0.0..=0.5f64) {
        let xi = solve_xi(alpha_s).unwrap();
        prop_assert!((0.0..=1.0).contains(&xi));
    }
}
