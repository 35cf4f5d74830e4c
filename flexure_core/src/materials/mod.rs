//! # Materials
//!
//! Design strengths for common concrete and reinforcing-steel grades
//! (GB 50010-2010 Tables 4.1.4-1 and 4.2.3-1).
//!
//! The section calculations take raw strengths, so this catalogue is a
//! convenience for callers that think in grades:
//!
//! ```rust
//! use flexure_core::materials::{ConcreteGrade, RebarGrade, MaterialPair};
//!
//! let pair = MaterialPair::new(ConcreteGrade::C30, RebarGrade::Hrb400);
//! assert_eq!(pair.concrete.f_c_mpa(), 14.3);
//! assert!((pair.xi_b() - 0.518).abs() < 1e-3);
//! ```

pub mod concrete;
pub mod rebar;

use serde::{Deserialize, Serialize};

pub use concrete::ConcreteGrade;
pub use rebar::RebarGrade;

use crate::equations::flexure::limiting_xi_b;

/// A concrete grade combined with a rebar grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialPair {
    pub concrete: ConcreteGrade,
    pub rebar: RebarGrade,
}

impl MaterialPair {
    pub fn new(concrete: ConcreteGrade, rebar: RebarGrade) -> Self {
        Self { concrete, rebar }
    }

    /// Limiting compression-depth ratio for this combination
    pub fn xi_b(&self) -> f64 {
        limiting_xi_b(
            self.concrete.beta1(),
            self.rebar.f_y_mpa(),
            self.rebar.e_s_mpa(),
            self.concrete.eps_cu(),
        )
    }
}

impl std::fmt::Display for MaterialPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.concrete, self.rebar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_xi_b_matches_c30_hrb400() {
        let pair = MaterialPair::new(ConcreteGrade::C30, RebarGrade::Hrb400);
        assert!((pair.xi_b() - 0.518).abs() < 1e-3);
    }

    #[test]
    fn test_xi_b_table_values() {
        // GB 50010 Table 6.2.7 (concrete up to C50)
        let cases = [
            (RebarGrade::Hpb300, 0.576),
            (RebarGrade::Hrb335, 0.550),
            (RebarGrade::Hrb400, 0.518),
            (RebarGrade::Hrb500, 0.482),
        ];
        for (rebar, expected) in cases {
            let xi_b = MaterialPair::new(ConcreteGrade::C30, rebar).xi_b();
            assert!((xi_b - expected).abs() < 1e-3, "{rebar}: {xi_b}");
        }
    }

    #[test]
    fn test_higher_grade_concrete_lowers_xi_b() {
        let c50 = MaterialPair::new(ConcreteGrade::C50, RebarGrade::Hrb400).xi_b();
        let c60 = MaterialPair::new(ConcreteGrade::C60, RebarGrade::Hrb400).xi_b();
        assert!(c60 < c50);
    }

    #[test]
    fn test_display() {
        let pair = MaterialPair::new(ConcreteGrade::C30, RebarGrade::Hrb400);
        assert_eq!(pair.to_string(), "C30 / HRB400");
    }
}
