//! Concrete grades (GB 50010-2010 Table 4.1.4-1, Section 6.2.6)
//!
//! Design compressive strength `fc` and stress-block parameters. Stress-block
//! factors are constant up to C50 and interpolate linearly toward C80.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Ultimate compressive strain for concrete up to C50
const EPS_CU_NORMAL: f64 = 0.0033;

/// Concrete strength grade (C = characteristic cube strength in MPa)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConcreteGrade {
    C20,
    C25,
    C30,
    C35,
    C40,
    C45,
    C50,
    C55,
    C60,
}

impl ConcreteGrade {
    /// All grades for UI selection
    pub const ALL: [ConcreteGrade; 9] = [
        ConcreteGrade::C20,
        ConcreteGrade::C25,
        ConcreteGrade::C30,
        ConcreteGrade::C35,
        ConcreteGrade::C40,
        ConcreteGrade::C45,
        ConcreteGrade::C50,
        ConcreteGrade::C55,
        ConcreteGrade::C60,
    ];

    /// Grade code (e.g., "C30")
    pub fn code(&self) -> &'static str {
        match self {
            ConcreteGrade::C20 => "C20",
            ConcreteGrade::C25 => "C25",
            ConcreteGrade::C30 => "C30",
            ConcreteGrade::C35 => "C35",
            ConcreteGrade::C40 => "C40",
            ConcreteGrade::C45 => "C45",
            ConcreteGrade::C50 => "C50",
            ConcreteGrade::C55 => "C55",
            ConcreteGrade::C60 => "C60",
        }
    }

    /// Characteristic cube strength fcu,k (MPa)
    pub fn f_cu_k_mpa(&self) -> f64 {
        match self {
            ConcreteGrade::C20 => 20.0,
            ConcreteGrade::C25 => 25.0,
            ConcreteGrade::C30 => 30.0,
            ConcreteGrade::C35 => 35.0,
            ConcreteGrade::C40 => 40.0,
            ConcreteGrade::C45 => 45.0,
            ConcreteGrade::C50 => 50.0,
            ConcreteGrade::C55 => 55.0,
            ConcreteGrade::C60 => 60.0,
        }
    }

    /// Design axial compressive strength fc (MPa)
    pub fn f_c_mpa(&self) -> f64 {
        match self {
            ConcreteGrade::C20 => 9.6,
            ConcreteGrade::C25 => 11.9,
            ConcreteGrade::C30 => 14.3,
            ConcreteGrade::C35 => 16.7,
            ConcreteGrade::C40 => 19.1,
            ConcreteGrade::C45 => 21.1,
            ConcreteGrade::C50 => 23.1,
            ConcreteGrade::C55 => 25.3,
            ConcreteGrade::C60 => 27.5,
        }
    }

    /// Equivalent stress-block factor α1: 1.0 up to C50, 0.94 at C80
    pub fn alpha1(&self) -> f64 {
        1.0 - 0.06 * self.high_strength_fraction()
    }

    /// Stress-block depth factor β1: 0.8 up to C50, 0.74 at C80
    pub fn beta1(&self) -> f64 {
        0.8 - 0.06 * self.high_strength_fraction()
    }

    /// Ultimate compressive strain εcu
    pub fn eps_cu(&self) -> f64 {
        let reduced = EPS_CU_NORMAL - (self.f_cu_k_mpa() - 50.0) * 1.0e-5;
        reduced.min(EPS_CU_NORMAL)
    }

    // 0 at C50 and below, 1 at C80
    fn high_strength_fraction(&self) -> f64 {
        ((self.f_cu_k_mpa() - 50.0) / 30.0).clamp(0.0, 1.0)
    }

    /// Parse from common string representations ("C30", "c30", "30")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_uppercase();
        let code = if normalized.starts_with('C') {
            normalized
        } else {
            format!("C{normalized}")
        };
        Self::ALL
            .into_iter()
            .find(|grade| grade.code() == code)
            .ok_or_else(|| CalcError::material_not_found(s))
    }
}

impl std::fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
