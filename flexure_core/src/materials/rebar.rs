//! Reinforcing steel grades (GB 50010-2010 Tables 4.2.3-1 and 4.2.5)

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Hot-rolled reinforcing bar grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RebarGrade {
    /// Plain round bar, 300 MPa characteristic yield
    #[serde(rename = "HPB300")]
    Hpb300,
    /// Ribbed bar, 335 MPa characteristic yield
    #[serde(rename = "HRB335")]
    Hrb335,
    /// Ribbed bar, 400 MPa characteristic yield
    #[serde(rename = "HRB400")]
    Hrb400,
    /// Ribbed bar, 500 MPa characteristic yield
    #[serde(rename = "HRB500")]
    Hrb500,
}

impl RebarGrade {
    /// All grades for UI selection
    pub const ALL: [RebarGrade; 4] = [
        RebarGrade::Hpb300,
        RebarGrade::Hrb335,
        RebarGrade::Hrb400,
        RebarGrade::Hrb500,
    ];

    /// Grade code (e.g., "HRB400")
    pub fn code(&self) -> &'static str {
        match self {
            RebarGrade::Hpb300 => "HPB300",
            RebarGrade::Hrb335 => "HRB335",
            RebarGrade::Hrb400 => "HRB400",
            RebarGrade::Hrb500 => "HRB500",
        }
    }

    /// Design tensile strength fy (MPa)
    pub fn f_y_mpa(&self) -> f64 {
        match self {
            RebarGrade::Hpb300 => 270.0,
            RebarGrade::Hrb335 => 300.0,
            RebarGrade::Hrb400 => 360.0,
            RebarGrade::Hrb500 => 435.0,
        }
    }

    /// Design compressive strength fy' (MPa)
    pub fn f_y_prime_mpa(&self) -> f64 {
        match self {
            RebarGrade::Hpb300 => 270.0,
            RebarGrade::Hrb335 => 300.0,
            RebarGrade::Hrb400 => 360.0,
            RebarGrade::Hrb500 => 410.0,
        }
    }

    /// Elastic modulus Es (MPa)
    pub fn e_s_mpa(&self) -> f64 {
        match self {
            RebarGrade::Hpb300 => 2.1e5,
            _ => 2.0e5,
        }
    }

    /// Parse from common string representations ("HRB400", "hrb 400", "400")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '-', '_'], "").as_str() {
            "HPB300" | "300" => Ok(RebarGrade::Hpb300),
            "HRB335" | "335" => Ok(RebarGrade::Hrb335),
            "HRB400" | "400" => Ok(RebarGrade::Hrb400),
            "HRB500" | "500" => Ok(RebarGrade::Hrb500),
            _ => Err(CalcError::material_not_found(s)),
        }
    }
}

impl std::fmt::Display for RebarGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
