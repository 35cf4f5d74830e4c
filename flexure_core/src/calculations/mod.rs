//! # Section Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - [`SectionResult`] - Calculation result (JSON-serializable)
//! - `design(input)` / `check(input)` - Pure calculation functions
//!
//! ## Available Calculations
//!
//! - [`section::design`] - Required reinforcement for a design moment
//! - [`section::check`] - Moment capacity of given reinforcement

pub mod section;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// Re-export commonly used types
pub use section::{
    check,
    design,
    CheckInput,
    DesignInput,
    SectionExtra,
    SectionMode,
    SectionProperties,
    SectionResult,
};

/// Enum wrapper for all calculation types.
///
/// This is the JSON envelope accepted by front ends:
///
/// ```json
/// { "type": "Design", "label": "L-1", "b_mm": 250.0, "...": "...", "moment_knm": 325.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Reinforcement design for a known moment
    Design(DesignInput),
    /// Capacity check of known reinforcement
    Check(CheckInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Design(d) => &d.label,
            CalculationItem::Check(c) => &c.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Design(_) => "Design",
            CalculationItem::Check(_) => "Check",
        }
    }

    /// Parse an item from JSON text
    pub fn from_json(json: &str) -> CalcResult<Self> {
        serde_json::from_str(json).map_err(|e| CalcError::serialization(format!("Invalid calculation JSON: {e}")))
    }

    /// Run the calculation this item describes
    pub fn run(&self) -> CalcResult<SectionResult> {
        match self {
            CalculationItem::Design(input) => design(input),
            CalculationItem::Check(input) => check(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_from_json() {
        let json = r#"{
            "type": "Check",
            "label": "B-2",
            "b_mm": 250.0, "h_mm": 500.0, "a_s_mm": 62.5, "a_s_prime_mm": 40.0,
            "f_c_mpa": 14.3, "f_y_mpa": 360.0, "f_y_prime_mpa": 360.0,
            "as_mm2": 2600.0, "as_prime_mm2": 800.0
        }"#;
        let item = CalculationItem::from_json(json).unwrap();
        assert_eq!(item.calc_type(), "Check");
        assert_eq!(item.label(), "B-2");

        let result = item.run().unwrap();
        assert_eq!(result.mode(), SectionMode::Check);
    }

    #[test]
    fn test_item_from_bad_json() {
        let err = CalculationItem::from_json(r#"{ "type": "Shear" }"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let err = CalculationItem::from_json(r#"{ "type": "Design", "b_mm": 250.0 }"#).unwrap_err();
        assert!(err.to_string().contains("Invalid calculation JSON"));
    }

    #[test]
    fn test_item_dispatches_design() {
        let section = SectionProperties::new(250.0, 500.0, 62.5, 40.0, 14.3, 360.0, 360.0);
        let item = CalculationItem::Design(DesignInput::new("B-1", section, 325.0));
        assert_eq!(item.run().unwrap(), design(&DesignInput::new("B-1", section, 325.0)).unwrap());
    }

    #[test]
    fn test_item_serialization_roundtrip() {
        let section = SectionProperties::new(300.0, 600.0, 40.0, 40.0, 19.1, 360.0, 360.0).with_xi_b(0.5);
        let item = CalculationItem::Design(DesignInput::new("B-3", section, 180.0));
        let json = serde_json::to_string(&item).unwrap();
        let roundtrip: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, roundtrip);
    }
}
