//! # Error Types
//!
//! Structured error types for flexure_core. The calculation engine itself
//! only ever produces [`CalcError::OutOfRange`]; the remaining variants
//! cover material lookup and input collection done by front ends.
//!
//! ## Example
//!
//! ```rust
//! use flexure_core::errors::{CalcError, CalcResult};
//!
//! fn check_ratio(alpha_s: f64) -> CalcResult<()> {
//!     if !(0.0..=0.5).contains(&alpha_s) {
//!         return Err(CalcError::out_of_range("alpha_s", alpha_s, 0.0, 0.5));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_ratio(0.6).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for flexure_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A value fell outside the range a formula is valid for
    #[error("Value out of range for '{field}': {value} (valid range {min} ~ {max})")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Material grade not found in the catalogue
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an OutOfRange error
    pub fn out_of_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        CalcError::OutOfRange {
            field: field.into(),
            value,
            min,
            max,
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::OutOfRange { .. } => "OUT_OF_RANGE",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::out_of_range("alpha_s", 0.6, 0.0, 0.5);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"OutOfRange\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_message_names_field_and_range() {
        let msg = CalcError::out_of_range("alpha_s", -0.1, 0.0, 0.5).to_string();
        assert!(msg.contains("alpha_s"));
        assert!(msg.contains("-0.1"));
        assert!(msg.contains("0.5"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::out_of_range("x", 1.0, 0.0, 0.5).error_code(), "OUT_OF_RANGE");
        assert_eq!(CalcError::missing_field("f_c_mpa").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::material_not_found("C99").error_code(), "MATERIAL_NOT_FOUND");
        assert_eq!(CalcError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
    }
}
