//! # flexure_core - Rectangular RC Section Flexure Engine
//!
//! Flexural design and capacity checks for rectangular reinforced-concrete
//! beam sections, using the singly/doubly reinforced method with an
//! equivalent rectangular stress block.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Fixed Units**: mm, MPa, kN·m throughout
//!
//! ## Quick Start
//!
//! ```rust
//! use flexure_core::{design, check, CheckInput, DesignInput, SectionMode, SectionProperties};
//!
//! let section = SectionProperties::new(250.0, 500.0, 62.5, 40.0, 14.3, 360.0, 360.0);
//!
//! let designed = design(&DesignInput::new("L-1", section, 200.0)).unwrap();
//! assert_eq!(designed.mode(), SectionMode::Single);
//! assert_eq!(designed.as_prime_mm2, 0.0);
//!
//! let checked = check(&CheckInput::new("L-1", section, 2600.0, 800.0)).unwrap();
//! println!("Mu = {:.1} kN·m", checked.m_capacity_knm);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Section design and capacity check
//! - [`equations`] - Flexure formula primitives
//! - [`materials`] - Concrete and rebar grade catalogue
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    check,
    design,
    CalculationItem,
    CheckInput,
    DesignInput,
    SectionExtra,
    SectionMode,
    SectionProperties,
    SectionResult,
};
pub use errors::{CalcError, CalcResult};
pub use materials::{ConcreteGrade, MaterialPair, RebarGrade};
