//! # Reinforced-Concrete Flexure Equations
//!
//! Formula primitives for rectangular sections under the equivalent
//! rectangular stress block. Calculations in [`crate::calculations`] are
//! assembled from these so each formula lives in exactly one place.
//!
//! ## Units
//!
//! All primitives take raw `f64` in N, mm and MPa. Moments are N·mm;
//! conversion to kN·m happens at the calculation boundary.
//!
//! ## Sign Conventions
//!
//! - **Moment**: positive sagging (tension at the bottom fiber, where `As` sits)
//! - **Forces**: compression and tension resultants are reported as magnitudes
//! - **Lever arms**: measured from the tension-steel centroid
//!
//! ## References
//!
//! - GB 50010-2010: Code for Design of Concrete Structures, Section 6.2

pub mod flexure;

pub use flexure::{
    alpha_s_max,
    compression_steel_lever_arm,
    concrete_block_force,
    concrete_block_moment,
    effective_depth,
    limiting_xi_b,
    relative_moment_coefficient,
    solve_xi,
    ALPHA_S_SOLVE_MAX,
};
