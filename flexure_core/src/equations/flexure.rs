//! # Rectangular Section Flexure Formulas
//!
//! ```text
//!        ┌───────────────┐  ─┬─
//!        │ ○   ○   ○   ○ │   │ a_s'      As' (compression steel)
//!        │▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓│  ─┼─ x       α1·fc stress block
//!        │               │   │
//!      h │               │   │ h0
//!        │               │   │
//!        │ ●   ●   ●   ● │  ─┴─         As (tension steel)
//!        └───────────────┘   a_s
//!                b
//! ```
//!
//! ## Notation
//!
//! - `b` = section width, `h` = overall height
//! - `a_s`, `a_s'` = distance from the tension / compression face to the steel centroid
//! - `h0` = effective depth
//! - `x` = compression-zone depth, `ξ = x / h0`
//! - `α1` = equivalent stress-block factor
//! - `αs` = relative moment coefficient

use crate::errors::{CalcError, CalcResult};

/// Upper bound of `αs` for which the compression-depth quadratic has a real root
pub const ALPHA_S_SOLVE_MAX: f64 = 0.5;

/// Effective depth of the section.
///
/// # Formula
/// h0 = h - a_s
///
/// # Example
/// ```rust
/// use flexure_core::equations::flexure::effective_depth;
///
/// assert_eq!(effective_depth(500.0, 62.5), 437.5);
/// ```
#[inline]
pub fn effective_depth(h: f64, a_s: f64) -> f64 {
    h - a_s
}

/// Relative moment coefficient of a moment on the section.
///
/// # Formula
/// αs = M / (α1 · fc · b · h0²)
///
/// # Arguments
/// * `m_nmm` - Moment (N·mm)
/// * `b` - Section width (mm)
/// * `h0` - Effective depth (mm)
/// * `f_c` - Concrete design compressive strength (MPa)
/// * `alpha1` - Equivalent stress-block factor
///
/// # Example
/// ```rust
/// use flexure_core::equations::flexure::relative_moment_coefficient;
///
/// let alpha_s = relative_moment_coefficient(200.0e6, 250.0, 437.5, 14.3, 1.0);
/// assert!((alpha_s - 0.2923).abs() < 1e-4);
/// ```
#[inline]
pub fn relative_moment_coefficient(m_nmm: f64, b: f64, h0: f64, f_c: f64, alpha1: f64) -> f64 {
    m_nmm / (alpha1 * f_c * b * h0.powi(2))
}

/// Largest `αs` a singly-reinforced section may carry.
///
/// # Formula
/// αs,max = ξb (1 - 0.5 ξb)
///
/// # Example
/// ```rust
/// use flexure_core::equations::flexure::alpha_s_max;
///
/// assert!((alpha_s_max(0.518) - 0.383838).abs() < 1e-9);
/// ```
#[inline]
pub fn alpha_s_max(xi_b: f64) -> f64 {
    xi_b * (1.0 - 0.5 * xi_b)
}

/// Solve the compression-depth ratio from `αs`.
///
/// Takes the physical root of `0.5 ξ² - ξ + αs = 0`:
///
/// # Formula
/// ξ = 1 - √(1 - 2 αs)
///
/// The discriminant is clamped at zero so `αs = 0.5` yields exactly `ξ = 1`.
///
/// # Errors
/// [`CalcError::OutOfRange`] when `αs` is outside `[0, 0.5]`.
///
/// # Example
/// ```rust
/// use flexure_core::equations::flexure::solve_xi;
///
/// assert_eq!(solve_xi(0.0).unwrap(), 0.0);
/// assert_eq!(solve_xi(0.5).unwrap(), 1.0);
/// assert!(solve_xi(0.6).is_err());
/// ```
pub fn solve_xi(alpha_s: f64) -> CalcResult<f64> {
    // Written so NaN also fails
    if !(0.0..=ALPHA_S_SOLVE_MAX).contains(&alpha_s) {
        return Err(CalcError::out_of_range(
            "alpha_s",
            alpha_s,
            0.0,
            ALPHA_S_SOLVE_MAX,
        ));
    }
    let disc = (1.0 - 2.0 * alpha_s).max(0.0);
    Ok(1.0 - disc.sqrt())
}

/// Resultant of the concrete compression block (N).
///
/// # Formula
/// Cc = α1 · fc · b · x
#[inline]
pub fn concrete_block_force(alpha1: f64, f_c: f64, b: f64, x: f64) -> f64 {
    alpha1 * f_c * b * x
}

/// Moment of the concrete compression block about the tension steel (N·mm).
///
/// # Formula
/// Mc = Cc · (h0 - x/2)
#[inline]
pub fn concrete_block_moment(c_c: f64, h0: f64, x: f64) -> f64 {
    c_c * (h0 - 0.5 * x)
}

/// Lever arm between the compression and tension steel centroids (mm).
///
/// # Formula
/// z_s = h0 - a_s'
#[inline]
pub fn compression_steel_lever_arm(h0: f64, a_s_prime: f64) -> f64 {
    h0 - a_s_prime
}

/// Limiting compression-depth ratio for a balanced section.
///
/// Tension steel reaches yield at the same time the extreme concrete fiber
/// reaches its ultimate strain.
///
/// # Formula
/// ξb = β1 / (1 + fy / (Es · εcu))
///
/// # Example
/// ```rust
/// use flexure_core::equations::flexure::limiting_xi_b;
///
/// // HRB400 with concrete up to C50
/// let xi_b = limiting_xi_b(0.8, 360.0, 2.0e5, 0.0033);
/// assert!((xi_b - 0.518).abs() < 1e-3);
/// ```
///
/// # Reference
/// - GB 50010-2010 Eq. 6.2.7-1
#[inline]
pub fn limiting_xi_b(beta1: f64, f_y: f64, e_s: f64, eps_cu: f64) -> f64 {
    beta1 / (1.0 + f_y / (e_s * eps_cu))
}
