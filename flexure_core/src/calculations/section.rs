//! # Rectangular Section Flexure (Section Analyzer)
//!
//! Required reinforcement and moment capacity of a rectangular reinforced
//! concrete section using the equivalent rectangular stress block.
//!
//! Two entry points:
//!
//! - [`design`] - given a design moment, find `As` (and `As'` when the
//!   section has to be doubly reinforced)
//! - [`check`] - given `As` and `As'`, report the moment capacity
//!
//! ## Assumptions
//!
//! - Single layer of tension steel and single layer of compression steel
//! - All steel yields (`fy`, `fy'`)
//! - Units fixed at mm, MPa, kN·m
//! - No range validation of geometry or strengths; only `αs` fed to the
//!   compression-depth solve is checked
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use flexure_core::calculations::section::{design, DesignInput, SectionMode, SectionProperties};
//!
//! let section = SectionProperties::new(250.0, 500.0, 62.5, 40.0, 14.3, 360.0, 360.0);
//! let result = design(&DesignInput::new("L-1", section, 325.0)).unwrap();
//!
//! assert_eq!(result.mode(), SectionMode::Double);
//! println!("As = {:.0} mm², As' = {:.0} mm²", result.as_mm2, result.as_prime_mm2);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::flexure::{
    alpha_s_max,
    compression_steel_lever_arm,
    concrete_block_force,
    concrete_block_moment,
    effective_depth,
    relative_moment_coefficient,
    solve_xi,
};
use crate::errors::CalcResult;
use crate::materials::MaterialPair;
use crate::units::{KilonewtonMeters, Mpa, NewtonMillimeters, SqMillimeters};

/// Default equivalent stress-block factor α1 (concrete up to C50)
pub const DEFAULT_ALPHA1: f64 = 1.0;

/// Default limiting compression-depth ratio ξb (HRB400, concrete up to C50)
pub const DEFAULT_XI_B: f64 = 0.518;

fn default_alpha1() -> f64 {
    DEFAULT_ALPHA1
}

fn default_xi_b() -> f64 {
    DEFAULT_XI_B
}

fn nmm_to_knm(value: f64) -> f64 {
    KilonewtonMeters::from(NewtonMillimeters(value)).value()
}

// ============================================================================
// Inputs
// ============================================================================

/// Geometry, material strengths and stress-block parameters of a section.
///
/// ## JSON Example
///
/// ```json
/// {
///   "b_mm": 250.0,
///   "h_mm": 500.0,
///   "a_s_mm": 62.5,
///   "a_s_prime_mm": 40.0,
///   "f_c_mpa": 14.3,
///   "f_y_mpa": 360.0,
///   "f_y_prime_mpa": 360.0
/// }
/// ```
///
/// `alpha1` and `xi_b` may be omitted and default to 1.0 and 0.518.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Section width b (mm)
    pub b_mm: f64,

    /// Overall section height h (mm)
    pub h_mm: f64,

    /// Tension face to tension-steel centroid a_s (mm)
    pub a_s_mm: f64,

    /// Compression face to compression-steel centroid a_s' (mm)
    pub a_s_prime_mm: f64,

    /// Concrete design compressive strength fc (MPa)
    pub f_c_mpa: f64,

    /// Tension steel design strength fy (MPa)
    pub f_y_mpa: f64,

    /// Compression steel design strength fy' (MPa)
    pub f_y_prime_mpa: f64,

    /// Equivalent stress-block factor α1
    #[serde(default = "default_alpha1")]
    pub alpha1: f64,

    /// Limiting compression-depth ratio ξb
    #[serde(default = "default_xi_b")]
    pub xi_b: f64,
}

impl SectionProperties {
    /// Create section properties with default `alpha1` and `xi_b`.
    pub fn new(
        b_mm: f64,
        h_mm: f64,
        a_s_mm: f64,
        a_s_prime_mm: f64,
        f_c_mpa: f64,
        f_y_mpa: f64,
        f_y_prime_mpa: f64,
    ) -> Self {
        Self {
            b_mm,
            h_mm,
            a_s_mm,
            a_s_prime_mm,
            f_c_mpa,
            f_y_mpa,
            f_y_prime_mpa,
            alpha1: DEFAULT_ALPHA1,
            xi_b: DEFAULT_XI_B,
        }
    }

    /// Override the stress-block factor α1
    pub fn with_alpha1(mut self, alpha1: f64) -> Self {
        self.alpha1 = alpha1;
        self
    }

    /// Override the limiting compression-depth ratio ξb
    pub fn with_xi_b(mut self, xi_b: f64) -> Self {
        self.xi_b = xi_b;
        self
    }

    /// Take strengths, α1 and ξb from catalogue grades.
    pub fn with_materials(mut self, materials: MaterialPair) -> Self {
        self.f_c_mpa = materials.concrete.f_c_mpa();
        self.f_y_mpa = materials.rebar.f_y_mpa();
        self.f_y_prime_mpa = materials.rebar.f_y_prime_mpa();
        self.alpha1 = materials.concrete.alpha1();
        self.xi_b = materials.xi_b();
        self
    }

    /// Effective depth h0 = h - a_s (mm)
    pub fn effective_depth_mm(&self) -> f64 {
        effective_depth(self.h_mm, self.a_s_mm)
    }

    /// Singly-reinforced ceiling αs,max
    pub fn alpha_s_max(&self) -> f64 {
        alpha_s_max(self.xi_b)
    }

    /// Relative moment coefficient of a moment in kN·m
    pub fn alpha_s_for(&self, moment_knm: f64) -> f64 {
        let m_nmm = NewtonMillimeters::from(KilonewtonMeters(moment_knm));
        relative_moment_coefficient(
            m_nmm.value(),
            self.b_mm,
            self.effective_depth_mm(),
            self.f_c_mpa,
            self.alpha1,
        )
    }
}

/// Input for reinforcement design under a known moment.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "L-1",
///   "b_mm": 250.0,
///   "h_mm": 500.0,
///   "a_s_mm": 62.5,
///   "a_s_prime_mm": 40.0,
///   "f_c_mpa": 14.3,
///   "f_y_mpa": 360.0,
///   "f_y_prime_mpa": 360.0,
///   "moment_knm": 325.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignInput {
    /// User label (e.g., "L-1", "Beam at Grid B")
    #[serde(default)]
    pub label: String,

    #[serde(flatten)]
    pub section: SectionProperties,

    /// Design moment M (kN·m)
    pub moment_knm: f64,
}

impl DesignInput {
    pub fn new(label: impl Into<String>, section: SectionProperties, moment_knm: f64) -> Self {
        Self {
            label: label.into(),
            section,
            moment_knm,
        }
    }
}

/// Input for checking the capacity of a section with known steel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInput {
    /// User label
    #[serde(default)]
    pub label: String,

    #[serde(flatten)]
    pub section: SectionProperties,

    /// Provided tension steel area As (mm²)
    pub as_mm2: f64,

    /// Provided compression steel area As' (mm²)
    pub as_prime_mm2: f64,
}

impl CheckInput {
    pub fn new(
        label: impl Into<String>,
        section: SectionProperties,
        as_mm2: f64,
        as_prime_mm2: f64,
    ) -> Self {
        Self {
            label: label.into(),
            section,
            as_mm2,
            as_prime_mm2,
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// Which calculation path produced a [`SectionResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionMode {
    Single,
    Double,
    Check,
}

impl SectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionMode::Single => "single",
            SectionMode::Double => "double",
            SectionMode::Check => "check",
        }
    }
}

impl std::fmt::Display for SectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostics of a singly-reinforced design
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SingleExtra {
    /// Compression-depth ratio ξ
    pub xi: f64,
}

/// Diagnostics of a doubly-reinforced design
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoubleExtra {
    /// Compression-depth ratio ξ (= ξb)
    pub xi: f64,

    /// Moment carried by the concrete block at ξb (kN·m)
    pub m_c_knm: f64,

    /// Residual moment assigned to compression steel (kN·m)
    pub delta_m_knm: f64,
}

/// Force and moment bookkeeping of a capacity check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckExtra {
    /// Concrete compression resultant Cc (N)
    pub c_c_n: f64,

    /// Compression steel resultant Cs (N)
    pub c_s_n: f64,

    /// Tension steel resultant Ts (N)
    pub t_s_n: f64,

    /// Cc + Cs (N)
    pub c_total_n: f64,

    /// Ts - (Cc + Cs) (N). Large magnitudes mean the assumed ξb is far
    /// from the true equilibrium depth.
    pub unbalanced_force_n: f64,

    /// Concrete block moment about the tension steel (kN·m)
    pub m_c_knm: f64,

    /// Compression steel moment about the tension steel (kN·m)
    pub m_cs_knm: f64,

    /// Compression-depth ratio ξ (= ξb)
    pub xi: f64,
}

/// Mode-specific diagnostics, tagged with the mode that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SectionExtra {
    Single(SingleExtra),
    Double(DoubleExtra),
    Check(CheckExtra),
}

impl SectionExtra {
    pub fn mode(&self) -> SectionMode {
        match self {
            SectionExtra::Single(_) => SectionMode::Single,
            SectionExtra::Double(_) => SectionMode::Double,
            SectionExtra::Check(_) => SectionMode::Check,
        }
    }

    pub fn xi(&self) -> f64 {
        match self {
            SectionExtra::Single(e) => e.xi,
            SectionExtra::Double(e) => e.xi,
            SectionExtra::Check(e) => e.xi,
        }
    }
}

/// Result of [`design`] or [`check`].
///
/// ## JSON Example
///
/// ```json
/// {
///   "h0_mm": 437.5,
///   "alpha_s": 0.2923,
///   "alpha_s_max": 0.3838,
///   "x_mm": 155.5,
///   "as_mm2": 1544.3,
///   "as_prime_mm2": 0.0,
///   "m_capacity_knm": 200.0,
///   "extra": { "mode": "single", "xi": 0.3555 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionResult {
    /// Effective depth h0 (mm)
    pub h0_mm: f64,

    /// Relative moment coefficient of the design moment, or of the
    /// computed capacity for a check
    pub alpha_s: f64,

    /// Singly-reinforced ceiling αs,max
    pub alpha_s_max: f64,

    /// Compression-zone depth x (mm)
    pub x_mm: f64,

    /// Tension steel area As (mm²)
    pub as_mm2: f64,

    /// Compression steel area As' (mm²); exactly 0 for singly-reinforced designs
    pub as_prime_mm2: f64,

    /// Moment capacity with this reinforcement (kN·m)
    pub m_capacity_knm: f64,

    pub extra: SectionExtra,
}

impl SectionResult {
    pub fn mode(&self) -> SectionMode {
        self.extra.mode()
    }

    /// Compression-depth ratio ξ used by the branch taken
    pub fn xi(&self) -> f64 {
        self.extra.xi()
    }
}

// ============================================================================
// Branch Selection
// ============================================================================

/// How a design moment is resisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReinforcementBranch {
    /// Tension steel only
    Single,
    /// Compression depth pinned at ξb, compression steel carries the rest
    Double,
}

/// Singly reinforced up to and including `αs,max`.
pub fn select_branch(alpha_s: f64, alpha_s_max: f64) -> ReinforcementBranch {
    if alpha_s <= alpha_s_max {
        ReinforcementBranch::Single
    } else {
        ReinforcementBranch::Double
    }
}

// ============================================================================
// Calculations
// ============================================================================

/// Design the reinforcement for a moment.
///
/// # Returns
///
/// * `Ok(SectionResult)` in `single` or `double` mode
/// * `Err(CalcError::OutOfRange)` if the compression-depth solve receives
///   an `αs` outside `[0, 0.5]` (a negative design moment, for example)
#[tracing::instrument(level = "debug", skip_all, fields(label = %input.label, moment_knm = input.moment_knm))]
pub fn design(input: &DesignInput) -> CalcResult<SectionResult> {
    let section = &input.section;
    let h0 = section.effective_depth_mm();
    let m_nmm = NewtonMillimeters::from(KilonewtonMeters(input.moment_knm)).value();
    let alpha_s = relative_moment_coefficient(m_nmm, section.b_mm, h0, section.f_c_mpa, section.alpha1);
    let alpha_s_lim = section.alpha_s_max();

    let branch = select_branch(alpha_s, alpha_s_lim);
    tracing::debug!(h0, alpha_s, alpha_s_max = alpha_s_lim, ?branch, "selected reinforcement branch");

    match branch {
        ReinforcementBranch::Single => design_singly(section, h0, alpha_s, alpha_s_lim),
        ReinforcementBranch::Double => Ok(design_doubly(section, h0, m_nmm, alpha_s, alpha_s_lim)),
    }
}

fn design_singly(
    section: &SectionProperties,
    h0: f64,
    alpha_s: f64,
    alpha_s_lim: f64,
) -> CalcResult<SectionResult> {
    let xi = solve_xi(alpha_s)?;
    let x = xi * h0;
    let c_c = concrete_block_force(section.alpha1, section.f_c_mpa, section.b_mm, x);
    let as_mm2 = c_c / section.f_y_mpa;
    let m_capacity = concrete_block_moment(c_c, h0, x);

    Ok(SectionResult {
        h0_mm: h0,
        alpha_s,
        alpha_s_max: alpha_s_lim,
        x_mm: x,
        as_mm2,
        as_prime_mm2: 0.0,
        m_capacity_knm: nmm_to_knm(m_capacity),
        extra: SectionExtra::Single(SingleExtra { xi }),
    })
}

fn design_doubly(
    section: &SectionProperties,
    h0: f64,
    m_nmm: f64,
    alpha_s: f64,
    alpha_s_lim: f64,
) -> SectionResult {
    let xi = section.xi_b;
    let x = xi * h0;
    let c_c = concrete_block_force(section.alpha1, section.f_c_mpa, section.b_mm, x);
    let m_c = concrete_block_moment(c_c, h0, x);

    // Never ask for negative compression steel
    let delta_m = (m_nmm - m_c).max(0.0);

    let lever_arm = compression_steel_lever_arm(h0, section.a_s_prime_mm);
    let as_prime_mm2 = delta_m / (section.f_y_prime_mpa * lever_arm);

    // Tension steel balances the concrete block plus the compression steel force
    let as1_mm2 = c_c / section.f_y_mpa;
    let as_mm2 = as1_mm2 + as_prime_mm2 * section.f_y_prime_mpa / section.f_y_mpa;

    let m_capacity = m_c + section.f_y_prime_mpa * as_prime_mm2 * lever_arm;

    SectionResult {
        h0_mm: h0,
        alpha_s,
        alpha_s_max: alpha_s_lim,
        x_mm: x,
        as_mm2,
        as_prime_mm2,
        m_capacity_knm: nmm_to_knm(m_capacity),
        extra: SectionExtra::Double(DoubleExtra {
            xi,
            m_c_knm: nmm_to_knm(m_c),
            delta_m_knm: nmm_to_knm(delta_m),
        }),
    }
}

/// Moment capacity of a section with known reinforcement.
///
/// The compression depth is fixed at `ξb` and both steel layers are taken
/// as yielded; the depth is not solved from force equilibrium. How far the
/// given steel is from that assumption shows up as
/// [`CheckExtra::unbalanced_force_n`], which is reported, not rejected.
///
/// Because of this, feeding a singly-reinforced [`design`] result back into
/// `check` does not reproduce the design moment.
#[tracing::instrument(level = "debug", skip_all, fields(label = %input.label, as_mm2 = input.as_mm2, as_prime_mm2 = input.as_prime_mm2))]
pub fn check(input: &CheckInput) -> CalcResult<SectionResult> {
    let section = &input.section;
    let h0 = section.effective_depth_mm();
    let xi = section.xi_b;
    let x = xi * h0;

    let c_c = concrete_block_force(section.alpha1, section.f_c_mpa, section.b_mm, x);
    let c_s = (Mpa(section.f_y_prime_mpa) * SqMillimeters(input.as_prime_mm2)).value();
    let t_s = (Mpa(section.f_y_mpa) * SqMillimeters(input.as_mm2)).value();
    let c_total = c_c + c_s;

    let m_c = concrete_block_moment(c_c, h0, x);
    let m_cs = c_s * compression_steel_lever_arm(h0, section.a_s_prime_mm);
    let m_capacity_knm = nmm_to_knm(m_c + m_cs);

    let alpha_s = section.alpha_s_for(m_capacity_knm);
    let unbalanced_force_n = t_s - c_total;
    tracing::debug!(m_capacity_knm, unbalanced_force_n, "section checked");

    Ok(SectionResult {
        h0_mm: h0,
        alpha_s,
        alpha_s_max: section.alpha_s_max(),
        x_mm: x,
        as_mm2: input.as_mm2,
        as_prime_mm2: input.as_prime_mm2,
        m_capacity_knm,
        extra: SectionExtra::Check(CheckExtra {
            c_c_n: c_c,
            c_s_n: c_s,
            t_s_n: t_s,
            c_total_n: c_total,
            unbalanced_force_n,
            m_c_knm: nmm_to_knm(m_c),
            m_cs_knm: nmm_to_knm(m_cs),
            xi,
        }),
    })
}
