//! # Fixed-End Action Formulas
//!
//! Closed-form end moments and end shears for a single span whose two ends are
//! locked against rotation and vertical displacement. These are the load terms
//! of the slope-deflection system assembled in
//! [`crate::calculations::continuous_beam`].
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `a` = Distance from the start support to the start of the load
//! - `c` = Loaded length
//! - `b` = Distance from the end of the load to the end support (`L - a - c`)
//! - `P` = Point load magnitude
//! - `p` = Distributed load intensity (force per unit length)
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - End moments: Positive counterclockwise acting on the member end, so a
//!   downward load gives a positive start moment and a negative end moment
//! - End shears: Positive upward (they are support reactions of the locked span)
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1, Cases 1d-2d
//! - Structural Analysis by R.C. Hibbeler, fixed-end moment table

use std::ops::{Add, AddAssign};

/// End actions of a span with both ends locked.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedEndActions {
    /// Moment at the start node (counterclockwise positive)
    pub moment_start: f64,
    /// Moment at the end node (counterclockwise positive)
    pub moment_end: f64,
    /// Upward force at the start node
    pub shear_start: f64,
    /// Upward force at the end node
    pub shear_end: f64,
}

impl FixedEndActions {
    /// Complete a pair of end moments with the end shears implied by statics.
    ///
    /// Taking moments about the start node:
    /// ```text
    /// V2 = (W·x̄ - M1 - M2) / L
    /// V1 = W - V2
    /// ```
    /// where `W` is the load resultant and `x̄` its distance from the start node.
    pub fn from_moments(moment_start: f64, moment_end: f64, resultant: f64, lever: f64, l: f64) -> Self {
        let shear_end = (resultant * lever - moment_start - moment_end) / l;
        Self {
            moment_start,
            moment_end,
            shear_start: resultant - shear_end,
            shear_end,
        }
    }

    /// Resultant vertical force carried by both ends
    pub fn total_shear(&self) -> f64 {
        self.shear_start + self.shear_end
    }
}

impl Add for FixedEndActions {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            moment_start: self.moment_start + rhs.moment_start,
            moment_end: self.moment_end + rhs.moment_end,
            shear_start: self.shear_start + rhs.shear_start,
            shear_end: self.shear_end + rhs.shear_end,
        }
    }
}

impl AddAssign for FixedEndActions {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

// =============================================================================
// POINT LOAD
// =============================================================================

/// Fixed-end actions for a point load P at distance a from the start
///
/// ```text
///          P
///          ↓
///    ▣─────┬──────────▣
///      a        b
///    ←────── L ──────→
/// ```
///
/// # Formulas (Roark's Table 8.1, Case 1d)
/// - M1 = +Pab²/L²
/// - M2 = -Pa²b/L²
/// - V1 = Pb²(3a + b)/L³
/// - V2 = Pa²(a + 3b)/L³
#[inline]
pub fn fixed_end_point_load(p: f64, a: f64, l: f64) -> FixedEndActions {
    let b = l - a;
    let l2 = l * l;
    let l3 = l2 * l;
    FixedEndActions {
        moment_start: p * a * b * b / l2,
        moment_end: -p * a * a * b / l2,
        shear_start: p * b * b * (3.0 * a + b) / l3,
        shear_end: p * a * a * (a + 3.0 * b) / l3,
    }
}

// =============================================================================
// DISTRIBUTED LOADS
// =============================================================================

/// Fixed-end actions for a uniform load w over the full span
///
/// # Formulas
/// - M1 = -M2 = wL²/12
/// - V1 = V2 = wL/2
#[inline]
pub fn fixed_end_uniform_full(w: f64, l: f64) -> FixedEndActions {
    let m = w * l * l / 12.0;
    let v = w * l / 2.0;
    FixedEndActions {
        moment_start: m,
        moment_end: -m,
        shear_start: v,
        shear_end: v,
    }
}

/// Fixed-end actions for a uniform (rectangular) block of intensity p over `[a, a + c]`
///
/// ```text
///          ↓↓↓↓↓↓↓ p
///    ▣─────═══════────▣
///      a      c     b
/// ```
///
/// # Formulas
/// - M1 = p/(12L²)·[4L((b+c)³ - b³) - 3((b+c)⁴ - b⁴)]
/// - M2 = -p/(12L²)·[4L((a+c)³ - a³) - 3((a+c)⁴ - a⁴)]
#[inline]
pub fn fixed_end_partial_rectangular(p: f64, a: f64, c: f64, l: f64) -> FixedEndActions {
    let b = l - a - c;
    let k = p / (12.0 * l * l);
    let m1 = k * (4.0 * l * ((b + c).powi(3) - b.powi(3)) - 3.0 * ((b + c).powi(4) - b.powi(4)));
    let m2 = -k * (4.0 * l * ((a + c).powi(3) - a.powi(3)) - 3.0 * ((a + c).powi(4) - a.powi(4)));
    FixedEndActions::from_moments(m1, m2, p * c, a + c / 2.0, l)
}

/// Fixed-end actions for a triangular block rising from 0 at `a` to p at `a + c`
///
/// ```text
///                ↓ p
///             ↓↓↓↓
///          ↓↓↓↓↓↓↓
///    ▣─────═══════────▣
///      a      c     b
/// ```
///
/// # Formulas
/// - M1 = pc/(540L²)·[10(3b+c)²(3a+2c) - 15c²(3b-L) - 17c³]
/// - M2 = -pc/(540L²)·[10(3b+c)(3a+2c)² - 15c²(3a-L) - 28c³]
///
/// A negative p describes a block falling from `|p|` to 0 after subtraction
/// from a rectangular block, so trapezoids of either slope decompose cleanly.
#[inline]
pub fn fixed_end_partial_triangular(p: f64, a: f64, c: f64, l: f64) -> FixedEndActions {
    let b = l - a - c;
    let k = p * c / (540.0 * l * l);
    let m1 = k * (10.0 * (3.0 * b + c).powi(2) * (3.0 * a + 2.0 * c) - 15.0 * c * c * (3.0 * b - l) - 17.0 * c.powi(3));
    let m2 = -k * (10.0 * (3.0 * b + c) * (3.0 * a + 2.0 * c).powi(2) - 15.0 * c * c * (3.0 * a - l) - 28.0 * c.powi(3));
    FixedEndActions::from_moments(m1, m2, p * c / 2.0, a + 2.0 * c / 3.0, l)
}

/// Fixed-end actions for a trapezoidal load from `q_start` at `a` to `q_end` at `a + c`
///
/// Decomposed as a rectangular block of `q_start` plus a triangular block of
/// `q_end - q_start`.
#[inline]
pub fn fixed_end_trapezoid(q_start: f64, q_end: f64, a: f64, c: f64, l: f64) -> FixedEndActions {
    fixed_end_partial_rectangular(q_start, a, c, l) + fixed_end_partial_triangular(q_end - q_start, a, c, l)
}

// =============================================================================
// SIMPLY-SUPPORTED REFERENCE REACTIONS
// Used to check the stiffness solution on statically determinate spans
// =============================================================================

/// Simply-supported reactions for a trapezoidal load over `[a, a + c]`
///
/// # Formulas
/// - W = (q1 + q2)c/2
/// - x̄ = a + c(q1 + 2q2) / (3(q1 + q2))
/// - R2 = W·x̄/L, R1 = W - R2
#[inline]
pub fn simple_span_trapezoid_reactions(q_start: f64, q_end: f64, a: f64, c: f64, l: f64) -> (f64, f64) {
    let w = (q_start + q_end) * c / 2.0;
    if w == 0.0 {
        return (0.0, 0.0);
    }
    let lever = a + c * (q_start + 2.0 * q_end) / (3.0 * (q_start + q_end));
    let r2 = w * lever / l;
    (w - r2, r2)
}

// =============================================================================
// UNIT TESTS
// =============================================================================
