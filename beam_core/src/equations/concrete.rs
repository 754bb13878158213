//! # Reinforced-Concrete Section Formulas
//!
//! Neutral-axis depth of a singly reinforced rectangular section at the
//! ultimate limit state, using the simplified rectangular stress block
//! (`0.85·fcd` over `0.8·x`).
//!
//! ## Notation
//!
//! - `bw` = Section width
//! - `d` = Effective depth (compression face to tension steel centroid)
//! - `Mk` = Characteristic bending moment
//! - `γf` = Load factor, `Md = γf·|Mk|`
//! - `fcd` = Design compressive strength of concrete
//!
//! Units must be consistent (e.g. m and kN, kN/m²).

use crate::errors::{CalcError, CalcResult};

/// Neutral-axis depth for a characteristic moment `mk`
///
/// # Formula
/// ```text
/// x = 1.25·d·(1 - √(1 - Md / (0.425·bw·d²·fcd)))
/// ```
///
/// The radicand turns negative once `Md` exceeds the section's capacity with
/// the stress block spread over the whole effective depth; that case is a
/// [`CalcError::SectionInadequate`].
///
/// # Example
/// ```rust
/// use beam_core::equations::concrete::neutral_line_depth;
///
/// let x = neutral_line_depth(20.0, 0.14, 0.364, 1.4, 20000.0 / 1.4).unwrap();
/// assert!((x - 0.0606).abs() < 1e-4);
/// ```
pub fn neutral_line_depth(mk: f64, bw: f64, d: f64, load_factor: f64, fcd: f64) -> CalcResult<f64> {
    for (field, value) in [("width", bw), ("effective_depth", d), ("load_factor", load_factor), ("fcd", fcd)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(CalcError::invalid_input(field, value.to_string(), "Must be a positive finite number"));
        }
    }
    if !mk.is_finite() {
        return Err(CalcError::invalid_input("moment", mk.to_string(), "Moment must be finite"));
    }

    let md = load_factor * mk.abs();
    let capacity = 0.425 * bw * d * d * fcd;
    let radicand = 1.0 - md / capacity;
    if radicand < 0.0 {
        return Err(CalcError::SectionInadequate { moment: md, capacity });
    }
    Ok(1.25 * d * (1.0 - radicand.sqrt()))
}
