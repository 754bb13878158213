//! Distributed (trapezoidal) line loads
//!
//! A [`DistributedLoad`] varies linearly from `start_value` at `x0` to
//! `end_value` at `xf`. Either bound may be infinite, in which case the load
//! is uniform at `start_value` and gets clipped to each span when the beam is
//! built.
//!
//! Every partial query works on the intersection of the query interval with
//! `[x0, xf]`; an empty or zero-width intersection contributes nothing.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

fn unbounded_start() -> f64 {
    f64::NEG_INFINITY
}

fn unbounded_end() -> f64 {
    f64::INFINITY
}

fn is_unbounded(x: &f64) -> bool {
    x.is_infinite()
}

/// Linearly varying line load over `[x0, xf]`
///
/// # Example
/// ```
/// use beam_core::loads::DistributedLoad;
///
/// let load = DistributedLoad::new(19.0, 49.0, 2.0, 8.0);
/// assert_eq!(load.total_force(), 204.0);
/// assert!((load.partial_centroid(0.0, 10.0) - 5.441).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Intensity at `x0` (force per unit length, positive downward)
    pub start_value: f64,

    /// Intensity at `xf`
    pub end_value: f64,

    /// Start of the loaded interval (omitted in JSON when unbounded)
    #[serde(default = "unbounded_start", skip_serializing_if = "is_unbounded")]
    pub x0: f64,

    /// End of the loaded interval (omitted in JSON when unbounded)
    #[serde(default = "unbounded_end", skip_serializing_if = "is_unbounded")]
    pub xf: f64,
}

impl DistributedLoad {
    /// Trapezoidal load from `start_value` at `x0` to `end_value` at `xf`
    pub fn new(start_value: f64, end_value: f64, x0: f64, xf: f64) -> Self {
        Self {
            start_value,
            end_value,
            x0,
            xf,
        }
    }

    /// Uniform load over the whole beam
    pub fn uniform(w: f64) -> Self {
        Self::new(w, w, f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Uniform load over `[x0, xf]`
    pub fn uniform_over(w: f64, x0: f64, xf: f64) -> Self {
        Self::new(w, w, x0, xf)
    }

    /// Length of the loaded interval (infinite when unbounded)
    pub fn extent(&self) -> f64 {
        self.xf - self.x0
    }

    /// Rate of change of intensity along x
    ///
    /// Zero for unbounded or zero-width loads.
    pub fn slope(&self) -> f64 {
        let extent = self.extent();
        if extent.is_finite() && extent > 0.0 {
            (self.end_value - self.start_value) / extent
        } else {
            0.0
        }
    }

    /// True when the intensity is the same at both ends
    pub fn is_uniform(&self) -> bool {
        self.start_value == self.end_value
    }

    /// Intensity at `x`, zero outside `[x0, xf]`
    pub fn value_at(&self, x: f64) -> f64 {
        if x < self.x0 || x > self.xf {
            return 0.0;
        }
        let slope = self.slope();
        if slope == 0.0 {
            self.start_value
        } else {
            self.start_value + slope * (x - self.x0)
        }
    }

    /// Intersection of this load with `[a, b]`, with boundary intensities
    /// recomputed from the unclipped slope
    ///
    /// Returns `None` when the intersection is empty or has zero width.
    pub fn clip(&self, a: f64, b: f64) -> Option<DistributedLoad> {
        let lo = a.max(self.x0);
        let hi = b.min(self.xf);
        if !(hi > lo) {
            return None;
        }
        Some(DistributedLoad::new(self.value_at(lo), self.value_at(hi), lo, hi))
    }

    /// Resultant force of the load lying inside `[a, b]`
    pub fn partial_force(&self, a: f64, b: f64) -> f64 {
        match self.clip(a, b) {
            Some(part) => (part.start_value + part.end_value) * (part.xf - part.x0) / 2.0,
            None => 0.0,
        }
    }

    /// First moment about the origin, ∫ q(s)·s ds, of the load inside `[a, b]`
    pub fn partial_first_moment(&self, a: f64, b: f64) -> f64 {
        match self.clip(a, b) {
            Some(part) => {
                let (lo, hi) = (part.x0, part.xf);
                (hi - lo) / 6.0 * (part.start_value * (2.0 * lo + hi) + part.end_value * (lo + 2.0 * hi))
            }
            None => 0.0,
        }
    }

    /// Moment about `pivot`, ∫ q(s)·(pivot - s) ds, of the load inside `[a, b]`
    ///
    /// Equal to `partial_force · (pivot - partial_centroid)` but stays exact
    /// when the resultant is zero.
    pub fn partial_moment_about(&self, a: f64, b: f64, pivot: f64) -> f64 {
        match self.clip(a, b) {
            Some(part) => {
                let near = pivot - part.x0;
                let far = pivot - part.xf;
                (part.xf - part.x0) / 6.0 * (part.start_value * (2.0 * near + far) + part.end_value * (near + 2.0 * far))
            }
            None => 0.0,
        }
    }

    /// Centroid x of the load inside `[a, b]`
    ///
    /// Follows the two-point trapezoid rule `lo + (hi - lo)(q1 + 2q2) / (3(q1 + q2))`.
    /// Returns 0 when the partial force is 0; check the force before using it.
    pub fn partial_centroid(&self, a: f64, b: f64) -> f64 {
        match self.clip(a, b) {
            Some(part) => {
                let sum = part.start_value + part.end_value;
                if sum == 0.0 {
                    return 0.0;
                }
                part.x0 + (part.xf - part.x0) * (part.start_value + 2.0 * part.end_value) / (3.0 * sum)
            }
            None => 0.0,
        }
    }

    /// Total resultant force
    pub fn total_force(&self) -> f64 {
        self.partial_force(self.x0, self.xf)
    }

    /// Centroid x of the whole load
    pub fn centroid(&self) -> f64 {
        self.partial_centroid(self.x0, self.xf)
    }

    /// Same load with both intensities multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.start_value * factor, self.end_value * factor, self.x0, self.xf)
    }

    /// Validate magnitudes and bounds
    pub fn validate(&self) -> CalcResult<()> {
        if !self.start_value.is_finite() || !self.end_value.is_finite() {
            return Err(CalcError::invalid_input(
                "distributed_load",
                format!("{} -> {}", self.start_value, self.end_value),
                "Load intensities must be finite",
            ));
        }
        if self.x0.is_nan() || self.xf.is_nan() {
            return Err(CalcError::invalid_input(
                "distributed_load",
                format!("[{}, {}]", self.x0, self.xf),
                "Load bounds must not be NaN",
            ));
        }
        if self.x0 > self.xf {
            return Err(CalcError::invalid_input(
                "distributed_load",
                format!("[{}, {}]", self.x0, self.xf),
                "Load start must not be after its end",
            ));
        }
        if !self.extent().is_finite() && !self.is_uniform() {
            return Err(CalcError::invalid_input(
                "distributed_load",
                format!("{} -> {} over [{}, {}]", self.start_value, self.end_value, self.x0, self.xf),
                "An unbounded load must be uniform",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_value_at() {
        let load = DistributedLoad::new(11.0, 17.0, 3.0, 8.0);
        assert!(approx_eq(load.value_at(3.0), 11.0));
        assert!(approx_eq(load.value_at(5.5), 14.0));
        assert!(approx_eq(load.value_at(8.0), 17.0));
        assert_eq!(load.value_at(2.99), 0.0);
        assert_eq!(load.value_at(8.01), 0.0);
    }

    #[test]
    fn test_unbounded_uniform() {
        let load = DistributedLoad::uniform(12.0);
        assert_eq!(load.slope(), 0.0);
        assert_eq!(load.value_at(-1e9), 12.0);
        assert!(approx_eq(load.partial_force(0.0, 3.2), 38.4));
        assert!(approx_eq(load.partial_centroid(0.0, 3.2), 1.6));
    }

    #[test]
    fn test_partial_centroid_reference() {
        let load = DistributedLoad::new(19.0, 49.0, 2.0, 8.0);
        assert_eq!(load.partial_centroid(0.0, 0.0), 0.0);
        // 2 + 6·(19 + 98)/(3·68)
        assert!(approx_eq(load.partial_centroid(0.0, 10.0), 2.0 + 6.0 * 117.0 / 204.0));
        assert!(approx_eq(load.centroid(), load.partial_centroid(0.0, 10.0)));
    }

    #[test]
    fn test_partial_force() {
        let load = DistributedLoad::new(11.0, 17.0, 3.0, 8.0);
        assert_eq!(load.partial_force(0.0, 3.0), 0.0);
        assert_eq!(load.partial_force(8.0, 10.0), 0.0);
        assert!(approx_eq(load.partial_force(0.0, 10.0), 70.0));
        assert!(approx_eq(load.total_force(), 70.0));
        // [3, 5.5]: (11 + 14)/2 · 2.5
        assert!(approx_eq(load.partial_force(0.0, 5.5), 31.25));
        // Reversed interval is empty
        assert_eq!(load.partial_force(6.0, 4.0), 0.0);
    }

    #[test]
    fn test_partial_queries_against_integration() {
        let load = DistributedLoad::new(-4.0, 9.0, 1.0, 6.0);
        let (a, b) = (2.0, 5.0);
        let n = 1000;
        let h = (b - a) / n as f64;
        let mut force = 0.0;
        let mut first = 0.0;
        for i in 0..n {
            let s = a + (i as f64 + 0.5) * h;
            force += load.value_at(s) * h;
            first += load.value_at(s) * s * h;
        }
        assert!((load.partial_force(a, b) - force).abs() < 1e-6);
        assert!((load.partial_first_moment(a, b) - first).abs() < 1e-4);
        assert!((load.partial_centroid(a, b) - first / force).abs() < 1e-4);
    }

    #[test]
    fn test_moment_about_survives_zero_resultant() {
        // -5 -> +5 over [0, 2]: zero resultant, pure couple
        let load = DistributedLoad::new(-5.0, 5.0, 0.0, 2.0);
        assert!(approx_eq(load.total_force(), 0.0));
        assert_eq!(load.partial_centroid(0.0, 2.0), 0.0);
        // ∫ q(s)(2 - s) ds with q = 5(s - 1) -> -10/3
        assert!(approx_eq(load.partial_moment_about(0.0, 2.0, 2.0), -10.0 / 3.0));
    }

    #[test]
    fn test_moment_about_matches_force_times_lever() {
        let load = DistributedLoad::new(11.0, 17.0, 3.0, 8.0);
        let pivot = 9.5;
        let expected = load.partial_force(0.0, 6.0) * (pivot - load.partial_centroid(0.0, 6.0));
        assert!(approx_eq(load.partial_moment_about(0.0, 6.0, pivot), expected));
    }

    #[test]
    fn test_clip_recomputes_boundary_values() {
        let load = DistributedLoad::new(11.0, 17.0, 3.0, 8.0);
        let part = load.clip(4.0, 10.0).unwrap();
        assert!(approx_eq(part.x0, 4.0));
        assert!(approx_eq(part.xf, 8.0));
        assert!(approx_eq(part.start_value, 12.2));
        assert!(approx_eq(part.end_value, 17.0));
        assert!(load.clip(8.0, 10.0).is_none());
        assert!(load.clip(0.0, 3.0).is_none());
    }

    #[test]
    fn test_validate() {
        assert!(DistributedLoad::new(1.0, 2.0, 0.0, 1.0).validate().is_ok());
        assert!(DistributedLoad::uniform(3.0).validate().is_ok());
        assert!(DistributedLoad::new(1.0, 2.0, 2.0, 1.0).validate().is_err());
        assert!(DistributedLoad::new(f64::NAN, 2.0, 0.0, 1.0).validate().is_err());
    }

    #[test]
    fn test_unbounded_load_must_be_uniform() {
        assert!(DistributedLoad::new(4.0, 4.0, f64::NEG_INFINITY, 5.0).validate().is_ok());
        assert!(DistributedLoad::new(1.0, 2.0, f64::NEG_INFINITY, f64::INFINITY).validate().is_err());
        assert!(DistributedLoad::new(1.0, 2.0, 0.0, f64::INFINITY).validate().is_err());
        assert!(DistributedLoad::new(1.0, 2.0, f64::NEG_INFINITY, 3.0).validate().is_err());
        assert!(!DistributedLoad::new(1.0, 2.0, 0.0, 3.0).is_uniform());
        assert!(DistributedLoad::uniform_over(3.0, 0.0, 3.0).is_uniform());
    }

    #[test]
    fn test_unbounded_serialization() {
        let load = DistributedLoad::uniform(5.0);
        let json = serde_json::to_string(&load).unwrap();
        assert_eq!(json, r#"{"start_value":5.0,"end_value":5.0}"#);
        let parsed: DistributedLoad = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, load);
    }
}
