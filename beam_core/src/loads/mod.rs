//! Beam loads
//!
//! Two load shapes act on a beam:
//!
//! - [`DistributedLoad`] - trapezoidal line load over an interval
//! - [`PunctualLoad`] - concentrated force at a point
//!
//! [`Load`] wraps both in one closed set so a mixed load list can be queried
//! through the same partial-interval operations.
//!
//! # Example
//!
//! ```
//! use beam_core::loads::{DistributedLoad, Load, PunctualLoad};
//!
//! let loads = vec![
//!     Load::from(DistributedLoad::uniform_over(2.0, 0.0, 4.0)),
//!     Load::from(PunctualLoad::new(5.0, 3.0)),
//! ];
//! let total: f64 = loads.iter().map(|l| l.partial_force(0.0, 4.0)).sum();
//! assert_eq!(total, 13.0);
//! ```

pub mod distributed;
pub mod punctual;

pub use distributed::DistributedLoad;
pub use punctual::PunctualLoad;

use serde::{Deserialize, Serialize};

/// Any load that can act on a beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Load {
    /// Trapezoidal line load
    Distributed(DistributedLoad),
    /// Concentrated force
    Punctual(PunctualLoad),
}

impl Load {
    /// Intensity of a line load at `x`, or the magnitude of a point load
    /// located exactly at `x`; zero elsewhere
    pub fn value_at(&self, x: f64) -> f64 {
        match self {
            Load::Distributed(q) => q.value_at(x),
            Load::Punctual(p) if p.x == x => p.value,
            Load::Punctual(_) => 0.0,
        }
    }

    /// Resultant of the load lying inside the closed interval `[a, b]`
    pub fn partial_force(&self, a: f64, b: f64) -> f64 {
        match self {
            Load::Distributed(q) => q.partial_force(a, b),
            Load::Punctual(p) if a <= p.x && p.x <= b => p.value,
            Load::Punctual(_) => 0.0,
        }
    }

    /// Point of application of [`Load::partial_force`]; 0 when nothing lies in `[a, b]`
    pub fn partial_centroid(&self, a: f64, b: f64) -> f64 {
        match self {
            Load::Distributed(q) => q.partial_centroid(a, b),
            Load::Punctual(p) if a <= p.x && p.x <= b => p.x,
            Load::Punctual(_) => 0.0,
        }
    }

    /// Total resultant force
    pub fn resultant(&self) -> f64 {
        match self {
            Load::Distributed(q) => q.total_force(),
            Load::Punctual(p) => p.value,
        }
    }
}

impl From<DistributedLoad> for Load {
    fn from(load: DistributedLoad) -> Self {
        Load::Distributed(load)
    }
}

impl From<PunctualLoad> for Load {
    fn from(load: PunctualLoad) -> Self {
        Load::Punctual(load)
    }
}

/// Split a mixed load list into its distributed and punctual parts
pub fn partition_loads(loads: &[Load]) -> (Vec<DistributedLoad>, Vec<PunctualLoad>) {
    let mut distributed = Vec::new();
    let mut punctual = Vec::new();
    for load in loads {
        match load {
            Load::Distributed(q) => distributed.push(*q),
            Load::Punctual(p) => punctual.push(*p),
        }
    }
    (distributed, punctual)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_load_partial_queries() {
        let load = Load::from(PunctualLoad::new(5.0, 3.0));
        assert_eq!(load.partial_force(0.0, 3.0), 5.0);
        assert_eq!(load.partial_force(3.0, 7.0), 5.0);
        assert_eq!(load.partial_force(0.0, 2.9), 0.0);
        assert_eq!(load.partial_centroid(0.0, 7.0), 3.0);
        assert_eq!(load.value_at(3.0), 5.0);
        assert_eq!(load.value_at(3.1), 0.0);
    }

    #[test]
    fn test_distributed_variant_delegates() {
        let q = DistributedLoad::new(11.0, 17.0, 3.0, 8.0);
        let load = Load::from(q);
        assert_eq!(load.partial_force(0.0, 5.5), q.partial_force(0.0, 5.5));
        assert_eq!(load.partial_centroid(0.0, 5.5), q.partial_centroid(0.0, 5.5));
        assert_eq!(load.resultant(), 70.0);
    }

    #[test]
    fn test_partition() {
        let loads = [
            Load::from(DistributedLoad::uniform(1.0)),
            Load::from(PunctualLoad::new(2.0, 1.0)),
            Load::from(PunctualLoad::new(3.0, 2.0)),
        ];
        let (distributed, punctual) = partition_loads(&loads);
        assert_eq!(distributed.len(), 1);
        assert_eq!(punctual.len(), 2);
    }

    #[test]
    fn test_tagged_serialization() {
        let load = Load::from(PunctualLoad::new(5.0, 3.0));
        let json = serde_json::to_string(&load).unwrap();
        assert_eq!(json, r#"{"kind":"Punctual","value":5.0,"x":3.0}"#);
        let parsed: Load = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, load);
    }
}
