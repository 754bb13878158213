//! # Beam Edges
//!
//! An edge is the span between two consecutive nodes. It owns the part of
//! every input load that falls inside it, so the assembly and the diagram
//! evaluators only ever look at span-local loads.
//!
//! ## Point-load attribution
//!
//! A point load belongs to the edge whose half-open interval `[start, end)`
//! contains it. The last edge also takes loads sitting exactly on the last
//! node, so tip loads on a cantilever and loads on the final support are not
//! lost. A load on an interior node is therefore counted once, on the edge to
//! its right.

use crate::equations::beam::{fixed_end_point_load, fixed_end_trapezoid, fixed_end_uniform_full, FixedEndActions};
use crate::loads::{DistributedLoad, PunctualLoad};
use crate::node::Node;

/// Restraint pattern of an edge's two end nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanRestraint {
    /// Both ends supported - interior span with stiffness terms
    BothSupported,
    /// Start supported, end free - overhang to the right
    StartSupported,
    /// Start free, end supported - overhang to the left
    EndSupported,
    /// Neither end supported - cannot carry load
    Unsupported,
}

impl SpanRestraint {
    pub fn from_nodes(start: &Node, end: &Node) -> Self {
        match (start.y_fixed, end.y_fixed) {
            (true, true) => SpanRestraint::BothSupported,
            (true, false) => SpanRestraint::StartSupported,
            (false, true) => SpanRestraint::EndSupported,
            (false, false) => SpanRestraint::Unsupported,
        }
    }

    /// Get display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            SpanRestraint::BothSupported => "Interior span",
            SpanRestraint::StartSupported => "Right overhang",
            SpanRestraint::EndSupported => "Left overhang",
            SpanRestraint::Unsupported => "Unsupported",
        }
    }
}

/// The element between two consecutive nodes
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub start_node: Node,
    pub end_node: Node,

    /// Distributed loads clipped to `[start, end]`
    pub distributed_loads: Vec<DistributedLoad>,

    /// Point loads attributed to this edge
    pub punctual_loads: Vec<PunctualLoad>,

    pub length: f64,

    /// Flexural rigidity of the span
    pub ei: f64,
}

impl Edge {
    /// Build the edge between `start_node` and `end_node`, keeping only the
    /// load that acts on it
    ///
    /// `is_last` marks the final edge of the beam, which also keeps point
    /// loads located exactly on its end node.
    pub fn new(
        start_node: Node,
        end_node: Node,
        distributed: &[DistributedLoad],
        punctual: &[PunctualLoad],
        ei: f64,
        is_last: bool,
    ) -> Self {
        let (a, b) = (start_node.x, end_node.x);

        let distributed_loads = distributed.iter().filter_map(|q| q.clip(a, b)).collect();

        let punctual_loads = punctual
            .iter()
            .filter(|p| p.x >= a && (p.x < b || (p.x == b && is_last)))
            .copied()
            .collect();

        Self {
            start_node,
            end_node,
            distributed_loads,
            punctual_loads,
            length: b - a,
            ei,
        }
    }

    pub fn start(&self) -> f64 {
        self.start_node.x
    }

    pub fn end(&self) -> f64 {
        self.end_node.x
    }

    pub fn restraint(&self) -> SpanRestraint {
        SpanRestraint::from_nodes(&self.start_node, &self.end_node)
    }

    /// Total downward load carried by this edge
    pub fn total_load(&self) -> f64 {
        let distributed: f64 = self.distributed_loads.iter().map(|q| q.total_force()).sum();
        let punctual: f64 = self.punctual_loads.iter().map(|p| p.value).sum();
        distributed + punctual
    }

    /// Moment of all edge loads about `pivot`, ∫ q(s)·(s - pivot) ds + Σ P·(x - pivot)
    ///
    /// Positive when the loads sit to the right of the pivot.
    pub fn load_moment_about(&self, pivot: f64) -> f64 {
        let distributed: f64 = self
            .distributed_loads
            .iter()
            .map(|q| -q.partial_moment_about(q.x0, q.xf, pivot))
            .sum();
        let punctual: f64 = self.punctual_loads.iter().map(|p| p.value * (p.x - pivot)).sum();
        distributed + punctual
    }

    /// Fixed-end actions of all edge loads with both ends locked
    pub fn fixed_end_actions(&self) -> FixedEndActions {
        let (a, b, l) = (self.start(), self.end(), self.length);
        let mut total = FixedEndActions::default();

        for q in &self.distributed_loads {
            let full_span_uniform = q.is_uniform() && q.x0 == a && q.xf == b;
            total += if full_span_uniform {
                fixed_end_uniform_full(q.start_value, l)
            } else {
                fixed_end_trapezoid(q.start_value, q.end_value, q.x0 - a, q.xf - q.x0, l)
            };
        }

        for p in &self.punctual_loads {
            total += fixed_end_point_load(p.value, p.x - a, l);
        }

        total
    }

    /// Shear carried past `x` by this edge's loads (reactions excluded)
    ///
    /// With `inclusive` set, a point load located exactly at `x` counts;
    /// otherwise the result is the left limit at `x`.
    pub(crate) fn load_shear(&self, x: f64, inclusive: bool) -> f64 {
        let distributed: f64 = self.distributed_loads.iter().map(|q| q.partial_force(q.x0, x)).sum();
        let punctual: f64 = self
            .punctual_loads
            .iter()
            .filter(|p| if inclusive { p.x <= x } else { p.x < x })
            .map(|p| p.value)
            .sum();
        -(distributed + punctual)
    }

    /// Bending moment at `x` caused by this edge's loads (reactions excluded)
    pub(crate) fn load_moment(&self, x: f64) -> f64 {
        let distributed: f64 = self
            .distributed_loads
            .iter()
            .map(|q| q.partial_moment_about(q.x0, x, x))
            .sum();
        let punctual: f64 = self
            .punctual_loads
            .iter()
            .filter(|p| p.x <= x)
            .map(|p| p.value * (x - p.x))
            .sum();
        -(distributed + punctual)
    }
}
