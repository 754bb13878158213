//! # Continuous Beam Analysis
//!
//! Straight beams on any number of point supports, with optional cantilever
//! overhangs at either end, under trapezoidal and point loads.
//!
//! ## Analysis Method
//!
//! Slope-deflection (direct stiffness) with the rotation of every supported
//! node as the unknown:
//!
//! 1. Clip every load to the spans it touches ([`Edge`])
//! 2. Accumulate fixed-end moments `M`, fixed-end shears `F`, the rotational
//!    stiffness `K` (4EI/L, 2EI/L) and the shear coupling `Kv` (±6EI/L²)
//! 3. Overhangs add their statics directly to the supporting node
//! 4. Solve `K·θ = M` by dense LU over the supported nodes
//! 5. Reactions `R = Kv·d + F`, with `d = -θ`
//!
//! ## Notation
//!
//! - N nodes create N-1 edges (spans)
//! - Nodes are numbered 0 to N-1 (left to right)
//! - Only node 0 and node N-1 may be free (cantilever tips)
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::continuous_beam::Beam;
//! use beam_core::loads::DistributedLoad;
//! use beam_core::node::supported_nodes;
//!
//! // Two spans, 3.2 + 4.8, uniform load 12
//! let beam = Beam::new(
//!     supported_nodes(&[0.0, 3.2, 8.0]),
//!     &[DistributedLoad::uniform(12.0)],
//!     &[],
//!     1.0,
//! ).unwrap();
//!
//! let r = beam.reactions();
//! assert!((r[0] - 10.8).abs() < 1e-9);
//! assert!((r[1] - 62.0).abs() < 1e-9);
//! assert!((r[2] - 23.2).abs() < 1e-9);
//! assert!((beam.bending_moment(3.2) + 26.88).abs() < 1e-9);
//! ```

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::calculations::diagrams::{highest, largest_magnitude, lowest};
use crate::calculations::edge::{Edge, SpanRestraint};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{partition_loads, DistributedLoad, Load, PunctualLoad};
use crate::node::Node;

// =============================================================================
// BEAM
// =============================================================================

/// A solved continuous beam
///
/// Built once by [`Beam::new`]; afterwards every query is a pure read, so a
/// `Beam` can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct Beam {
    nodes: Vec<Node>,
    edges: Vec<Edge>,

    /// Rotational stiffness K (N×N)
    stiffness: DMatrix<f64>,

    /// Rotation-to-shear coupling Kv (N×N)
    shear_stiffness: DMatrix<f64>,

    /// Fixed-end moments M
    moments: DVector<f64>,

    /// Fixed-end shears F
    forces: DVector<f64>,

    /// Node rotations d = -θ (zero at free nodes)
    displacements: DVector<f64>,

    /// Support reactions R (zero at free nodes)
    reactions: DVector<f64>,

    /// Sorted, de-duplicated x of supports, point loads and both beam ends
    break_points: Vec<f64>,
}

impl Beam {
    /// Build and solve a beam with the same flexural rigidity on every span
    ///
    /// # Arguments
    ///
    /// * `nodes` - Nodes in strictly increasing x
    /// * `distributed` - Line loads (clipped to the beam; outside parts are ignored)
    /// * `punctual` - Point loads (loads off the beam are ignored)
    /// * `ei` - Flexural rigidity of every span
    ///
    /// # Returns
    ///
    /// * `Err(CalcError::InvalidInput)` - Bad geometry, loads, or rigidity
    /// * `Err(CalcError::UnstableStructure)` - Fewer than two supports or a singular system
    pub fn new(nodes: Vec<Node>, distributed: &[DistributedLoad], punctual: &[PunctualLoad], ei: f64) -> CalcResult<Self> {
        let rigidities = vec![ei; nodes.len().saturating_sub(1)];
        Self::with_span_rigidities(nodes, distributed, punctual, &rigidities)
    }

    /// Build and solve a beam from a mixed load list
    pub fn from_loads(nodes: Vec<Node>, loads: &[Load], ei: f64) -> CalcResult<Self> {
        let (distributed, punctual) = partition_loads(loads);
        Self::new(nodes, &distributed, &punctual, ei)
    }

    /// Build and solve a beam with one flexural rigidity per span
    ///
    /// `rigidities[i]` applies to the span between `nodes[i]` and `nodes[i + 1]`.
    pub fn with_span_rigidities(
        nodes: Vec<Node>,
        distributed: &[DistributedLoad],
        punctual: &[PunctualLoad],
        rigidities: &[f64],
    ) -> CalcResult<Self> {
        validate_nodes(&nodes)?;
        validate_rigidities(rigidities, nodes.len() - 1)?;
        for q in distributed {
            q.validate()?;
        }
        for p in punctual {
            p.validate()?;
        }

        let last = nodes.len() - 2;
        let edges: Vec<Edge> = nodes
            .windows(2)
            .zip(rigidities)
            .enumerate()
            .map(|(i, (pair, &ei))| Edge::new(pair[0], pair[1], distributed, punctual, ei, i == last))
            .collect();

        let assembly = Assembly::build(nodes.len(), &edges)?;
        let displacements = solve_rotations(&nodes, &assembly.stiffness, &assembly.moments)?;
        let reactions = &assembly.shear_stiffness * &displacements + &assembly.forces;
        let break_points = collect_break_points(&nodes, &edges);

        Ok(Self {
            nodes,
            edges,
            stiffness: assembly.stiffness,
            shear_stiffness: assembly.shear_stiffness,
            moments: assembly.moments,
            forces: assembly.forces,
            displacements,
            reactions,
            break_points,
        })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// x of the first node
    pub fn start(&self) -> f64 {
        self.nodes[0].x
    }

    /// x of the last node
    pub fn end(&self) -> f64 {
        self.nodes[self.nodes.len() - 1].x
    }

    /// Distance from the first to the last node
    pub fn length(&self) -> f64 {
        self.end() - self.start()
    }

    /// Rotational stiffness matrix K
    pub fn stiffness(&self) -> &DMatrix<f64> {
        &self.stiffness
    }

    /// Rotation-to-shear coupling matrix Kv
    pub fn shear_stiffness(&self) -> &DMatrix<f64> {
        &self.shear_stiffness
    }

    /// Fixed-end moment vector M
    pub fn moments(&self) -> &[f64] {
        self.moments.as_slice()
    }

    /// Fixed-end shear vector F
    pub fn forces(&self) -> &[f64] {
        self.forces.as_slice()
    }

    /// Node rotations (zero at free nodes)
    pub fn displacements(&self) -> &[f64] {
        self.displacements.as_slice()
    }

    /// Support reactions, positive upward (zero at free nodes)
    pub fn reactions(&self) -> &[f64] {
        self.reactions.as_slice()
    }

    /// Sorted, de-duplicated diagram breakpoints
    pub fn break_points(&self) -> &[f64] {
        &self.break_points
    }

    /// Sum of every load resultant acting on the beam
    pub fn total_applied_load(&self) -> f64 {
        self.edges.iter().map(Edge::total_load).sum()
    }

    /// True when `x` is one of the breakpoints, within a length-relative tolerance
    pub fn is_break_point(&self, x: f64) -> bool {
        self.nearest_break_point(x).is_some()
    }

    /// The breakpoint within tolerance of `x`, if any
    pub(crate) fn nearest_break_point(&self, x: f64) -> Option<f64> {
        let tolerance = BREAK_POINT_TOLERANCE * self.length().max(1.0);
        let idx = self.break_points.partition_point(|&bp| bp < x - tolerance);
        self.break_points
            .get(idx)
            .copied()
            .filter(|bp| (bp - x).abs() <= tolerance)
    }
}

/// Relative tolerance for matching a sample station to a breakpoint
const BREAK_POINT_TOLERANCE: f64 = 1e-9;

// =============================================================================
// VALIDATION
// =============================================================================

fn validate_nodes(nodes: &[Node]) -> CalcResult<()> {
    if nodes.len() < 2 {
        return Err(CalcError::invalid_input(
            "nodes",
            nodes.len().to_string(),
            "At least two nodes are required",
        ));
    }

    for (i, node) in nodes.iter().enumerate() {
        if !node.x.is_finite() {
            return Err(CalcError::invalid_input(
                format!("nodes[{}].x", i),
                node.x.to_string(),
                "Node coordinates must be finite",
            ));
        }
    }

    for (i, pair) in nodes.windows(2).enumerate() {
        if pair[1].x <= pair[0].x {
            return Err(CalcError::invalid_input(
                format!("nodes[{}].x", i + 1),
                pair[1].x.to_string(),
                format!("Node coordinates must be strictly increasing (previous is {})", pair[0].x),
            ));
        }
    }

    let last = nodes.len() - 1;
    for (i, node) in nodes.iter().enumerate().take(last).skip(1) {
        if !node.y_fixed {
            return Err(CalcError::invalid_input(
                format!("nodes[{}].y_fixed", i),
                "false",
                "Only the first and last node may be free",
            ));
        }
    }

    Ok(())
}

fn validate_rigidities(rigidities: &[f64], spans: usize) -> CalcResult<()> {
    if rigidities.len() != spans {
        return Err(CalcError::invalid_input(
            "rigidities",
            rigidities.len().to_string(),
            format!("Expected one flexural rigidity per span ({})", spans),
        ));
    }
    for (i, &ei) in rigidities.iter().enumerate() {
        if !(ei.is_finite() && ei > 0.0) {
            return Err(CalcError::invalid_input(
                format!("rigidities[{}]", i),
                ei.to_string(),
                "Flexural rigidity must be positive",
            ));
        }
    }
    Ok(())
}

// =============================================================================
// ASSEMBLY
// =============================================================================

/// Global matrices and load vectors before the solve
struct Assembly {
    stiffness: DMatrix<f64>,
    shear_stiffness: DMatrix<f64>,
    moments: DVector<f64>,
    forces: DVector<f64>,
}

impl Assembly {
    fn build(n: usize, edges: &[Edge]) -> CalcResult<Self> {
        let mut assembly = Self {
            stiffness: DMatrix::zeros(n, n),
            shear_stiffness: DMatrix::zeros(n, n),
            moments: DVector::zeros(n),
            forces: DVector::zeros(n),
        };
        for (i, edge) in edges.iter().enumerate() {
            assembly.add_edge(i, edge)?;
        }
        Ok(assembly)
    }

    /// Add edge `i` (between nodes `i` and `i + 1`)
    fn add_edge(&mut self, i: usize, edge: &Edge) -> CalcResult<()> {
        let j = i + 1;
        match edge.restraint() {
            SpanRestraint::BothSupported => {
                let fea = edge.fixed_end_actions();
                self.moments[i] += fea.moment_start;
                self.moments[j] += fea.moment_end;
                self.forces[i] += fea.shear_start;
                self.forces[j] += fea.shear_end;

                let l = edge.length;
                let near = 4.0 * edge.ei / l;
                let far = 2.0 * edge.ei / l;
                let coupling = 6.0 * edge.ei / (l * l);

                self.stiffness[(i, i)] += near;
                self.stiffness[(i, j)] += far;
                self.stiffness[(j, i)] += far;
                self.stiffness[(j, j)] += near;

                self.shear_stiffness[(i, i)] += coupling;
                self.shear_stiffness[(i, j)] += coupling;
                self.shear_stiffness[(j, i)] -= coupling;
                self.shear_stiffness[(j, j)] -= coupling;
            }
            SpanRestraint::StartSupported => {
                // Overhang statics: the whole load and its moment go to the root
                self.forces[i] += edge.total_load();
                self.moments[i] += edge.load_moment_about(edge.start());
            }
            SpanRestraint::EndSupported => {
                self.forces[j] += edge.total_load();
                self.moments[j] += edge.load_moment_about(edge.end());
            }
            SpanRestraint::Unsupported => {
                return Err(CalcError::unstable(format!(
                    "Span {} between x = {} and x = {} has no support at either end",
                    i,
                    edge.start(),
                    edge.end()
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// SOLVE
// =============================================================================

/// Solve `K·θ = M` over the supported nodes and return `d = -θ` for every node
fn solve_rotations(nodes: &[Node], stiffness: &DMatrix<f64>, moments: &DVector<f64>) -> CalcResult<DVector<f64>> {
    let supported: Vec<usize> = nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| node.y_fixed)
        .map(|(i, _)| i)
        .collect();

    if supported.len() < 2 {
        return Err(CalcError::unstable(format!(
            "At least two supports are required, found {}",
            supported.len()
        )));
    }

    let reduced = stiffness.select_rows(supported.iter()).select_columns(supported.iter());
    let rhs = moments.select_rows(supported.iter());

    let theta = reduced
        .lu()
        .solve(&rhs)
        .ok_or_else(|| CalcError::unstable("Singular stiffness matrix"))?;

    if theta.iter().any(|v| !v.is_finite()) {
        return Err(CalcError::unstable("Stiffness solve produced non-finite rotations"));
    }

    let mut displacements = DVector::zeros(nodes.len());
    for (k, &node) in supported.iter().enumerate() {
        displacements[node] = -theta[k];
    }
    Ok(displacements)
}

fn collect_break_points(nodes: &[Node], edges: &[Edge]) -> Vec<f64> {
    let mut points: Vec<f64> = nodes
        .iter()
        .enumerate()
        .filter(|(i, node)| node.y_fixed || *i == 0 || *i == nodes.len() - 1)
        .map(|(_, node)| node.x)
        .chain(edges.iter().flat_map(|e| e.punctual_loads.iter().map(|p| p.x)))
        .collect();
    points.sort_by(f64::total_cmp);
    points.dedup();
    points
}

// =============================================================================
// RESULT
// =============================================================================

/// Serializable summary of a solved beam
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamResult {
    /// Support reactions, positive upward
    pub reactions: Vec<f64>,

    /// Node rotations
    pub rotations: Vec<f64>,

    /// Diagram breakpoints
    pub break_points: Vec<f64>,

    /// Sum of every applied load
    pub total_load: f64,

    /// Sum of every reaction
    pub total_reaction: f64,

    /// Largest moment and its position
    pub max_moment: f64,
    pub max_moment_x: f64,

    /// Smallest (most hogging) moment and its position
    pub min_moment: f64,
    pub min_moment_x: f64,

    /// Largest shear magnitude and its position
    pub max_abs_shear: f64,
    pub max_abs_shear_x: f64,

    /// Shear diagram: (x, shear)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shear_diagram: Vec<(f64, f64)>,

    /// Moment diagram: (x, moment)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub moment_diagram: Vec<(f64, f64)>,
}

impl BeamResult {
    /// Global vertical equilibrium residual
    pub fn equilibrium_error(&self) -> f64 {
        (self.total_reaction - self.total_load).abs()
    }
}

impl Beam {
    /// Sample both diagrams with `divisions` intervals and collect extrema
    pub fn result(&self, divisions: usize) -> CalcResult<BeamResult> {
        let shear_diagram = self.shear_force_array(divisions)?;
        let moment_diagram = self.bending_moment_array(divisions)?;
        let moment_samples = self.with_break_point_moments(moment_diagram.clone());

        let (max_moment_x, max_moment) = highest(&moment_samples);
        let (min_moment_x, min_moment) = lowest(&moment_samples);
        let (max_abs_shear_x, max_abs_shear) = largest_magnitude(&shear_diagram);

        Ok(BeamResult {
            reactions: self.reactions().to_vec(),
            rotations: self.displacements().to_vec(),
            break_points: self.break_points.clone(),
            total_load: self.total_applied_load(),
            total_reaction: self.reactions.iter().sum(),
            max_moment,
            max_moment_x,
            min_moment,
            min_moment_x,
            max_abs_shear,
            max_abs_shear_x,
            shear_diagram,
            moment_diagram,
        })
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
