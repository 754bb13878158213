//! # Shear and Moment Diagrams
//!
//! Pure queries on a solved [`Beam`]. Both diagrams superpose, edge by edge,
//! the reaction at the edge's start node and the edge's own clipped loads.
//!
//! ## Conventions
//!
//! - [`Beam::shear_force`] is right-continuous: a reaction or point load
//!   located exactly at `x` is already included
//! - [`Beam::shear_force_left`] is the left limit at `x`
//! - [`Beam::bending_moment`] is continuous
//! - Every query outside `[start, end]` returns exactly `0.0`

use crate::calculations::continuous_beam::Beam;
use crate::equations::concrete::neutral_line_depth;
use crate::errors::{CalcError, CalcResult};

impl Beam {
    fn outside(&self, x: f64) -> bool {
        !(x >= self.start() && x <= self.end())
    }

    /// Shear force at `x` (right limit)
    pub fn shear_force(&self, x: f64) -> f64 {
        if self.outside(x) {
            return 0.0;
        }
        let reactions = self.reactions();
        let mut shear: f64 = self
            .edges()
            .iter()
            .enumerate()
            .take_while(|(_, edge)| edge.start() <= x)
            .map(|(i, edge)| reactions[i] + edge.load_shear(x, true))
            .sum();
        if x >= self.end() {
            shear += reactions[reactions.len() - 1];
        }
        shear
    }

    /// Shear force just to the left of `x`
    ///
    /// Equal to [`Beam::shear_force`] everywhere except at reactions and
    /// point loads. At the beam start the left limit is 0.
    pub fn shear_force_left(&self, x: f64) -> f64 {
        if self.outside(x) {
            return 0.0;
        }
        let reactions = self.reactions();
        self.edges()
            .iter()
            .enumerate()
            .take_while(|(_, edge)| edge.start() < x)
            .map(|(i, edge)| reactions[i] + edge.load_shear(x, false))
            .sum()
    }

    /// Bending moment at `x`, positive sagging
    pub fn bending_moment(&self, x: f64) -> f64 {
        if self.outside(x) {
            return 0.0;
        }
        let reactions = self.reactions();
        self.edges()
            .iter()
            .enumerate()
            .take_while(|(_, edge)| edge.start() < x)
            .map(|(i, edge)| reactions[i] * (x - edge.start()) + edge.load_moment(x))
            .sum()
    }

    /// Incremental shear evaluator for non-decreasing query positions
    pub fn shear_cursor(&self) -> ShearCursor<'_> {
        ShearCursor::new(self)
    }

    /// Sample the shear diagram at `divisions + 1` evenly spaced stations
    ///
    /// A station that coincides with a breakpoint is emitted twice, first
    /// with the left limit and then with the right value, so plots show the
    /// jump.
    pub fn shear_force_array(&self, divisions: usize) -> CalcResult<Vec<(f64, f64)>> {
        let stations = self.stations(divisions)?;
        let mut cursor = self.shear_cursor();
        let mut samples = Vec::with_capacity(stations.len() + self.break_points().len());

        for x in stations {
            match self.nearest_break_point(x) {
                Some(bp) => {
                    samples.push((bp, cursor.left_limit(bp)));
                    samples.push((bp, cursor.value_at(bp)));
                }
                None => samples.push((x, cursor.value_at(x))),
            }
        }
        Ok(samples)
    }

    /// Sample the moment diagram at `divisions + 1` evenly spaced stations
    pub fn bending_moment_array(&self, divisions: usize) -> CalcResult<Vec<(f64, f64)>> {
        Ok(self
            .stations(divisions)?
            .into_iter()
            .map(|x| {
                let x = self.nearest_break_point(x).unwrap_or(x);
                (x, self.bending_moment(x))
            })
            .collect())
    }

    /// Evenly spaced stations over `[start, end]`, ends exact
    ///
    /// `divisions` must lie in `1..=MAX_DIAGRAM_DIVISIONS`.
    fn stations(&self, divisions: usize) -> CalcResult<Vec<f64>> {
        if divisions == 0 {
            return Err(CalcError::invalid_input(
                "divisions",
                "0",
                "At least one division is required",
            ));
        }
        if divisions > MAX_DIAGRAM_DIVISIONS {
            return Err(CalcError::invalid_input(
                "divisions",
                divisions.to_string(),
                format!("At most {} divisions are supported", MAX_DIAGRAM_DIVISIONS),
            ));
        }
        let (start, end) = (self.start(), self.end());
        let step = self.length() / divisions as f64;
        Ok((0..=divisions)
            .map(|k| if k == divisions { end } else { start + k as f64 * step })
            .collect())
    }

    /// Largest moment over the sampled diagram and breakpoints, with its position
    pub fn max_moment(&self, divisions: usize) -> CalcResult<(f64, f64)> {
        let samples = self.with_break_point_moments(self.bending_moment_array(divisions)?);
        Ok(highest(&samples))
    }

    /// Smallest (most hogging) moment over the sampled diagram and breakpoints
    pub fn min_moment(&self, divisions: usize) -> CalcResult<(f64, f64)> {
        let samples = self.with_break_point_moments(self.bending_moment_array(divisions)?);
        Ok(lowest(&samples))
    }

    /// Largest shear magnitude over the sampled diagram, with its position
    pub fn max_abs_shear(&self, divisions: usize) -> CalcResult<(f64, f64)> {
        Ok(largest_magnitude(&self.shear_force_array(divisions)?))
    }

    /// Moment samples plus the exact moment at every breakpoint, where
    /// support peaks sit
    pub(crate) fn with_break_point_moments(&self, mut samples: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
        samples.extend(self.break_points().iter().map(|&x| (x, self.bending_moment(x))));
        samples
    }

    /// Neutral-axis depth of a rectangular concrete section under the moment at `x`
    ///
    /// See [`neutral_line_depth`] for the formula and failure modes.
    pub fn neutral_line(&self, x: f64, width: f64, effective_depth: f64, load_factor: f64, fcd: f64) -> CalcResult<f64> {
        neutral_line_depth(self.bending_moment(x), width, effective_depth, load_factor, fcd)
    }
}

/// Upper bound on sampling divisions for diagram arrays
pub const MAX_DIAGRAM_DIVISIONS: usize = 1_000_000;

// =============================================================================
// EXTREMA
// =============================================================================

/// Sample with the largest value; the first wins a tie
pub(crate) fn highest(samples: &[(f64, f64)]) -> (f64, f64) {
    samples
        .iter()
        .copied()
        .reduce(|best, s| if s.1 > best.1 { s } else { best })
        .unwrap_or((0.0, 0.0))
}

/// Sample with the smallest value; the first wins a tie
pub(crate) fn lowest(samples: &[(f64, f64)]) -> (f64, f64) {
    samples
        .iter()
        .copied()
        .reduce(|best, s| if s.1 < best.1 { s } else { best })
        .unwrap_or((0.0, 0.0))
}

/// Position and magnitude of the sample with the largest absolute value
pub(crate) fn largest_magnitude(samples: &[(f64, f64)]) -> (f64, f64) {
    samples
        .iter()
        .map(|&(x, v)| (x, v.abs()))
        .reduce(|best, s| if s.1 > best.1 { s } else { best })
        .unwrap_or((0.0, 0.0))
}

// =============================================================================
// SHEAR CURSOR
// =============================================================================

/// Shear evaluator that remembers where the previous query ended
///
/// Edges fully to the left of the current edge are folded into a carried
/// sum, so a left-to-right sweep costs one pass over the edges in total.
/// A query left of the previous one restarts the sweep.
#[derive(Debug, Clone)]
pub struct ShearCursor<'a> {
    beam: &'a Beam,
    edge: usize,
    completed: f64,
    last_x: f64,
}

impl<'a> ShearCursor<'a> {
    fn new(beam: &'a Beam) -> Self {
        Self {
            beam,
            edge: 0,
            completed: 0.0,
            last_x: f64::NEG_INFINITY,
        }
    }

    fn seek(&mut self, x: f64) {
        if x < self.last_x {
            self.edge = 0;
            self.completed = 0.0;
        }
        self.last_x = x;

        let edges = self.beam.edges();
        let reactions = self.beam.reactions();
        while self.edge + 1 < edges.len() && edges[self.edge + 1].start() <= x {
            self.completed += reactions[self.edge] - edges[self.edge].total_load();
            self.edge += 1;
        }
    }

    /// Same value as [`Beam::shear_force`]
    pub fn value_at(&mut self, x: f64) -> f64 {
        if self.beam.outside(x) {
            return 0.0;
        }
        self.seek(x);
        let reactions = self.beam.reactions();
        let edge = &self.beam.edges()[self.edge];
        let mut shear = self.completed + reactions[self.edge] + edge.load_shear(x, true);
        if x >= self.beam.end() {
            shear += reactions[reactions.len() - 1];
        }
        shear
    }

    /// Same value as [`Beam::shear_force_left`]
    pub fn left_limit(&mut self, x: f64) -> f64 {
        if self.beam.outside(x) || x == self.beam.start() {
            return 0.0;
        }
        self.seek(x);
        let edge = &self.beam.edges()[self.edge];
        if edge.start() == x {
            // Everything left of an interior node is already folded in
            return self.completed;
        }
        self.completed + self.beam.reactions()[self.edge] + edge.load_shear(x, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::{DistributedLoad, PunctualLoad};
    use crate::node::{supported_nodes, Node};

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON * b.abs().max(1.0)
    }

    fn two_span() -> Beam {
        Beam::new(supported_nodes(&[0.0, 3.2, 8.0]), &[DistributedLoad::uniform(12.0)], &[], 1.0).unwrap()
    }

    fn overhangs() -> Beam {
        let nodes = vec![Node::free(0.0), Node::supported(2.0), Node::supported(8.0), Node::free(10.0)];
        Beam::new(
            nodes,
            &[DistributedLoad::uniform(4.0)],
            &[PunctualLoad::new(3.0, 0.0), PunctualLoad::new(6.0, 10.0)],
            1.0,
        )
        .unwrap()
    }

    #[test]
    fn test_shear_jump_at_interior_support() {
        let beam = two_span();
        assert!(approx_eq(beam.shear_force_left(3.2), -27.6), "{}", beam.shear_force_left(3.2));
        assert!(approx_eq(beam.shear_force(3.2), 34.4), "{}", beam.shear_force(3.2));
        assert!(approx_eq(beam.shear_force(3.2) - beam.shear_force_left(3.2), beam.reactions()[1]));
    }

    #[test]
    fn test_shear_at_ends() {
        let beam = two_span();
        assert!(approx_eq(beam.shear_force(0.0), 10.8));
        assert_eq!(beam.shear_force_left(0.0), 0.0);
        assert!(approx_eq(beam.shear_force_left(8.0), -23.2));
        assert!(beam.shear_force(8.0).abs() < 1e-9);
    }

    #[test]
    fn test_moment_at_support() {
        let beam = two_span();
        assert!(approx_eq(beam.bending_moment(3.2), -26.88));
        assert_eq!(beam.bending_moment(0.0), 0.0);
        assert!(beam.bending_moment(8.0).abs() < 1e-9);
    }

    #[test]
    fn test_queries_outside_domain_are_zero() {
        let beam = two_span();
        for x in [-1.0, -1e-12, 8.0 + 1e-9, 100.0, f64::NAN] {
            assert_eq!(beam.shear_force(x), 0.0);
            assert_eq!(beam.shear_force_left(x), 0.0);
            assert_eq!(beam.bending_moment(x), 0.0);
        }
    }

    #[test]
    fn test_overhang_diagrams() {
        let beam = overhangs();
        assert!(approx_eq(beam.shear_force(0.0), -3.0));
        assert!(approx_eq(beam.shear_force_left(2.0), -11.0));
        assert!(approx_eq(beam.shear_force(2.0), 11.0));
        assert!(approx_eq(beam.shear_force(8.0), 14.0));
        assert!(approx_eq(beam.bending_moment(2.0), -14.0));
        assert!(approx_eq(beam.bending_moment(8.0), -20.0));
        assert!(approx_eq(beam.bending_moment(5.0), 1.0));
        assert!(beam.bending_moment(10.0).abs() < 1e-9);
        assert!(beam.shear_force(10.0).abs() < 1e-9);
    }

    #[test]
    fn test_cursor_matches_direct_evaluation() {
        let beam = overhangs();
        let mut cursor = beam.shear_cursor();
        for k in 0..=200 {
            let x = -0.5 + k as f64 * 0.055;
            assert!(approx_eq(cursor.value_at(x), beam.shear_force(x)), "x = {}", x);
        }
        for &x in beam.break_points() {
            let mut fresh = beam.shear_cursor();
            assert!(approx_eq(fresh.left_limit(x), beam.shear_force_left(x)), "x = {}", x);
            assert!(approx_eq(fresh.value_at(x), beam.shear_force(x)), "x = {}", x);
        }
    }

    #[test]
    fn test_cursor_restarts_when_moving_left() {
        let beam = two_span();
        let mut cursor = beam.shear_cursor();
        let right = cursor.value_at(6.0);
        let left = cursor.value_at(1.0);
        assert!(approx_eq(right, beam.shear_force(6.0)));
        assert!(approx_eq(left, beam.shear_force(1.0)));
    }

    #[test]
    fn test_shear_array_doubles_breakpoint_stations() {
        let beam = two_span();
        let samples = beam.shear_force_array(40).unwrap();
        // 41 stations, three of which (0, 3.2, 8) are breakpoints
        assert_eq!(samples.len(), 44);
        let at_support: Vec<_> = samples.iter().filter(|(x, _)| *x == 3.2).collect();
        assert_eq!(at_support.len(), 2);
        assert!(approx_eq(at_support[0].1, -27.6));
        assert!(approx_eq(at_support[1].1, 34.4));
    }

    #[test]
    fn test_moment_array() {
        let beam = Beam::new(supported_nodes(&[0.0, 7.0]), &[DistributedLoad::uniform(17.0)], &[], 1.0).unwrap();
        let samples = beam.bending_moment_array(2).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].0, 0.0);
        assert_eq!(samples[2].0, 7.0);
        assert!(approx_eq(samples[1].1, 104.125));
    }

    #[test]
    fn test_zero_divisions_rejected() {
        let beam = two_span();
        assert_eq!(beam.shear_force_array(0).unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(beam.bending_moment_array(0).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_excessive_divisions_rejected() {
        let beam = two_span();
        for divisions in [MAX_DIAGRAM_DIVISIONS + 1, usize::MAX] {
            assert_eq!(beam.shear_force_array(divisions).unwrap_err().error_code(), "INVALID_INPUT");
            assert_eq!(beam.bending_moment_array(divisions).unwrap_err().error_code(), "INVALID_INPUT");
            assert_eq!(beam.result(divisions).unwrap_err().error_code(), "INVALID_INPUT");
        }
    }

    #[test]
    fn test_extrema_helpers() {
        let samples = [(0.0, 1.0), (1.0, -4.0), (2.0, 3.0), (3.0, 3.0)];
        assert_eq!(highest(&samples), (2.0, 3.0));
        assert_eq!(lowest(&samples), (1.0, -4.0));
        assert_eq!(largest_magnitude(&samples), (1.0, 4.0));
        assert_eq!(highest(&[]), (0.0, 0.0));
    }

    #[test]
    fn test_extrema() {
        let beam = two_span();
        let (x_min, m_min) = beam.min_moment(40).unwrap();
        assert!(approx_eq(m_min, -26.88));
        assert!(approx_eq(x_min, 3.2));
        let (_, v_max) = beam.max_abs_shear(40).unwrap();
        assert!(approx_eq(v_max, 34.4));
        let (_, m_max) = beam.max_moment(400).unwrap();
        assert!(m_max > 0.0);
    }

    #[test]
    fn test_neutral_line() {
        let beam = Beam::new(supported_nodes(&[0.0, 4.0]), &[DistributedLoad::uniform(10.0)], &[], 1.0).unwrap();
        assert!(approx_eq(beam.bending_moment(2.0), 20.0));
        let x = beam.neutral_line(2.0, 0.14, 0.364, 1.4, 20000.0 / 1.4).unwrap();
        assert!((x - 0.060596).abs() < 1e-5, "x = {}", x);
    }
}
