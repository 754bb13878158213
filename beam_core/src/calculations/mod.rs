//! # Beam Calculations
//!
//! The beam model, split the way the analysis runs:
//!
//! - [`edge`] - Per-span load clipping and fixed-end actions
//! - [`continuous_beam`] - Assembly, solve and reactions ([`Beam`])
//! - [`diagrams`] - Shear and moment queries on a solved beam
//!
//! A [`Beam`] is built once and then only read, so the diagram queries are
//! plain `&self` methods and can run from many threads at once.

pub mod continuous_beam;
pub mod diagrams;
pub mod edge;

// Re-export commonly used types
pub use continuous_beam::{Beam, BeamResult};
pub use diagrams::{ShearCursor, MAX_DIAGRAM_DIVISIONS};
pub use edge::{Edge, SpanRestraint};
