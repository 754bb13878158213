//! # beam_core - Continuous Beam Analysis Engine
//!
//! `beam_core` solves straight continuous beams on any number of point
//! supports, with optional cantilever overhangs, under trapezoidal and point
//! loads. It returns support reactions, node rotations and the shear and
//! bending-moment diagrams.
//!
//! ## Design Philosophy
//!
//! - **Solve once, query freely**: a [`Beam`] is immutable after construction
//! - **JSON-First**: inputs, models and results implement Serialize/Deserialize
//! - **Rich Errors**: structured [`CalcError`] values, never panics on bad input
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{Beam, DistributedLoad, PunctualLoad};
//! use beam_core::node::supported_nodes;
//!
//! let beam = Beam::new(
//!     supported_nodes(&[0.0, 7.0]),
//!     &[DistributedLoad::uniform(17.0)],
//!     &[],
//!     1.0,
//! )?;
//!
//! assert!((beam.reactions()[0] - 59.5).abs() < 1e-9);
//! assert!((beam.bending_moment(3.5) - 104.125).abs() < 1e-9);
//! # Ok::<(), beam_core::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`node`] - Supports and free ends
//! - [`loads`] - Distributed and point loads
//! - [`equations`] - Fixed-end actions and the concrete neutral-line formula
//! - [`calculations`] - Edges, beam assembly and solve, diagrams
//! - [`model`] - Serializable beam model and analysis settings
//! - [`file_io`] - Atomic model saves and versioned loads
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod model;
pub mod node;

// Re-export commonly used types at crate root for convenience
pub use calculations::{Beam, BeamResult, ShearCursor};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_model, save_model};
pub use loads::{DistributedLoad, Load, PunctualLoad};
pub use model::{AnalysisSettings, BeamModel, ModelMetadata};
pub use node::Node;
