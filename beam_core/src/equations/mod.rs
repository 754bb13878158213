//! # Structural Engineering Equations
//!
//! Closed-form formulas used by the beam model, kept apart from the assembly
//! code so each one can be checked against its reference on its own.
//!
//! ## Modules
//!
//! - [`beam`] - Fixed-end actions (slope-deflection load terms)
//! - [`concrete`] - Reinforced-concrete neutral-axis depth
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Shear**: Positive when left side moves up relative to right
//! - **Reactions**: Positive upward (resisting gravity)

pub mod beam;
pub mod concrete;

pub use beam::{
    fixed_end_partial_rectangular,
    fixed_end_partial_triangular,
    fixed_end_point_load,
    fixed_end_trapezoid,
    fixed_end_uniform_full,
    simple_span_trapezoid_reactions,
    FixedEndActions,
};
pub use concrete::neutral_line_depth;
