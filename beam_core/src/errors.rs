//! # Error Types
//!
//! Structured error types for beam_core. Every failure carries enough context
//! to tell which input was wrong and why, and serializes cleanly to JSON so
//! front ends can report it without string parsing.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{CalcError, CalcResult};
//!
//! fn validate_rigidity(ei: f64) -> CalcResult<()> {
//!     if !(ei > 0.0) {
//!         return Err(CalcError::InvalidInput {
//!             field: "ei".to_string(),
//!             value: ei.to_string(),
//!             reason: "Flexural rigidity must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for analysis operations.
///
/// Geometry and load problems are reported as [`CalcError::InvalidInput`]
/// before any assembly happens. Support layouts that cannot carry load are
/// reported as [`CalcError::UnstableStructure`] at solve time.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, out of order, not finite)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The support layout cannot equilibrate the beam (singular stiffness)
    #[error("Unstable structure: {reason}")]
    UnstableStructure { reason: String },

    /// The concrete section cannot resist the design moment
    #[error("Section inadequate: design moment {moment} exceeds capacity {capacity}")]
    SectionInadequate { moment: f64, capacity: f64 },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnstableStructure error
    pub fn unstable(reason: impl Into<String>) -> Self {
        CalcError::UnstableStructure {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True when the failure comes from the support layout rather than bad numbers
    pub fn is_unstable(&self) -> bool {
        matches!(self, CalcError::UnstableStructure { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnstableStructure { .. } => "UNSTABLE_STRUCTURE",
            CalcError::SectionInadequate { .. } => "SECTION_INADEQUATE",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("nodes[1].x", "0", "Node coordinates must be strictly increasing");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_json_shape() {
        let error = CalcError::unstable("only one support");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"UnstableStructure\""));
        assert!(json.contains("only one support"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unstable("x").error_code(), "UNSTABLE_STRUCTURE");
        assert_eq!(
            CalcError::SectionInadequate { moment: 2.0, capacity: 1.0 }.error_code(),
            "SECTION_INADEQUATE"
        );
        assert!(CalcError::unstable("x").is_unstable());
        assert!(!CalcError::invalid_input("a", "b", "c").is_unstable());
    }
}
