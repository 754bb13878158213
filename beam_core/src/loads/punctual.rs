//! Concentrated (point) loads

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A concentrated force `value` (positive downward) applied at `x`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PunctualLoad {
    /// Load magnitude
    pub value: f64,

    /// Position along the beam axis
    pub x: f64,
}

impl PunctualLoad {
    pub fn new(value: f64, x: f64) -> Self {
        Self { value, x }
    }

    /// Same load with its magnitude multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.value * factor, self.x)
    }

    /// Validate magnitude and position
    pub fn validate(&self) -> CalcResult<()> {
        if !self.value.is_finite() || !self.x.is_finite() {
            return Err(CalcError::invalid_input(
                "punctual_load",
                format!("{} at {}", self.value, self.x),
                "Point load magnitude and position must be finite",
            ));
        }
        Ok(())
    }
}
