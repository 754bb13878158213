//! # Beam Model Files
//!
//! A [`BeamModel`] is everything needed to rebuild a [`Beam`]: geometry,
//! loads, rigidities and analysis settings. Models serialize to
//! human-readable JSON (see [`crate::file_io`] for atomic saves).
//!
//! ## Structure
//!
//! ```text
//! BeamModel
//! ├── meta: ModelMetadata (schema version, label, timestamps)
//! ├── settings: AnalysisSettings (diagram divisions, default EI)
//! ├── nodes: Vec<Node>
//! ├── distributed_loads: Vec<DistributedLoad>
//! ├── punctual_loads: Vec<PunctualLoad>
//! └── span_rigidities: Vec<f64> (optional per-span EI)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::model::BeamModel;
//!
//! let model = BeamModel::example();
//! let json = serde_json::to_string_pretty(&model).unwrap();
//! let parsed: BeamModel = serde_json::from_str(&json).unwrap();
//!
//! let beam = parsed.build().unwrap();
//! assert_eq!(beam.reactions().len(), parsed.nodes.len());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::continuous_beam::{Beam, BeamResult};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{DistributedLoad, PunctualLoad};
use crate::node::{supported_nodes, Node};

/// Current schema version for model files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// A complete, serializable beam definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamModel {
    pub meta: ModelMetadata,

    #[serde(default)]
    pub settings: AnalysisSettings,

    pub nodes: Vec<Node>,

    #[serde(default)]
    pub distributed_loads: Vec<DistributedLoad>,

    #[serde(default)]
    pub punctual_loads: Vec<PunctualLoad>,

    /// Flexural rigidity per span; spans past the end of this list use
    /// `settings.flexural_rigidity`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub span_rigidities: Vec<f64>,
}

impl BeamModel {
    /// Create an unloaded model on the given nodes
    pub fn new(label: impl Into<String>, nodes: Vec<Node>) -> Self {
        BeamModel {
            meta: ModelMetadata::new(label),
            settings: AnalysisSettings::default(),
            nodes,
            distributed_loads: Vec::new(),
            punctual_loads: Vec::new(),
            span_rigidities: Vec::new(),
        }
    }

    /// A two-span beam with a right overhang, a partial trapezoid and a tip load
    pub fn example() -> Self {
        let mut nodes = supported_nodes(&[0.0, 4.0, 9.0]);
        nodes.push(Node::free(10.5));

        let mut model = BeamModel::new("Two spans with overhang", nodes);
        model.distributed_loads = vec![
            DistributedLoad::uniform(10.0),
            DistributedLoad::new(5.0, 15.0, 4.0, 9.0),
        ];
        model.punctual_loads = vec![PunctualLoad::new(20.0, 2.0), PunctualLoad::new(8.0, 10.5)];
        model
    }

    /// Flexural rigidity of every span
    pub fn rigidities(&self) -> CalcResult<Vec<f64>> {
        let spans = self.nodes.len().saturating_sub(1);
        if self.span_rigidities.len() > spans {
            return Err(CalcError::invalid_input(
                "span_rigidities",
                self.span_rigidities.len().to_string(),
                format!("More rigidities than spans ({})", spans),
            ));
        }
        Ok((0..spans)
            .map(|i| self.span_rigidities.get(i).copied().unwrap_or(self.settings.flexural_rigidity))
            .collect())
    }

    /// Build and solve the beam described by this model
    pub fn build(&self) -> CalcResult<Beam> {
        Beam::with_span_rigidities(
            self.nodes.clone(),
            &self.distributed_loads,
            &self.punctual_loads,
            &self.rigidities()?,
        )
    }

    /// Build the beam and summarize it with the configured diagram resolution
    pub fn analyze(&self) -> CalcResult<BeamResult> {
        self.build()?.result(self.settings.diagram_divisions)
    }
}

/// Model metadata stored in the file header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Free-form description of the beam
    #[serde(default)]
    pub label: String,

    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl ModelMetadata {
    pub fn new(label: impl Into<String>) -> Self {
        let now = Utc::now();
        ModelMetadata {
            version: SCHEMA_VERSION.to_string(),
            label: label.into(),
            created: now,
            modified: now,
        }
    }
}

fn default_diagram_divisions() -> usize {
    100
}

fn default_flexural_rigidity() -> f64 {
    1.0
}

/// Analysis settings; every field has a default so older files keep loading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Number of intervals used when sampling the diagrams
    #[serde(default = "default_diagram_divisions")]
    pub diagram_divisions: usize,

    /// EI for spans without an explicit rigidity
    #[serde(default = "default_flexural_rigidity")]
    pub flexural_rigidity: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            diagram_divisions: default_diagram_divisions(),
            flexural_rigidity: default_flexural_rigidity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_model() {
        let model = BeamModel::new("B-1", supported_nodes(&[0.0, 5.0]));
        assert_eq!(model.meta.version, SCHEMA_VERSION);
        assert_eq!(model.meta.label, "B-1");
        assert_eq!(model.settings, AnalysisSettings::default());
        assert!(model.distributed_loads.is_empty());
    }

    #[test]
    fn test_settings_defaults_when_missing() {
        let settings: AnalysisSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.diagram_divisions, 100);
        assert_eq!(settings.flexural_rigidity, 1.0);

        let partial: AnalysisSettings = serde_json::from_str(r#"{"diagram_divisions": 20}"#).unwrap();
        assert_eq!(partial.diagram_divisions, 20);
        assert_eq!(partial.flexural_rigidity, 1.0);
    }

    #[test]
    fn test_rigidities_fall_back_to_default() {
        let mut model = BeamModel::new("B-2", supported_nodes(&[0.0, 3.0, 6.0, 9.0]));
        model.settings.flexural_rigidity = 2.0;
        model.span_rigidities = vec![5.0];
        assert_eq!(model.rigidities().unwrap(), vec![5.0, 2.0, 2.0]);

        model.span_rigidities = vec![1.0; 4];
        assert_eq!(model.rigidities().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_oversized_divisions_rejected() {
        let mut model = BeamModel::example();
        model.settings.diagram_divisions = usize::MAX;
        assert_eq!(model.analyze().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_example_is_in_equilibrium() {
        let result = BeamModel::example().analyze().unwrap();
        assert!(result.equilibrium_error() < 1e-9, "{:?}", result);
        assert_eq!(*result.reactions.last().unwrap(), 0.0);
    }

    #[test]
    fn test_minimal_json() {
        let json = r#"{
            "meta": {"version": "0.1.0", "created": "2026-01-01T00:00:00Z", "modified": "2026-01-01T00:00:00Z"},
            "nodes": [{"x": 0.0}, {"x": 7.0}],
            "distributed_loads": [{"start_value": 17.0, "end_value": 17.0}]
        }"#;
        let model: BeamModel = serde_json::from_str(json).unwrap();
        let beam = model.build().unwrap();
        assert!((beam.reactions()[0] - 59.5).abs() < 1e-9);
        assert!((beam.reactions()[1] - 59.5).abs() < 1e-9);
    }
}
