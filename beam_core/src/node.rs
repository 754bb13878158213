//! # Beam Nodes
//!
//! A node is a point on the beam axis where a span starts or ends. Supported
//! nodes restrain vertical displacement (rotation stays free); a free node is
//! the tip of a cantilever overhang and may only appear at either end of the
//! beam.

use serde::{Deserialize, Serialize};

fn default_y_fixed() -> bool {
    true
}

/// A node on the beam axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Position along the beam axis
    pub x: f64,

    /// Whether vertical displacement is restrained (a support)
    #[serde(default = "default_y_fixed")]
    pub y_fixed: bool,
}

impl Node {
    pub fn new(x: f64, y_fixed: bool) -> Self {
        Self { x, y_fixed }
    }

    /// A vertical support at `x`
    pub fn supported(x: f64) -> Self {
        Self::new(x, true)
    }

    /// A free (cantilever) end at `x`
    pub fn free(x: f64) -> Self {
        Self::new(x, false)
    }

    /// Get short symbol for diagrams
    pub fn symbol(&self) -> &'static str {
        if self.y_fixed {
            "△"
        } else {
            "○"
        }
    }
}

/// Build one vertical support per coordinate
///
/// ```rust
/// use beam_core::node::supported_nodes;
///
/// let nodes = supported_nodes(&[0.0, 3.2, 8.0]);
/// assert_eq!(nodes.len(), 3);
/// assert!(nodes.iter().all(|n| n.y_fixed));
/// ```
pub fn supported_nodes(coords: &[f64]) -> Vec<Node> {
    coords.iter().copied().map(Node::supported).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert!(Node::supported(1.0).y_fixed);
        assert!(!Node::free(1.0).y_fixed);
        assert_eq!(Node::new(2.5, true), Node::supported(2.5));
    }

    #[test]
    fn test_y_fixed_defaults_to_supported() {
        let node: Node = serde_json::from_str(r#"{"x": 4.0}"#).unwrap();
        assert_eq!(node, Node::supported(4.0));

        let tip: Node = serde_json::from_str(r#"{"x": 6.0, "y_fixed": false}"#).unwrap();
        assert_eq!(tip, Node::free(6.0));
    }
}
