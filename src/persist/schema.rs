//! Schema types for the canonical ranking-forest JSON.
//!
//! The shape is `{"forest": [{"ensemble": [{"split": …, "weight": "<str>",
//! "id": "<str>"}, …]}, …]}` where a leaf renders as `{"output": <number>}`
//! and a split as `{"split": {"feature", "threshold", "lhs", "rhs"}}`.
//! Weight and id stay strings so the source literals survive unchanged.

use serde::{Deserialize, Serialize};

/// Top-level canonical document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestSchema {
    pub forest: Vec<EnsembleSchema>,
}

/// One ensemble of weighted trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleSchema {
    pub ensemble: Vec<TreeSchema>,
}

/// A tree entry: its root split plus the verbatim weight/id attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeSchema {
    pub split: SplitSchema,
    pub weight: String,
    pub id: String,
}

/// A node in the canonical encoding: `{"output": v}` or `{"split": {…}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeSchema {
    Leaf { output: f64 },
    Split { split: SplitSchema },
}

/// An internal split with its positionally named children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitSchema {
    pub feature: String,
    pub threshold: f64,
    pub lhs: Box<NodeSchema>,
    pub rhs: Box<NodeSchema>,
}
