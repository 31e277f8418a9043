//! XGBoost dump-format tree node types.
//!
//! These are "foreign types" mirroring the nested-mapping dump exactly; the
//! `leaf`-vs-`children` key probing of the wire format is resolved once at
//! decode time into a tagged [`GbtNode`], so downstream logic pattern-matches
//! instead of probing for keys.
//!
//! Every routing/metadata field on a split is optional: real exporter dumps
//! omit them on some interior nodes, and the children array carries no
//! documented guarantee of arity or balance.

use serde::{Deserialize, Serialize};

/// A node of a gradient-boosted tree in dump format.
///
/// Deserialization is untagged: an object with a `leaf` key is a leaf,
/// otherwise it must carry `children` and is a split. Optional fields absent
/// at parse time stay absent on re-serialization, so a decoded tree array
/// re-encodes to the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GbtNode {
    Leaf(GbtLeaf),
    Split(GbtSplit),
}

/// Terminal node carrying a scalar contribution to the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GbtLeaf {
    pub leaf: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodeid: Option<i64>,
}

/// Internal node with a children sequence of any length >= 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GbtSplit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_condition: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodeid: Option<i64>,
    pub children: Vec<GbtNode>,
}

impl GbtNode {
    /// Build a leaf node with an explicit node id.
    pub fn leaf(value: f64, nodeid: i64) -> Self {
        GbtNode::Leaf(GbtLeaf {
            leaf: value,
            nodeid: Some(nodeid),
        })
    }

    /// Check if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, GbtNode::Leaf(_))
    }
}
