//! Conversion from the runtime representation to the canonical JSON schema.
//!
//! This is a pure, order-preserving, total function of the forest; no
//! information is lost versus the parsed structure.

use crate::repr::{Ensemble, Forest, RankedTree, TreeNode};

use super::schema::{EnsembleSchema, ForestSchema, NodeSchema, SplitSchema, TreeSchema};

/// Render a [`Forest`] to the canonical schema.
pub fn to_schema(forest: &Forest) -> ForestSchema {
    ForestSchema {
        forest: forest.ensembles.iter().map(ensemble_to_schema).collect(),
    }
}

fn ensemble_to_schema(ensemble: &Ensemble) -> EnsembleSchema {
    EnsembleSchema {
        ensemble: ensemble.trees.iter().map(tree_to_schema).collect(),
    }
}

fn tree_to_schema(tree: &RankedTree) -> TreeSchema {
    let split = match node_to_schema(&tree.root) {
        NodeSchema::Split { split } => split,
        // The parser guarantees every tree root is a split; a bare-leaf root
        // cannot come out of a successful parse.
        NodeSchema::Leaf { .. } => unreachable!("tree root is always a split"),
    };
    TreeSchema {
        split,
        weight: tree.weight.clone(),
        id: tree.id.clone(),
    }
}

fn node_to_schema(node: &TreeNode) -> NodeSchema {
    match node {
        TreeNode::Leaf { value } => NodeSchema::Leaf { output: *value },
        TreeNode::Split {
            feature,
            threshold,
            left,
            right,
        } => NodeSchema::Split {
            split: SplitSchema {
                feature: feature.clone(),
                threshold: *threshold,
                lhs: Box::new(node_to_schema(left)),
                rhs: Box::new(node_to_schema(right)),
            },
        },
    }
}
