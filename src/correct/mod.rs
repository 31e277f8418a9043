//! Score-bound analysis and non-negativity correction for gradient-boosted
//! ensembles.
//!
//! An ensemble's score for any input is the sum of one leaf per tree, so the
//! sum of each tree's minimum leaf is a tight lower bound on the aggregate
//! score. When that bound is negative, [`fix`] synthesizes one extra tree
//! whose every routing path (including the missing-value path) yields the
//! same constant `abs(bound)`. Appending it raises the bound to exactly zero
//! while the constant cancels in every pairwise score difference, so ranking
//! order is unchanged.

use tracing::info;

use crate::compat::xgboost::{GbtNode, GbtSplit};

/// Errors produced while correcting an ensemble.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CorrectionError {
    /// The ensemble holds no split node to anchor the correction tree on.
    #[error("unable to find any features in the ensemble")]
    NoFeatureFound,
}

/// Minimum leaf value reachable anywhere under `node`.
///
/// Explicit stack-based traversal: children sequences of any length and
/// arbitrarily unbalanced subtree depth are walked in full without growing
/// the call stack.
pub fn find_min(node: &GbtNode) -> f64 {
    let mut min = f64::INFINITY;
    let mut stack = vec![node];
    while let Some(node) = stack.pop() {
        match node {
            GbtNode::Leaf(leaf) => min = min.min(leaf.leaf),
            GbtNode::Split(split) => stack.extend(split.children.iter()),
        }
    }
    min
}

/// Feature identifier of the nearest split to the root along the first-child
/// path.
///
/// Which feature is returned does not matter for correction (both correction
/// leaves carry the same value); any feature present in the model will do.
/// The walk follows `children[0]` at each step, even though exporters do not
/// guarantee which branch comes first in the children array.
pub fn find_first_feature(node: &GbtNode) -> Result<&str, CorrectionError> {
    let mut current = node;
    loop {
        match current {
            GbtNode::Leaf(_) => return Err(CorrectionError::NoFeatureFound),
            GbtNode::Split(split) => {
                if let Some(feature) = split.split.as_deref() {
                    return Ok(feature);
                }
                match split.children.first() {
                    Some(child) => current = child,
                    None => return Err(CorrectionError::NoFeatureFound),
                }
            }
        }
    }
}

/// Lower bound on the ensemble's aggregate score over all inputs.
///
/// Traversal of each tree terminates at exactly one leaf, so the score equals
/// the sum of the leaves actually visited, which is never smaller than the
/// sum of per-tree minima.
pub fn ensemble_lower_bound(trees: &[GbtNode]) -> f64 {
    trees.iter().map(find_min).sum()
}

/// Compute a correction tree for the ensemble, if one is needed.
///
/// Returns `Ok(None)` when the lower bound is already non-negative; the
/// caller appends the returned tree to the sequence otherwise. Original trees
/// are never mutated. Fails with [`CorrectionError::NoFeatureFound`] when the
/// ensemble is empty or entirely leaves, which is itself a symptom of a
/// malformed model.
pub fn fix(trees: &[GbtNode]) -> Result<Option<GbtNode>, CorrectionError> {
    let bound = ensemble_lower_bound(trees);
    if bound >= 0.0 {
        info!(bound, "scores are already non-negative, leaving model untouched");
        return Ok(None);
    }

    let correction_value = bound.abs();
    info!(correction_value, "appending correction tree");

    let feature = trees
        .first()
        .map(find_first_feature)
        .ok_or(CorrectionError::NoFeatureFound)??;

    Ok(Some(correction_tree(correction_value, feature)))
}

/// Single-split tree whose every routing path yields `correction_value`.
///
/// The split condition is arbitrary: `yes`, `no`, and `missing` all resolve
/// to leaves carrying the same value, so the tree contributes the constant
/// for every input regardless of its feature values.
fn correction_tree(correction_value: f64, feature: &str) -> GbtNode {
    GbtNode::Split(GbtSplit {
        depth: Some(0),
        split: Some(feature.to_string()),
        split_condition: Some(1.0),
        missing: Some(1),
        yes: Some(1),
        no: Some(2),
        nodeid: Some(0),
        children: vec![
            GbtNode::leaf(correction_value, 1),
            GbtNode::leaf(correction_value, 2),
        ],
    })
}
