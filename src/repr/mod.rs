//! Canonical tree representation for RankLib-style ranking ensembles.
//!
//! This is the in-memory form shared by the parser and the serializer: a
//! recursive tagged node, grouped into weighted trees, ensembles, and a
//! forest. All structures are built fresh from a parse, transformed
//! functionally, and discarded after the output is written.

/// A single decision node: either a terminal leaf or a binary split.
///
/// The canonical RankLib form always has exactly two children, named by
/// position (`left`/`right` in the source document, `lhs`/`rhs` in the
/// canonical JSON).
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// Terminal node; contributes `value` to the tree's output when reached.
    Leaf { value: f64 },
    /// Internal node routing on a feature/threshold comparison.
    Split {
        feature: String,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    /// Check if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Number of nodes in the subtree rooted here, including this node.
    pub fn n_nodes(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            if let TreeNode::Split { left, right, .. } = node {
                stack.push(left);
                stack.push(right);
            }
        }
        count
    }
}

/// A decision tree with its ensemble weight and identifier.
///
/// Weight is retained as the verbatim numeric literal from the source
/// document to avoid precision loss against the source encoding; the id is an
/// opaque string.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTree {
    pub root: TreeNode,
    pub weight: String,
    pub id: String,
}

/// Ordered collection of trees whose weighted outputs are summed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ensemble {
    pub trees: Vec<RankedTree>,
}

impl Ensemble {
    /// Number of trees.
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

/// Ordered collection of ensembles (the document root of the RankLib form).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Forest {
    pub ensembles: Vec<Ensemble>,
}

impl Forest {
    /// Number of ensembles.
    pub fn n_ensembles(&self) -> usize {
        self.ensembles.len()
    }
}
