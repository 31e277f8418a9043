//! RankLib XML model parser.
//!
//! Parses the LambdaMART-style ensemble XML emitted by RankLib into the
//! canonical [`Forest`] representation.
//!
//! # Format Overview
//!
//! The document root's children are `ensemble` elements; each ensemble's
//! children are `tree` elements carrying `weight` and `id` attributes; each
//! tree's sole child is a `split` element whose children are:
//!
//! - `output`: terminal, numeric text content (the node is a leaf)
//! - `feature`: text content is the feature identifier
//! - `threshold`: text content is a numeric string
//! - nested `split` elements tagged `pos="left"` / `pos="right"`
//!
//! # Example
//!
//! ```ignore
//! use rankforest::compat::ranklib;
//!
//! let forest = ranklib::parse_file("model.txt")?;
//! let schema = rankforest::persist::to_schema(&forest);
//! println!("{}", serde_json::to_string_pretty(&schema)?);
//! ```

use std::path::Path;

use crate::repr::{Ensemble, Forest, RankedTree, TreeNode};

/// Errors produced while parsing a RankLib XML model.
#[derive(Debug, thiserror::Error)]
pub enum RanklibError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid XML: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("tree {id:?} must have exactly one root split, found {found} children")]
    TreeRootShape { id: String, found: usize },
    #[error("tree {id:?} root resolves to a bare output, expected a split")]
    BareOutputRoot { id: String },
    #[error("tree element is missing required attribute `{attribute}`")]
    MissingAttribute { attribute: &'static str },
    #[error("split is missing its `{side}` child and has no output")]
    MissingChild { side: &'static str },
    #[error("split has no `feature` element")]
    MissingFeature,
    #[error("split has no `threshold` element")]
    MissingThreshold,
    #[error("invalid numeric text in `{element}`: {text:?}")]
    InvalidNumber { element: &'static str, text: String },
}

/// Parse a RankLib XML model file into a [`Forest`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<Forest, RanklibError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| RanklibError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_str(&text)
}

/// Parse a RankLib XML document into a [`Forest`].
///
/// Pure function of the document text; no side effects.
pub fn parse_str(text: &str) -> Result<Forest, RanklibError> {
    let doc = roxmltree::Document::parse(text)?;

    let mut ensembles = Vec::new();
    for ensemble_el in doc.root_element().children().filter(|n| n.is_element()) {
        let mut trees = Vec::new();
        for tree_el in ensemble_el.children().filter(|n| n.is_element()) {
            trees.push(parse_tree(tree_el)?);
        }
        ensembles.push(Ensemble { trees });
    }

    Ok(Forest { ensembles })
}

fn parse_tree(tree_el: roxmltree::Node<'_, '_>) -> Result<RankedTree, RanklibError> {
    let weight = tree_el
        .attribute("weight")
        .ok_or(RanklibError::MissingAttribute {
            attribute: "weight",
        })?
        .to_string();
    let id = tree_el
        .attribute("id")
        .ok_or(RanklibError::MissingAttribute { attribute: "id" })?
        .to_string();

    let children: Vec<_> = tree_el.children().filter(|n| n.is_element()).collect();
    if children.len() != 1 {
        return Err(RanklibError::TreeRootShape {
            id,
            found: children.len(),
        });
    }

    let root = parse_split(children[0])?;
    if root.is_leaf() {
        return Err(RanklibError::BareOutputRoot { id });
    }
    Ok(RankedTree { root, weight, id })
}

/// Recursively parse a `split` element into a [`TreeNode`].
///
/// An `output` child makes the node terminal and stops the descent; otherwise
/// the element must provide a feature, a threshold, and both positional
/// children.
fn parse_split(split_el: roxmltree::Node<'_, '_>) -> Result<TreeNode, RanklibError> {
    let mut feature = None;
    let mut threshold = None;
    let mut left = None;
    let mut right = None;

    for child in split_el.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "output" => {
                return Ok(TreeNode::Leaf {
                    value: numeric_text(child, "output")?,
                });
            }
            "feature" => feature = Some(child.text().unwrap_or("").trim().to_string()),
            "threshold" => threshold = Some(numeric_text(child, "threshold")?),
            "split" => match child.attribute("pos") {
                Some("left") => left = Some(parse_split(child)?),
                Some("right") => right = Some(parse_split(child)?),
                // Nested splits without a position tag are skipped.
                _ => {}
            },
            _ => {}
        }
    }

    Ok(TreeNode::Split {
        feature: feature.ok_or(RanklibError::MissingFeature)?,
        threshold: threshold.ok_or(RanklibError::MissingThreshold)?,
        left: Box::new(left.ok_or(RanklibError::MissingChild { side: "left" })?),
        right: Box::new(right.ok_or(RanklibError::MissingChild { side: "right" })?),
    })
}

fn numeric_text(
    node: roxmltree::Node<'_, '_>,
    element: &'static str,
) -> Result<f64, RanklibError> {
    let text = node.text().unwrap_or("").trim();
    text.parse::<f64>().map_err(|_| RanklibError::InvalidNumber {
        element,
        text: text.to_string(),
    })
}
