//! rankforest: tree-ensemble ranking-model conversion and calibration.
//!
//! Two facilities for learning-to-rank model plumbing:
//!
//! - Converting RankLib's boosted-regression-tree XML serialization into a
//!   canonical, language-neutral JSON tree representation.
//! - Correcting a gradient-boosted tree ensemble so its aggregate score is
//!   provably non-negative over all inputs, without changing the relative
//!   ranking of any two inputs.
//!
//! # Key Types
//!
//! - [`repr::Forest`] - Canonical in-memory ensemble representation
//! - [`compat::ranklib`] - RankLib XML parser
//! - [`compat::xgboost::GbtNode`] - Foreign gradient-boosted tree node
//! - [`compat::xgboost::Envelope`] - Model file wrapper shapes
//! - [`correct::fix`] - Score correction
//!
//! # Converting RankLib Models
//!
//! Use [`compat::ranklib::parse_file`] to read an XML ensemble, then
//! [`persist::to_schema`] and `serde_json` to render the canonical JSON.
//!
//! # Fixing XGBoost Models
//!
//! Use [`compat::xgboost::fix_model_file`] to rewrite a model file to a new
//! destination, preserving its envelope shape.

pub mod compat;
pub mod correct;
pub mod persist;
pub mod repr;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use compat::ranklib::RanklibError;
pub use compat::xgboost::{Envelope, EnvelopeError, GbtNode};
pub use correct::{ensemble_lower_bound, fix, CorrectionError};
pub use repr::{Ensemble, Forest, RankedTree, TreeNode};
