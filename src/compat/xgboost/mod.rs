//! XGBoost dump-format model support.
//!
//! This module parses the per-tree JSON dump format (nested node mappings
//! with `leaf` / `children` keys) and handles the two wrapper envelopes the
//! dump ships inside when stored by a search-engine model store.
//!
//! # Example
//!
//! ```ignore
//! use rankforest::compat::xgboost;
//!
//! xgboost::fix_model_file("model.json", "model-fixed.json")?;
//! ```

pub mod envelope;
pub mod json;

pub use envelope::{fix_model_file, Envelope, EnvelopeError};
pub use json::{GbtLeaf, GbtNode, GbtSplit};
