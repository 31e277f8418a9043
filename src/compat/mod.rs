//! Foreign model format support.
//!
//! Each submodule parses one external serialization into types this crate can
//! transform: [`ranklib`] for the XML ensemble format, [`xgboost`] for the
//! JSON gradient-boosted dump and its wrapper envelopes.

pub mod ranklib;
pub mod xgboost;
