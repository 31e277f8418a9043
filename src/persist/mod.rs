//! Canonical JSON serialization of ranking forests.
//!
//! Schema types are separate from the runtime [`crate::repr`] types (the
//! schema mirrors the on-disk shape exactly and can evolve independently).

pub mod convert;
pub mod schema;

pub use convert::to_schema;
pub use schema::{EnsembleSchema, ForestSchema, NodeSchema, SplitSchema, TreeSchema};
