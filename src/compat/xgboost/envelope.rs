//! Model file envelopes and score-correction patching.
//!
//! The tree-array definition ships double-encoded (a JSON string inside a
//! JSON object) in one of two known wrapper shapes, depending on which
//! consuming system produced the file. The shape is resolved once at load
//! into a closed [`Envelope`] variant, and re-encoding is parameterized by
//! the detected variant so the patched definition lands back at the same key
//! path with the rest of the object untouched.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::correct::{fix, CorrectionError};

use super::json::GbtNode;

/// The two known wrapper shapes of a stored model file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// Top-level `definition` key holding the JSON-encoded tree array.
    Bare,
    /// Same string nested at the `model.model.definition` path.
    ServiceWrapped,
}

/// Errors produced while patching a model file.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("model object matches neither a bare `definition` nor a `model.model.definition` envelope")]
    UnrecognizedShape,
    #[error("`definition` is not a string")]
    DefinitionNotString,
    #[error("model file is not valid JSON: {0}")]
    InvalidModelJson(#[source] serde_json::Error),
    #[error("invalid tree-array definition: {0}")]
    InvalidDefinition(#[from] serde_json::Error),
    #[error(transparent)]
    Correction(#[from] CorrectionError),
}

impl Envelope {
    /// Resolve which wrapper shape a parsed model object uses.
    pub fn detect(model: &Value) -> Result<Envelope, EnvelopeError> {
        if model.get("definition").is_some() {
            return Ok(Envelope::Bare);
        }
        if model
            .pointer("/model/model/definition")
            .is_some()
        {
            return Ok(Envelope::ServiceWrapped);
        }
        Err(EnvelopeError::UnrecognizedShape)
    }

    fn definition_path(&self) -> &'static str {
        match self {
            Envelope::Bare => "/definition",
            Envelope::ServiceWrapped => "/model/model/definition",
        }
    }

    fn definition<'a>(&self, model: &'a Value) -> Result<&'a str, EnvelopeError> {
        model
            .pointer(self.definition_path())
            .and_then(Value::as_str)
            .ok_or(EnvelopeError::DefinitionNotString)
    }

    fn set_definition(&self, model: &mut Value, definition: String) {
        // detect() proved the path exists, so the pointer cannot dangle.
        if let Some(slot) = model.pointer_mut(self.definition_path()) {
            *slot = Value::String(definition);
        }
    }
}

/// Patch a parsed model object so its ensemble score is non-negative.
///
/// Decodes the embedded tree array, runs the corrector, appends the
/// correction tree when one is produced, and re-encodes the array into the
/// same key path it was read from. Everything else in the object is
/// preserved unchanged.
pub fn patch(mut model: Value) -> Result<Value, EnvelopeError> {
    let envelope = Envelope::detect(&model)?;
    debug!(?envelope, "detected model envelope");

    let mut trees: Vec<GbtNode> = serde_json::from_str(envelope.definition(&model)?)?;

    if let Some(correction) = fix(&trees)? {
        trees.push(correction);
    }

    let definition = serde_json::to_string(&trees)?;
    envelope.set_definition(&mut model, definition);
    Ok(model)
}

/// Read a model file, patch it, and write the result to `output`.
///
/// The output file is only created after the full patched object has been
/// produced; a failing parse or correction leaves no partial output behind.
pub fn fix_model_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<(), EnvelopeError> {
    let input = input.as_ref();
    let output = output.as_ref();

    let text = std::fs::read_to_string(input).map_err(|source| EnvelopeError::Read {
        path: input.display().to_string(),
        source,
    })?;
    let model: Value = serde_json::from_str(&text).map_err(EnvelopeError::InvalidModelJson)?;

    let patched = patch(model)?;

    let rendered = serde_json::to_string(&patched)?;
    std::fs::write(output, rendered).map_err(|source| EnvelopeError::Write {
        path: output.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn negative_definition() -> String {
        serde_json::to_string(&json!([{
            "nodeid": 0,
            "split": "f0",
            "split_condition": 1.5,
            "yes": 1,
            "no": 2,
            "missing": 1,
            "children": [
                {"leaf": -0.5, "nodeid": 1},
                {"leaf": 0.25, "nodeid": 2}
            ]
        }]))
        .unwrap()
    }

    fn decoded_trees(model: &Value, envelope: Envelope) -> Vec<GbtNode> {
        let definition = envelope.definition(model).unwrap();
        serde_json::from_str(definition).unwrap()
    }

    #[test]
    fn detects_bare_envelope() {
        let model = json!({"definition": "[]", "feature_set": {}});
        assert_eq!(Envelope::detect(&model).unwrap(), Envelope::Bare);
    }

    #[test]
    fn detects_service_wrapped_envelope() {
        let model = json!({"model": {"name": "m", "model": {"definition": "[]"}}});
        assert_eq!(Envelope::detect(&model).unwrap(), Envelope::ServiceWrapped);
    }

    #[test]
    fn unknown_shape_is_rejected() {
        let model = json!({"model": {"definition": "[]"}});
        assert!(matches!(
            Envelope::detect(&model),
            Err(EnvelopeError::UnrecognizedShape)
        ));
    }

    #[test]
    fn patch_appends_tree_and_keeps_bare_shape() {
        let model = json!({
            "name": "movie_model",
            "definition": negative_definition()
        });

        let patched = patch(model).unwrap();
        assert_eq!(patched["name"], "movie_model");

        let trees = decoded_trees(&patched, Envelope::Bare);
        assert_eq!(trees.len(), 2);
    }

    #[test]
    fn patch_appends_tree_and_keeps_wrapped_shape() {
        let model = json!({
            "model": {
                "name": "movie_model",
                "model": {
                    "type": "model/xgboost+json",
                    "definition": negative_definition()
                }
            }
        });

        let patched = patch(model).unwrap();
        assert_eq!(patched["model"]["name"], "movie_model");
        assert_eq!(patched["model"]["model"]["type"], "model/xgboost+json");

        let trees = decoded_trees(&patched, Envelope::ServiceWrapped);
        assert_eq!(trees.len(), 2);
    }

    #[test]
    fn patch_leaves_non_negative_model_unchanged() {
        let definition = serde_json::to_string(&json!([{
            "split": "f0",
            "split_condition": 1.0,
            "children": [{"leaf": 0.5}, {"leaf": 0.1}]
        }]))
        .unwrap();
        let model = json!({"definition": definition});

        let patched = patch(model).unwrap();
        let trees = decoded_trees(&patched, Envelope::Bare);
        assert_eq!(trees.len(), 1);
    }

    #[test]
    fn patch_rejects_non_string_definition() {
        let model = json!({"definition": [1, 2, 3]});
        assert!(matches!(
            patch(model),
            Err(EnvelopeError::DefinitionNotString)
        ));
    }

    #[test]
    fn patch_rejects_garbage_definition() {
        let model = json!({"definition": "not json"});
        assert!(matches!(patch(model), Err(EnvelopeError::InvalidDefinition(_))));
    }
}
