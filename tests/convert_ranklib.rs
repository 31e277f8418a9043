//! Integration tests for RankLib XML to canonical JSON conversion.
//!
//! Fixtures live under `tests/test-cases/ranklib/`.

use std::path::PathBuf;

use serde_json::json;

use rankforest::compat::ranklib;
use rankforest::persist;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/test-cases/ranklib")
        .join(name)
}

#[test]
fn single_tree_round_trip_matches_canonical_shape() {
    let forest = ranklib::parse_file(fixture("simple.model.xml")).expect("parse failed");
    let schema = persist::to_schema(&forest);

    let rendered = serde_json::to_value(&schema).unwrap();
    assert_eq!(
        rendered,
        json!({
            "forest": [{
                "ensemble": [{
                    "split": {
                        "feature": "A",
                        "threshold": 2.5,
                        "lhs": {"output": -0.5},
                        "rhs": {"output": 1.0},
                    },
                    "weight": "0.1",
                    "id": "1",
                }]
            }]
        })
    );
}

#[test]
fn multi_tree_ensemble_preserves_order_and_attributes() {
    let forest = ranklib::parse_file(fixture("lambdamart.model.xml")).expect("parse failed");
    assert_eq!(forest.n_ensembles(), 1);
    assert_eq!(forest.ensembles[0].n_trees(), 2);

    let schema = persist::to_schema(&forest);
    let trees = &schema.forest[0].ensemble;
    assert_eq!(trees[0].id, "1");
    assert_eq!(trees[1].id, "2");
    assert_eq!(trees[0].weight, "0.1");

    // First tree nests a second split on its left branch.
    match &*trees[0].split.lhs {
        persist::NodeSchema::Split { split } => {
            assert_eq!(split.feature, "body_score");
            assert_eq!(split.threshold, 7.0);
        }
        persist::NodeSchema::Leaf { .. } => panic!("expected nested split"),
    }
    assert_eq!(trees[1].split.feature, "popularity");
}

#[test]
fn canonical_json_is_parseable_back_into_the_schema() {
    let forest = ranklib::parse_file(fixture("lambdamart.model.xml")).expect("parse failed");
    let schema = persist::to_schema(&forest);

    let rendered = serde_json::to_string_pretty(&schema).unwrap();
    let reparsed: persist::ForestSchema = serde_json::from_str(&rendered).unwrap();
    assert_eq!(reparsed, schema);
}

#[test]
fn missing_file_reports_the_path() {
    let err = ranklib::parse_file(fixture("nope.model.xml")).unwrap_err();
    assert!(err.to_string().contains("nope.model.xml"));
}
