use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use lookalike_core::table::ConfusablesTable;
use lookalike_core::{confusables, contains_confusables, rectify, skeleton};

#[derive(Debug, Deserialize)]
struct FixtureFile {
    fixture: Vec<Fixture>,
}

#[derive(Debug, Deserialize)]
struct Fixture {
    name: String,
    input: String,
    skeleton: Vec<String>,
    contains: bool,
    rectified: String,
}

fn load_fixtures() -> Vec<Fixture> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("confusables.toml");
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    let file: FixtureFile = toml::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
    file.fixture
}

#[test]
fn golden_skeletons() {
    for fixture in load_fixtures() {
        assert_eq!(
            skeleton(&fixture.input),
            fixture.skeleton,
            "fixture '{}'",
            fixture.name
        );
    }
}

#[test]
fn golden_containment() {
    for fixture in load_fixtures() {
        assert_eq!(
            contains_confusables(&fixture.input),
            fixture.contains,
            "fixture '{}'",
            fixture.name
        );
    }
}

#[test]
fn golden_rectification() {
    for fixture in load_fixtures() {
        assert_eq!(
            rectify(&fixture.input),
            fixture.rectified,
            "fixture '{}'",
            fixture.name
        );
    }
}

#[test]
fn rectification_is_idempotent() {
    for fixture in load_fixtures() {
        let once = rectify(&fixture.input);
        assert_eq!(rectify(&once), once, "fixture '{}'", fixture.name);
    }
}

#[test]
fn annotation_count_matches_input_length() {
    for fixture in load_fixtures() {
        assert_eq!(
            confusables(&fixture.input).len(),
            fixture.input.chars().count(),
            "fixture '{}'",
            fixture.name
        );
    }
}

#[test]
fn skeleton_length_accounts_for_zero_width_drops() {
    let table = ConfusablesTable::embedded();
    for fixture in load_fixtures() {
        let zero_width_count = fixture
            .input
            .chars()
            .filter(|c| table.is_zero_width(*c))
            .count();
        assert_eq!(
            skeleton(&fixture.input).len() + zero_width_count,
            fixture.input.chars().count(),
            "fixture '{}'",
            fixture.name
        );
    }
}
