//! Test fixture loader for WeightSet golden cases and default distributions.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;
use weightset_core::config::SaturationPolicy;
use weightset_core::{LockSet, NestedWeights, WeightGroup};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// One golden redistribution scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct RedistributionCase {
    pub name: String,
    pub group: WeightGroup,
    #[serde(default)]
    pub locks: LockSet,
    pub member: String,
    pub requested: f64,
    #[serde(default)]
    pub saturation: SaturationPolicy,
    /// Expected group on success.
    #[serde(default)]
    pub expected: Option<WeightGroup>,
    /// Expected error code (`WeightErrorCode::error_code`) on failure.
    #[serde(default)]
    pub expected_error: Option<String>,
}

/// Load every golden redistribution case, ordered by file name.
pub fn redistribution_cases() -> Vec<RedistributionCase> {
    list_fixtures("golden/redistribution")
        .into_iter()
        .map(|path| {
            let relative = path
                .strip_prefix(fixtures_root())
                .unwrap_or_else(|e| panic!("fixture outside root {}: {}", path.display(), e))
                .to_string_lossy()
                .into_owned();
            load_fixture(&relative)
        })
        .collect()
}

/// Recommended pillar → category distribution for a new assessment.
pub fn assessment_defaults() -> NestedWeights {
    load_fixture("defaults/assessment_categories.json")
}

/// Recommended top-level pillar weights.
pub fn pillar_defaults() -> WeightGroup {
    load_fixture("defaults/pillars.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_default_files_exist() {
        for f in ["defaults/pillars.json", "defaults/assessment_categories.json"] {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn golden_cases_parse_and_declare_an_expectation() {
        let cases = redistribution_cases();
        assert!(cases.len() >= 9, "expected the full golden set, got {}", cases.len());
        for case in &cases {
            assert!(
                case.expected.is_some() || case.expected_error.is_some(),
                "case {} has no expectation",
                case.name
            );
        }
    }

    #[test]
    fn defaults_keep_pillar_order() {
        let pillars = pillar_defaults();
        let first = pillars.keys().next().map(str::to_string);
        assert_eq!(first.as_deref(), Some("AI Strategy"));
        let nested = assessment_defaults();
        assert_eq!(nested.len(), pillars.len());
    }
}
