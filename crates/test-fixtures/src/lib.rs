//! Test fixture loader and synthetic corpus generator for newsrec tests,
//! benchmarks, and end-to-end scenarios.
//!
//! Fixtures are returned as plain `(title, text)` pairs or deserialized into
//! any caller-chosen type, so this crate stays free of workspace dependencies.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Topic words. Each lands in one tenth of a synthetic corpus.
const TOPICS: [&str; 10] = [
    "election", "football", "markets", "climate", "cinema", "banking", "vaccine", "rugby",
    "housing", "software",
];

/// Region words. Assigned in blocks of ten documents, cycling over seven regions.
const REGIONS: [&str; 7] = [
    "scotland", "wales", "london", "brussels", "tokyo", "ohio", "lagos",
];

/// Root directory of the test-fixtures crate, where fixture files live.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    // From a sibling crate, step up into crates/ and look for test-fixtures.
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

/// Read a fixture file as text (CSV fixtures, config snippets).
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Text of synthetic document `i`.
///
/// Every document carries one topic word (10% document frequency), one
/// region word (about 14%), filler found in every document, and a word
/// unique to it. Under the default pruning only topic and region words
/// survive, so every row is non-zero and similarity follows topic/region
/// overlap.
pub fn synthetic_text(i: usize) -> String {
    let topic = TOPICS[i % TOPICS.len()];
    let region = REGIONS[(i / 10) % REGIONS.len()];
    format!("The latest report on {topic} from {region} was filed as item{i} of the day.")
}

/// `n` synthetic articles titled `Story {i}`.
pub fn synthetic_corpus(n: usize) -> Vec<(String, String)> {
    synthetic_corpus_with_titles(n, |i| format!("Story {i}"))
}

/// `n` synthetic articles with caller-chosen titles.
pub fn synthetic_corpus_with_titles(
    n: usize,
    title_of: impl Fn(usize) -> String,
) -> Vec<(String, String)> {
    (0..n).map(|i| (title_of(i), synthetic_text(i))).collect()
}
