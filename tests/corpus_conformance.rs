//! Corpus-based conformance tests.
//!
//! Runs every vector from `tests/corpus/corpus.json` and reports failures
//! with details.

use json_node::conformance::CorpusRunner;
use std::path::Path;

/// Path to the corpus file relative to the crate root.
const CORPUS_PATH: &str = "tests/corpus/corpus.json";

fn runner() -> CorpusRunner {
    let corpus_path = Path::new(env!("CARGO_MANIFEST_DIR")).join(CORPUS_PATH);
    CorpusRunner::load(&corpus_path).expect("Failed to load corpus")
}

/// Load and run the full corpus.
#[test]
fn test_full_corpus() {
    let runner = runner();
    println!("Loaded corpus with {} vectors", runner.vector_count());

    let results = runner.run_all();

    println!("\n=== Corpus Conformance Results ===");
    println!("{}", results.summary());

    if !results.all_passed() {
        println!("\nFailures:");
        for (id, expected, actual) in results.failures() {
            println!("  {} - expected: {}, actual: {}", id, expected, actual);
        }
    }

    assert!(
        results.all_passed(),
        "Corpus conformance failed: {}",
        results.summary()
    );
}

/// Test that the manifest is readable.
#[test]
fn test_corpus_manifest() {
    let runner = runner();
    assert_eq!(runner.manifest().format_version, "1");
    assert!(runner.vector_count() > 0);
}

/// A missing corpus file is reported, not panicked on.
#[test]
fn test_missing_corpus_file() {
    let result = CorpusRunner::load("does/not/exist.json");
    assert!(result.is_err());
}
