//! Corpus file format and runner.
//!
//! ```json
//! {
//!   "manifest": { "format_version": "1", "description": "..." },
//!   "vectors": [
//!     { "id": "int", "input": "42", "expected": { "ok": "42" } },
//!     { "id": "open", "input": "[1", "expected": { "err": "ArrayNotClosed" } },
//!     { "id": "sign", "input": "1-2", "options": "compatible", "expected": { "ok": "-12" } }
//!   ]
//! }
//! ```
//!
//! For `ok` vectors the printed text must match exactly and must load back
//! (with strict options) into an equal document.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use super::{ConformanceError, ConformanceResult};
use crate::json::{load_str, load_str_with_options, ParseOptions};

/// Corpus metadata.
#[derive(Debug, Deserialize)]
pub struct CorpusManifest {
    /// Format version of the corpus file.
    pub format_version: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// A corpus containing test vectors.
#[derive(Debug, Deserialize)]
pub struct Corpus {
    /// Corpus metadata.
    pub manifest: CorpusManifest,
    /// List of test vectors.
    pub vectors: Vec<TestVector>,
}

/// Parser options a vector runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionsTag {
    /// [`ParseOptions::strict`]
    #[default]
    Strict,
    /// [`ParseOptions::compatible`]
    Compatible,
}

impl OptionsTag {
    /// The options this tag selects.
    pub fn options(self) -> ParseOptions {
        match self {
            OptionsTag::Strict => ParseOptions::strict(),
            OptionsTag::Compatible => ParseOptions::compatible(),
        }
    }
}

/// Expected outcome of a vector.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expected {
    /// Canonical text the input must print as.
    Ok(String),
    /// Name of the parsing error the input must fail with.
    Err(String),
}

/// A single test vector.
#[derive(Debug, Deserialize)]
pub struct TestVector {
    /// Unique identifier for the test.
    pub id: String,
    /// JSON text to load.
    pub input: String,
    /// Parser options.
    #[serde(default)]
    pub options: OptionsTag,
    /// Expected result (success or error).
    pub expected: Expected,
}

/// Outcome of one vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    /// Output matched.
    Pass,
    /// Output differed; both sides rendered as `ok: <text>` / `err: <name>`.
    Fail {
        /// What the corpus asked for
        expected: String,
        /// What the codec produced
        actual: String,
    },
}

impl TestResult {
    /// Whether the vector passed.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Outcomes of a corpus run, in vector order.
#[derive(Debug, Default)]
pub struct CorpusResults {
    outcomes: Vec<(String, TestResult)>,
}

impl CorpusResults {
    /// Append the outcome of the vector `id`.
    pub fn record(&mut self, id: &str, result: TestResult) {
        self.outcomes.push((id.to_string(), result));
    }

    /// Number of vectors run.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of vectors that passed.
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|(_, r)| r.is_pass()).count()
    }

    /// Number of vectors that failed.
    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// Returns true if no vector failed.
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|(_, r)| r.is_pass())
    }

    /// One-line `passed/failed/total` report.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed (total: {})",
            self.passed(),
            self.failed(),
            self.total()
        )
    }

    /// `(id, expected, actual)` for each failing vector.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.outcomes.iter().filter_map(|(id, result)| match result {
            TestResult::Pass => None,
            TestResult::Fail { expected, actual } => {
                Some((id.as_str(), expected.as_str(), actual.as_str()))
            }
        })
    }
}

/// Corpus runner that executes test vectors.
pub struct CorpusRunner {
    corpus: Corpus,
}

impl CorpusRunner {
    /// Load corpus from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> ConformanceResult<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConformanceError::IoError(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Load corpus from JSON text.
    pub fn from_json(content: &str) -> ConformanceResult<Self> {
        let corpus: Corpus = serde_json::from_str(content)
            .map_err(|e| ConformanceError::CorpusParseError(e.to_string()))?;
        Ok(Self { corpus })
    }

    /// Get the corpus manifest.
    pub fn manifest(&self) -> &CorpusManifest {
        &self.corpus.manifest
    }

    /// Get the number of test vectors.
    pub fn vector_count(&self) -> usize {
        self.corpus.vectors.len()
    }

    /// Run all test vectors and return results.
    pub fn run_all(&self) -> CorpusResults {
        let mut results = CorpusResults::default();

        for vector in &self.corpus.vectors {
            let result = run_vector(vector);
            debug!("vector {}: {:?}", vector.id, result);
            results.record(&vector.id, result);
        }

        results
    }
}

/// Run a single test vector.
pub fn run_vector(vector: &TestVector) -> TestResult {
    let result = load_str_with_options(&vector.input, vector.options.options());

    match (&vector.expected, result) {
        (Expected::Ok(expected), Ok(doc)) => {
            let actual = doc.to_string();
            if actual != *expected {
                return TestResult::Fail {
                    expected: expected.clone(),
                    actual,
                };
            }
            match load_str(&actual) {
                Ok(reloaded) if reloaded == doc => TestResult::Pass,
                Ok(reloaded) => TestResult::Fail {
                    expected: format!("round-trip: {}", actual),
                    actual: format!("round-trip: {}", reloaded),
                },
                Err(e) => TestResult::Fail {
                    expected: format!("round-trip: {}", actual),
                    actual: format!("err: {}", e.name()),
                },
            }
        }
        (Expected::Ok(expected), Err(e)) => TestResult::Fail {
            expected: format!("ok: {}", expected),
            actual: format!("err: {}", e.name()),
        },
        (Expected::Err(name), Ok(doc)) => TestResult::Fail {
            expected: format!("err: {}", name),
            actual: format!("ok: {}", doc),
        },
        (Expected::Err(name), Err(e)) => {
            if e.name() == name.as_str() {
                TestResult::Pass
            } else {
                TestResult::Fail {
                    expected: format!("err: {}", name),
                    actual: format!("err: {}", e.name()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(input: &str, options: OptionsTag, expected: Expected) -> TestVector {
        TestVector {
            id: "t".to_string(),
            input: input.to_string(),
            options,
            expected,
        }
    }

    #[test]
    fn test_ok_vector() {
        let v = vector("[1, 2]", OptionsTag::Strict, Expected::Ok("[1,2]".to_string()));
        assert_eq!(run_vector(&v), TestResult::Pass);
    }

    #[test]
    fn test_err_vector() {
        let v = vector(
            "[1",
            OptionsTag::Strict,
            Expected::Err("ArrayNotClosed".to_string()),
        );
        assert_eq!(run_vector(&v), TestResult::Pass);
    }

    #[test]
    fn test_wrong_error_fails() {
        let v = vector("[1", OptionsTag::Strict, Expected::Err("DictNotClosed".to_string()));
        assert!(!run_vector(&v).is_pass());
    }

    #[test]
    fn test_options_tag() {
        let v = vector("1-2", OptionsTag::Compatible, Expected::Ok("-12".to_string()));
        assert!(run_vector(&v).is_pass());
        let v = vector("1-2", OptionsTag::Strict, Expected::Ok("-12".to_string()));
        assert!(!run_vector(&v).is_pass());
    }

    #[test]
    fn test_from_json() {
        let runner = CorpusRunner::from_json(
            r#"{
                "manifest": {"format_version": "1"},
                "vectors": [
                    {"id": "a", "input": "true", "expected": {"ok": "true"}},
                    {"id": "b", "input": "truex", "expected": {"err": "InvalidBool"}},
                    {"id": "c", "input": "nul", "expected": {"ok": "null"}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(runner.vector_count(), 3);
        assert_eq!(runner.manifest().format_version, "1");

        let results = runner.run_all();
        assert_eq!(results.passed(), 2);
        assert_eq!(results.failed(), 1);
        assert!(!results.all_passed());
        let failures: Vec<_> = results.failures().collect();
        assert_eq!(failures, vec![("c", "ok: null", "err: InvalidNull")]);
    }

    #[test]
    fn test_malformed_corpus() {
        assert!(matches!(
            CorpusRunner::from_json("{}"),
            Err(ConformanceError::CorpusParseError(_))
        ));
    }

    #[test]
    fn test_corpus_results() {
        let mut results = CorpusResults::default();
        results.record("test1", TestResult::Pass);
        results.record(
            "test2",
            TestResult::Fail {
                expected: "a".to_string(),
                actual: "b".to_string(),
            },
        );
        assert_eq!(results.total(), 2);
        assert_eq!(results.summary(), "1 passed, 1 failed (total: 2)");
        assert_eq!(results.failures().map(|(id, _, _)| id).collect::<Vec<_>>(), ["test2"]);
        assert!(CorpusResults::default().all_passed());
    }
}
