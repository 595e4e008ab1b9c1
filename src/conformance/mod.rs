//! Corpus-driven conformance checks for the codec.
//!
//! A corpus is a JSON file of test vectors, each pairing an input text
//! with either the canonical text it must print as or the name of the
//! error it must fail with. See [`corpus`] for the file format.

pub mod corpus;

pub use corpus::{Corpus, CorpusResults, CorpusRunner, Expected, OptionsTag, TestResult, TestVector};

/// Result type for conformance operations.
pub type ConformanceResult<T> = Result<T, ConformanceError>;

/// Errors that can occur while loading a corpus.
#[derive(Debug)]
pub enum ConformanceError {
    /// Corpus file could not be read
    IoError(String),
    /// Corpus file is not a valid corpus document
    CorpusParseError(String),
}

impl std::fmt::Display for ConformanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(msg) => write!(f, "Failed to read corpus file: {}", msg),
            Self::CorpusParseError(msg) => write!(f, "Failed to parse corpus JSON: {}", msg),
        }
    }
}

impl std::error::Error for ConformanceError {}
