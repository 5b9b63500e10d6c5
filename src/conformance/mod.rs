//! Corpus-driven conformance checking.
//!
//! A corpus is a JSON file of test vectors, each an input document and the
//! outcome it must produce. The same outcome record shape is what the CLI
//! prints, so CLI output can be pasted straight into a corpus.

pub mod corpus;
mod outcome;

pub use corpus::{Corpus, CorpusManifest, CorpusResults, CorpusRunner, TestResult, TestVector};
pub use outcome::OutcomeRecord;

use thiserror::Error;

/// Result type for conformance operations.
pub type ConformanceResult<T> = Result<T, ConformanceError>;

/// Errors that can occur while loading a corpus.
#[derive(Debug, Error)]
pub enum ConformanceError {
    /// The corpus file could not be read
    #[error("failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),
    /// The corpus file is not a valid corpus document
    #[error("failed to parse corpus JSON: {0}")]
    Format(#[from] serde_json::Error),
    /// The corpus declares a format this runner does not understand
    #[error("unsupported corpus format version '{0}'")]
    UnsupportedFormat(String),
}
