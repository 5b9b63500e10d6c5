//! Corpus-based conformance testing.
//!
//! Loads test vectors from a corpus file and runs them against the parser.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::outcome::OutcomeRecord;
use super::{ConformanceError, ConformanceResult};
use crate::json::{parse_with_options, Options};

/// Corpus format this runner understands.
pub const FORMAT_VERSION: &str = "1";

/// Corpus manifest with metadata.
#[derive(Debug, Deserialize)]
pub struct CorpusManifest {
    /// Format version of the corpus file.
    pub format_version: String,
    /// Corpus version.
    pub version: String,
}

/// A corpus containing test vectors.
#[derive(Debug, Deserialize)]
pub struct Corpus {
    /// Corpus metadata.
    pub manifest: CorpusManifest,
    /// List of test vectors.
    pub vectors: Vec<TestVector>,
}

/// A single test vector.
#[derive(Debug, Deserialize)]
pub struct TestVector {
    /// Unique identifier for the test.
    pub id: String,
    /// Document to parse.
    pub input: String,
    /// Parse with [`Options::strict`] instead of the default options.
    #[serde(default)]
    pub strict: bool,
    /// Expected outcome.
    pub expected: OutcomeRecord,
}

/// Result of running a single test vector.
#[derive(Debug)]
pub enum TestResult {
    /// Test passed.
    Pass,
    /// Test failed with mismatch.
    Fail {
        /// Expected outcome from the corpus.
        expected: String,
        /// Actual outcome from the parser.
        actual: String,
    },
}

impl TestResult {
    /// Returns true if this is a passing result.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns true if this is a failing result.
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }
}

/// Results from running the corpus.
#[derive(Debug, Default)]
pub struct CorpusResults {
    /// Number of tests that passed.
    pub passed: usize,
    /// Number of tests that failed.
    pub failed: usize,
    /// Detailed results for each test.
    pub details: Vec<(String, TestResult)>,
}

impl CorpusResults {
    /// Create a new empty results container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a test result.
    pub fn record(&mut self, id: &str, result: TestResult) {
        match &result {
            TestResult::Pass => self.passed += 1,
            TestResult::Fail { .. } => self.failed += 1,
        }
        self.details.push((id.to_string(), result));
    }

    /// Get total number of tests run.
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Returns true if no test failed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Get a summary string of the results.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed (total: {})",
            self.passed,
            self.failed,
            self.total()
        )
    }

    /// Get failures only.
    pub fn failures(&self) -> Vec<&(String, TestResult)> {
        self.details.iter().filter(|(_, r)| r.is_fail()).collect()
    }
}

/// Corpus runner that executes test vectors.
pub struct CorpusRunner {
    corpus: Corpus,
}

impl CorpusRunner {
    /// Load corpus from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> ConformanceResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Load corpus from its JSON text.
    pub fn from_json(content: &str) -> ConformanceResult<Self> {
        let corpus: Corpus = serde_json::from_str(content)?;
        if corpus.manifest.format_version != FORMAT_VERSION {
            return Err(ConformanceError::UnsupportedFormat(
                corpus.manifest.format_version,
            ));
        }
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
        let mut results = CorpusResults::new();

        for vector in &self.corpus.vectors {
            let result = run_vector(vector);
            debug!(id = %vector.id, pass = result.is_pass(), "ran vector");
            results.record(&vector.id, result);
        }

        results
    }
}

/// Run a single test vector.
fn run_vector(vector: &TestVector) -> TestResult {
    let options = if vector.strict {
        Options::strict()
    } else {
        Options::compatible()
    };
    let actual = OutcomeRecord::from_result(&parse_with_options(&vector.input, options));

    if vector.expected.matches(&actual) {
        TestResult::Pass
    } else {
        TestResult::Fail {
            expected: vector.expected.to_string(),
            actual: actual.to_string(),
        }
    }
}
