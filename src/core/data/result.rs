use std::fmt;

use crate::core::data::{Diagnostic, TranslationCatalog};

/// Everything extracted from one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileExtractionResult {
    pub file_path: String,
    pub catalog: TranslationCatalog,
    /// Diagnostics in source traversal order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Stage at which a file failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The file could not be read.
    Io,
    /// The file is not valid for the configured dialect.
    Parse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Io => write!(f, "io-error"),
            FailureKind::Parse => write!(f, "parse-error"),
        }
    }
}

/// A fatal per-file failure recorded by the batch driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionFailure {
    pub file_path: String,
    pub kind: FailureKind,
    pub error: String,
}

impl fmt::Display for ExtractionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file_path, self.error)
    }
}

impl std::error::Error for ExtractionFailure {}

/// Outcome of extracting one file within a batch.
pub type FileOutcome = Result<FileExtractionResult, ExtractionFailure>;

/// Results of a batch run, one outcome per input path in input order.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchOutcome {
    pub fn results(&self) -> impl Iterator<Item = &FileExtractionResult> {
        self.outcomes.iter().filter_map(|o| o.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &ExtractionFailure> {
        self.outcomes.iter().filter_map(|o| o.as_ref().err())
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.results().flat_map(|r| r.diagnostics.iter())
    }

    /// Concatenate every successful catalog, in input order.
    pub fn combined_catalog(&self) -> TranslationCatalog {
        let mut combined = TranslationCatalog::new();
        for result in self.results() {
            combined.extend(result.catalog.clone());
        }
        combined
    }
}
