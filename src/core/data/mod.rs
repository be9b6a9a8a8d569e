//! Core data types produced by the extraction pipeline.
//!
//! ## Module Structure
//!
//! - `catalog`: TranslationEntry and the ordered TranslationCatalog
//! - `diagnostic`: Diagnostic and DiagnosticKind (non-fatal warnings)
//! - `result`: per-file results, batch outcomes and fatal failures

pub mod catalog;
pub mod diagnostic;
pub mod result;

pub use catalog::{TranslationCatalog, TranslationEntry};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use result::{BatchOutcome, ExtractionFailure, FailureKind, FileExtractionResult, FileOutcome};
