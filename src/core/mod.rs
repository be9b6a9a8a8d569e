//! Core extraction engine.
//!
//! Every file goes through the same two-pass pipeline:
//!
//! 1. **Phase 1: Collection** (`collect`) resolves which local names refer
//!    to the translation component and function.
//! 2. **Phase 2: Extraction** (`extract`) visits every marker using those
//!    names and produces catalog entries or diagnostics, with `evaluate`
//!    folding attribute and argument expressions to static values.
//!
//! `pipeline` runs the phases per file and across a batch of files;
//! `file_scanner` discovers the batch from a source tree.

pub mod collect;
pub mod data;
pub mod evaluate;
pub mod extract;
pub mod file_scanner;
pub mod parsers;
pub mod pipeline;

pub use data::{
    BatchOutcome, Diagnostic, DiagnosticKind, ExtractionFailure, FailureKind,
    FileExtractionResult, TranslationCatalog, TranslationEntry,
};
pub use pipeline::{ExtractOptions, extract_file, extract_files, extract_source};
