//! Phase 2: Extraction - markers to catalog entries.
//!
//! This module handles the second pass over a file: every marker matching an
//! alias from Phase 1 (Collection) is statically evaluated and turned into a
//! `TranslationEntry`, or into a `Diagnostic` explaining why it was skipped.
//!
//! - `component`: `<Translate>` tag rules
//! - `function`: `translate()` call rules
//! - `marker_extractor`: the visitor driving both

mod component;
mod function;
pub mod marker_extractor;


pub use marker_extractor::{ExtractionOutput, MarkerExtractor};
