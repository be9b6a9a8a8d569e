//! i18n-extract - static translation extraction for Docusaurus sites
//!
//! Scans JavaScript and TypeScript sources for `<Translate>` elements and
//! `translate()` calls imported from `@docusaurus/Translate`, statically
//! evaluates their arguments and collects a catalog of translation entries.
//! Markers that cannot be evaluated are reported as diagnostics instead.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (parsing, alias resolution, marker extraction)
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
