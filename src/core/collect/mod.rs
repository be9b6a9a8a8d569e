//! Phase 1: Collection - alias resolution.
//!
//! Walks the import declarations of a file to find the local names bound to
//! the translation primitives, and merges them with configured aliases.
//! The resulting `AliasSet` is read-only input for Phase 2 (Extraction).

pub mod alias;

pub use alias::{AliasOptions, AliasResolver, AliasSet, TRANSLATE_FUNCTION, TRANSLATE_MODULE};
