//! Common utility functions shared across the codebase.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Trims the text and collapses every internal run of whitespace to one space.
///
/// This makes JSX text insensitive to source formatting.
///
/// # Examples
///
/// ```
/// use i18n_extract::utils::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  Hello   world "), "Hello world");
/// assert_eq!(normalize_whitespace("Hello\n      world"), "Hello world");
/// assert_eq!(normalize_whitespace(" \n "), "");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}
