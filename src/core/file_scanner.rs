//! Source tree discovery for batch extraction.
//!
//! Include entries and ignore entries are either glob patterns (containing
//! `*` or `?`) or literal paths relative to the source root. Literal paths are
//! matched as prefixes, so bracketed directory names like `[locale]` need no
//! escaping.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Extensions the parser adapter understands.
const SOURCE_EXTENSIONS: &[&str] = &["tsx", "ts", "mts", "cts", "jsx", "js", "mjs", "cjs"];

fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Files found under the source root.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Sorted, deduplicated file paths.
    pub files: Vec<String>,
    /// Directory entries that could not be read.
    pub skipped_count: usize,
}

/// Compiled ignore rules.
struct IgnoreRules {
    literal_paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreRules {
    fn new(base_dir: &Path, ignores: &[String], ignore_test_files: bool, verbose: bool) -> Self {
        let mut literal_paths = Vec::new();
        let mut patterns = Vec::new();

        for raw in ignores {
            if !is_glob_pattern(raw) {
                literal_paths.push(base_dir.join(raw));
                continue;
            }
            match Pattern::new(raw) {
                Ok(pattern) => patterns.push(pattern),
                Err(e) if verbose => eprintln!(
                    "{} Invalid ignore pattern '{}': {}",
                    "warning:".bold().yellow(),
                    raw,
                    e
                ),
                Err(_) => {}
            }
        }

        if ignore_test_files {
            patterns.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        Self {
            literal_paths,
            patterns,
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.literal_paths.iter().any(|prefix| path.starts_with(prefix)) {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.patterns.iter().any(|p| p.matches(&path_str))
    }
}

/// Resolve include entries to the directories (or files) to walk.
fn roots_to_scan(base_dir: &Path, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut roots = Vec::new();
    for include in includes {
        let joined = base_dir.join(include);
        if is_glob_pattern(include) {
            match glob(&joined.to_string_lossy()) {
                Ok(entries) => roots.extend(entries.flatten()),
                Err(e) if verbose => eprintln!(
                    "{} Invalid glob pattern '{}': {}",
                    "warning:".bold().yellow(),
                    include,
                    e
                ),
                Err(_) => {}
            }
        } else if joined.exists() {
            roots.push(joined);
        } else if verbose {
            eprintln!(
                "{} Include path does not exist: {}",
                "warning:".bold().yellow(),
                joined.display()
            );
        }
    }
    roots
}

/// Walk `base_dir` and collect every source file to extract.
pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignores: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> ScanResult {
    let base_dir = Path::new(base_dir);
    let rules = IgnoreRules::new(base_dir, ignores, ignore_test_files, verbose);

    // BTreeSet keeps the batch order stable across runs and platforms
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    for root in roots_to_scan(base_dir, includes, verbose) {
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !rules.is_ignored(entry.path()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };

            let path = entry.path();
            if entry.file_type().is_file() && is_source_file(path) {
                files.insert(path.to_string_lossy().into_owned());
            }
        }
    }

    ScanResult {
        files: files.into_iter().collect(),
        skipped_count,
    }
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
        && !path.to_string_lossy().ends_with(".d.ts")
}
