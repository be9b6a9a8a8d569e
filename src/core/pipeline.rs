//! File aggregation: the per-file and batch entry points.
//!
//! Each file runs parse → alias resolution → marker extraction on its own,
//! with no state shared between files. The batch driver parallelizes over
//! files and isolates failures so one broken file never stops its siblings.

use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;

use crate::core::{
    collect::{AliasOptions, AliasSet},
    data::{BatchOutcome, ExtractionFailure, FailureKind, FileExtractionResult, FileOutcome},
    extract::MarkerExtractor,
    parsers::{ParserConfig, parse_source},
};

/// Settings shared by every file of a run.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    pub parser: ParserConfig,
    pub aliases: AliasOptions,
}

/// Extract translations from source text.
///
/// `file_path` identifies the file in diagnostics, selects the parser
/// dialect and decides alias-wrapper status. Parse failures are returned as
/// errors.
pub fn extract_source(
    file_path: &str,
    code: String,
    options: &ExtractOptions,
) -> Result<FileExtractionResult> {
    let parsed = parse_source(code, file_path, &options.parser)?;

    // Pass 1 completes before pass 2 starts
    let aliases = AliasSet::resolve(&parsed.module, &options.aliases);
    let is_alias_wrapper = options.aliases.is_alias_wrapper(file_path);

    let output = MarkerExtractor::new(file_path, &parsed.source_map, &aliases, is_alias_wrapper)
        .extract(&parsed.module);

    Ok(FileExtractionResult {
        file_path: file_path.to_string(),
        catalog: output.catalog,
        diagnostics: output.diagnostics,
    })
}

/// Read a file and extract its translations.
///
/// I/O and parse failures propagate to the caller.
pub fn extract_file(file_path: &str, options: &ExtractOptions) -> Result<FileExtractionResult> {
    try_extract_file(file_path, options).map_err(anyhow::Error::from)
}

/// Extract many files in parallel.
///
/// Outcomes keep the order of `file_paths`. A failing file is logged to
/// stderr and recorded as an `ExtractionFailure`; the others still run.
pub fn extract_files(file_paths: &[String], options: &ExtractOptions) -> BatchOutcome {
    let outcomes: Vec<FileOutcome> = file_paths
        .par_iter()
        .map(|file_path| {
            let outcome = try_extract_file(file_path, options);
            if let Err(failure) = &outcome {
                eprintln!(
                    "{} Error while attempting to extract translations from source code file at path={}",
                    "error:".bold().red(),
                    failure.file_path
                );
            }
            outcome
        })
        .collect();

    BatchOutcome { outcomes }
}

fn try_extract_file(file_path: &str, options: &ExtractOptions) -> FileOutcome {
    let code = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read file: {}", file_path))
        .map_err(|e| failure(file_path, FailureKind::Io, e))?;

    extract_source(file_path, code, options).map_err(|e| failure(file_path, FailureKind::Parse, e))
}

fn failure(file_path: &str, kind: FailureKind, error: anyhow::Error) -> ExtractionFailure {
    ExtractionFailure {
        file_path: file_path.to_string(),
        kind,
        // Alternate format keeps the context chain
        error: format!("{:#}", error),
    }
}
