//! Report formatting and printing utilities.
//!
//! The catalog goes to stdout as JSON so it can be piped into other tools;
//! everything meant for humans (diagnostics, failures, summary) goes to
//! stderr in cargo-style format.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{Diagnostic, ExtractionFailure, TranslationCatalog};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of snippet lines shown per diagnostic.
const MAX_SNIPPET_LINES: usize = 3;

pub fn print(result: &CommandResult) -> Result<()> {
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract(summary, result.verbose),
        CommandSummary::Init(summary) => {
            print_init(summary);
            Ok(())
        }
    }
}

fn print_extract(summary: &ExtractSummary, verbose: bool) -> Result<()> {
    let catalog = summary.outcome.combined_catalog();
    write_catalog_to(&catalog, &mut io::stdout().lock())?;

    let diagnostics: Vec<&Diagnostic> = summary.outcome.diagnostics().collect();
    let failures: Vec<&ExtractionFailure> = summary.outcome.failures().collect();

    let stderr = &mut io::stderr().lock();
    report_to(&diagnostics, &failures, stderr);
    print_skipped_warning_to(summary.skipped_count, verbose, stderr);
    print_summary_to(
        catalog.len(),
        summary.source_files,
        diagnostics.len(),
        failures.len(),
        stderr,
    );
    Ok(())
}

/// Write the catalog as pretty JSON followed by a newline.
pub fn write_catalog_to<W: Write>(catalog: &TranslationCatalog, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, catalog).context("Failed to serialize catalog")?;
    writeln!(writer).context("Failed to write catalog")?;
    Ok(())
}

/// Print diagnostics, then failures, in the order given.
///
/// Callers pass them in batch order, which is already deterministic.
pub fn report_to<W: Write>(
    diagnostics: &[&Diagnostic],
    failures: &[&ExtractionFailure],
    writer: &mut W,
) {
    for diagnostic in diagnostics {
        print_diagnostic(diagnostic, writer);
    }
    for failure in failures {
        print_failure(failure, writer);
    }
}

/// Print a warning about directory entries the scanner could not read.
pub fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

pub fn print_summary_to<W: Write>(
    translations: usize,
    source_files: usize,
    warnings: usize,
    errors: usize,
    writer: &mut W,
) {
    let problems = warnings + errors;
    if problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            problems,
            errors,
            if errors == 1 { "error" } else { "errors" }.red(),
            warnings,
            if warnings == 1 { "warning" } else { "warnings" }.yellow()
        );
    }

    let extracted = format!(
        "Extracted {} {} from {} source {}",
        translations,
        if translations == 1 {
            "translation"
        } else {
            "translations"
        },
        source_files,
        if source_files == 1 { "file" } else { "files" }
    );
    if errors == 0 {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), extracted.green());
    } else {
        let _ = writeln!(writer, "{}", extracted);
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_diagnostic<W: Write>(diagnostic: &Diagnostic, writer: &mut W) {
    let mut text_lines = diagnostic.text.lines();
    let headline = text_lines.next().unwrap_or_default();

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        "warning".bold().yellow(),
        headline,
        diagnostic.kind.rule().dimmed().cyan()
    );

    match diagnostic.line {
        Some(line) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}",
                "-->".blue(),
                diagnostic.file_path,
                line
            );
        }
        None => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), diagnostic.file_path);
        }
    }

    let snippet_lines: Vec<&str> = diagnostic.snippet.lines().collect();
    let first_line = diagnostic.line.unwrap_or(1);
    let shown = snippet_lines.len().min(MAX_SNIPPET_LINES);
    let width = (first_line + shown.saturating_sub(1)).to_string().len();

    if let Some(first) = snippet_lines.first() {
        let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = width);

        for (offset, source_line) in snippet_lines.iter().take(shown).enumerate() {
            let number = match diagnostic.line {
                Some(line) => (line + offset).to_string(),
                None => String::new(),
            };
            let _ = writeln!(
                writer,
                "{:>width$} {} {}",
                number.blue(),
                "|".blue(),
                source_line,
                width = width
            );

            // Underline the first line only; the marker starts there
            if offset == 0 {
                let carets = "^".repeat(UnicodeWidthStr::width(first.trim_end()).max(1));
                let _ = writeln!(
                    writer,
                    "{:>width$} {} {}",
                    "",
                    "|".blue(),
                    carets.yellow(),
                    width = width
                );
            }
        }

        if snippet_lines.len() > shown {
            let _ = writeln!(
                writer,
                "{:>width$} {} {}",
                "",
                "|".blue(),
                "...".dimmed(),
                width = width
            );
        }
    }

    for note in text_lines {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            note,
            width = width
        );
    }

    let _ = writeln!(writer);
}

fn print_failure<W: Write>(failure: &ExtractionFailure, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: {}  {}",
        "error".bold().red(),
        failure.error,
        failure.kind.to_string().dimmed().cyan()
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), failure.file_path);
    let _ = writeln!(writer);
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
    }
}

// ============================================================
// Tests
// ============================================================
