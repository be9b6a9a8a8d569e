use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::{
    config::{ConfigLoadResult, load_config},
    core::{ExtractOptions, extract_files, file_scanner::scan_files},
};

/// Everything an extraction run needs, resolved before any file is read.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--syntax typescript`)
/// 2. `.i18nextractrc.json` config file
/// 3. Built-in defaults
///
/// Alias names are the exception: names given on the command line are added
/// to those from the config file instead of replacing them.
pub struct ExtractContext {
    pub options: ExtractOptions,
    /// Files to extract, in batch order.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

impl ExtractContext {
    pub fn new(cmd: &ExtractCommand) -> Result<Self> {
        let verbose = cmd.common.verbose;
        let start_dir = cmd
            .common
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let ConfigLoadResult {
            mut config,
            from_file,
        } = load_config(&start_dir)?;
        if verbose && !from_file {
            eprintln!(
                "{} No config file found, using defaults",
                "info:".bold().cyan()
            );
        }

        if let Some(source_root) = &cmd.common.source_root {
            config.source_root = source_root.to_string_lossy().into_owned();
        }
        if let Some(syntax) = cmd.syntax {
            config.parser.syntax = syntax;
        }
        config
            .component_names
            .extend(cmd.component_names.iter().cloned());
        config
            .function_names
            .extend(cmd.function_names.iter().cloned());
        config.validate()?;

        let (files, skipped_count) = if cmd.files.is_empty() {
            let scan = scan_files(
                &config.source_root,
                &config.includes,
                &config.ignores,
                config.ignore_test_files,
                verbose,
            );
            (scan.files, scan.skipped_count)
        } else {
            let files = cmd.files.iter().map(|p| path_string(p)).collect();
            (files, 0)
        };

        if verbose {
            eprintln!(
                "{} Extracting from {} source {}",
                "info:".bold().cyan(),
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        }

        Ok(Self {
            options: config.extract_options(),
            files,
            skipped_count,
        })
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ctx = ExtractContext::new(&cmd)?;
    let outcome = extract_files(&ctx.files, &ctx.options);

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            outcome,
            source_files: ctx.files.len(),
            skipped_count: ctx.skipped_count,
        }),
        verbose: cmd.common.verbose,
    })
}
