pub mod extract;
pub mod init;

use super::exit_status::ExitStatus;
use crate::core::BatchOutcome;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub outcome: BatchOutcome,
    /// Number of files handed to the extractor.
    pub source_files: usize,
    /// Directory entries the scanner could not read.
    pub skipped_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    /// False if the config file already existed.
    pub created: bool,
}

/// Result of running a command, rendered by `report::print`.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub verbose: bool,
}

impl CommandResult {
    /// Diagnostics never fail a run; only files that could not be extracted do.
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Extract(summary) if summary.outcome.failures().next().is_some() => {
                ExitStatus::Failure
            }
            CommandSummary::Extract(_) => ExitStatus::Success,
            CommandSummary::Init(summary) if summary.created => ExitStatus::Success,
            CommandSummary::Init(_) => ExitStatus::Failure,
        }
    }
}
