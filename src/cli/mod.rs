//! Command-line interface layer.
//!
//! Kept separate from `core` so the extractor can be used as a library.

pub mod args;
mod commands;
pub mod exit_status;
pub mod report;
mod run;

use std::process::ExitCode;

use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    report::print(&result)?;

    Ok(result.exit_status().into())
}
