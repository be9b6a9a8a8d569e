use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): every file was extracted (diagnostics may still exist)
/// - `Failure` (1): at least one file could not be read or parsed
/// - `Error` (2): the run itself failed (config error, output error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
