use std::process::ExitCode;

use super::run::RunSummary;

/// Exit status of the CLI.
///
/// - `Success` (0): every string was handled
/// - `Failure` (1): the project was processed but some strings could not be translated
/// - `Error` (2): the run was aborted (missing file, malformed JSON, unsupported locale, I/O)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every string was handled.
    Success,
    /// Some strings could not be translated.
    Failure,
    /// The run was aborted.
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

impl From<&RunSummary> for ExitStatus {
    fn from(summary: &RunSummary) -> Self {
        if summary.stats.failed() > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
