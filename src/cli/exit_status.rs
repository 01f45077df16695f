use std::process::ExitCode;

/// Exit status of the `burndown` binary.
///
/// - `Success` (0): reports written, or config initialized
/// - `Error` (2): any failure; nothing is reported partially
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
