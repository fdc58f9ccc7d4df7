use std::process::ExitCode;

use crate::core::MissingKeysReport;

/// Process exit status.
///
/// Missing keys are the normal result of an audit, so they only fail the run
/// under `--strict`. Errors always win over findings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    /// `--strict` audit found files with missing keys.
    Failure = 1,
    /// Missing file, invalid JSON, bad config and the like.
    Error = 2,
}

impl ExitStatus {
    pub fn for_audit(report: &MissingKeysReport, strict: bool) -> Self {
        if strict && !report.is_complete() {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}
