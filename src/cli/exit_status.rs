use std::process::ExitCode;

use crate::migration::{FileStatus, MigrationReport};

/// Exit status for CLI commands.
///
/// - `Success` (0): Nothing left to migrate
/// - `Failure` (1): Work remains or some files need attention
/// - `Error` (2): Fatal error before any file was touched
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status of a finished `migrate` run.
    ///
    /// Missing or failed files and residual calls are a failure. In dry-run
    /// mode, pending changes are a failure too, to signal that there is work
    /// to be done.
    pub fn for_migration(report: &MigrationReport, apply: bool) -> Self {
        let summary = &report.summary;
        let shell_status = report.shell.as_ref().map(|shell| &shell.status);

        let needs_attention = summary.files_failed > 0
            || summary.files_not_found > 0
            || summary.files_with_residual > 0
            || matches!(shell_status, Some(FileStatus::Failed(_)));
        let pending = !apply
            && (summary.files_changed > 0 || matches!(shell_status, Some(FileStatus::Changed)));

        if needs_attention || pending {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        let code = match status {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        };
        ExitCode::from(code)
    }
}
