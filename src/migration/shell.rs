//! Application shell update.

use std::path::Path;

use super::runner::{FileStatus, WriteOptions};
use super::writer::{read_source, write_with_backup};
use crate::rewrite::clean_shell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOutcome {
    pub path: String,
    pub status: FileStatus,
}

/// Remove the toaster mounts from the shell file, sharing the backup and
/// apply behaviour of the main run.
pub fn migrate_shell(source_root: &Path, shell_file: &str, options: &WriteOptions) -> ShellOutcome {
    let path = source_root.join(shell_file);
    let status = if !path.is_file() {
        FileStatus::NotFound
    } else {
        match update(&path, options) {
            Ok(status) => status,
            Err(err) => FileStatus::Failed(format!("{:#}", err)),
        }
    };

    ShellOutcome {
        path: shell_file.to_string(),
        status,
    }
}

fn update(path: &Path, options: &WriteOptions) -> anyhow::Result<FileStatus> {
    let original = read_source(path)?;
    let cleanup = clean_shell(&original);

    if !cleanup.changed {
        return Ok(FileStatus::Unchanged);
    }
    if options.apply {
        write_with_backup(
            path,
            &original,
            &cleanup.text,
            options.backup_suffix.as_deref(),
        )?;
    }
    Ok(FileStatus::Changed)
}
