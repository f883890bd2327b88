//! Runs the rewriter over a list of files.
//!
//! Transforms are computed in parallel (they are pure); writes happen
//! afterwards, one file at a time, in list order. No per-file failure stops
//! the run.

use std::{fmt, path::Path};

use rayon::prelude::*;

use super::writer::{read_source, write_with_backup};
use crate::rewrite::{Rewriter, TransformResult, TransformStatus, Transformed};

/// How files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Write changes to disk. When false nothing is written.
    pub apply: bool,
    /// Backup suffix, or `None` to skip backups.
    pub backup_suffix: Option<String>,
}

impl WriteOptions {
    pub fn dry_run() -> Self {
        Self {
            apply: false,
            backup_suffix: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Content changed (written, or would be in dry-run).
    Changed,
    Unchanged,
    NotFound,
    /// Read or write failed; the message is the error chain.
    Failed(String),
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileStatus::Changed => write!(f, "changed"),
            FileStatus::Unchanged => write!(f, "unchanged"),
            FileStatus::NotFound => write!(f, "not found"),
            FileStatus::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Per-file result handed to the reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// Path relative to the source root.
    pub path: String,
    pub status: FileStatus,
    pub result: TransformResult,
}

impl FileOutcome {
    fn new(path: &str, status: FileStatus) -> Self {
        Self {
            path: path.to_string(),
            status,
            result: TransformResult::default(),
        }
    }

    /// Changed, with no old-shape call left behind.
    pub fn is_fully_migrated(&self) -> bool {
        self.status == FileStatus::Changed && self.result.status() == TransformStatus::Migrated
    }

    pub fn has_residual(&self) -> bool {
        self.result.unmatched_count > 0
    }
}

/// Whole-run totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_total: usize,
    pub files_changed: usize,
    pub calls_replaced: usize,
    pub files_fully_migrated: usize,
    pub files_with_residual: usize,
    pub files_not_found: usize,
    pub files_failed: usize,
}

impl RunSummary {
    pub fn from_outcomes(outcomes: &[FileOutcome]) -> Self {
        let mut summary = RunSummary {
            files_total: outcomes.len(),
            ..Default::default()
        };

        for outcome in outcomes {
            match outcome.status {
                FileStatus::Changed => {
                    summary.files_changed += 1;
                    summary.calls_replaced += outcome.result.replaced_count;
                }
                FileStatus::NotFound => summary.files_not_found += 1,
                FileStatus::Failed(_) => summary.files_failed += 1,
                FileStatus::Unchanged => {}
            }
            if outcome.is_fully_migrated() {
                summary.files_fully_migrated += 1;
            }
            if outcome.has_residual() {
                summary.files_with_residual += 1;
            }
        }

        summary
    }

    /// Percentage of listed files that are fully migrated.
    pub fn progress(&self) -> f64 {
        if self.files_total == 0 {
            0.0
        } else {
            self.files_fully_migrated as f64 / self.files_total as f64 * 100.0
        }
    }
}

enum Prepared {
    Ready {
        original: String,
        transformed: Transformed,
    },
    Done(FileStatus),
}

/// Migrate `files` (relative to `source_root`).
pub fn migrate_files(
    source_root: &Path,
    files: &[String],
    rewriter: &Rewriter,
    options: &WriteOptions,
) -> Vec<FileOutcome> {
    let prepared: Vec<Prepared> = files
        .par_iter()
        .map(|file| prepare(&source_root.join(file), rewriter))
        .collect();

    files
        .iter()
        .zip(prepared)
        .map(|(file, prepared)| match prepared {
            Prepared::Done(status) => FileOutcome::new(file, status),
            Prepared::Ready {
                original,
                transformed,
            } => finish(&source_root.join(file), file, original, transformed, options),
        })
        .collect()
}

fn prepare(path: &Path, rewriter: &Rewriter) -> Prepared {
    if !path.is_file() {
        return Prepared::Done(FileStatus::NotFound);
    }

    match read_source(path) {
        Ok(original) => {
            let transformed = rewriter.transform(&original);
            Prepared::Ready {
                original,
                transformed,
            }
        }
        Err(err) => Prepared::Done(FileStatus::Failed(format!("{:#}", err))),
    }
}

fn finish(
    path: &Path,
    file: &str,
    original: String,
    transformed: Transformed,
    options: &WriteOptions,
) -> FileOutcome {
    let Transformed { text, result } = transformed;

    let status = if !result.changed {
        FileStatus::Unchanged
    } else if !options.apply {
        FileStatus::Changed
    } else {
        match write_with_backup(path, &original, &text, options.backup_suffix.as_deref()) {
            Ok(_) => FileStatus::Changed,
            Err(err) => FileStatus::Failed(format!("{:#}", err)),
        }
    };

    FileOutcome {
        path: file.to_string(),
        status,
        result,
    }
}
