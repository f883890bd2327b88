//! File-level migration: discovery, per-file transform, backup-then-write
//! and whole-run totals.

mod discover;
mod runner;
mod shell;
mod writer;

use std::path::Path;

use anyhow::{Result, bail};

pub use discover::resolve_files;
pub use runner::{FileOutcome, FileStatus, RunSummary, WriteOptions, migrate_files};
pub use shell::{ShellOutcome, migrate_shell};
pub use writer::{backup_path, write_with_backup};

use crate::config::Config;
use crate::rewrite::Rewriter;

/// Everything a migration run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub files: Vec<FileOutcome>,
    pub shell: Option<ShellOutcome>,
    pub summary: RunSummary,
}

/// Inputs of one migration run.
pub struct MigrationRequest<'a> {
    pub source_root: &'a Path,
    pub config: &'a Config,
    /// Overrides the configured file list when non-empty.
    pub files: &'a [String],
    pub options: WriteOptions,
    pub include_shell: bool,
    pub verbose: bool,
}

/// Run a whole migration. Fails only when the source root is missing or
/// the configuration cannot produce a rewriter; per-file problems end up in
/// the report.
pub fn run_migration(request: &MigrationRequest<'_>) -> Result<MigrationReport> {
    if !request.source_root.is_dir() {
        bail!(
            "Source root not found: {}",
            request.source_root.display()
        );
    }

    let rewriter = Rewriter::from_config(request.config)?;
    let files = resolve_files(
        request.source_root,
        request.config,
        request.files,
        request.verbose,
    )?;

    let outcomes = migrate_files(request.source_root, &files, &rewriter, &request.options);
    let shell = request.include_shell.then(|| {
        migrate_shell(
            request.source_root,
            &request.config.shell_file,
            &request.options,
        )
    });

    Ok(MigrationReport {
        summary: RunSummary::from_outcomes(&outcomes),
        files: outcomes,
        shell,
    })
}
