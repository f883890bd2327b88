//! Migrate command implementation.
//!
//! Rewrites `toast({ ... })` calls in the configured files and cleans the
//! application shell. Use `--apply` to write changes (default is dry-run).

use std::env;

use anyhow::{Context, Result};

use super::super::args::MigrateCommand;
use super::super::exit_status::ExitStatus;
use super::super::report;
use crate::config::load_config;
use crate::migration::{MigrationRequest, WriteOptions, run_migration};

pub fn migrate(cmd: MigrateCommand) -> Result<ExitStatus> {
    let args = &cmd.args;
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let config = load_config(&cwd)?.config;

    let source_root = match &args.common.source_root {
        Some(dir) => cwd.join(dir),
        None => cwd.join(&config.source_root),
    };
    let backup_suffix = (config.backup && !args.no_backup).then(|| config.backup_suffix.clone());

    let request = MigrationRequest {
        source_root: &source_root,
        config: &config,
        files: &args.files,
        options: WriteOptions {
            apply: args.apply,
            backup_suffix,
        },
        include_shell: !args.skip_shell,
        verbose: args.common.verbose,
    };
    let migration = run_migration(&request)?;

    report::print_report(&migration, args.apply, args.common.verbose);

    Ok(ExitStatus::for_migration(&migration, args.apply))
}
