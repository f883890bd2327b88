//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `migrate`: Rewrite `toast({ ... })` calls (dry-run unless `--apply`)
//! - `init`: Write a default `.toastswaprc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Files to migrate, relative to the source root (overrides config file)
    pub files: Vec<String>,

    /// Actually write changes (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Do not write backup copies before overwriting files
    #[arg(long)]
    pub no_backup: bool,

    /// Leave the application shell file untouched
    #[arg(long)]
    pub skip_shell: bool,
}

#[derive(Debug, Args)]
pub struct MigrateCommand {
    #[command(flatten)]
    pub args: MigrateArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rewrite toast({ ... }) calls to showError/showSuccess/showToast
    Migrate(MigrateCommand),
    /// Initialize a new .toastswaprc.json configuration file
    Init,
}
