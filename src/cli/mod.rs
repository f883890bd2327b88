//! Command-line interface layer.
//!
//! Parses arguments, dispatches to a command and maps its outcome to an
//! [`ExitStatus`]. Output formatting lives in `report` so the migration
//! itself stays usable as a library.

use std::process::ExitCode;

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;

pub use args::{Arguments, Command, CommonArgs, MigrateArgs, MigrateCommand};
pub use exit_status::ExitStatus;
pub use report::{print_report, print_report_to};

use commands::{init::init, migrate::migrate};

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = match command {
        Some(Command::Migrate(cmd)) => migrate(cmd)?,
        Some(Command::Init) => init()?,
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    };

    Ok(status.into())
}
