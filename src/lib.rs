//! toastswap - rewrites object-style `toast({ ... })` calls into the
//! positional `showError` / `showSuccess` / `showToast` helpers.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, output)
//! - `config`: Configuration file loading and parsing
//! - `migration`: File discovery, backup-then-write and run totals
//! - `rewrite`: Pure text transform of one file

pub mod cli;
pub mod config;
pub mod migration;
pub mod rewrite;
