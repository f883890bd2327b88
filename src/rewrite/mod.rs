//! Call-rewriting engine.
//!
//! ## Pipeline
//!
//! ```text
//! source text
//!     ↓
//! matcher   (find `toast({ ... })`, balance braces)
//!     ↓
//! fields    (title / description / variant literals)
//!     ↓
//! classify  (error / success / toast, description promotion)
//!     ↓
//! builder   (render `showError(...)`, ...)
//!     ↓
//! deps      (drop `toast` from dependency lists)
//!     ↓
//! transformed text + TransformResult
//! ```
//!
//! [`shell`] is a separate, narrower transform for the application shell.

mod builder;
pub mod classify;
pub mod deps;
pub mod fields;
mod lexer;
pub mod matcher;
pub mod shell;
mod transform;
pub mod warning;


pub use classify::Replacement;
pub use fields::{ExtractedFields, FieldValue, extract_fields};
pub use matcher::{CallMatcher, CallSite};
pub use shell::{ShellCleanup, clean_shell};
pub use transform::{Rewriter, TransformResult, TransformStatus, Transformed};
pub use warning::{MigrationWarning, WarningKind};
