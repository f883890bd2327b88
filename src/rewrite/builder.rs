//! Replacement text rendering.

use crate::config::Targets;

use super::classify::Replacement;

/// Literal passed as the second argument of a title-only toast.
const TOAST_KIND: &str = "\"success\"";

impl Replacement {
    /// Render the replacement call. Literals are emitted exactly as they were
    /// written in the original call.
    pub fn render(&self, targets: &Targets) -> String {
        match self {
            Replacement::Error {
                title,
                description: Some(description),
            } => format!("{}({}, {})", targets.error, title, description),
            Replacement::Error {
                title,
                description: None,
            } => format!("{}({})", targets.error, title),
            Replacement::Success { title, description } => {
                format!("{}({}, {})", targets.success, title, description)
            }
            Replacement::Toast { title } => format!("{}({}, {})", targets.toast, title, TOAST_KIND),
        }
    }
}
