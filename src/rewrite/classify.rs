//! Variant classification and title/description promotion.

use super::fields::{ExtractedFields, FieldValue};

/// The replacement call a notification maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Destructive notification.
    Error {
        title: FieldValue,
        description: Option<FieldValue>,
    },
    /// Standard notification with a description.
    Success {
        title: FieldValue,
        description: FieldValue,
    },
    /// Standard notification with a title only.
    Toast { title: FieldValue },
}

impl Replacement {
    /// Classify extracted fields.
    ///
    /// A lone description is promoted to the title and the call carries no
    /// separate description. Returns `None` when neither field is present.
    pub fn classify(fields: ExtractedFields) -> Option<Self> {
        let (title, description) = match (fields.title, fields.description) {
            (Some(title), description) => (title, description),
            (None, Some(description)) => (description, None),
            (None, None) => return None,
        };

        let replacement = match (fields.is_destructive, description) {
            (true, description) => Replacement::Error { title, description },
            (false, Some(description)) => Replacement::Success { title, description },
            (false, None) => Replacement::Toast { title },
        };
        Some(replacement)
    }
}
