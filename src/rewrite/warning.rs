//! Warnings for call sites that were left untouched.

use std::fmt;

/// Maximum number of characters kept in a warning snippet.
const SNIPPET_WIDTH: usize = 60;

/// Why a candidate call site was not rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// No `}` balances the object literal before end of file.
    UnbalancedCallSite,
    /// The object literal is balanced but not directly followed by `)`.
    UnclosedCall,
    /// Neither `title` nor `description` is present.
    AmbiguousFields,
    /// A recognised field holds something other than a single literal.
    NonLiteralField { field: String },
    /// The object literal spreads another object into itself.
    SpreadArgument,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::UnbalancedCallSite => write!(f, "unbalanced braces"),
            WarningKind::UnclosedCall => write!(f, "call does not close after the object"),
            WarningKind::AmbiguousFields => write!(f, "no title or description"),
            WarningKind::NonLiteralField { field } => {
                write!(f, "'{}' is not a string literal", field)
            }
            WarningKind::SpreadArgument => write!(f, "spread argument"),
        }
    }
}

/// A call site left unchanged, located in the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationWarning {
    /// 1-based line of the call.
    pub line: usize,
    /// 1-based column (in characters) of the call.
    pub col: usize,
    pub kind: WarningKind,
    /// Full source line containing the call start.
    pub source_line: String,
    /// Start of the call text, whitespace collapsed.
    pub snippet: String,
}

impl MigrationWarning {
    /// Build a warning for the call starting at byte `offset` of `text`.
    pub fn at(text: &str, offset: usize, kind: WarningKind) -> Self {
        let before = &text[..offset];
        let line_start = before.rfind('\n').map_or(0, |pos| pos + 1);
        let line_end = text[offset..]
            .find('\n')
            .map_or(text.len(), |pos| offset + pos);

        Self {
            line: before.matches('\n').count() + 1,
            col: text[line_start..offset].chars().count() + 1,
            kind,
            source_line: text[line_start..line_end].trim_end_matches('\r').to_string(),
            snippet: snippet(&text[offset..]),
        }
    }
}

impl fmt::Display for MigrationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({})", self.line, self.snippet, self.kind)
    }
}

fn snippet(text: &str) -> String {
    let window = match text.char_indices().nth(SNIPPET_WIDTH * 4) {
        Some((end, _)) => &text[..end],
        None => text,
    };
    let collapsed = window.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > SNIPPET_WIDTH {
        let mut cut: String = collapsed.chars().take(SNIPPET_WIDTH).collect();
        cut.push_str("...");
        cut
    } else {
        collapsed
    }
}
