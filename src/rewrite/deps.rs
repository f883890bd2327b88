//! Dependency list cleanup.
//!
//! Removes an identifier from bracketed, comma-separated lists such as the
//! dependency arrays of `useEffect` and `useCallback`. Lists that open
//! inside a string literal, template text or comment are left alone.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::{Captures, Regex};

use super::lexer::CodeMap;

/// A bracketed list with no nested brackets.
static LIST_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[^\[\]]*\]").unwrap());

#[derive(Debug, Clone)]
pub struct DependencyCleaner {
    /// `[ident]`
    sole: Regex,
    /// `[ident, ...`
    leading: Regex,
    /// `..., ident]` and `..., ident, ...`
    trailing: Regex,
}

impl DependencyCleaner {
    pub fn new(identifier: &str) -> Result<Self> {
        let ident = regex::escape(identifier);
        let compile = |pattern: String| {
            Regex::new(&pattern)
                .with_context(|| format!("Invalid dependency identifier: \"{}\"", identifier))
        };

        Ok(Self {
            sole: compile(format!(r"\[\s*{ident}\s*\]"))?,
            leading: compile(format!(r"\[\s*{ident}\s*,\s*"))?,
            trailing: compile(format!(r",\s*{ident}\s*(?P<close>[,\]])"))?,
        })
    }

    /// Remove the identifier from every bracketed list in `text`.
    pub fn clean(&self, text: &str) -> String {
        let code = CodeMap::scan(text);
        LIST_REGEX
            .replace_all(text, |caps: &Captures| {
                let list = &caps[0];
                match caps.get(0) {
                    Some(found) if code.is_code(found.start()) => self.clean_list(list),
                    _ => list.to_string(),
                }
            })
            .into_owned()
    }

    /// Repeats until stable so adjacent duplicates are removed as well.
    fn clean_list(&self, list: &str) -> String {
        let mut current = list.to_string();
        loop {
            let next = self.clean_once(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    fn clean_once(&self, text: &str) -> String {
        let text = self.sole.replace_all(text, "[]");
        let text = self.leading.replace_all(&text, "[");
        self.trailing.replace_all(&text, "${close}").into_owned()
    }
}
