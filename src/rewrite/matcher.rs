//! Call-site matcher.
//!
//! Locates `callee({ ... })` invocations. The invocation token is found with
//! a regex; the object literal is then delimited by brace-depth scanning so a
//! nested object or an interpolation inside a field value cannot cut the call
//! short. Tokens inside string literals, template text and comments are
//! not candidates.

use anyhow::{Context, Result};
use regex::Regex;

use super::lexer::{CodeMap, balancing_brace};
use super::warning::WarningKind;

/// A balanced `callee({ ... })` call in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite<'a> {
    /// Byte offset of the callee identifier.
    pub start: usize,
    /// Byte offset just past the closing `)`.
    pub end: usize,
    /// Text between the object literal's braces.
    pub body: &'a str,
}

/// A candidate that could not be delimited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unmatched {
    pub start: usize,
    pub kind: WarningKind,
}

/// Compiled matcher for one callee name.
#[derive(Debug, Clone)]
pub struct CallMatcher {
    pattern: Regex,
}

impl CallMatcher {
    pub fn new(callee: &str) -> Result<Self> {
        let pattern = format!(r"\b{}\s*\(\s*\{{", regex::escape(callee));
        let pattern = Regex::new(&pattern)
            .with_context(|| format!("Invalid callee name: \"{}\"", callee))?;
        Ok(Self { pattern })
    }

    /// Lazily yields candidates left to right. Balanced calls never overlap.
    pub fn find_iter<'m, 't>(&'m self, text: &'t str) -> CallSites<'m, 't> {
        CallSites {
            pattern: &self.pattern,
            code: CodeMap::scan(text),
            text,
            pos: 0,
        }
    }

    /// Number of invocation tokens in code position, balanced or not.
    pub fn count_candidates(&self, text: &str) -> usize {
        let code = CodeMap::scan(text);
        self.pattern
            .find_iter(text)
            .filter(|found| code.is_code(found.start()))
            .count()
    }
}

/// Iterator returned by [`CallMatcher::find_iter`].
pub struct CallSites<'m, 't> {
    pattern: &'m Regex,
    code: CodeMap,
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for CallSites<'_, 't> {
    type Item = Result<CallSite<'t>, Unmatched>;

    fn next(&mut self) -> Option<Self::Item> {
        let found = loop {
            let found = self.pattern.find_at(self.text, self.pos)?;
            if self.code.is_code(found.start()) {
                break found;
            }
            self.pos = found.end();
        };
        let start = found.start();
        let open = found.end() - 1;
        let bytes = self.text.as_bytes();

        let Some(close) = balancing_brace(bytes, open) else {
            self.pos = found.end();
            return Some(Err(Unmatched {
                start,
                kind: WarningKind::UnbalancedCallSite,
            }));
        };

        self.pos = close + 1;
        match closing_paren(bytes, close + 1) {
            Some(paren) => {
                self.pos = paren + 1;
                Some(Ok(CallSite {
                    start,
                    end: paren + 1,
                    body: &self.text[open + 1..close],
                }))
            }
            None => Some(Err(Unmatched {
                start,
                kind: WarningKind::UnclosedCall,
            })),
        }
    }
}

/// Position of the `)` that may follow the object literal, allowing
/// whitespace and one trailing comma.
fn closing_paren(bytes: &[u8], from: usize) -> Option<usize> {
    let mut i = skip_whitespace(bytes, from);
    if bytes.get(i) == Some(&b',') {
        i = skip_whitespace(bytes, i + 1);
    }
    (bytes.get(i) == Some(&b')')).then_some(i)
}

fn skip_whitespace(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .map_or(bytes.len(), |pos| from + pos)
}
