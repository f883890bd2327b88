//! Minimal JS/TS lexing helpers.
//!
//! Not a tokenizer: these functions only know enough about string literals,
//! template literals and comments to keep braces and commas inside them from
//! being mistaken for structure. Regex literals are not recognised.
//!
//! All positions are byte offsets. Every delimiter looked at is ASCII, so an
//! offset returned here is always a valid `str` char boundary.

use std::ops::{ControlFlow, Range};

/// Index just past the string or template literal opening at `start`.
///
/// Returns `None` if `start` is not a quote character or the literal is never
/// closed.
pub(crate) fn literal_end(bytes: &[u8], start: usize) -> Option<usize> {
    match *bytes.get(start)? {
        quote @ (b'"' | b'\'') => skip_quoted(bytes, start, quote),
        b'`' => skip_template(bytes, start),
        _ => None,
    }
}

/// Byte ranges of `text` that are not code: string literals, template
/// literal text and comments. Interpolations inside templates are code.
///
/// Unlike [`balancing_brace`], this scan never gives up. A quote that is
/// not closed on its own line (an apostrophe in JSX text) is treated as a
/// lone character; an unclosed template or block comment runs to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CodeMap {
    literals: Vec<Range<usize>>,
}

impl CodeMap {
    pub(crate) fn scan(text: &str) -> Self {
        let mut literals = Vec::new();
        scan_code(text.as_bytes(), 0, false, &mut literals);
        Self { literals }
    }

    /// Whether the byte at `pos` lies outside every literal and comment.
    pub(crate) fn is_code(&self, pos: usize) -> bool {
        let idx = self.literals.partition_point(|range| range.end <= pos);
        self.literals
            .get(idx)
            .is_none_or(|range| range.start > pos)
    }
}

/// Index of the `}` balancing the `{` at `open`.
///
/// Depth starts at 1 on the opening brace; braces inside strings, template
/// literal text and comments are ignored, braces inside `${ ... }`
/// interpolations are counted.
pub(crate) fn balancing_brace(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    walk_code(bytes, open, |i, byte| match byte {
        b'{' => {
            depth += 1;
            ControlFlow::Continue(())
        }
        b'}' => {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                ControlFlow::Break(i)
            } else {
                ControlFlow::Continue(())
            }
        }
        _ => ControlFlow::Continue(()),
    })
}

/// Splits `text` at commas that are not nested inside brackets, parentheses,
/// braces, strings or comments. Empty segments are dropped.
pub(crate) fn split_top_level(text: &str) -> Vec<&str> {
    let mut depth = 0usize;
    let mut from = 0;
    let mut segments = Vec::new();

    walk_code::<()>(text.as_bytes(), 0, |i, byte| {
        match byte {
            b'{' | b'(' | b'[' => depth += 1,
            b'}' | b')' | b']' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                segments.push(&text[from..i]);
                from = i + 1;
            }
            _ => {}
        }
        ControlFlow::Continue(())
    });
    segments.push(&text[from..]);

    segments
        .into_iter()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Index of the first `:` outside nested structure and literals.
pub(crate) fn top_level_colon(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    walk_code(text.as_bytes(), 0, |i, byte| {
        match byte {
            b'{' | b'(' | b'[' => depth += 1,
            b'}' | b')' | b']' => depth = depth.saturating_sub(1),
            b':' if depth == 0 => return ControlFlow::Break(i),
            _ => {}
        }
        ControlFlow::Continue(())
    })
}

/// Walks code starting at `start`, handing every byte that is outside string
/// literals, template literal text and comments to `visit`.
///
/// Returns the value `visit` breaks with, or `None` at end of input or on an
/// unterminated literal or block comment.
fn walk_code<B>(
    bytes: &[u8],
    start: usize,
    mut visit: impl FnMut(usize, u8) -> ControlFlow<B>,
) -> Option<B> {
    let mut i = start;
    while i < bytes.len() {
        i = match bytes[i] {
            quote @ (b'"' | b'\'') => skip_quoted(bytes, i, quote)?,
            b'`' => skip_template(bytes, i)?,
            b'/' if matches!(bytes.get(i + 1), Some(b'/' | b'*')) => skip_comment(bytes, i)?,
            byte => {
                if let ControlFlow::Break(found) = visit(i, byte) {
                    return Some(found);
                }
                i + 1
            }
        };
    }
    None
}

/// Skips a single- or double-quoted string. `None` if a raw newline or the
/// end of input comes first.
fn skip_quoted(bytes: &[u8], start: usize, quote: u8) -> Option<usize> {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' => return None,
            byte if byte == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}

fn skip_template(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'`' => return Some(i + 1),
            b'$' if bytes.get(i + 1) == Some(&b'{') => i = balancing_brace(bytes, i + 1)? + 1,
            _ => i += 1,
        }
    }
    None
}

/// Records literal ranges from `start`. Inside an interpolation, returns
/// just past the `}` that closes it; otherwise returns the input length.
fn scan_code(
    bytes: &[u8],
    start: usize,
    interpolation: bool,
    literals: &mut Vec<Range<usize>>,
) -> usize {
    let mut depth = 0usize;
    let mut i = start;
    while i < bytes.len() {
        i = match bytes[i] {
            quote @ (b'"' | b'\'') => match skip_quoted(bytes, i, quote) {
                Some(end) => {
                    literals.push(i..end);
                    end
                }
                None => i + 1,
            },
            b'`' => scan_template(bytes, i, literals),
            b'/' if matches!(bytes.get(i + 1), Some(b'/' | b'*')) => {
                let end = skip_comment(bytes, i).unwrap_or(bytes.len());
                literals.push(i..end);
                end
            }
            b'{' => {
                depth += 1;
                i + 1
            }
            b'}' if interpolation && depth == 0 => return i + 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                i + 1
            }
            _ => i + 1,
        };
    }
    bytes.len()
}

fn scan_template(bytes: &[u8], start: usize, literals: &mut Vec<Range<usize>>) -> usize {
    let mut text_start = start;
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'`' => {
                literals.push(text_start..i + 1);
                return i + 1;
            }
            b'$' if bytes.get(i + 1) == Some(&b'{') => {
                literals.push(text_start..i + 2);
                i = scan_code(bytes, i + 2, true, literals);
                // the closing `}` belongs to the template text
                text_start = i - 1;
            }
            _ => i += 1,
        }
    }
    literals.push(text_start..bytes.len());
    bytes.len()
}

fn skip_comment(bytes: &[u8], start: usize) -> Option<usize> {
    let rest = &bytes[start + 2..];
    if bytes[start + 1] == b'/' {
        let newline = rest.iter().position(|&b| b == b'\n');
        Some(newline.map_or(bytes.len(), |pos| start + 2 + pos))
    } else {
        rest.windows(2)
            .position(|window| window == b"*/")
            .map(|pos| start + 2 + pos + 2)
    }
}
