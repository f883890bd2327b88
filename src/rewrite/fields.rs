//! Field extraction from a call's object literal.

use std::fmt;

use super::lexer::{literal_end, split_top_level, top_level_colon};
use super::warning::WarningKind;

const TITLE: &str = "title";
const DESCRIPTION: &str = "description";
const VARIANT: &str = "variant";
const DESTRUCTIVE: &str = "destructive";

/// A string literal as written in the source.
///
/// Bodies are kept raw: escapes are never decoded, so rendering a value
/// reproduces the original literal byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// `'...'` or `"..."`.
    Quoted { quote: char, raw: String },
    /// `` `...` ``, interpolations included.
    Template { raw: String },
}

impl FieldValue {
    /// Parse `text` as exactly one string or template literal.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let end = literal_end(text.as_bytes(), 0)?;
        if end != text.len() {
            return None;
        }

        let raw = text[1..end - 1].to_string();
        match text.as_bytes()[0] {
            b'`' => Some(FieldValue::Template { raw }),
            quote => Some(FieldValue::Quoted {
                quote: quote as char,
                raw,
            }),
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            FieldValue::Quoted { raw, .. } | FieldValue::Template { raw } => raw,
        }
    }

    pub fn is_template(&self) -> bool {
        matches!(self, FieldValue::Template { .. })
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Quoted { quote, raw } => write!(f, "{quote}{raw}{quote}"),
            FieldValue::Template { raw } => write!(f, "`{raw}`"),
        }
    }
}

/// The content of one notification call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub title: Option<FieldValue>,
    pub description: Option<FieldValue>,
    pub is_destructive: bool,
}

/// One top-level entry of an object literal.
#[derive(Debug, PartialEq, Eq)]
enum Property<'a> {
    KeyValue { key: &'a str, value: &'a str },
    Shorthand(&'a str),
    Spread,
}

impl<'a> Property<'a> {
    fn parse(segment: &'a str) -> Self {
        if segment.starts_with("...") {
            return Property::Spread;
        }
        match top_level_colon(segment) {
            Some(colon) => Property::KeyValue {
                key: unquote_key(segment[..colon].trim()),
                value: segment[colon + 1..].trim(),
            },
            None => Property::Shorthand(segment),
        }
    }
}

fn unquote_key(key: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = key
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    key
}

/// Extract `title`, `description` and `variant` from a call body.
///
/// A field that occurs more than once keeps its first template-literal value
/// if it has one, otherwise its first quoted value. Fails when a recognised
/// field is not a single literal, when the object spreads another object, or
/// when neither title nor description is present.
pub fn extract_fields(body: &str) -> Result<ExtractedFields, WarningKind> {
    let mut title = None;
    let mut description = None;
    let mut variant = None;

    for segment in split_top_level(body) {
        let (key, value) = match Property::parse(segment) {
            Property::Spread => return Err(WarningKind::SpreadArgument),
            Property::Shorthand(name) => (name, None),
            Property::KeyValue { key, value } => (key, Some(value)),
        };

        let slot = match key {
            TITLE => &mut title,
            DESCRIPTION => &mut description,
            VARIANT => &mut variant,
            _ => continue,
        };

        let Some(parsed) = value.and_then(FieldValue::parse) else {
            return Err(WarningKind::NonLiteralField {
                field: key.to_string(),
            });
        };
        merge(slot, parsed);
    }

    if title.is_none() && description.is_none() {
        return Err(WarningKind::AmbiguousFields);
    }

    Ok(ExtractedFields {
        title,
        description,
        is_destructive: variant.is_some_and(|value: FieldValue| value.raw() == DESTRUCTIVE),
    })
}

fn merge(slot: &mut Option<FieldValue>, value: FieldValue) {
    match slot {
        None => *slot = Some(value),
        Some(existing) if !existing.is_template() && value.is_template() => *existing = value,
        Some(_) => {}
    }
}
