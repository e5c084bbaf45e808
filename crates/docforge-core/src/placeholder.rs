//! Placeholder grammar and tokenizer.
//!
//! A placeholder is an identifier (letters, digits, `_`) wrapped in exactly
//! one pair of braces: `{applicant_name}`. Anything else involving braces is
//! literal text, including empty braces, punctuation inside braces and
//! doubled braces such as `{{name}}`. Tokenizing never fails.

use std::collections::HashSet;

/// A slice of a template body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied to the output unchanged.
    Literal(&'a str),
    /// A placeholder name, without its braces.
    Placeholder(&'a str),
}

impl<'a> Segment<'a> {
    pub fn placeholder(&self) -> Option<&'a str> {
        match self {
            Segment::Placeholder(name) => Some(name),
            Segment::Literal(_) => None,
        }
    }
}

/// Returns true for characters allowed in a placeholder name.
pub fn is_identifier_char(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

/// Split a body into literal and placeholder segments, in order.
///
/// Literal segments are never empty and never adjacent to each other.
pub fn tokenize(body: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut cursor = 0;

    while let Some(offset) = body[cursor..].find('{') {
        let open = cursor + offset;
        match placeholder_at(body, open) {
            Some((name, end)) => {
                if literal_start < open {
                    segments.push(Segment::Literal(&body[literal_start..open]));
                }
                segments.push(Segment::Placeholder(name));
                literal_start = end;
                cursor = end;
            }
            None => cursor = open + 1,
        }
    }

    if literal_start < body.len() {
        segments.push(Segment::Literal(&body[literal_start..]));
    }

    segments
}

/// Distinct placeholder names in first-occurrence order.
pub fn extract_placeholders(body: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    tokenize(body)
        .iter()
        .filter_map(Segment::placeholder)
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Parse a placeholder whose opening brace sits at byte offset `open`.
///
/// Returns the name and the byte offset just past the closing brace.
fn placeholder_at(body: &str, open: usize) -> Option<(&str, usize)> {
    if body[..open].ends_with('{') {
        return None;
    }

    let name_start = open + 1;
    let rest = &body[name_start..];
    let name_len = rest
        .char_indices()
        .find(|(_, ch)| !is_identifier_char(*ch))
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());
    if name_len == 0 {
        return None;
    }

    let close = name_start + name_len;
    if !body[close..].starts_with('}') || body[close + 1..].starts_with('}') {
        return None;
    }

    Some((&body[name_start..close], close + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_first_occurrence_order_without_repeats() {
        let body = "{b} and {a}, again {b} then {c_1}";
        assert_eq!(extract_placeholders(body), vec!["b", "a", "c_1"]);
    }

    #[test]
    fn body_without_placeholders_yields_nothing() {
        assert!(extract_placeholders("").is_empty());
        assert!(extract_placeholders("plain text only").is_empty());
    }

    #[test]
    fn malformed_braces_stay_literal() {
        let body = "{} {not a field} {a-b} {{name}} {x}} {{y} { z } {";
        assert!(extract_placeholders(body).is_empty());
        assert_eq!(tokenize(body), vec![Segment::Literal(body)]);
    }

    #[test]
    fn doubled_braces_next_to_real_placeholder() {
        let body = "Note: {{not a field}} then {name}";
        assert_eq!(
            tokenize(body),
            vec![
                Segment::Literal("Note: {{not a field}} then "),
                Segment::Placeholder("name"),
            ]
        );
    }

    #[test]
    fn adjacent_placeholders_split_cleanly() {
        assert_eq!(
            tokenize("{a}{b}"),
            vec![Segment::Placeholder("a"), Segment::Placeholder("b")]
        );
    }

    #[test]
    fn accepts_unicode_identifiers() {
        assert_eq!(extract_placeholders("申请人：{姓名}。"), vec!["姓名"]);
    }
}
