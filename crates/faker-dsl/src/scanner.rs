/*
 * scanner.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Locating directive spans inside template text.
//!
//! A directive span is `{{<content>}}`, optionally followed by whitespace and
//! a `*<digits>` multiplier suffix. Content is the shortest non-empty run of
//! characters (without line breaks) that is followed by `}}`, so directives
//! cannot contain `}}` themselves. Spans are reported left to right and never
//! overlap.

const OPEN: &str = "{{";
const CLOSE: &str = "}}";
const STRINGIFY_OPEN: &str = "{{JSON.stringify(";
const STRINGIFY_CLOSE: &str = ")}}";

/// The `*N` suffix of a directive span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Multiplier<'t> {
    digits: &'t str,
}

impl<'t> Multiplier<'t> {
    /// The digit text as written.
    pub fn as_str(&self) -> &'t str {
        self.digits
    }

    /// The repetition count, or `None` if it does not fit in a `usize`.
    pub fn count(&self) -> Option<usize> {
        self.digits.parse().ok()
    }
}

/// One directive span found in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectiveSpan<'t> {
    /// Byte offset of the opening `{{`.
    pub start: usize,

    /// Byte offset just past the span, including any multiplier suffix.
    pub end: usize,

    /// The text between `{{` and `}}`.
    pub content: &'t str,

    /// The multiplier suffix, if present.
    pub multiplier: Option<Multiplier<'t>>,
}

impl DirectiveSpan<'_> {
    /// Whether this span covers all of `template`.
    pub fn covers(&self, template: &str) -> bool {
        self.start == 0 && self.end == template.len()
    }
}

/// Find all directive spans in `template`, left to right.
pub fn scan(template: &str) -> Vec<DirectiveSpan<'_>> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    while let Some(found) = template[cursor..].find(OPEN) {
        let start = cursor + found;
        match span_at(template, start) {
            Some(span) => {
                cursor = span.end;
                spans.push(span);
            }
            // No closing braces on this line: retry from the next character
            None => cursor = start + 1,
        }
    }

    spans
}

/// Try to read a directive span whose `{{` sits at `start`.
fn span_at(template: &str, start: usize) -> Option<DirectiveSpan<'_>> {
    let content_start = start + OPEN.len();
    let rest = &template[content_start..];

    let mut content_len = None;
    for (offset, ch) in rest.char_indices() {
        if is_line_terminator(ch) {
            return None;
        }
        let after = offset + ch.len_utf8();
        if rest[after..].starts_with(CLOSE) {
            content_len = Some(after);
            break;
        }
    }
    let content_end = content_start + content_len?;
    let close_end = content_end + CLOSE.len();

    let (multiplier, end) = match scan_multiplier(template, close_end) {
        Some((multiplier, end)) => (Some(multiplier), end),
        None => (None, close_end),
    };

    Some(DirectiveSpan {
        start,
        end,
        content: &template[content_start..content_end],
        multiplier,
    })
}

/// Read `\s*\*\d+` starting at `from`, returning the suffix and its end.
fn scan_multiplier(template: &str, from: usize) -> Option<(Multiplier<'_>, usize)> {
    let rest = &template[from..];
    let trimmed = rest.trim_start();
    let after_star = trimmed.strip_prefix('*')?;

    let digit_count = after_star.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return None;
    }

    let digits_start = from + (rest.len() - trimmed.len()) + 1;
    let digits_end = digits_start + digit_count;
    Some((
        Multiplier {
            digits: &template[digits_start..digits_end],
        },
        digits_end,
    ))
}

fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Match the whole-template `{{JSON.stringify(<INNER>)}}` form.
///
/// Returns the inner text, which may itself contain directives and literal
/// braces. Unlike directive spans, the inner text may span several lines,
/// so a pretty-printed JSON document can be wrapped as a whole.
pub fn match_stringify(template: &str) -> Option<&str> {
    let inner = template
        .strip_prefix(STRINGIFY_OPEN)?
        .strip_suffix(STRINGIFY_CLOSE)?;
    (!inner.is_empty()).then_some(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn contents(template: &str) -> Vec<&str> {
        scan(template).iter().map(|s| s.content).collect()
    }

    #[test]
    fn test_no_directives() {
        assert!(scan("plain text").is_empty());
        assert!(scan("").is_empty());
        assert!(scan("{ { not } }").is_empty());
    }

    #[test]
    fn test_single_directive_covers_template() {
        let template = "{{name.firstName}}";
        let spans = scan(template);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "name.firstName");
        assert!(spans[0].covers(template));
        assert_eq!(spans[0].multiplier, None);
    }

    #[test]
    fn test_offsets_with_surrounding_text() {
        let template = "Hello {{name.firstName}}!";
        let spans = scan(template);
        assert_eq!(spans.len(), 1);
        assert_eq!((spans[0].start, spans[0].end), (6, 24));
        assert!(!spans[0].covers(template));
    }

    #[test]
    fn test_multiple_directives_in_order() {
        assert_eq!(
            contents("{{a.b}} and {{c.d(1)}} then {{e}}"),
            ["a.b", "c.d(1)", "e"]
        );
    }

    #[test]
    fn test_multiplier_suffix() {
        let template = "{{internet.email}}*3";
        let spans = scan(template);
        assert_eq!(spans[0].multiplier.map(|m| m.as_str()), Some("3"));
        assert_eq!(spans[0].multiplier.and_then(|m| m.count()), Some(3));
        assert!(spans[0].covers(template));
    }

    #[test]
    fn test_multiplier_allows_leading_whitespace() {
        let template = "{{number.int}} *12 rest";
        let spans = scan(template);
        assert_eq!(spans[0].multiplier.and_then(|m| m.count()), Some(12));
        assert_eq!(&template[spans[0].end..], " rest");
    }

    #[test]
    fn test_star_without_digits_is_literal() {
        let template = "{{number.int}}*x";
        let spans = scan(template);
        assert_eq!(spans[0].multiplier, None);
        assert_eq!(&template[spans[0].end..], "*x");
    }

    #[test]
    fn test_overflowing_multiplier_keeps_digits() {
        let spans = scan("{{a}}*99999999999999999999999");
        let multiplier = spans[0].multiplier.expect("suffix should be scanned");
        assert_eq!(multiplier.count(), None);
        assert_eq!(multiplier.as_str(), "99999999999999999999999");
    }

    #[test]
    fn test_content_stops_at_first_close() {
        assert_eq!(
            contents(r#"{{number.int({"min": 1, "max": 2})}}"#),
            [r#"number.int({"min": 1, "max": 2})"#]
        );
        // Nested objects close early; the remainder is literal text
        let template = r#"{{f({"a":{"b":1}})}}"#;
        let spans = scan(template);
        assert_eq!(spans[0].content, r#"f({"a":{"b":1"#);
        assert_eq!(&template[spans[0].end..], ")}}");
    }

    #[test]
    fn test_line_break_prevents_span() {
        assert!(scan("{{name.\nfirstName}}").is_empty());
        assert_eq!(contents("{{broken\n {{ok}}"), ["ok"]);
    }

    #[test]
    fn test_empty_braces_are_not_a_directive() {
        // `{{}}}` has content "}" because content must be non-empty
        assert_eq!(contents("{{}}}"), ["}"]);
        assert!(scan("{{}}").is_empty());
    }

    #[test]
    fn test_triple_brace() {
        assert_eq!(contents("{{{a}}"), ["{a"]);
    }

    #[test]
    fn test_multibyte_text() {
        let template = "héllo {{name.firstName}} — ñ";
        let spans = scan(template);
        assert_eq!(spans[0].content, "name.firstName");
        assert_eq!(&template[spans[0].end..], " — ñ");
    }

    #[test]
    fn test_match_stringify() {
        assert_eq!(
            match_stringify(r#"{{JSON.stringify({"a": "{{name.firstName}}"})}}"#),
            Some(r#"{"a": "{{name.firstName}}"}"#)
        );
        assert_eq!(match_stringify("{{JSON.stringify(\n[1,\n2]\n)}}"), Some("\n[1,\n2]\n"));
        assert_eq!(match_stringify("{{JSON.stringify()}}"), None);
        assert_eq!(match_stringify("x{{JSON.stringify(1)}}"), None);
        assert_eq!(match_stringify("{{JSON.stringify(1)}} "), None);
    }
}
