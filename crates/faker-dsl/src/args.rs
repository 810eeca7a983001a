/*
 * args.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Argument text decoding.
//!
//! The text between a directive's parentheses is a single JSON value. An
//! array is spread into positional arguments, except for capabilities on the
//! spread-exempt list, which take the whole array as their one argument.
//! Anything else becomes a one-element argument list.
//!
//! Templates that went through an extra layer of string escaping upstream
//! arrive with `\\"` and `[\"...\"]` artifacts. [`repair_escaping`] fixes
//! exactly those patterns before decoding, and nothing else.

use crate::error::{DirectiveError, DirectiveResult};
use crate::parser::CapabilityPath;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value as JsonValue;

/// `\",` followed by optional whitespace and `\"` between array items.
static ESCAPED_ITEM_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\\",\s*\\""#).expect("valid separator pattern"));

/// Normalize the double-escaping artifacts seen in argument text.
///
/// - `\\"` becomes `"`
/// - `[\"` becomes `["` and `\"]` becomes `"]`
/// - `\", \"` becomes `", "`
pub fn repair_escaping(args: &str) -> String {
    let repaired = args
        .replace(r#"\\""#, "\"")
        .replace(r#"[\""#, "[\"")
        .replace(r#"\"]"#, "\"]");
    ESCAPED_ITEM_SEPARATOR
        .replace_all(&repaired, "\", \"")
        .into_owned()
}

/// Decode directive argument text into a positional argument list.
///
/// `args` is `None` when the directive had no parentheses; that and
/// whitespace-only text both yield an empty list.
pub fn parse_arguments(
    args: Option<&str>,
    path: &CapabilityPath<'_>,
    spread_exempt: &[String],
) -> DirectiveResult<Vec<JsonValue>> {
    let Some(text) = args else {
        return Ok(Vec::new());
    };
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let repaired = repair_escaping(text);
    let decoded: JsonValue =
        serde_json::from_str(&repaired).map_err(|e| DirectiveError::ArgumentSyntaxError {
            path: path.to_string(),
            args: text.to_string(),
            cause: e.to_string(),
        })?;

    Ok(match decoded {
        JsonValue::Array(items) => {
            if spread_exempt.iter().any(|p| p == path.as_str()) {
                vec![JsonValue::Array(items)]
            } else {
                items
            }
        }
        other => vec![other],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::EngineOptions;
    use crate::parser::parse_directive;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(content: &str) -> DirectiveResult<Vec<JsonValue>> {
        let directive = parse_directive(content).expect("directive should parse");
        let options = EngineOptions::default();
        parse_arguments(directive.args, &directive.path, &options.spread_exempt)
    }

    #[test]
    fn test_no_parentheses() {
        assert_eq!(parse("lorem.words").unwrap(), Vec::<JsonValue>::new());
    }

    #[test]
    fn test_empty_and_blank_parentheses() {
        assert!(parse("date.past()").unwrap().is_empty());
        assert!(parse("date.past(  )").unwrap().is_empty());
    }

    #[test]
    fn test_scalar_becomes_single_argument() {
        assert_eq!(parse("lorem.words(3)").unwrap(), vec![json!(3)]);
        assert_eq!(parse(r#"lorem.word("x")"#).unwrap(), vec![json!("x")]);
    }

    #[test]
    fn test_object_becomes_single_argument() {
        assert_eq!(
            parse(r#"number.int({"min": 1, "max": 2})"#).unwrap(),
            vec![json!({"min": 1, "max": 2})]
        );
    }

    #[test]
    fn test_array_is_spread() {
        assert_eq!(
            parse(r#"date.between(["2020-01-01", "2021-01-01"])"#).unwrap(),
            vec![json!("2020-01-01"), json!("2021-01-01")]
        );
    }

    #[test]
    fn test_exempt_capabilities_keep_array() {
        for path in [
            "helpers.arrayElement",
            "helpers.arrayElements",
            "helpers.weightedArrayElement",
        ] {
            let args = parse(&format!(r#"{}(["a", "b"])"#, path)).unwrap();
            assert_eq!(args, vec![json!(["a", "b"])], "{}", path);
        }
    }

    #[test]
    fn test_custom_exempt_list() {
        let directive = parse_directive("my.pick([1, 2])").unwrap();
        let exempt = vec!["my.pick".to_string()];
        assert_eq!(
            parse_arguments(directive.args, &directive.path, &exempt).unwrap(),
            vec![json!([1, 2])]
        );
    }

    #[test]
    fn test_syntax_error() {
        let err = parse("lorem.words(badArg)").unwrap_err();
        let message = err.to_string();
        assert!(
            message.starts_with("Failed to parse JSON arguments for \"lorem.words\": "),
            "{}",
            message
        );
        assert!(message.ends_with(". Args: badArg"), "{}", message);
    }

    #[test]
    fn test_repair_double_escaped_quotes() {
        assert_eq!(
            repair_escaping(r#"{\\"min\\": 1, \\"max\\": 5}"#),
            r#"{"min": 1, "max": 5}"#
        );
    }

    #[test]
    fn test_repair_escaped_array_literal() {
        assert_eq!(repair_escaping(r#"[\"a\", \"b\"]"#), r#"["a", "b"]"#);
        assert_eq!(repair_escaping(r#"[\"a\",\"b\"]"#), r#"["a", "b"]"#);
        assert_eq!(repair_escaping(r#"[\"only\"]"#), r#"["only"]"#);
    }

    #[test]
    fn test_repair_leaves_valid_json_alone() {
        let valid = r#"{"a": ["x", "y"], "b": "say \"hi\""}"#;
        assert_eq!(repair_escaping(valid), valid);
    }

    #[test]
    fn test_repaired_array_decodes() {
        assert_eq!(
            parse(r#"helpers.arrayElement([\"red\", \"blue\"])"#).unwrap(),
            vec![json!(["red", "blue"])]
        );
    }
}
