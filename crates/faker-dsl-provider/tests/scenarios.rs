/*
 * scenarios.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * End-to-end rendering against the built-in provider.
 */

use faker_dsl::{DslValue, Engine, to_response_body};
use faker_dsl_provider::Faker;
use pretty_assertions::assert_eq;
use serde_json::Value as JsonValue;

fn render(template: &str) -> DslValue {
    let faker = Faker::seeded(2025);
    Engine::new(&faker).render(template)
}

#[test]
fn test_fixed_range_int_is_raw_number() {
    assert_eq!(
        render(r#"{{number.int({"min": 100, "max": 100})}}"#),
        DslValue::int(100)
    );
}

#[test]
fn test_interpolated_first_name() {
    let result = render("Hello {{name.firstName}}!");
    let text = result.as_str().unwrap();
    assert!(text.starts_with("Hello "));
    assert!(text.ends_with('!'));
    assert!(text.len() > "Hello !".len());
}

#[test]
fn test_multiplied_emails() {
    let result = render("{{internet.email}}*3");
    let emails = result.as_list().unwrap();
    assert_eq!(emails.len(), 3);
    for email in emails {
        assert!(email.as_str().unwrap().contains('@'), "{:?}", email);
    }
}

#[test]
fn test_unknown_module() {
    assert_eq!(
        render("{{nonExistent.module}}"),
        DslValue::string(
            "[ERROR: Invalid module or path: \"nonExistent.module\" (failed at \"nonExistent\")]"
        )
    );
}

#[test]
fn test_bad_arguments() {
    let result = render("{{lorem.words(badArg)}}");
    assert!(
        result
            .as_str()
            .unwrap()
            .contains("[ERROR: Failed to parse JSON arguments"),
        "{:?}",
        result
    );
}

#[test]
fn test_plain_text_unchanged() {
    assert_eq!(render("plain text"), DslValue::string("plain text"));
}

#[test]
fn test_single_multiplier_is_sequence() {
    let result = render("{{name.firstName}}*1");
    assert_eq!(result.as_list().map(<[DslValue]>::len), Some(1));
    assert!(matches!(render("{{name.firstName}}"), DslValue::String(_)));
}

#[test]
fn test_typed_raw_values() {
    assert!(matches!(render("{{datatype.boolean}}"), DslValue::Bool(_)));
    assert!(matches!(render("{{number.float}}"), DslValue::Number(_)));
    assert!(matches!(render("{{date.past}}"), DslValue::Date(_)));
    assert!(matches!(render("{{definitions.lorem.words}}"), DslValue::List(_)));
}

#[test]
fn test_trailing_segment_error() {
    assert_eq!(
        render("{{name.nonExistentMethod}}"),
        DslValue::string(
            "[ERROR: Invalid module or path: \"name.nonExistentMethod\" (failed at \"nonExistentMethod\")]"
        )
    );
}

#[test]
fn test_property_with_empty_parentheses() {
    assert_eq!(
        render("{{definitions.person.firstName()}}"),
        DslValue::string(
            "[ERROR: Property \"definitions.person.firstName\" does not accept arguments. Found: ()]"
        )
    );
}

#[test]
fn test_array_element_receives_whole_array() {
    let result = render(r#"{{helpers.arrayElement(["red", "green", "blue"])}}"#);
    assert!(["red", "green", "blue"].contains(&result.as_str().unwrap()));
}

#[test]
fn test_double_escaped_arguments() {
    let result = render(r#"{{helpers.arrayElement([\"red\", \"green\"])}}"#);
    assert!(["red", "green"].contains(&result.as_str().unwrap()));
}

#[test]
fn test_date_between_positional() {
    let result = render(r#"Joined {{date.between(["2020-01-01", "2020-01-02"])}}"#);
    let text = result.as_str().unwrap();
    assert!(text.starts_with("Joined 2020-01-0"), "{}", text);
    assert!(text.ends_with('Z'), "{}", text);
}

#[test]
fn test_invocation_error_marker() {
    assert_eq!(
        render(r#"{{number.int({"min": 5, "max": 1})}}"#),
        DslValue::string(
            "[ERROR: Error executing faker function \"number.int\": Max 1 should be greater than min 5.]"
        )
    );
}

#[test]
fn test_stringified_document_response() {
    let template = r#"{{JSON.stringify({"id": "{{string.uuid}}", "age": {{number.int({"min": 30, "max": 30})}}, "tags": {{lorem.word}}*2})}}"#;
    let body = to_response_body(&render(template));
    assert_eq!(body["age"], JsonValue::from(30));
    assert_eq!(body["id"].as_str().map(str::len), Some(36));
    assert_eq!(body["tags"].as_array().map(Vec::len), Some(2));
}

fn invocation_marker(path: &str, message: &str) -> DslValue {
    DslValue::string(format!(
        "[ERROR: Error executing faker function \"{}\": {}]",
        path, message
    ))
}

#[test]
fn test_float_range_too_wide_is_marker() {
    let template = r#"{{number.float({"min": -1e308, "max": 1e308})}}"#;
    assert_eq!(
        render(template),
        invocation_marker("number.float", "The distance between min and max is too large.")
    );

    let interpolated = render(&format!("x {} y", template));
    assert_eq!(
        interpolated.as_str(),
        Some(
            "x [ERROR: Error executing faker function \"number.float\": \
             The distance between min and max is too large.] y"
        )
    );
}

#[test]
fn test_price_range_too_wide_is_marker() {
    assert_eq!(
        render(r#"{{commerce.price({"min": -1e308, "max": 1e308})}}"#),
        invocation_marker("commerce.price", "The distance between min and max is too large.")
    );
}

#[test]
fn test_price_decimals_limit_is_marker() {
    assert_eq!(
        render(r#"{{commerce.price({"dec": 100000})}}"#),
        invocation_marker("commerce.price", "dec should be a number between 0 and 20.")
    );
}

#[test]
fn test_weighted_total_overflow_is_marker() {
    let template = r#"{{helpers.weightedArrayElement([{"weight": 1e308, "value": "a"}, {"weight": 1e308, "value": "b"}])}}"#;
    assert_eq!(
        render(template),
        invocation_marker(
            "helpers.weightedArrayElement",
            "weightedArrayElement expects weights with a finite sum"
        )
    );
}

#[test]
fn test_oversized_lengths_are_markers() {
    assert_eq!(
        render("{{string.alpha(1000000000000000)}}"),
        invocation_marker(
            "string.alpha",
            "The length 1000000000000000 exceeds the maximum of 100000."
        )
    );
    assert_eq!(
        render("{{lorem.words(1000000000000000)}}"),
        invocation_marker(
            "lorem.words",
            "The count 1000000000000000 exceeds the maximum of 100000."
        )
    );
}
