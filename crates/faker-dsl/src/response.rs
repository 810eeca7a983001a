/*
 * response.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Converting a render result into a JSON response body.
//!
//! Render results that are themselves JSON text (e.g. the output of a
//! stringify wrapper) are decoded so the body carries the document rather
//! than a quoted string. A string wrapped in quotes is decoded twice, which
//! unwraps one extra level of encoding added upstream.

use crate::value::DslValue;
use serde_json::Value as JsonValue;

/// Turn a rendered value into the JSON body a mock endpoint would return.
pub fn to_response_body(value: &DslValue) -> JsonValue {
    let DslValue::String(text) = value else {
        return value.to_json();
    };

    if is_wrapped(text, '"', '"') {
        return decode_quoted(text);
    }
    if is_wrapped(text, '{', '}') || is_wrapped(text, '[', ']') {
        return serde_json::from_str(text).unwrap_or_else(|_| JsonValue::String(text.clone()));
    }
    JsonValue::String(text.clone())
}

fn is_wrapped(text: &str, open: char, close: char) -> bool {
    text.len() >= 2 && text.starts_with(open) && text.ends_with(close)
}

fn decode_quoted(text: &str) -> JsonValue {
    let once: JsonValue = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(_) => return JsonValue::String(text.to_string()),
    };
    match &once {
        JsonValue::String(inner) => serde_json::from_str(inner).unwrap_or(once),
        _ => once,
    }
}
