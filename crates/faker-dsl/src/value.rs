/*
 * value.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Values produced by capabilities and by the renderer.
//!
//! [`DslValue`] is a JSON value extended with a date variant. Dates behave
//! like the other scalar types when a whole template is a single directive,
//! but they have their own textual form when interpolated into surrounding
//! text.

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde_json::{Map as JsonMap, Number, Value as JsonValue};

/// A value that can result from evaluating a directive.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DslValue {
    /// A null value.
    #[default]
    Null,

    /// A boolean value.
    Bool(bool),

    /// A numeric value.
    Number(Number),

    /// A string value.
    String(String),

    /// A point in time.
    Date(DateTime<Utc>),

    /// A list of values. Multiplier sequences are lists.
    List(Vec<DslValue>),

    /// An ordered map of string keys to values.
    Map(IndexMap<String, DslValue>),
}

impl DslValue {
    /// Create a string value.
    pub fn string(value: impl Into<String>) -> Self {
        DslValue::String(value.into())
    }

    /// Create an integer value.
    pub fn int(value: i64) -> Self {
        DslValue::Number(value.into())
    }

    /// Create a floating point value.
    ///
    /// Integral floats are stored as integers so `3.0` encodes as `3`.
    /// Non-finite values become `Null`, matching JSON encoders.
    pub fn float(value: f64) -> Self {
        if value.fract() == 0.0 && value.abs() < MAX_SAFE_INTEGER {
            return DslValue::int(value as i64);
        }
        Number::from_f64(value).map_or(DslValue::Null, DslValue::Number)
    }

    /// Borrow the string content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DslValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the items, if this is a list.
    pub fn as_list(&self) -> Option<&[DslValue]> {
        match self {
            DslValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Short name of the value's type, used in log output.
    pub fn type_name(&self) -> &'static str {
        match self {
            DslValue::Null => "null",
            DslValue::Bool(_) => "boolean",
            DslValue::Number(_) => "number",
            DslValue::String(_) => "string",
            DslValue::Date(_) => "date",
            DslValue::List(_) => "array",
            DslValue::Map(_) => "object",
        }
    }

    /// Convert to a plain JSON value. Dates become ISO-8601 strings.
    pub fn to_json(&self) -> JsonValue {
        match self {
            DslValue::Null => JsonValue::Null,
            DslValue::Bool(b) => JsonValue::Bool(*b),
            DslValue::Number(n) => JsonValue::Number(n.clone()),
            DslValue::String(s) => JsonValue::String(s.clone()),
            DslValue::Date(d) => JsonValue::String(iso_8601(d)),
            DslValue::List(items) => {
                JsonValue::Array(items.iter().map(DslValue::to_json).collect())
            }
            DslValue::Map(entries) => {
                let map: JsonMap<String, JsonValue> = entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect();
                JsonValue::Object(map)
            }
        }
    }

    /// Compact JSON encoding, key order preserved.
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    /// The token emitted for this value inside interpolated text.
    ///
    /// - String: verbatim, no quoting
    /// - Date: ISO-8601, unquoted
    /// - Everything else: compact JSON
    pub fn to_inline_text(&self) -> String {
        match self {
            DslValue::String(s) => s.clone(),
            DslValue::Date(d) => iso_8601(d),
            other => other.to_json_string(),
        }
    }
}

/// Largest integer a double represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Format a date as `YYYY-MM-DDTHH:MM:SS.sssZ`.
pub fn iso_8601(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<JsonValue> for DslValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => DslValue::Null,
            JsonValue::Bool(b) => DslValue::Bool(b),
            JsonValue::Number(n) => DslValue::Number(n),
            JsonValue::String(s) => DslValue::String(s),
            JsonValue::Array(items) => {
                DslValue::List(items.into_iter().map(Into::into).collect())
            }
            JsonValue::Object(map) => {
                DslValue::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<&JsonValue> for DslValue {
    fn from(value: &JsonValue) -> Self {
        value.clone().into()
    }
}

impl From<String> for DslValue {
    fn from(value: String) -> Self {
        DslValue::String(value)
    }
}

impl From<&str> for DslValue {
    fn from(value: &str) -> Self {
        DslValue::String(value.to_string())
    }
}

impl From<bool> for DslValue {
    fn from(value: bool) -> Self {
        DslValue::Bool(value)
    }
}

impl From<i64> for DslValue {
    fn from(value: i64) -> Self {
        DslValue::int(value)
    }
}

impl From<f64> for DslValue {
    fn from(value: f64) -> Self {
        DslValue::float(value)
    }
}

impl From<DateTime<Utc>> for DslValue {
    fn from(value: DateTime<Utc>) -> Self {
        DslValue::Date(value)
    }
}

impl From<Vec<DslValue>> for DslValue {
    fn from(value: Vec<DslValue>) -> Self {
        DslValue::List(value)
    }
}

impl From<Vec<&str>> for DslValue {
    fn from(value: Vec<&str>) -> Self {
        DslValue::List(value.into_iter().map(DslValue::from).collect())
    }
}
