/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Reading capability arguments.
//!
//! Most capabilities accept either a bare number (a maximum, a count, a
//! length) or an options object such as `{"min": 1, "max": 5}`. These
//! helpers decode both forms and report bad input as [`InvocationError`]s.

use crate::random::Random;
use chrono::{DateTime, NaiveDate, Utc};
use faker_dsl::{DslValue, InvocationError};
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Result of a capability function.
pub type CapResult = Result<DslValue, InvocationError>;

/// Largest length or count a capability generates.
pub const MAX_LENGTH: usize = 100_000;

/// Largest number of fraction digits a capability rounds or formats to.
pub const MAX_FRACTION_DIGITS: usize = 20;

/// The first positional argument, treating `null` as absent.
pub fn first(args: &[JsonValue]) -> Option<&JsonValue> {
    args.first().filter(|v| !v.is_null())
}

fn type_error(expected: &str, found: &JsonValue) -> InvocationError {
    InvocationError::new(format!("Expected {}, got {}", expected, found))
}

fn as_number(value: &JsonValue, key: &str) -> Result<f64, InvocationError> {
    value
        .as_f64()
        .ok_or_else(|| type_error(&format!("a number for \"{}\"", key), value))
}

/// Read an optional numeric field of an options object.
pub fn number_field(
    options: &JsonMap<String, JsonValue>,
    key: &str,
) -> Result<Option<f64>, InvocationError> {
    match options.get(key) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(value) => as_number(value, key).map(Some),
    }
}

/// Read an options object from the first argument, if one was given.
pub fn options_object(
    args: &[JsonValue],
) -> Result<Option<&JsonMap<String, JsonValue>>, InvocationError> {
    match first(args) {
        None => Ok(None),
        Some(JsonValue::Object(map)) => Ok(Some(map)),
        Some(other) => Err(type_error("an options object", other)),
    }
}

fn check_bounds<T>(min: T, max: T) -> Result<(T, T), InvocationError>
where
    T: PartialOrd + std::fmt::Display,
{
    if max < min {
        return Err(InvocationError::new(format!(
            "Max {} should be greater than min {}.",
            max, min
        )));
    }
    Ok((min, max))
}

fn check_span(min: f64, max: f64) -> Result<(f64, f64), InvocationError> {
    if !(max - min).is_finite() {
        return Err(InvocationError::new(
            "The distance between min and max is too large.",
        ));
    }
    Ok((min, max))
}

/// Bounds given as `max` or `{min, max}`.
///
/// Both bounds and the distance between them are finite.
pub fn float_range(
    args: &[JsonValue],
    default_min: f64,
    default_max: f64,
) -> Result<(f64, f64), InvocationError> {
    let (min, max) = match first(args) {
        None => (default_min, default_max),
        Some(JsonValue::Number(n)) => (default_min, n.as_f64().unwrap_or(default_max)),
        Some(JsonValue::Object(options)) => (
            number_field(options, "min")?.unwrap_or(default_min),
            number_field(options, "max")?.unwrap_or(default_max),
        ),
        Some(other) => return Err(type_error("a number or an options object", other)),
    };
    let (min, max) = check_bounds(min, max)?;
    check_span(min, max)
}

/// Integer bounds given as `max` or `{min, max}`.
///
/// Fractional bounds are narrowed inwards to the nearest integers.
pub fn int_range(
    args: &[JsonValue],
    default_min: i64,
    default_max: i64,
) -> Result<(i64, i64), InvocationError> {
    let (min, max) = float_range(args, default_min as f64, default_max as f64)?;
    let (min, max) = (min.ceil(), max.floor());
    if max < min {
        return Err(InvocationError::new(format!(
            "No integer value between {} and {}.",
            min, max
        )));
    }
    Ok((min as i64, max as i64))
}

/// A count given as a number or as `{min, max}`.
pub fn count(
    random: &Random,
    args: &[JsonValue],
    default: usize,
) -> Result<usize, InvocationError> {
    match first(args) {
        None => Ok(default),
        Some(JsonValue::Object(_)) => {
            let (min, max) = int_range(args, default as i64, default as i64)?;
            let max = within_max_length(max.max(0) as usize, "count")?;
            Ok(random.int(min.max(0), max as i64) as usize)
        }
        Some(other) => non_negative(other, "count"),
    }
}

/// A length given as a number or as `{length}`.
pub fn length(args: &[JsonValue], default: usize) -> Result<usize, InvocationError> {
    match first(args) {
        None => Ok(default),
        Some(JsonValue::Object(options)) => match options.get("length") {
            None | Some(JsonValue::Null) => Ok(default),
            Some(value) => non_negative(value, "length"),
        },
        Some(other) => non_negative(other, "length"),
    }
}

fn non_negative(value: &JsonValue, key: &str) -> Result<usize, InvocationError> {
    let n = value
        .as_u64()
        .ok_or_else(|| type_error(&format!("a non-negative integer for \"{}\"", key), value))?;
    within_max_length(usize::try_from(n).unwrap_or(usize::MAX), key)
}

fn within_max_length(n: usize, key: &str) -> Result<usize, InvocationError> {
    if n > MAX_LENGTH {
        return Err(InvocationError::new(format!(
            "The {} {} exceeds the maximum of {}.",
            key, n, MAX_LENGTH
        )));
    }
    Ok(n)
}

/// An optional digit count such as `fractionDigits`, at most
/// [`MAX_FRACTION_DIGITS`].
pub fn fraction_digits(
    options: Option<&JsonMap<String, JsonValue>>,
    key: &str,
) -> Result<Option<usize>, InvocationError> {
    let Some(digits) = options.map(|o| number_field(o, key)).transpose()?.flatten() else {
        return Ok(None);
    };
    if !(0.0..=MAX_FRACTION_DIGITS as f64).contains(&digits) {
        return Err(InvocationError::new(format!(
            "{} should be a number between 0 and {}.",
            key, MAX_FRACTION_DIGITS
        )));
    }
    Ok(Some(digits as usize))
}

/// The first argument as an array.
pub fn array(args: &[JsonValue]) -> Result<&[JsonValue], InvocationError> {
    match first(args) {
        Some(JsonValue::Array(items)) => Ok(items),
        Some(other) => Err(type_error("an array", other)),
        None => Err(InvocationError::new("Expected an array argument")),
    }
}

/// A date given as ISO-8601 text, a `YYYY-MM-DD` day, or epoch milliseconds.
pub fn date(value: &JsonValue) -> Result<DateTime<Utc>, InvocationError> {
    let parsed = match value {
        JsonValue::String(text) => DateTime::parse_from_rfc3339(text)
            .map(|d| d.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(text, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|d| d.and_utc())
            }),
        JsonValue::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    };
    parsed.ok_or_else(|| type_error("a date", value))
}
