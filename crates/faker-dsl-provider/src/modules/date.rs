/*
 * date.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Dates relative to a reference point.
//!
//! `past`, `future`, `recent` and `soon` take an options object whose
//! `refDate` defaults to the current time. `between` takes `{from, to}` or
//! the two bounds as positional arguments.

use super::ModuleBuilder;
use crate::data::{MONTHS, WEEKDAYS};
use crate::options::{self, CapResult};
use crate::random::Random;
use chrono::{DateTime, Duration, Utc};
use faker_dsl::{DslValue, InvocationError, Namespace};
use serde_json::Value as JsonValue;
use std::sync::Arc;

const MS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, Copy)]
enum Direction {
    Before,
    After,
}

pub fn namespace(random: &Arc<Random>) -> Namespace {
    ModuleBuilder::new("date", random)
        .func("past", |r, args| offset(r, args, "years", 365.0, Direction::Before))
        .func("future", |r, args| offset(r, args, "years", 365.0, Direction::After))
        .func("recent", |r, args| offset(r, args, "days", 1.0, Direction::Before))
        .func("soon", |r, args| offset(r, args, "days", 1.0, Direction::After))
        .func("between", between)
        .func("month", |r, _| Ok(r.word(MONTHS).into()))
        .func("weekday", |r, _| Ok(r.word(WEEKDAYS).into()))
        .build()
}

/// A random date within `amount` units of the reference date.
///
/// The amount comes from `{<unit>: n}` or a bare number and defaults to 1.
fn offset(
    r: &Random,
    args: &[JsonValue],
    unit: &str,
    days_per_unit: f64,
    direction: Direction,
) -> CapResult {
    let (amount, reference) = match options::first(args) {
        None => (1.0, Utc::now()),
        Some(JsonValue::Number(n)) => (n.as_f64().unwrap_or(1.0), Utc::now()),
        Some(JsonValue::Object(o)) => {
            let amount = options::number_field(o, unit)?.unwrap_or(1.0);
            let reference = match o.get("refDate") {
                None | Some(JsonValue::Null) => Utc::now(),
                Some(value) => options::date(value)?,
            };
            (amount, reference)
        }
        Some(other) => {
            return Err(InvocationError::new(format!(
                "Expected an options object, got {}",
                other
            )));
        }
    };
    if amount <= 0.0 {
        let mut name = unit.to_string();
        if let Some(first) = name.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        return Err(InvocationError::new(format!("{} must be greater than 0.", name)));
    }

    let span_ms = (amount * days_per_unit * MS_PER_DAY) as i64;
    let delta = Duration::milliseconds(r.int(1, span_ms.max(1)));
    let date = match direction {
        Direction::Before => reference.checked_sub_signed(delta),
        Direction::After => reference.checked_add_signed(delta),
    };
    date.map(DslValue::Date)
        .ok_or_else(|| InvocationError::new("Date out of range."))
}

/// `between({from, to})` or `between(from, to)`.
fn between(r: &Random, args: &[JsonValue]) -> CapResult {
    let (from, to) = match args {
        [JsonValue::Object(o)] => (
            o.get("from").unwrap_or(&JsonValue::Null),
            o.get("to").unwrap_or(&JsonValue::Null),
        ),
        [from, to] => (from, to),
        _ => {
            return Err(InvocationError::new(
                "Expected {from, to} or two dates as arguments",
            ));
        }
    };
    let (from, to) = (options::date(from)?, options::date(to)?);
    if to < from {
        return Err(InvocationError::new(format!(
            "Start date {} must not be after end date {}.",
            faker_dsl::value::iso_8601(&from),
            faker_dsl::value::iso_8601(&to)
        )));
    }

    let millis = r.int(from.timestamp_millis(), to.timestamp_millis());
    DateTime::from_timestamp_millis(millis)
        .map(DslValue::Date)
        .ok_or_else(|| InvocationError::new("Date out of range."))
}
