/*
 * helpers.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Selection helpers over caller-supplied collections.
//!
//! `arrayElement`, `arrayElements` and `weightedArrayElement` receive their
//! array whole (the engine does not spread it). `shuffle` is not exempt, so
//! `helpers.shuffle([1, 2, 3])` arrives as three positional arguments.

use super::ModuleBuilder;
use crate::options::{self, CapResult};
use crate::random::Random;
use faker_dsl::{DslValue, InvocationError, Namespace};
use serde_json::Value as JsonValue;
use std::sync::Arc;

pub fn namespace(random: &Arc<Random>) -> Namespace {
    ModuleBuilder::new("helpers", random)
        .func("arrayElement", |r, args| {
            let items = options::array(args)?;
            r.pick(items)
                .map(DslValue::from)
                .ok_or_else(|| InvocationError::new("Cannot get value from empty dataset."))
        })
        .func("arrayElements", array_elements)
        .func("weightedArrayElement", weighted_array_element)
        .func("shuffle", |r, args| {
            let mut items = match args {
                [JsonValue::Array(items)] => items.clone(),
                _ => args.to_vec(),
            };
            r.shuffle(&mut items);
            Ok(DslValue::from(JsonValue::Array(items)))
        })
        .build()
}

/// A random subset in random order. The count is the optional second
/// argument, otherwise random between one and the array length.
fn array_elements(r: &Random, args: &[JsonValue]) -> CapResult {
    let items = options::array(args)?;
    if items.is_empty() {
        return Ok(DslValue::List(Vec::new()));
    }
    let count = match args.get(1) {
        None | Some(JsonValue::Null) => r.int(1, items.len() as i64) as usize,
        Some(value) => options::length(std::slice::from_ref(value), 1)?,
    };

    let mut picked = items.to_vec();
    r.shuffle(&mut picked);
    picked.truncate(count);
    Ok(DslValue::from(JsonValue::Array(picked)))
}

/// Pick a `value` with probability proportional to its `weight`.
fn weighted_array_element(r: &Random, args: &[JsonValue]) -> CapResult {
    let items = options::array(args)?;
    if items.is_empty() {
        return Err(InvocationError::new(
            "weightedArrayElement expects an array with at least one element",
        ));
    }

    let mut weighted = Vec::with_capacity(items.len());
    for item in items {
        let (weight, value) = match item {
            JsonValue::Object(o) => (
                options::number_field(o, "weight")?.unwrap_or(0.0),
                o.get("value").cloned().unwrap_or(JsonValue::Null),
            ),
            other => {
                return Err(InvocationError::new(format!(
                    "Expected {{weight, value}} entries, got {}",
                    other
                )));
            }
        };
        if weight <= 0.0 {
            return Err(InvocationError::new(
                "weightedArrayElement expects an array of positive weights",
            ));
        }
        weighted.push((weight, value));
    }

    let total: f64 = weighted.iter().map(|(w, _)| w).sum();
    if !total.is_finite() {
        return Err(InvocationError::new(
            "weightedArrayElement expects weights with a finite sum",
        ));
    }
    let mut target = r.float(0.0, total);
    for (weight, value) in &weighted {
        if target < *weight {
            return Ok(DslValue::from(value));
        }
        target -= weight;
    }
    // Rounding can leave the target just past the last bucket
    Ok(weighted
        .last()
        .map_or(DslValue::Null, |(_, value)| DslValue::from(value)))
}
