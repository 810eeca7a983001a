/*
 * commerce.rs
 * Copyright (c) 2025 Posit, PBC
 */

use super::ModuleBuilder;
use crate::data::{DEPARTMENTS, PRODUCTS, PRODUCT_ADJECTIVES, PRODUCT_MATERIALS};
use crate::options::{self, CapResult};
use crate::random::Random;
use faker_dsl::{DslValue, Namespace};
use serde_json::Value as JsonValue;
use std::sync::Arc;

pub fn namespace(random: &Arc<Random>) -> Namespace {
    ModuleBuilder::new("commerce", random)
        .func("productName", |r, _| {
            Ok(DslValue::string(format!(
                "{} {} {}",
                r.word(PRODUCT_ADJECTIVES),
                r.word(PRODUCT_MATERIALS),
                r.word(PRODUCTS)
            )))
        })
        .func("product", |r, _| Ok(r.word(PRODUCTS).into()))
        .func("department", |r, _| Ok(r.word(DEPARTMENTS).into()))
        .func("price", price)
        .build()
}

/// `price({min, max, dec})`, formatted as text with `dec` decimals.
fn price(r: &Random, args: &[JsonValue]) -> CapResult {
    let (min, max) = options::float_range(args, 1.0, 1_000.0)?;
    let dec = options::fraction_digits(options::options_object(args).ok().flatten(), "dec")?
        .unwrap_or(2);
    Ok(DslValue::string(format!("{:.*}", dec, r.float(min, max))))
}
