/*
 * string.rs
 * Copyright (c) 2025 Posit, PBC
 */

use super::ModuleBuilder;
use crate::data::{ALPHA, ALPHANUMERIC, NUMERIC};
use crate::options;
use crate::random::Random;
use faker_dsl::{DslValue, Namespace};
use std::sync::Arc;

pub fn namespace(random: &Arc<Random>) -> Namespace {
    ModuleBuilder::new("string", random)
        .func("uuid", |r, _| {
            let id = uuid::Builder::from_random_bytes(r.bytes16()).into_uuid();
            Ok(DslValue::string(id.to_string()))
        })
        .func("alpha", |r, args| {
            Ok(DslValue::string(r.chars_from(ALPHA, options::length(args, 1)?)))
        })
        .func("numeric", |r, args| {
            Ok(DslValue::string(r.chars_from(NUMERIC, options::length(args, 1)?)))
        })
        .func("alphanumeric", |r, args| {
            Ok(DslValue::string(r.chars_from(ALPHANUMERIC, options::length(args, 1)?)))
        })
        .build()
}
