/*
 * phone.rs
 * Copyright (c) 2025 Posit, PBC
 */

use super::ModuleBuilder;
use crate::random::Random;
use faker_dsl::{DslValue, Namespace};
use std::sync::Arc;

const FORMATS: &[&str] = &["###-###-####", "(###) ###-####", "###.###.####", "+1-###-###-####"];

pub fn namespace(random: &Arc<Random>) -> Namespace {
    ModuleBuilder::new("phone", random)
        .func("number", |r, _| Ok(DslValue::string(r.digits(r.word(FORMATS)))))
        .build()
}
