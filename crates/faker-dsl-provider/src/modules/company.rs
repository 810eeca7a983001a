/*
 * company.rs
 * Copyright (c) 2025 Posit, PBC
 */

use super::ModuleBuilder;
use crate::data::{
    CATCH_PHRASE_ADJECTIVES, CATCH_PHRASE_DESCRIPTORS, CATCH_PHRASE_NOUNS, COMPANY_SUFFIXES,
    LAST_NAMES,
};
use crate::random::Random;
use faker_dsl::{DslValue, Namespace};
use std::sync::Arc;

pub fn namespace(random: &Arc<Random>) -> Namespace {
    ModuleBuilder::new("company", random)
        .func("name", |r, _| {
            let name = match r.int(0, 2) {
                0 => format!("{} {}", r.word(LAST_NAMES), r.word(COMPANY_SUFFIXES)),
                1 => format!("{}-{}", r.word(LAST_NAMES), r.word(LAST_NAMES)),
                _ => format!(
                    "{}, {} and {}",
                    r.word(LAST_NAMES),
                    r.word(LAST_NAMES),
                    r.word(LAST_NAMES)
                ),
            };
            Ok(DslValue::string(name))
        })
        .func("catchPhrase", |r, _| {
            Ok(DslValue::string(format!(
                "{} {} {}",
                r.word(CATCH_PHRASE_ADJECTIVES),
                r.word(CATCH_PHRASE_DESCRIPTORS),
                r.word(CATCH_PHRASE_NOUNS)
            )))
        })
        .build()
}
