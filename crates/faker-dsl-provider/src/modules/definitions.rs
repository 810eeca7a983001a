/*
 * definitions.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The raw word lists, exposed as values for property access, e.g.
//! `{{definitions.person.firstName}}`.

use crate::data::{
    CITIES, COUNTRIES, DEPARTMENTS, FIRST_NAMES, LAST_NAMES, LOREM_WORDS, PREFIXES, STATES,
};
use faker_dsl::{DslValue, Namespace};

pub fn namespace() -> Namespace {
    Namespace::new("definitions")
        .with_namespace(
            Namespace::new("person")
                .with_value("firstName", list(FIRST_NAMES))
                .with_value("lastName", list(LAST_NAMES))
                .with_value("prefix", list(PREFIXES)),
        )
        .with_namespace(
            Namespace::new("location")
                .with_value("city", list(CITIES))
                .with_value("country", list(COUNTRIES))
                .with_value("state", list(STATES)),
        )
        .with_namespace(Namespace::new("lorem").with_value("words", list(LOREM_WORDS)))
        .with_namespace(Namespace::new("commerce").with_value("department", list(DEPARTMENTS)))
}

fn list(words: &[&str]) -> DslValue {
    DslValue::from(words.to_vec())
}
