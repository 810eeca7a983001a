/*
 * lorem.rs
 * Copyright (c) 2025 Posit, PBC
 */

use super::ModuleBuilder;
use crate::data::LOREM_WORDS;
use crate::options;
use crate::random::Random;
use faker_dsl::{DslValue, Namespace};
use std::sync::Arc;

pub fn namespace(random: &Arc<Random>) -> Namespace {
    ModuleBuilder::new("lorem", random)
        .func("word", |r, _| Ok(r.word(LOREM_WORDS).into()))
        .func("words", |r, args| {
            let n = options::count(r, args, 3)?;
            Ok(DslValue::string(words(r, n).join(" ")))
        })
        .func("sentence", |r, args| {
            let default = r.int(3, 10) as usize;
            let n = options::count(r, args, default)?;
            Ok(DslValue::string(sentence(r, n)))
        })
        .func("paragraph", |r, args| {
            let n = options::count(r, args, 3)?;
            let sentences: Vec<String> = (0..n)
                .map(|_| sentence(r, r.int(3, 10) as usize))
                .collect();
            Ok(DslValue::string(sentences.join(" ")))
        })
        .build()
}

fn words(r: &Random, n: usize) -> Vec<&'static str> {
    (0..n).map(|_| r.word(LOREM_WORDS)).collect()
}

/// Capitalized words ending in a period.
fn sentence(r: &Random, n: usize) -> String {
    let text = words(r, n).join(" ");
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
