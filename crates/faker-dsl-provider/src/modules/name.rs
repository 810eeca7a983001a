/*
 * name.rs
 * Copyright (c) 2025 Posit, PBC
 */

use super::ModuleBuilder;
use crate::data::{FIRST_NAMES, JOB_AREAS, JOB_DESCRIPTORS, JOB_TYPES, LAST_NAMES, PREFIXES};
use crate::random::Random;
use faker_dsl::{DslValue, Namespace};
use std::sync::Arc;

pub fn namespace(random: &Arc<Random>) -> Namespace {
    ModuleBuilder::new("name", random)
        .func("firstName", |r, _| Ok(r.word(FIRST_NAMES).into()))
        .func("lastName", |r, _| Ok(r.word(LAST_NAMES).into()))
        .method("fullName", |owner, _| {
            let first = owner.call("firstName")?;
            let last = owner.call("lastName")?;
            Ok(DslValue::string(format!(
                "{} {}",
                first.to_inline_text(),
                last.to_inline_text()
            )))
        })
        .func("prefix", |r, _| Ok(r.word(PREFIXES).into()))
        .func("jobTitle", |r, _| {
            Ok(DslValue::string(format!(
                "{} {} {}",
                r.word(JOB_DESCRIPTORS),
                r.word(JOB_AREAS),
                r.word(JOB_TYPES)
            )))
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_uses_siblings() {
        let ns = namespace(&Arc::new(Random::seeded(5)));
        let full = ns.call("fullName").unwrap();
        let (first, last) = full.as_str().unwrap().split_once(' ').unwrap();
        assert!(FIRST_NAMES.contains(&first));
        assert!(LAST_NAMES.contains(&last));
    }

    #[test]
    fn test_job_title_has_three_parts() {
        let ns = namespace(&Arc::new(Random::seeded(5)));
        let title = ns.call("jobTitle").unwrap();
        assert_eq!(title.as_str().unwrap().split(' ').count(), 3);
    }
}
