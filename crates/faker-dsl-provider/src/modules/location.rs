/*
 * location.rs
 * Copyright (c) 2025 Posit, PBC
 */

use super::ModuleBuilder;
use crate::data::{CITIES, COUNTRIES, STATES, STREET_NAMES, STREET_SUFFIXES};
use crate::options;
use crate::random::Random;
use faker_dsl::{DslValue, InvocationError, Namespace};
use serde_json::Value as JsonValue;
use std::sync::Arc;

pub fn namespace(random: &Arc<Random>) -> Namespace {
    ModuleBuilder::new("location", random)
        .func("city", |r, _| Ok(r.word(CITIES).into()))
        .func("country", |r, _| Ok(r.word(COUNTRIES).into()))
        .func("state", |r, _| Ok(r.word(STATES).into()))
        .func("zipCode", |r, args| {
            let format = match options::first(args) {
                None => "#####",
                Some(JsonValue::String(format)) => format.as_str(),
                Some(other) => {
                    return Err(InvocationError::new(format!(
                        "Expected a format string, got {}",
                        other
                    )));
                }
            };
            Ok(DslValue::string(r.digits(format)))
        })
        .func("streetAddress", |r, _| {
            Ok(DslValue::string(format!(
                "{} {} {}",
                r.int(1, 9_999),
                r.word(STREET_NAMES),
                r.word(STREET_SUFFIXES)
            )))
        })
        .func("latitude", |r, args| {
            let (min, max) = options::float_range(args, -90.0, 90.0)?;
            Ok(DslValue::float(round4(r.float(min, max))))
        })
        .func("longitude", |r, args| {
            let (min, max) = options::float_range(args, -180.0, 180.0)?;
            Ok(DslValue::float(round4(r.float(min, max))))
        })
        .build()
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn call(name: &str, args: &[JsonValue]) -> DslValue {
        let ns = namespace(&Arc::new(Random::seeded(6)));
        let Some(faker_dsl::CapabilityNode::Invocable(f)) = ns.member(name) else {
            panic!("{} should be invocable", name);
        };
        f.invoke(&ns, args).unwrap()
    }

    #[test]
    fn test_zip_code_formats() {
        let zip = call("zipCode", &[]);
        assert_eq!(zip.as_str().unwrap().len(), 5);
        let custom = call("zipCode", &[json!("###-AB")]);
        assert!(custom.as_str().unwrap().ends_with("-AB"));
    }

    #[test]
    fn test_coordinates_in_range() {
        let lat = call("latitude", &[]).to_json().as_f64().unwrap();
        let lng = call("longitude", &[]).to_json().as_f64().unwrap();
        assert!((-90.0..=90.0).contains(&lat));
        assert!((-180.0..=180.0).contains(&lng));
    }
}
