/*
 * number.rs
 * Copyright (c) 2025 Posit, PBC
 */

use super::ModuleBuilder;
use crate::options::{self, CapResult};
use crate::random::Random;
use faker_dsl::{DslValue, Namespace};
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Largest integer a JSON consumer can represent exactly.
const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

pub fn namespace(random: &Arc<Random>) -> Namespace {
    ModuleBuilder::new("number", random)
        .func("int", |r, args| {
            let (min, max) = options::int_range(args, 0, MAX_SAFE_INTEGER)?;
            Ok(DslValue::int(r.int(min, max)))
        })
        .func("float", float)
        .build()
}

/// `float(max | {min, max, fractionDigits})`, defaulting to `0..1`.
fn float(r: &Random, args: &[JsonValue]) -> CapResult {
    let (min, max) = options::float_range(args, 0.0, 1.0)?;
    let digits = options::fraction_digits(
        options::options_object(args).ok().flatten(),
        "fractionDigits",
    )?;

    let value = r.float(min, max);
    let value = match digits {
        Some(d) => {
            let factor = 10_f64.powi(d as i32);
            (value * factor).floor() / factor
        }
        None => value,
    };
    Ok(DslValue::float(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn call(name: &str, args: &[JsonValue]) -> CapResult {
        let ns = namespace(&Arc::new(Random::seeded(21)));
        let Some(faker_dsl::CapabilityNode::Invocable(f)) = ns.member(name) else {
            panic!("{} should be invocable", name);
        };
        f.invoke(&ns, args)
    }

    #[test]
    fn test_int_fixed_range() {
        assert_eq!(call("int", &[json!({"min": 100, "max": 100})]).unwrap(), DslValue::int(100));
    }

    #[test]
    fn test_int_max_only() {
        for _ in 0..20 {
            let n = call("int", &[json!(3)]).unwrap().to_json().as_i64().unwrap();
            assert!((0..=3).contains(&n));
        }
    }

    #[test]
    fn test_int_inverted_range() {
        let err = call("int", &[json!({"min": 5, "max": 1})]).unwrap_err();
        assert_eq!(err.message(), "Max 1 should be greater than min 5.");
    }

    #[test]
    fn test_float_fraction_digits() {
        let value = call("float", &[json!({"min": 1, "max": 2, "fractionDigits": 2})])
            .unwrap()
            .to_json()
            .as_f64()
            .unwrap();
        assert!((1.0..=2.0).contains(&value));
        assert_eq!((value * 100.0).round() / 100.0, value);
    }

    #[test]
    fn test_float_fraction_digits_limit() {
        let err = call("float", &[json!({"fractionDigits": 21})]).unwrap_err();
        assert_eq!(err.message(), "fractionDigits should be a number between 0 and 20.");
        assert!(call("float", &[json!({"fractionDigits": -1})]).is_err());
    }

    #[test]
    fn test_float_default_range() {
        let value = call("float", &[]).unwrap().to_json().as_f64().unwrap();
        assert!((0.0..1.0).contains(&value));
    }
}
