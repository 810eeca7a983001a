/*
 * datatype.rs
 * Copyright (c) 2025 Posit, PBC
 */

use super::ModuleBuilder;
use crate::options;
use crate::random::Random;
use faker_dsl::{DslValue, InvocationError, Namespace};
use serde_json::Value as JsonValue;
use std::sync::Arc;

pub fn namespace(random: &Arc<Random>) -> Namespace {
    ModuleBuilder::new("datatype", random)
        .func("boolean", |r, args| {
            let probability = match options::first(args) {
                None => 0.5,
                Some(JsonValue::Number(n)) => n.as_f64().unwrap_or(0.5),
                Some(JsonValue::Object(o)) => {
                    options::number_field(o, "probability")?.unwrap_or(0.5)
                }
                Some(other) => {
                    return Err(InvocationError::new(format!(
                        "Expected a probability, got {}",
                        other
                    )));
                }
            };
            Ok(DslValue::Bool(r.chance(probability)))
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_probability_extremes() {
        let ns = namespace(&Arc::new(Random::seeded(2)));
        let Some(faker_dsl::CapabilityNode::Invocable(f)) = ns.member("boolean") else {
            panic!("boolean should be invocable");
        };
        assert_eq!(f.invoke(&ns, &[json!(1)]).unwrap(), DslValue::Bool(true));
        assert_eq!(
            f.invoke(&ns, &[json!({"probability": 0})]).unwrap(),
            DslValue::Bool(false)
        );
        assert!(f.invoke(&ns, &[json!("often")]).is_err());
    }
}
