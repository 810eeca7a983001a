/*
 * internet.rs
 * Copyright (c) 2025 Posit, PBC
 */

use super::ModuleBuilder;
use crate::data::{
    ALPHANUMERIC, DOMAIN_SUFFIXES, FIRST_NAMES, FREE_EMAIL_DOMAINS, LAST_NAMES, LOREM_WORDS,
};
use crate::options::{self, CapResult};
use crate::random::Random;
use faker_dsl::{DslValue, InvocationError, Namespace};
use serde_json::Value as JsonValue;
use std::sync::Arc;

pub fn namespace(random: &Arc<Random>) -> Namespace {
    ModuleBuilder::new("internet", random)
        .func("email", email)
        .func("userName", |r, args| {
            let (first, last) = person(r, args)?;
            let separator = r.word(&[".", "_", ""]);
            Ok(DslValue::string(format!(
                "{}{}{}{}",
                first,
                separator,
                last,
                r.int(1, 99)
            )))
        })
        .func("domainName", |r, _| Ok(DslValue::string(domain_name(r))))
        .func("url", |r, _| {
            Ok(DslValue::string(format!("https://www.{}", domain_name(r))))
        })
        .func("ipv4", |r, _| {
            let octets: Vec<String> = (0..4).map(|_| r.int(0, 255).to_string()).collect();
            Ok(DslValue::string(octets.join(".")))
        })
        .func("password", |r, args| {
            let len = options::length(args, 15)?;
            Ok(DslValue::string(r.chars_from(ALPHANUMERIC, len)))
        })
        .build()
}

/// `email({firstName?, lastName?, provider?})`
fn email(r: &Random, args: &[JsonValue]) -> CapResult {
    let (first, last) = person(r, args)?;
    let provider = match options::options_object(args)?.and_then(|o| o.get("provider")) {
        Some(JsonValue::String(p)) => p.clone(),
        Some(other) => {
            return Err(InvocationError::new(format!(
                "Expected a string for \"provider\", got {}",
                other
            )));
        }
        None => r.word(FREE_EMAIL_DOMAINS).to_string(),
    };
    Ok(DslValue::string(format!(
        "{}.{}{}@{}",
        first.to_lowercase(),
        last.to_lowercase(),
        r.int(1, 99),
        provider
    )))
}

/// Names from `{firstName, lastName}` options, or random ones.
fn person(r: &Random, args: &[JsonValue]) -> Result<(String, String), InvocationError> {
    let options = options::options_object(args)?;
    let field = |key: &str, fallback: &[&'static str]| match options.and_then(|o| o.get(key)) {
        Some(JsonValue::String(s)) => s.clone(),
        _ => r.word(fallback).to_string(),
    };
    Ok((field("firstName", FIRST_NAMES), field("lastName", LAST_NAMES)))
}

fn domain_name(r: &Random) -> String {
    format!("{}.{}", r.word(LOREM_WORDS), r.word(DOMAIN_SUFFIXES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn call(name: &str, args: &[JsonValue]) -> CapResult {
        let ns = namespace(&Arc::new(Random::seeded(9)));
        let Some(faker_dsl::CapabilityNode::Invocable(f)) = ns.member(name) else {
            panic!("{} should be invocable", name);
        };
        f.invoke(&ns, args)
    }

    #[test]
    fn test_email_shape() {
        let email = call("email", &[]).unwrap();
        let (local, domain) = email.as_str().unwrap().split_once('@').unwrap();
        assert!(local.contains('.'));
        assert!(FREE_EMAIL_DOMAINS.contains(&domain));
    }

    #[test]
    fn test_email_options() {
        let email = call(
            "email",
            &[json!({"firstName": "Grace", "lastName": "Hopper", "provider": "navy.mil"})],
        )
        .unwrap();
        let text = email.as_str().unwrap();
        assert!(text.starts_with("grace.hopper"), "{}", text);
        assert!(text.ends_with("@navy.mil"), "{}", text);
    }

    #[test]
    fn test_ipv4_octets() {
        let ip = call("ipv4", &[]).unwrap();
        let octets: Vec<u16> = ip
            .as_str()
            .unwrap()
            .split('.')
            .map(|o| o.parse().unwrap())
            .collect();
        assert_eq!(octets.len(), 4);
        assert!(octets.iter().all(|o| *o <= 255));
    }

    #[test]
    fn test_password_length() {
        assert_eq!(call("password", &[json!(8)]).unwrap().as_str().unwrap().len(), 8);
        assert_eq!(call("password", &[]).unwrap().as_str().unwrap().len(), 15);
    }
}
