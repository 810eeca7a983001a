/*
 * mod.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Capability namespaces of the built-in provider.

pub mod commerce;
pub mod company;
pub mod datatype;
pub mod date;
pub mod definitions;
pub mod helpers;
pub mod internet;
pub mod location;
pub mod lorem;
pub mod name;
pub mod number;
pub mod phone;
pub mod string;

use crate::options::CapResult;
use crate::random::Random;
use faker_dsl::Namespace;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Assemble the root namespace.
pub fn root(random: &Arc<Random>) -> Namespace {
    Namespace::new("")
        .with_namespace(name::namespace(random))
        .with_namespace(internet::namespace(random))
        .with_namespace(number::namespace(random))
        .with_namespace(datatype::namespace(random))
        .with_namespace(lorem::namespace(random))
        .with_namespace(helpers::namespace(random))
        .with_namespace(date::namespace(random))
        .with_namespace(string::namespace(random))
        .with_namespace(location::namespace(random))
        .with_namespace(phone::namespace(random))
        .with_namespace(company::namespace(random))
        .with_namespace(commerce::namespace(random))
        .with_namespace(definitions::namespace())
}

/// Builds a namespace whose functions share one random source.
pub struct ModuleBuilder {
    namespace: Namespace,
    random: Arc<Random>,
}

impl ModuleBuilder {
    pub fn new(name: &str, random: &Arc<Random>) -> Self {
        Self {
            namespace: Namespace::new(name),
            random: Arc::clone(random),
        }
    }

    /// Add a function that draws from the random source.
    pub fn func<F>(mut self, name: &str, func: F) -> Self
    where
        F: Fn(&Random, &[JsonValue]) -> CapResult + Send + Sync + 'static,
    {
        let random = Arc::clone(&self.random);
        self.namespace = self
            .namespace
            .with_fn(name, move |_, args| func(&random, args));
        self
    }

    /// Add a function that composes other members of its namespace.
    pub fn method<F>(mut self, name: &str, func: F) -> Self
    where
        F: Fn(&Namespace, &[JsonValue]) -> CapResult + Send + Sync + 'static,
    {
        self.namespace = self.namespace.with_fn(name, func);
        self
    }

    pub fn build(self) -> Namespace {
        self.namespace
    }
}
