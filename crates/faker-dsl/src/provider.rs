/*
 * provider.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The capability provider interface.
//!
//! A provider exposes a read-only tree of named capabilities. Each node is
//! either a further [`Namespace`], an [`Invocable`] called with a positional
//! argument list, or a plain [`DslValue`]. The engine only needs to test
//! member existence, fetch members, and call invocables with their owning
//! namespace as context.

use crate::error::InvocationError;
use crate::value::DslValue;
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use std::fmt;
use std::sync::Arc;

/// Signature of a capability function.
///
/// The first argument is the namespace that owns the function, so a
/// capability can call its siblings (method-style binding).
pub type InvokeFn =
    dyn Fn(&Namespace, &[JsonValue]) -> Result<DslValue, InvocationError> + Send + Sync;

/// A callable capability.
#[derive(Clone)]
pub struct Invocable {
    func: Arc<InvokeFn>,
}

impl Invocable {
    /// Wrap a function as an invocable.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Namespace, &[JsonValue]) -> Result<DslValue, InvocationError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// Call the function bound to `owner` with positional arguments.
    pub fn invoke(
        &self,
        owner: &Namespace,
        args: &[JsonValue],
    ) -> Result<DslValue, InvocationError> {
        (self.func)(owner, args)
    }
}

impl fmt::Debug for Invocable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Invocable")
    }
}

/// A node in the capability tree.
#[derive(Debug, Clone)]
pub enum CapabilityNode {
    /// A traversable group of members.
    Namespace(Namespace),

    /// A function taking zero or more positional arguments.
    Invocable(Invocable),

    /// A plain value, read by property access.
    Value(DslValue),
}

impl CapabilityNode {
    /// Borrow the namespace, if this node is one.
    pub fn as_namespace(&self) -> Option<&Namespace> {
        match self {
            CapabilityNode::Namespace(ns) => Some(ns),
            _ => None,
        }
    }

    /// Whether this node can be called.
    pub fn is_invocable(&self) -> bool {
        matches!(self, CapabilityNode::Invocable(_))
    }
}

/// A named group of capabilities.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    name: String,
    members: IndexMap<String, CapabilityNode>,
}

impl Namespace {
    /// Create an empty namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: IndexMap::new(),
        }
    }

    /// The namespace's own name (empty for a root).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add or replace a member.
    pub fn insert(&mut self, name: impl Into<String>, node: CapabilityNode) -> &mut Self {
        self.members.insert(name.into(), node);
        self
    }

    /// Add a nested namespace under its own name.
    pub fn with_namespace(mut self, namespace: Namespace) -> Self {
        let name = namespace.name.clone();
        self.insert(name, CapabilityNode::Namespace(namespace));
        self
    }

    /// Add a function member.
    pub fn with_fn<F>(mut self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Namespace, &[JsonValue]) -> Result<DslValue, InvocationError>
            + Send
            + Sync
            + 'static,
    {
        self.insert(name, CapabilityNode::Invocable(Invocable::new(func)));
        self
    }

    /// Add a plain value member.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<DslValue>) -> Self {
        self.insert(name, CapabilityNode::Value(value.into()));
        self
    }

    /// Whether a member with this name exists.
    pub fn has_member(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Look up a member by name.
    pub fn member(&self, name: &str) -> Option<&CapabilityNode> {
        self.members.get(name)
    }

    /// Member names in insertion order.
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    /// Members in insertion order.
    pub fn members(&self) -> impl Iterator<Item = (&str, &CapabilityNode)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Call a sibling function in this namespace with no arguments.
    ///
    /// Used by capabilities that compose other members of their namespace.
    pub fn call(&self, name: &str) -> Result<DslValue, InvocationError> {
        match self.member(name) {
            Some(CapabilityNode::Invocable(invocable)) => invocable.invoke(self, &[]),
            Some(CapabilityNode::Value(value)) => Ok(value.clone()),
            Some(CapabilityNode::Namespace(ns)) => Ok(ns.to_value()),
            None => Err(InvocationError::new(format!(
                "\"{}\" has no member \"{}\"",
                self.name, name
            ))),
        }
    }

    /// Structured form of a namespace reached as the last path segment.
    ///
    /// Values and nested namespaces are included; functions are omitted.
    pub fn to_value(&self) -> DslValue {
        let entries = self
            .members
            .iter()
            .filter_map(|(name, node)| match node {
                CapabilityNode::Value(value) => Some((name.clone(), value.clone())),
                CapabilityNode::Namespace(ns) => Some((name.clone(), ns.to_value())),
                CapabilityNode::Invocable(_) => None,
            })
            .collect();
        DslValue::Map(entries)
    }

    /// Every reachable capability as a dotted path.
    ///
    /// Invocables are suffixed with `()`. Namespaces themselves are not
    /// listed, only their leaves.
    pub fn capability_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_paths(self, "", &mut paths);
        paths
    }
}

fn collect_paths(namespace: &Namespace, prefix: &str, out: &mut Vec<String>) {
    for (name, node) in &namespace.members {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };
        match node {
            CapabilityNode::Namespace(ns) => collect_paths(ns, &path, out),
            CapabilityNode::Invocable(_) => out.push(format!("{}()", path)),
            CapabilityNode::Value(_) => out.push(path),
        }
    }
}

/// Source of the capability tree used by the engine.
///
/// Providers must be safe to share across threads. A provider with mutable
/// shared state (e.g. a seeded random generator) serializes access itself.
pub trait CapabilityProvider: Send + Sync {
    /// The root namespace that directive paths are resolved against.
    fn root(&self) -> &Namespace;
}

impl CapabilityProvider for Namespace {
    fn root(&self) -> &Namespace {
        self
    }
}

impl<P: CapabilityProvider + ?Sized> CapabilityProvider for Arc<P> {
    fn root(&self) -> &Namespace {
        (**self).root()
    }
}
