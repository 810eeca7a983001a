/*
 * resolver.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Capability path resolution.
//!
//! Walks a dotted path through the provider's namespace tree. Every segment
//! but the last must name a namespace; the last may name anything.

use crate::error::{DirectiveError, DirectiveResult};
use crate::parser::CapabilityPath;
use crate::provider::{CapabilityNode, Namespace};

/// The result of resolving a path.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'p> {
    /// The node named by the last segment.
    pub target: &'p CapabilityNode,

    /// The namespace that directly contains `target`.
    pub owner: &'p Namespace,
}

/// Resolve `path` against `root`.
///
/// Fails with [`DirectiveError::UnknownCapability`] naming the full path and
/// the first segment that could not be found.
pub fn resolve<'p>(
    root: &'p Namespace,
    path: &CapabilityPath<'_>,
) -> DirectiveResult<Resolved<'p>> {
    let mut owner = root;
    let mut target: Option<&'p CapabilityNode> = None;

    for segment in path.segments() {
        let namespace = match target {
            None => root,
            Some(CapabilityNode::Namespace(ns)) => ns,
            // Values and functions have no members
            Some(_) => return Err(unknown(path, segment)),
        };
        let node = namespace.member(segment).ok_or_else(|| unknown(path, segment))?;
        owner = namespace;
        target = Some(node);
    }

    let target = target.ok_or_else(|| unknown(path, path.as_str()))?;
    Ok(Resolved { target, owner })
}

fn unknown(path: &CapabilityPath<'_>, segment: &str) -> DirectiveError {
    DirectiveError::UnknownCapability {
        path: path.to_string(),
        segment: segment.to_string(),
    }
}
