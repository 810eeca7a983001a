/*
 * evaluator.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Directive evaluation.
//!
//! Parses directive content, resolves its path against the provider, and
//! either calls the capability or returns its value. Nothing is cached:
//! every call re-resolves and re-invokes.

use crate::args::parse_arguments;
use crate::error::{DirectiveError, DirectiveResult};
use crate::options::EngineOptions;
use crate::parser::parse_directive;
use crate::provider::{CapabilityNode, CapabilityProvider};
use crate::resolver::resolve;
use crate::value::DslValue;

/// Evaluates single directives against a provider.
#[derive(Clone, Copy)]
pub struct Evaluator<'e> {
    provider: &'e dyn CapabilityProvider,
    options: &'e EngineOptions,
}

impl<'e> Evaluator<'e> {
    /// Create an evaluator.
    pub fn new(provider: &'e dyn CapabilityProvider, options: &'e EngineOptions) -> Self {
        Self { provider, options }
    }

    /// The options in effect.
    pub fn options(&self) -> &'e EngineOptions {
        self.options
    }

    /// Evaluate the content of one `{{...}}` span.
    pub fn evaluate(&self, content: &str) -> DirectiveResult<DslValue> {
        let directive = parse_directive(content)?;
        let resolved = resolve(self.provider.root(), &directive.path)?;

        tracing::debug!(path = %directive.path, args = ?directive.args, "evaluating directive");

        match resolved.target {
            CapabilityNode::Invocable(invocable) => {
                let args = parse_arguments(
                    directive.args,
                    &directive.path,
                    &self.options.spread_exempt,
                )?;
                invocable.invoke(resolved.owner, &args).map_err(|source| {
                    DirectiveError::CapabilityInvocationError {
                        path: directive.path.to_string(),
                        source,
                    }
                })
            }
            CapabilityNode::Value(_) | CapabilityNode::Namespace(_) if directive.args.is_some() => {
                Err(DirectiveError::PropertyTakesNoArguments {
                    path: directive.path.to_string(),
                    args: directive.args.unwrap_or_default().to_string(),
                })
            }
            CapabilityNode::Value(value) => Ok(value.clone()),
            CapabilityNode::Namespace(ns) => Ok(ns.to_value()),
        }
    }
}
