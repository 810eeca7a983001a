/*
 * multiplier.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! `*N` multiplier expansion.
//!
//! A directive without a suffix evaluates once to a scalar. With a suffix,
//! even `*1`, it evaluates `N` independent times and yields a sequence.
//!
//! Failure handling depends on where the directive sits:
//!
//! - When the whole template is the directive, the first failing evaluation
//!   stops the expansion and the span renders as a single error marker.
//! - When the directive is interpolated into text, each failing element is
//!   kept in place and rendered as its own marker inside the sequence.

use crate::error::{DirectiveError, DirectiveResult};
use crate::evaluator::Evaluator;
use crate::scanner::Multiplier;
use crate::value::DslValue;

/// What to do when one element of a multiplied directive fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failure.
    AbortOnFirst,
    /// Evaluate every element and keep failures in place.
    PerElement,
}

/// The outcome of evaluating a directive with its optional multiplier.
#[derive(Debug, Clone, PartialEq)]
pub enum Expansion {
    /// No suffix: one evaluation.
    Single(DirectiveResult<DslValue>),
    /// Explicit suffix: one outcome per evaluation, in order.
    Repeated(Vec<DirectiveResult<DslValue>>),
}

impl Expansion {
    /// Collapse to one value, failing if any element failed.
    pub fn into_whole(self) -> DirectiveResult<DslValue> {
        match self {
            Expansion::Single(result) => result,
            Expansion::Repeated(results) => results
                .into_iter()
                .collect::<DirectiveResult<Vec<_>>>()
                .map(DslValue::List),
        }
    }

    /// Collapse to one value, turning failed elements into marker strings.
    ///
    /// Only an unsuffixed directive can fail as a whole.
    pub fn into_contained(self) -> DirectiveResult<DslValue> {
        match self {
            Expansion::Single(result) => result,
            Expansion::Repeated(results) => Ok(DslValue::List(
                results
                    .into_iter()
                    .map(|r| r.unwrap_or_else(|e| DslValue::String(e.marker())))
                    .collect(),
            )),
        }
    }
}

/// Evaluate `content` once, or `N` times if a multiplier is present.
///
/// Fails up front with [`DirectiveError::MultiplierTooLarge`] if `N` exceeds
/// the configured maximum.
pub fn expand(
    evaluator: &Evaluator<'_>,
    content: &str,
    multiplier: Option<Multiplier<'_>>,
    policy: FailurePolicy,
) -> DirectiveResult<Expansion> {
    let Some(multiplier) = multiplier else {
        return Ok(Expansion::Single(evaluator.evaluate(content)));
    };

    let max = evaluator.options().max_multiplier;
    let count = multiplier
        .count()
        .filter(|count| *count <= max)
        .ok_or_else(|| DirectiveError::MultiplierTooLarge {
            requested: multiplier.as_str().to_string(),
            max,
        })?;

    let mut results = Vec::with_capacity(count);
    for _ in 0..count {
        let result = evaluator.evaluate(content);
        let failed = result.is_err();
        results.push(result);
        if failed && policy == FailurePolicy::AbortOnFirst {
            break;
        }
    }

    Ok(Expansion::Repeated(results))
}
