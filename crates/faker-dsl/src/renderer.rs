/*
 * renderer.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Template rendering.
//!
//! A render call takes one of four paths, checked in order:
//!
//! 1. **Stringify wrapper**: the whole template is `{{JSON.stringify(INNER)}}`.
//!    `INNER` is rendered recursively and the result is JSON-encoded.
//! 2. **Raw**: the whole template is exactly one directive. Its value is
//!    returned with its own type (number, boolean, object, list, date...).
//! 3. **Interpolation**: directives are mixed with text, or there are several.
//!    Each directive is replaced by a text token and the result is a string.
//! 4. **Identity**: no directives at all. The template is returned unchanged.
//!
//! Directive failures never escape a render. They become `[ERROR: ...]`
//! markers: the whole result in raw mode, or a token at the span's position
//! in interpolation mode.

use crate::error::DirectiveError;
use crate::evaluator::Evaluator;
use crate::multiplier::{FailurePolicy, expand};
use crate::options::EngineOptions;
use crate::provider::CapabilityProvider;
use crate::scanner::{DirectiveSpan, match_stringify, scan};
use crate::value::DslValue;

/// The directive template engine.
///
/// Holds a provider and options; each [`Engine::render`] call is independent
/// and keeps no state between calls.
pub struct Engine<'p> {
    provider: &'p dyn CapabilityProvider,
    options: EngineOptions,
}

impl<'p> Engine<'p> {
    /// Create an engine with default options.
    pub fn new(provider: &'p dyn CapabilityProvider) -> Self {
        Self::with_options(provider, EngineOptions::default())
    }

    /// Create an engine with the given options.
    pub fn with_options(provider: &'p dyn CapabilityProvider, options: EngineOptions) -> Self {
        Self { provider, options }
    }

    /// The options in effect.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Render a template.
    pub fn render(&self, template: &str) -> DslValue {
        self.render_at_depth(template, 0)
    }

    /// Render a template and return its interpolation text form.
    ///
    /// Raw-mode results are converted with [`DslValue::to_inline_text`].
    pub fn render_to_string(&self, template: &str) -> String {
        self.render(template).to_inline_text()
    }

    fn evaluator(&self) -> Evaluator<'_> {
        Evaluator::new(self.provider, &self.options)
    }

    fn render_at_depth(&self, template: &str, depth: usize) -> DslValue {
        if let Some(inner) = match_stringify(template) {
            return self.render_stringify(inner, depth);
        }

        let spans = scan(template);
        match spans.as_slice() {
            [] => {
                tracing::debug!("no directives, returning template unchanged");
                DslValue::string(template)
            }
            [span] if span.covers(template) => self.render_raw(span),
            _ => self.render_interpolated(template, &spans),
        }
    }

    fn render_stringify(&self, inner: &str, depth: usize) -> DslValue {
        let max = self.options.max_stringify_depth;
        if depth >= max {
            let err = DirectiveError::StringifyTooDeep { max };
            tracing::warn!(error = %err, "stringify wrapper rendered as error");
            return DslValue::String(err.marker());
        }

        tracing::debug!(depth, "rendering JSON.stringify wrapper");
        let value = self.render_at_depth(inner, depth + 1);
        DslValue::String(value.to_json_string())
    }

    fn render_raw(&self, span: &DirectiveSpan<'_>) -> DslValue {
        tracing::debug!(directive = span.content, "rendering single directive raw");
        let result = expand(
            &self.evaluator(),
            span.content,
            span.multiplier,
            FailurePolicy::AbortOnFirst,
        )
        .and_then(|expansion| expansion.into_whole());

        match result {
            Ok(value) => {
                tracing::debug!(kind = value.type_name(), "raw directive rendered");
                value
            }
            Err(err) => {
                tracing::warn!(directive = span.content, error = %err, "directive failed");
                DslValue::String(err.marker())
            }
        }
    }

    fn render_interpolated(&self, template: &str, spans: &[DirectiveSpan<'_>]) -> DslValue {
        tracing::debug!(count = spans.len(), "interpolating directives");
        let evaluator = self.evaluator();
        let mut output = String::with_capacity(template.len());
        let mut last = 0;

        for span in spans {
            output.push_str(&template[last..span.start]);

            let result = expand(
                &evaluator,
                span.content,
                span.multiplier,
                FailurePolicy::PerElement,
            )
            .and_then(|expansion| expansion.into_contained());

            match result {
                Ok(value) => output.push_str(&value.to_inline_text()),
                Err(err) => {
                    tracing::warn!(directive = span.content, error = %err, "directive failed");
                    output.push_str(&err.marker());
                }
            }

            last = span.end;
        }

        output.push_str(&template[last..]);
        DslValue::String(output)
    }
}
