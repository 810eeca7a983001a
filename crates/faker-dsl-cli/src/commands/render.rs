/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Render command implementation
 */

//! Render command implementation.
//!
//! The template comes from the positional argument, `--file`, or stdin, in
//! that order. One trailing line ending is dropped from file and stdin input
//! so a file holding a single directive still renders in raw mode.

use std::io::Read;

use anyhow::{Context, Result};
use faker_dsl::{DslValue, Engine, EngineOptions, to_response_body};
use faker_dsl_provider::Faker;
use serde_json::Value as JsonValue;
use tracing::debug;

/// Arguments for the render command
#[derive(Debug)]
pub struct RenderArgs {
    /// Template text
    pub template: Option<String>,
    /// Template file
    pub file: Option<String>,
    /// Random seed
    pub seed: Option<u64>,
    /// Multiplier limit override
    pub max_multiplier: Option<usize>,
    /// Stringify depth override
    pub max_depth: Option<usize>,
    /// Print the response-body form
    pub response: bool,
    /// Pretty-print JSON
    pub pretty: bool,
}

/// Execute the render command
pub fn execute(args: RenderArgs) -> Result<()> {
    let template = read_template(&args)?;
    let faker = match args.seed {
        Some(seed) => Faker::seeded(seed),
        None => Faker::new(),
    };

    let engine = Engine::with_options(&faker, engine_options(&args));
    debug!(bytes = template.len(), "rendering template");
    let value = engine.render(&template);

    println!("{}", format_output(&value, args.response, args.pretty)?);
    Ok(())
}

fn read_template(args: &RenderArgs) -> Result<String> {
    if let Some(template) = &args.template {
        return Ok(template.clone());
    }

    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read template file: {}", path))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read template from stdin")?;
            text
        }
    };
    Ok(strip_line_ending(text))
}

fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

fn engine_options(args: &RenderArgs) -> EngineOptions {
    let mut options = EngineOptions::new();
    if let Some(max) = args.max_multiplier {
        options = options.with_max_multiplier(max);
    }
    if let Some(depth) = args.max_depth {
        options = options.with_max_stringify_depth(depth);
    }
    options
}

/// Text printed for a render result.
///
/// Strings are printed verbatim, other values as JSON. With `response`, the
/// response-body form is always printed as JSON.
fn format_output(value: &DslValue, response: bool, pretty: bool) -> Result<String> {
    let json = match (response, value) {
        (false, DslValue::String(text)) => return Ok(text.clone()),
        (false, other) => other.to_json(),
        (true, other) => to_response_body(other),
    };
    to_json_text(&json, pretty)
}

fn to_json_text(json: &JsonValue, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(json)
    } else {
        serde_json::to_string(json)
    };
    text.context("Failed to encode render result")
}
