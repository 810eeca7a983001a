/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Engine configuration.

/// Capabilities that receive a decoded JSON array as one argument instead of
/// having it spread into positional arguments.
pub const DEFAULT_SPREAD_EXEMPT: &[&str] = &[
    "helpers.arrayElement",
    "helpers.arrayElements",
    "helpers.weightedArrayElement",
];

/// Default upper bound for a `*N` multiplier.
pub const DEFAULT_MAX_MULTIPLIER: usize = 10_000;

/// Default nesting limit for `{{JSON.stringify(...)}}` wrappers.
pub const DEFAULT_MAX_STRINGIFY_DEPTH: usize = 32;

/// Options controlling how templates are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Capability paths whose array argument is passed whole.
    pub spread_exempt: Vec<String>,

    /// Largest accepted multiplier; larger ones fail their span.
    pub max_multiplier: usize,

    /// Maximum nesting of stringify wrappers.
    pub max_stringify_depth: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            spread_exempt: DEFAULT_SPREAD_EXEMPT.iter().map(|s| s.to_string()).collect(),
            max_multiplier: DEFAULT_MAX_MULTIPLIER,
            max_stringify_depth: DEFAULT_MAX_STRINGIFY_DEPTH,
        }
    }
}

impl EngineOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the spread-exempt list.
    pub fn with_spread_exempt<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spread_exempt = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Add one path to the spread-exempt list.
    pub fn with_spread_exempt_path(mut self, path: impl Into<String>) -> Self {
        self.spread_exempt.push(path.into());
        self
    }

    /// Set the maximum multiplier.
    pub fn with_max_multiplier(mut self, max: usize) -> Self {
        self.max_multiplier = max;
        self
    }

    /// Set the maximum stringify nesting depth.
    pub fn with_max_stringify_depth(mut self, depth: usize) -> Self {
        self.max_stringify_depth = depth;
        self
    }
}
