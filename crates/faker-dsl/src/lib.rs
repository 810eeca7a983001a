/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Directive template engine for mock data.
//!
//! Templates embed directives that name capabilities of a data provider:
//!
//! - Property or call: `{{name.firstName}}`, `{{number.int({"max": 10})}}`
//! - Positional arguments from a JSON array: `{{date.between(["2020-01-01", "2021-01-01"])}}`
//! - Multipliers: `{{internet.email}}*3` yields a list of three results
//! - Stringify wrapper: `{{JSON.stringify({"id": "{{string.uuid}}"})}}`
//!
//! # Render modes
//!
//! A template that is exactly one directive renders to that directive's
//! value with its own type. Directives mixed with text are interpolated into
//! a string. A template without directives is returned unchanged. Failures
//! are contained per directive as `[ERROR: <message>]` markers.
//!
//! # Architecture
//!
//! The engine is independent of any particular data library. Providers
//! implement [`CapabilityProvider`] and expose a tree of [`Namespace`]s whose
//! members are functions, values, or further namespaces.
//!
//! # Example
//!
//! ```ignore
//! use faker_dsl::{DslValue, Engine, Namespace};
//!
//! let provider = Namespace::new("").with_namespace(
//!     Namespace::new("name").with_fn("firstName", |_, _| Ok(DslValue::string("Ada"))),
//! );
//!
//! let engine = Engine::new(&provider);
//! assert_eq!(engine.render("Hello {{name.firstName}}!"), DslValue::string("Hello Ada!"));
//! ```

pub mod args;
pub mod error;
pub mod evaluator;
pub mod multiplier;
pub mod options;
pub mod parser;
pub mod provider;
pub mod renderer;
pub mod resolver;
pub mod response;
pub mod scanner;
pub mod value;

// Re-export main types at crate root
pub use error::{DirectiveError, DirectiveResult, InvocationError};
pub use evaluator::Evaluator;
pub use options::EngineOptions;
pub use provider::{CapabilityNode, CapabilityProvider, Invocable, Namespace};
pub use renderer::Engine;
pub use response::to_response_body;
pub use value::DslValue;
