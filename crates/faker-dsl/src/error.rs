/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for directive evaluation.
//!
//! Every error here is local to a single directive span. The renderer turns
//! them into inline `[ERROR: <message>]` markers, so none of them abort a
//! render call.

use thiserror::Error;

/// Errors that can occur while evaluating one directive.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DirectiveError {
    /// The directive content does not match `path[(args)]`.
    #[error("Invalid directive format: {content} (at offset {offset})")]
    InvalidDirectiveFormat { content: String, offset: usize },

    /// A path segment does not exist in the provider's namespace tree.
    #[error("Invalid module or path: \"{path}\" (failed at \"{segment}\")")]
    UnknownCapability { path: String, segment: String },

    /// The argument text is not valid JSON, even after repair.
    #[error("Failed to parse JSON arguments for \"{path}\": {cause}. Args: {args}")]
    ArgumentSyntaxError {
        path: String,
        args: String,
        cause: String,
    },

    /// Parentheses were supplied for a plain value or namespace.
    #[error("Property \"{path}\" does not accept arguments. Found: ({args})")]
    PropertyTakesNoArguments { path: String, args: String },

    /// The invocable itself reported a failure.
    #[error("Error executing faker function \"{path}\": {source}")]
    CapabilityInvocationError {
        path: String,
        #[source]
        source: InvocationError,
    },

    /// A `*N` suffix asked for more evaluations than allowed.
    #[error("Multiplier {requested} exceeds the maximum of {max}")]
    MultiplierTooLarge { requested: String, max: usize },

    /// `{{JSON.stringify(...)}}` wrappers nested too deeply.
    #[error("JSON.stringify nesting exceeds the maximum depth of {max}")]
    StringifyTooDeep { max: usize },
}

impl DirectiveError {
    /// The marker text that replaces a failing span in rendered output.
    pub fn marker(&self) -> String {
        format!("[ERROR: {}]", self)
    }
}

/// Failure reported by a capability invocable.
///
/// Providers return this from their functions instead of panicking; the
/// evaluator wraps it into [`DirectiveError::CapabilityInvocationError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvocationError {
    message: String,
}

impl InvocationError {
    /// Create an invocation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for directive operations.
pub type DirectiveResult<T> = Result<T, DirectiveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_capability_message() {
        let err = DirectiveError::UnknownCapability {
            path: "nonExistent.module".to_string(),
            segment: "nonExistent".to_string(),
        };
        insta::assert_snapshot!(
            err.marker(),
            @r#"[ERROR: Invalid module or path: "nonExistent.module" (failed at "nonExistent")]"#
        );
    }

    #[test]
    fn test_invocation_error_message() {
        let err = DirectiveError::CapabilityInvocationError {
            path: "number.int".to_string(),
            source: InvocationError::new("Max 1 should be greater than min 5."),
        };
        insta::assert_snapshot!(
            err.to_string(),
            @r#"Error executing faker function "number.int": Max 1 should be greater than min 5."#
        );
    }

    #[test]
    fn test_property_message() {
        let err = DirectiveError::PropertyTakesNoArguments {
            path: "name.firstName".to_string(),
            args: "\"arg\"".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Property \"name.firstName\" does not accept arguments. Found: (\"arg\")"
        );
    }
}
