/*
 * parser.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Directive content grammar.
//!
//! ```text
//! directive := path [ "(" args ")" ]
//! path      := segment ( "." segment )*
//! segment   := [A-Za-z0-9_]+
//! args      := any text up to the final ")"
//! ```
//!
//! Argument text is captured verbatim from the first `(` to the last `)`.
//! Parentheses inside the arguments are not balanced against each other.

use crate::error::{DirectiveError, DirectiveResult};
use std::fmt;

/// A dotted path into the capability tree, e.g. `number.int`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityPath<'a> {
    raw: &'a str,
}

impl<'a> CapabilityPath<'a> {
    /// The path as written.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// The path's segments, left to right.
    pub fn segments(&self) -> impl Iterator<Item = &'a str> {
        self.raw.split('.')
    }
}

impl fmt::Display for CapabilityPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

/// A parsed directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    /// The capability path.
    pub path: CapabilityPath<'a>,

    /// Text between the parentheses.
    ///
    /// `None` means no parentheses were written (property access); `Some("")`
    /// means an empty call.
    pub args: Option<&'a str>,
}

/// Parse the content of a `{{...}}` span.
pub fn parse_directive(content: &str) -> DirectiveResult<Directive<'_>> {
    let bytes = content.as_bytes();
    let mut pos = 0;
    let mut segment_start = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'.' => {
                if pos == segment_start {
                    return Err(invalid(content, pos));
                }
                segment_start = pos + 1;
            }
            b if is_segment_byte(b) => {}
            _ => break,
        }
        pos += 1;
    }

    // Empty path, or a path ending in "."
    if pos == segment_start {
        return Err(invalid(content, pos));
    }

    let path = CapabilityPath {
        raw: &content[..pos],
    };

    if pos == bytes.len() {
        return Ok(Directive { path, args: None });
    }

    if bytes[pos] != b'(' {
        return Err(invalid(content, pos));
    }

    let close = bytes.len() - 1;
    if close == pos || bytes[close] != b')' {
        return Err(invalid(content, bytes.len()));
    }

    Ok(Directive {
        path,
        args: Some(&content[pos + 1..close]),
    })
}

fn is_segment_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn invalid(content: &str, offset: usize) -> DirectiveError {
    DirectiveError::InvalidDirectiveFormat {
        content: content.to_string(),
        offset,
    }
}
