//! Command implementations for the faker-dsl CLI
//!
//! Each command module handles the CLI interface and delegates to
//! faker-dsl for the actual work.

pub mod list;
pub mod render;
