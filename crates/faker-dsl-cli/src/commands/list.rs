/*
 * list.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * List command implementation
 */

//! List the capabilities of the built-in provider.

use anyhow::Result;
use faker_dsl::CapabilityProvider;
use faker_dsl_provider::Faker;

/// Arguments for the list command
#[derive(Debug)]
pub struct ListArgs {
    /// Restrict output to paths under this prefix
    pub prefix: Option<String>,
}

/// Execute the list command
pub fn execute(args: ListArgs) -> Result<()> {
    let faker = Faker::new();
    let paths = filter_paths(faker.root().capability_paths(), args.prefix.as_deref());
    if let (Some(prefix), true) = (&args.prefix, paths.is_empty()) {
        anyhow::bail!("No capabilities under \"{}\"", prefix);
    }
    for path in paths {
        println!("{}", path);
    }
    Ok(())
}

/// Keep paths equal to `prefix` or nested under it.
fn filter_paths(paths: Vec<String>, prefix: Option<&str>) -> Vec<String> {
    let Some(prefix) = prefix else {
        return paths;
    };
    paths
        .into_iter()
        .filter(|path| {
            let bare = path.strip_suffix("()").unwrap_or(path);
            bare == prefix
                || bare
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('.'))
        })
        .collect()
}
