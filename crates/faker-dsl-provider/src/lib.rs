/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Built-in fake data provider for `faker-dsl`.
//!
//! [`Faker`] exposes namespaces such as `name`, `internet`, `number`,
//! `date` and `helpers`, plus a `definitions` namespace holding the raw word
//! lists as plain values.
//!
//! ```ignore
//! use faker_dsl::Engine;
//! use faker_dsl_provider::Faker;
//!
//! let faker = Faker::seeded(42);
//! let engine = Engine::new(&faker);
//! let emails = engine.render("{{internet.email}}*3");
//! ```

pub mod data;
pub mod modules;
pub mod options;
pub mod random;

use faker_dsl::{CapabilityProvider, Namespace};
use random::Random;
use std::sync::Arc;

/// The built-in provider.
///
/// Every capability draws from one shared generator. Use [`Faker::seeded`]
/// for reproducible output.
#[derive(Debug)]
pub struct Faker {
    root: Namespace,
}

impl Faker {
    /// A provider seeded from system entropy.
    pub fn new() -> Self {
        Self::with_random(Random::from_entropy())
    }

    /// A provider whose output is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        tracing::debug!(seed, "creating seeded faker provider");
        Self::with_random(Random::seeded(seed))
    }

    fn with_random(random: Random) -> Self {
        let root = modules::root(&Arc::new(random));
        Self { root }
    }
}

impl Default for Faker {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityProvider for Faker {
    fn root(&self) -> &Namespace {
        &self.root
    }
}
