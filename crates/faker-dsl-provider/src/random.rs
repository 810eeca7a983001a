/*
 * random.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Shared random source.
//!
//! All capabilities of one [`crate::Faker`] draw from the same generator, so
//! a seeded provider produces a reproducible stream no matter which
//! capabilities a template calls. The generator sits behind a mutex because
//! renders may run concurrently.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A thread-safe random generator.
#[derive(Debug)]
pub struct Random {
    rng: Mutex<StdRng>,
}

impl Random {
    /// Seed from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Seed deterministically.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StdRng> {
        // A panic while holding the lock cannot leave the generator invalid
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Uniform integer in `min..=max`. Callers guarantee `min <= max`.
    pub fn int(&self, min: i64, max: i64) -> i64 {
        self.lock().gen_range(min..=max)
    }

    /// Uniform float in `min..max`, or `min` if the range is empty or its
    /// width is not finite.
    pub fn float(&self, min: f64, max: f64) -> f64 {
        if min >= max || !(max - min).is_finite() {
            return min;
        }
        self.lock().gen_range(min..max)
    }

    /// `true` with the given probability, clamped to `0.0..=1.0`.
    pub fn chance(&self, probability: f64) -> bool {
        self.lock().gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Pick one item, or `None` from an empty slice.
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut *self.lock())
    }

    /// Pick one word from a non-empty static list.
    pub fn word(&self, words: &[&'static str]) -> &'static str {
        self.pick(words).copied().unwrap_or_default()
    }

    /// Shuffle in place.
    pub fn shuffle<T>(&self, items: &mut [T]) {
        items.shuffle(&mut *self.lock());
    }

    /// Sixteen random bytes.
    pub fn bytes16(&self) -> [u8; 16] {
        let mut bytes = [0_u8; 16];
        self.lock().fill(&mut bytes);
        bytes
    }

    /// A string of `len` characters drawn from `alphabet`.
    pub fn chars_from(&self, alphabet: &[u8], len: usize) -> String {
        let mut rng = self.lock();
        (0..len)
            .filter_map(|_| alphabet.choose(&mut *rng).map(|b| *b as char))
            .collect()
    }

    /// Replace every `#` in `pattern` with a random digit.
    pub fn digits(&self, pattern: &str) -> String {
        let mut rng = self.lock();
        pattern
            .chars()
            .map(|c| match c {
                '#' => char::from(b'0' + rng.gen_range(0..10_u8)),
                other => other,
            })
            .collect()
    }
}
