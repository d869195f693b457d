//! Uniform random selection used by the assistant's canned replies

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use rand::Rng;

/// Source of uniform indices into the reply tables
pub trait RandomSource: Send + Sync {
    /// Return an index in `0..len`. `len` is never zero.
    fn index(&self, len: usize) -> usize;
}

/// Pick one item from a non-empty static table
pub fn pick(source: &dyn RandomSource, items: &[&'static str]) -> &'static str {
    debug_assert!(!items.is_empty());
    items[source.index(items.len()).min(items.len() - 1)]
}

/// Thread-local PRNG, not cryptographically meaningful
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Replays a fixed sequence of raw values, wrapping each into range.
///
/// Useful for making reply selection reproducible.
#[derive(Debug)]
pub struct ScriptedRandom {
    values: Vec<usize>,
    cursor: AtomicUsize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "ScriptedRandom needs at least one value");
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Always yields the same raw value
    pub fn constant(value: usize) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedRandom {
    fn index(&self, len: usize) -> usize {
        let n = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[n % self.values.len()] % len
    }
}
