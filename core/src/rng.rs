//! Deterministic random number generation.
//!
//! RULE: Nothing in the generator may call any platform RNG.
//! All randomness flows through SeedRng instances derived from the
//! caller's seed string via `hash_seed`.
//!
//! One algorithm (PCG-XSH-RR 64/32) backs every stream. Each artifact
//! kind gets its own PCG stream constant, so the pet and adventure
//! generated from the same seed string are independent of each other:
//!   - Adding a new artifact kind never changes existing streams.
//!   - Each stream is fully reproducible in isolation.

use crate::hash::hash_seed;
use rand::RngCore;
use rand_pcg::Pcg32;

/// 2^32 as a float, the divisor that maps a `u32` into [0, 1).
const U32_SPAN: f64 = 4_294_967_296.0;

/// A source of uniform draws in [0.0, 1.0).
///
/// The sampler and every resolver consume draws through this trait so
/// tests can script exact draw sequences.
pub trait UnitSource {
    /// Next draw in [0.0, 1.0). Advances the source.
    fn next_f64(&mut self) -> f64;

    /// Integer in `[min, max]` (inclusive) scaled from one draw.
    fn next_in_range(&mut self, min: u32, max: u32) -> u32 {
        assert!(min <= max, "next_in_range: min must be <= max");
        let span = f64::from(max - min) + 1.0;
        let offset = (self.next_f64() * span) as u32;
        min + offset.min(max - min)
    }

    /// Bernoulli trial: returns true with probability p.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// A named, deterministic RNG for one generation call.
#[derive(Debug, Clone)]
pub struct SeedRng {
    pub name: &'static str,
    inner: Pcg32,
}

impl SeedRng {
    /// Build an RNG directly from a hashed seed and a stable stream slot.
    pub fn from_state(state: u32, slot: StreamSlot) -> Self {
        Self {
            name: slot.name(),
            inner: Pcg32::new(u64::from(state), slot as u64),
        }
    }

    /// Hash `seed` and build the RNG for `slot`.
    pub fn for_seed(seed: &str, slot: StreamSlot) -> Self {
        Self::from_state(hash_seed(seed), slot)
    }

    /// Draw a raw u32 (full range).
    pub fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }
}

impl UnitSource for SeedRng {
    /// `next_u32() / 2^32`. Never negative, never 1.0.
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / U32_SPAN
    }
}

/// Stable stream slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes what every seed produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    Pet = 0,
    Adventure = 1,
    // Add new artifact kinds here — append only.
}

impl StreamSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pet => "pet",
            Self::Adventure => "adventure",
        }
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// For tests and tooling that need to pin exact sampler inputs.
/// Production generation never uses this.
#[derive(Debug, Clone)]
pub struct ScriptedDraws {
    values: Vec<f64>,
    index: usize,
}

impl ScriptedDraws {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "ScriptedDraws needs at least one value");
        Self { values, index: 0 }
    }

    /// A source that always returns the same draw.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// How many draws have been consumed so far.
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl UnitSource for ScriptedDraws {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}
