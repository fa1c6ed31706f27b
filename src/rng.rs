//! Seeded float streams.
//!
//! [`seeded_rng`] is the only entry point the rest of the crate uses: it hashes
//! a string key with [`HashSeeder`], feeds four words into [`Sfc32`], and
//! returns the generator. The same key always yields the same stream.
//!
//! None of these generators are suitable where unpredictability matters.

use rand::Rng;
use rand::rngs::ThreadRng;

use crate::constants::generator::{ROTATE_C, SHIFT_A, SHIFT_B, UNIT_SCALE};
use crate::hash::HashSeeder;

/// Source of floats in `[0, 1)` consumed by the sampler.
pub trait UnitSource {
    /// Return the next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<F> UnitSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Four-word sfc32 generator with explicit state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sfc32 {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
}

impl Sfc32 {
    /// Build a generator from raw state words.
    pub const fn from_words(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self { a, b, c, d }
    }

    /// Current state words as `[a, b, c, d]`.
    pub const fn words(&self) -> [u32; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Pure step: returns the successor state and the emitted word.
    pub const fn advance(self) -> (Self, u32) {
        let Self { a, b, c, d } = self;
        let t = a.wrapping_add(b);
        let a = b ^ (b >> SHIFT_A);
        let b = c.wrapping_add(c << SHIFT_B);
        let c = c.rotate_left(ROTATE_C);
        let d = d.wrapping_add(1);
        let t = t.wrapping_add(d);
        let c = c.wrapping_add(t);
        (Self { a, b, c, d }, t)
    }

    /// Advance in place and return the emitted word.
    pub fn next_word(&mut self) -> u32 {
        let (next, word) = self.advance();
        *self = next;
        word
    }

    /// Advance in place and return the emitted word scaled into `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_word()) / UNIT_SCALE
    }
}

impl UnitSource for Sfc32 {
    fn next_unit(&mut self) -> f64 {
        self.next_f64()
    }
}

impl rand::RngCore for Sfc32 {
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_word());
        let high = u64::from(self.next_word());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut offset = 0;
        while offset < dest.len() {
            let bytes = self.next_word().to_le_bytes();
            let copy_len = (dest.len() - offset).min(bytes.len());
            dest[offset..offset + copy_len].copy_from_slice(&bytes[..copy_len]);
            offset += copy_len;
        }
    }
}

/// Deterministic float stream for `key`.
///
/// Draws four words from a [`HashSeeder`] over `key` and uses them, in order,
/// as the `(a, b, c, d)` state of an [`Sfc32`].
pub fn seeded_rng(key: &str) -> Sfc32 {
    let [a, b, c, d] = HashSeeder::new(key).next_words();
    Sfc32::from_words(a, b, c, d)
}

/// Non-deterministic unit source backed by the thread-local `rand` generator.
///
/// Only for call sites that do not need reproducible output.
#[derive(Debug, Clone)]
pub struct ThreadUnit {
    inner: ThreadRng,
}

impl ThreadUnit {
    /// Wrap the current thread's generator.
    pub fn new() -> Self {
        Self { inner: rand::rng() }
    }
}

impl Default for ThreadUnit {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitSource for ThreadUnit {
    fn next_unit(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}
