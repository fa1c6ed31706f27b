use crate::constants::seeder::{
    ABSORB_MULTIPLIER, ABSORB_ROTATION, INITIAL_STATE, MIX_MULTIPLIER_A, MIX_MULTIPLIER_B,
};

/// Deterministic stream of 32-bit words derived from a string key.
///
/// The key is absorbed one UTF-16 code unit at a time, and its length is
/// measured in UTF-16 code units, so non-ASCII keys hash the same way as in
/// runtimes that index strings by code unit. Each call to
/// [`HashSeeder::next_u32`] runs a finalizer over the running state and
/// returns the mixed word, which also becomes the state for the next call.
///
/// Not a cryptographic hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashSeeder {
    state: u32,
}

impl HashSeeder {
    /// Absorb `key` into a fresh seeder.
    pub fn new(key: &str) -> Self {
        let length = key.encode_utf16().count() as u32;
        let mut state = INITIAL_STATE ^ length;
        for unit in key.encode_utf16() {
            state = (state ^ u32::from(unit)).wrapping_mul(ABSORB_MULTIPLIER);
            state = state.rotate_left(ABSORB_ROTATION);
        }
        Self { state }
    }

    /// Advance the stream and return the next word.
    pub fn next_u32(&mut self) -> u32 {
        let mut h = self.state;
        h = (h ^ (h >> 16)).wrapping_mul(MIX_MULTIPLIER_A);
        h = (h ^ (h >> 13)).wrapping_mul(MIX_MULTIPLIER_B);
        h ^= h >> 16;
        self.state = h;
        h
    }

    /// Draw the next four words, in order.
    pub fn next_words(&mut self) -> [u32; 4] {
        [
            self.next_u32(),
            self.next_u32(),
            self.next_u32(),
            self.next_u32(),
        ]
    }
}

impl Iterator for HashSeeder {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.next_u32())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
