//! RNG module - deterministic shuffling of tile values
//!
//! A board is dealt from a "deck" holding every group value exactly
//! `match_size` times. The deck is permuted with Fisher-Yates driven by a
//! small LCG, so the same seed always deals the same board (handy for tests
//! and for replaying a game).

use crate::types::GameConfig;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    ///
    /// The seed is scrambled first: small seeds would otherwise start the
    /// LCG in a narrow band and deal near-identical first draws.
    pub fn new(seed: u32) -> Self {
        let state = mix32(seed);
        // Avoid a zero state
        Self {
            state: if state == 0 { 1 } else { state },
        }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max <= 1 {
            return 0;
        }
        (((self.next_u32() as u64) * (max as u64)) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// MurmurHash3 32-bit finaliser: every seed bit affects every state bit.
fn mix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// Ordered deck of tile values before shuffling: `index / match_size` for
/// every index on the board.
///
/// `config` must already be validated (see [`crate::board::validate_config`]).
pub fn value_deck(config: &GameConfig) -> Vec<u32> {
    let match_size = config.match_size.max(1);
    (0..config.tile_count()).map(|i| i / match_size).collect()
}

/// Ordered deck, uniformly shuffled.
pub fn shuffled_deck(config: &GameConfig, rng: &mut SimpleRng) -> Vec<u32> {
    let mut deck = value_deck(config);
    rng.shuffle(&mut deck);
    deck
}
