//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences for different purposes
//!
//! The cosmetic reveal draws from its own context stream, so replaying a seed
//! yields the same turn order and rolls no matter how many reveal frames a
//! host chose to render.
//!
//! ```
//! use parity_dice::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.roll_die(6);
//! assert!((1..=6).contains(&roll));
//!
//! // Same seed, same sequence
//! let mut again = GameRng::new(42);
//! assert_eq!(again.roll_die(6), roll);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from an OS-provided seed.
    ///
    /// The seed is still recorded so a game can be replayed from logs.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::random();
        log::debug!("seeding game rng from entropy: {seed}");
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// on every platform and toolchain: the derivation is FNV-1a over the
    /// context bytes, a golden-ratio mix with the seed, and a splitmix64
    /// finalizer.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in context.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }

        let mut z = self.seed.wrapping_add(hash.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        Self::new(z ^ (z >> 31))
    }

    /// Uniform index in `[0, max]`, both ends inclusive.
    pub fn gen_index_inclusive(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..=max)
    }

    /// Roll a die with `faces` sides, returning a value in `1..=faces`.
    pub fn roll_die(&mut self, faces: u32) -> i64 {
        assert!(faces > 0, "A die needs at least one face");
        i64::from(self.inner.gen_range(1..=faces))
    }
}
