//! Deterministic RNG wrapper using PCG32.
//!
//! All composition randomness flows through this module so that a seed
//! fully determines the artwork. The draw utilities consume only the
//! `rand()` contract: an f64 in `[0, 1)`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Debug, Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit artwork seed.
    ///
    /// The seed is expanded to 64 bits by duplicating the bits.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Create an RNG from system entropy.
    ///
    /// Used by the `SystemEntropy` reseed policy, where interactions are
    /// intentionally not reproducible from the artwork seed.
    pub fn from_entropy() -> Self {
        Self {
            inner: Pcg32::from_entropy(),
        }
    }

    /// Derive the seed for the n-th interaction from the artwork seed
    /// using BLAKE3, so interaction streams never overlap the composition
    /// stream.
    pub fn derive_interaction_seed(base_seed: u32, interaction: u32) -> u32 {
        let mut input = [0u8; 8];
        input[..4].copy_from_slice(&base_seed.to_le_bytes());
        input[4..].copy_from_slice(&interaction.to_le_bytes());
        let hash = blake3::hash(&input);
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&hash.as_bytes()[0..4]);
        u32::from_le_bytes(bytes)
    }

    /// Generate a random f64 in the range [0.0, 1.0).
    #[inline]
    pub fn rand(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Generate a fresh 32-bit seed, e.g. for a noise field.
    #[inline]
    pub fn next_seed(&mut self) -> u32 {
        self.inner.gen::<u32>()
    }
}
