//! A simple pseudorandom number generator.
//!
//! Specifically, the minimal C PCG32 generator from <https://www.pcg-random.org/>, implemented to satisfy the [RngCore] and [SeedableRng] traits.
//!
//! Each [context](crate::context) owns a source of rng, and every random choice made during a solve draws from that source.
//! So, given a seed and a formula, a solve is deterministic.
//!
//! The context is generic over the source of rng, and [MinimalPCG32] is the source fixed by [Context](crate::context::Context).

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

/// State and increment
#[derive(Clone, Debug, Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl MinimalPCG32 {
    /// A generator seeded by a u64, read as little-endian bytes.
    ///
    /// The same generator as [seed_from_u64](SeedableRng::seed_from_u64).
    pub fn from_u64(seed: u64) -> Self {
        Self::from_seed(seed.to_le_bytes())
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        /// Any odd increment selects a stream.
        const INCREMENT: u64 = 3215534235932367345;
        Self {
            state: (u64::from_le_bytes(seed)).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::from_seed(state.to_le_bytes())
    }
}
