//! Small OS-seeded PRNG behind the generator and carver.
//!
//! Uses `getrandom` for seeding so the crate keeps working under wasm, with
//! a PCG step for the stream itself. Bounded draws use rejection sampling,
//! so shuffles are uniform permutations.

use std::sync::atomic::{AtomicU64, Ordering};

const PCG_MULTIPLIER: u64 = 6364136223846793005;
const PCG_INCREMENT: u64 = 1442695040888963407;

pub(crate) struct Rng {
    state: u64,
}

impl Rng {
    /// Seed from the operating system. Falls back to a process-local counter
    /// when no entropy source is available.
    pub fn from_entropy() -> Self {
        let mut bytes = [0u8; 8];
        if getrandom::getrandom(&mut bytes).is_err() {
            static FALLBACK: AtomicU64 = AtomicU64::new(0x853c49e6748fea9b);
            let counter = FALLBACK.fetch_add(0x9e3779b97f4a7c15, Ordering::Relaxed);
            bytes = counter.to_le_bytes();
        }
        Self::with_seed(u64::from_le_bytes(bytes))
    }

    /// Fixed seed, for reproducible streams.
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = Self {
            state: seed ^ PCG_INCREMENT,
        };
        // Advance once so nearby seeds diverge immediately.
        rng.next_u32();
        rng
    }

    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = old.wrapping_mul(PCG_MULTIPLIER).wrapping_add(PCG_INCREMENT);
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Uniform draw from `0..bound`.
    pub fn next_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0 && bound <= u32::MAX as usize);
        let bound = bound as u32;
        // Reject draws from the tail that does not divide evenly into bound.
        let zone = u32::MAX - u32::MAX % bound;
        loop {
            let raw = self.next_u32();
            if raw < zone {
                return (raw % bound) as usize;
            }
        }
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_below(i + 1);
            slice.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_streams_match() {
        let mut a = Rng::with_seed(7);
        let mut b = Rng::with_seed(7);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = Rng::with_seed(1);
        let mut b = Rng::with_seed(2);
        let drawn_a: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let drawn_b: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(drawn_a, drawn_b);
    }

    #[test]
    fn test_next_below_stays_in_range() {
        let mut rng = Rng::with_seed(99);
        for bound in 1..=81 {
            for _ in 0..50 {
                assert!(rng.next_below(bound) < bound);
            }
        }
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = Rng::with_seed(3);
        let mut digits = [1u8, 2, 3, 4, 5, 6, 7, 8, 9];
        rng.shuffle(&mut digits);

        let mut sorted = digits;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_shuffle_eventually_moves_elements() {
        let mut rng = Rng::with_seed(5);
        let original = [1u8, 2, 3, 4, 5, 6, 7, 8, 9];
        let moved = (0..20).any(|_| {
            let mut digits = original;
            rng.shuffle(&mut digits);
            digits != original
        });
        assert!(moved);
    }
}
