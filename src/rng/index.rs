//! Hash-counter generator of uniform block indices.
//!
//! Each draw hashes the seed together with a counter that is bumped before
//! the draw, takes the first four digest bytes as a big-endian `u32`, masks
//! it down to the bit length of the bound and retries until the value falls
//! below the bound. Rejection sampling keeps the result uniform.

use core::marker::PhantomData;

use thiserror::Error;
use zeroize::Zeroizing;

use crate::hash::{Hash512, HashOracle, Sha512};

/// Errors raised by [`IndexRng::random_below`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RngError {
    /// The bound needs 32 or more bits, which a 32-bit candidate cannot
    /// cover without bias.
    #[error("bound {max} does not fit in 31 bits")]
    Precision { max: usize },
    /// There is no value below zero.
    #[error("cannot draw from an empty range")]
    EmptyRange,
}

/// Deterministic index generator scoped to a single derivation.
///
/// Two generators built from the same seed yield the same sequence. The
/// state is owned, never global, so concurrent derivations cannot observe
/// each other's draws.
pub struct IndexRng<H: Hash512 = Sha512> {
    seed: Zeroizing<String>,
    counter: u64,
    _hash: PhantomData<H>,
}

impl<H: Hash512> IndexRng<H> {
    /// Creates a generator with its counter at zero.
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: Zeroizing::new(seed.into()),
            counter: 0,
            _hash: PhantomData,
        }
    }

    /// Number of candidates drawn so far, rejected ones included.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Returns a uniformly distributed integer in `[0, max)`.
    pub fn random_below(&mut self, max: usize) -> Result<usize, RngError> {
        if max == 0 {
            return Err(RngError::EmptyRange);
        }

        let n_bits = usize::BITS - max.leading_zeros();
        if n_bits >= 32 {
            return Err(RngError::Precision { max });
        }

        let mask = (1u32 << n_bits) - 1;

        loop {
            let candidate = self.next_u32() & mask;
            if (candidate as usize) < max {
                return Ok(candidate as usize);
            }
        }
    }

    fn next_u32(&mut self) -> u32 {
        self.counter += 1;

        let mut oracle = HashOracle::<H>::with_capacity(self.seed.len() + 22);
        oracle.update(self.seed.as_str()).update_decimal(self.counter);
        let digest = oracle.digest();

        u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_draw_hashes_seed_and_counter_one() {
        let digest = crate::hash::sha512(b"|seed|1");
        let expected = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);

        let mut rng = IndexRng::<Sha512>::new("seed");
        assert_eq!(rng.next_u32(), expected);
        assert_eq!(rng.counter(), 1);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = IndexRng::<Sha512>::new("abc");
        let mut b = IndexRng::<Sha512>::new("abc");

        for _ in 0..64 {
            assert_eq!(a.random_below(1000), b.random_below(1000));
        }
        assert_eq!(a.counter(), b.counter());
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = IndexRng::<Sha512>::new("abc");
        let mut b = IndexRng::<Sha512>::new("abd");

        let xs: Vec<_> = (0..32).map(|_| a.random_below(1 << 20).unwrap()).collect();
        let ys: Vec<_> = (0..32).map(|_| b.random_below(1 << 20).unwrap()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn rejected_candidates_still_advance_the_counter() {
        let mut rng = IndexRng::<Sha512>::new("retry");
        for _ in 0..100 {
            rng.random_below(5).unwrap();
        }

        // 5 needs 3 bits, so roughly 3 in 8 candidates are thrown away
        assert!(rng.counter() > 100);
    }

    #[test]
    fn bound_of_one_always_yields_zero() {
        let mut rng = IndexRng::<Sha512>::new("one");
        for _ in 0..16 {
            assert_eq!(rng.random_below(1), Ok(0));
        }
    }

    #[test]
    fn rejects_bounds_needing_32_bits() {
        let mut rng = IndexRng::<Sha512>::new("wide");

        assert_eq!(
            rng.random_below(1 << 31),
            Err(RngError::Precision { max: 1 << 31 })
        );
        assert_eq!(rng.counter(), 0);

        let widest = (1usize << 31) - 1;
        assert!(rng.random_below(widest).unwrap() < widest);
    }

    #[test]
    fn rejects_empty_range() {
        let mut rng = IndexRng::<Sha512>::new("empty");
        assert_eq!(rng.random_below(0), Err(RngError::EmptyRange));
    }
}
