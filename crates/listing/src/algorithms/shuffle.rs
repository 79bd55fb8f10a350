//! Uniform random permutation (Fisher–Yates).
//!
//! Iterates from the last index down to 1 and swaps each element with a
//! uniformly chosen element at an index less than or equal to it. The random
//! source is supplied by the caller, so seeded generators give reproducible
//! permutations.

// External dependencies
use rand::Rng;

/// Shuffle `items` in place using `rng`.
pub fn fisher_yates<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
