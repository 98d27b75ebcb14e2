//! Seeded random streams and permutation helpers.
//!
//! Every run owns exactly one [`SearchRng`] and hands it down by mutable
//! reference. Operators accept `&mut dyn RngCore` so heterogeneous operator
//! tables can share the same stream.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The generator used for reproducible runs.
pub type SearchRng = ChaCha8Rng;

/// Creates a generator from a 64-bit seed.
///
/// The same seed yields the same stream on every platform.
pub fn create_rng(seed: u64) -> SearchRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Shuffles `values` in place (Fisher–Yates, back to front).
///
/// # Complexity
/// O(n)
pub fn shuffle(values: &mut [usize], rng: &mut dyn RngCore) {
    for i in (1..values.len()).rev() {
        let j = rng.random_range(0..=i);
        values.swap(i, j);
    }
}

/// Returns a uniformly random permutation of `0..n`.
pub fn random_permutation(n: usize, rng: &mut dyn RngCore) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    shuffle(&mut perm, rng);
    perm
}
