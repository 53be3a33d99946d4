//! Random sampling and combinatorics helpers.
//!
//! - [`create_rng`]: deterministic, seedable RNG used by tests and benches
//! - [`random_subset`]: uniform random k-subset without replacement
//! - [`ln_binomial`]: `ln C(n, k)` without overflow
//! - [`Combinations`]: lexicographic k-combinations of `0..n`

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a seeded random number generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws a uniformly random subset of exactly `k` elements from `set`.
///
/// Every `k`-subset is equally likely; elements are drawn without
/// replacement. `k = 0` yields the empty set and `k = set.len()` the full
/// set.
///
/// # Panics
/// Panics if `k > set.len()`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use u_subset::random::{create_rng, random_subset};
///
/// let ids: BTreeSet<usize> = (0..10).collect();
/// let mut rng = create_rng(7);
/// let subset = random_subset(&ids, 4, &mut rng);
/// assert_eq!(subset.len(), 4);
/// assert!(subset.is_subset(&ids));
/// ```
pub fn random_subset<T, R>(set: &BTreeSet<T>, k: usize, rng: &mut R) -> BTreeSet<T>
where
    T: Ord + Copy,
    R: Rng + ?Sized,
{
    assert!(
        k <= set.len(),
        "cannot draw {k} elements from a set of size {}",
        set.len()
    );
    if k == set.len() {
        return set.clone();
    }
    let pool: Vec<T> = set.iter().copied().collect();
    sample_from_slice(&pool, k, rng)
}

/// Draws `k` distinct elements from `pool` uniformly at random.
///
/// # Panics
/// Panics if `k > pool.len()`.
pub(crate) fn sample_from_slice<T, R>(pool: &[T], k: usize, rng: &mut R) -> BTreeSet<T>
where
    T: Ord + Copy,
    R: Rng + ?Sized,
{
    rand::seq::index::sample(rng, pool.len(), k)
        .into_iter()
        .map(|i| pool[i])
        .collect()
}

/// Natural logarithm of the binomial coefficient `C(n, k)`.
///
/// Returns `f64::NEG_INFINITY` when `k > n` (zero ways).
pub fn ln_binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    let k = k.min(n - k);
    (1..=k)
        .map(|i| ((n - k + i) as f64).ln() - (i as f64).ln())
        .sum()
}

/// Exact binomial coefficient `C(n, k)`, or `None` on overflow.
pub fn binomial(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 1..=k as u128 {
        // acc * (n - k + i) is divisible by i at every step
        acc = acc.checked_mul(n as u128 - k as u128 + i)? / i;
    }
    Some(acc)
}

/// Iterator over all `k`-combinations of the indices `0..n`, in
/// lexicographic order.
///
/// Yields exactly `C(n, k)` index vectors. For `k = 0` a single empty
/// combination is produced; for `k > n` nothing.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    /// Creates the iterator over `k`-combinations of `0..n`.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        // Advance: find the rightmost index that can still be incremented.
        let k = self.indices.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] < self.n - k + i {
                self.indices[i] += 1;
                for j in (i + 1)..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(current)
    }
}
