//! Neighborhoods for subset solutions.
//!
//! - [`SingleSwapNeighborhood`]: one ID in, one ID out
//! - [`MultiSwapNeighborhood`]: up to `k` IDs in and `k` out, sampled
//!   uniformly over the whole move space
//! - [`SingleAdditionNeighborhood`] / [`SingleDeletionNeighborhood`]: grow
//!   or shrink the selection by one ID, within a size bound
//! - [`SinglePerturbationNeighborhood`]: additions, deletions and swaps
//!   within `[min_size, max_size]`
//!
//! Every neighborhood accepts a set of fixed IDs that it never adds or
//! removes. Fixed IDs outside the universe of a solution have no effect.

mod addition;
mod config;
mod deletion;
mod multi_swap;
mod perturbation;
mod single_swap;

use std::collections::BTreeSet;

pub use addition::SingleAdditionNeighborhood;
pub use config::MultiSwapConfig;
pub use deletion::SingleDeletionNeighborhood;
pub use multi_swap::MultiSwapNeighborhood;
pub use perturbation::SinglePerturbationNeighborhood;
pub use single_swap::SingleSwapNeighborhood;

/// IDs of `pool` that are not fixed, in ascending order.
fn eligible(pool: &BTreeSet<usize>, fixed: &BTreeSet<usize>) -> Vec<usize> {
    if fixed.is_empty() {
        pool.iter().copied().collect()
    } else {
        pool.difference(fixed).copied().collect()
    }
}
