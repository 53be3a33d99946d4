//! Multi-swap (k-swap) neighborhood.
//!
//! # Move space
//!
//! With `s` eligible selected IDs, `u` eligible unselected IDs and
//! `m = min(max_swaps, s, u)`, the moves of size `j` (for `1 <= j <= m`)
//! pair every `j`-subset of the eligible selected IDs with every
//! `j`-subset of the eligible unselected IDs, so the space holds
//!
//! ```text
//! sum_{j=1}^{m} C(s, j) * C(u, j)
//! ```
//!
//! moves.
//!
//! # Sampling
//!
//! Picking `j` uniformly would favour small swaps, whose share of the move
//! space is tiny when `s` and `u` are large. A random move therefore first
//! draws `j` with probability proportional to `C(s, j) * C(u, j)` and then
//! a uniform `j`-subset on each side, which makes every move of the space
//! equally likely. Weights are computed in log space and normalised against
//! the largest one, so large universes do not overflow.

use std::collections::BTreeSet;

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;
use tracing::{debug, trace};

use super::config::MultiSwapConfig;
use super::eligible;
use crate::error::ConfigError;
use crate::neigh::Neighborhood;
use crate::random::{binomial, sample_from_slice, Combinations};
use crate::subset::{SubsetMove, SubsetSolution};

/// Swaps up to `max_swaps` selected IDs for the same number of unselected
/// IDs.
///
/// # Examples
///
/// ```
/// use u_subset::neigh::Neighborhood;
/// use u_subset::subset::neigh::MultiSwapNeighborhood;
/// use u_subset::subset::SubsetSolution;
///
/// let sol = SubsetSolution::with_selection(0..20, 0..10).unwrap();
/// let neigh = MultiSwapNeighborhood::bounded(3).unwrap();
///
/// // C(10,1)^2 + C(10,2)^2 + C(10,3)^2
/// assert_eq!(neigh.all_moves(&sol).len(), 16_525);
/// assert!(MultiSwapNeighborhood::bounded(0).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MultiSwapNeighborhood {
    max_swaps: Option<usize>,
    fixed_ids: BTreeSet<usize>,
}

impl MultiSwapNeighborhood {
    /// Creates a multi-swap neighborhood from a configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidMaxSwaps`] if the swap limit is 0.
    pub fn new(config: MultiSwapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            max_swaps = ?config.max_swaps,
            fixed = config.fixed_ids.len(),
            "created multi-swap neighborhood"
        );
        Ok(Self {
            max_swaps: config.max_swaps,
            fixed_ids: config.fixed_ids,
        })
    }

    /// Creates a neighborhood with at most `max_swaps` swaps per move.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidMaxSwaps`] if `max_swaps` is 0.
    pub fn bounded(max_swaps: usize) -> Result<Self, ConfigError> {
        Self::new(MultiSwapConfig::default().with_max_swaps(max_swaps))
    }

    /// Creates a neighborhood without a limit on the number of swaps.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// The swap limit, `None` if unbounded.
    pub fn max_swaps(&self) -> Option<usize> {
        self.max_swaps
    }

    pub fn fixed_ids(&self) -> &BTreeSet<usize> {
        &self.fixed_ids
    }

    /// Largest swap size available for pools of `s` and `u` IDs.
    fn swap_limit(&self, s: usize, u: usize) -> usize {
        let m = s.min(u);
        self.max_swaps.map_or(m, |k| k.min(m))
    }

    fn pools(&self, solution: &SubsetSolution) -> (Vec<usize>, Vec<usize>) {
        (
            eligible(solution.selected(), &self.fixed_ids),
            eligible(solution.unselected(), &self.fixed_ids),
        )
    }

    /// Exact number of moves for the current state of the solution, or
    /// `None` if it does not fit in a `u128`.
    pub fn num_moves(&self, solution: &SubsetSolution) -> Option<u128> {
        let (del, add) = self.pools(solution);
        let m = self.swap_limit(del.len(), add.len());
        (1..=m).try_fold(0u128, |total, j| {
            let count = binomial(del.len(), j)?.checked_mul(binomial(add.len(), j)?)?;
            total.checked_add(count)
        })
    }

    /// Draws a swap size in `1..=m`, weighted by the number of moves of
    /// each size.
    fn sample_swap_size<R: Rng + ?Sized>(s: usize, u: usize, m: usize, rng: &mut R) -> usize {
        let ln_weights = swap_size_ln_weights(s, u, m);
        let max = ln_weights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let weights: Vec<f64> = ln_weights.iter().map(|w| (w - max).exp()).collect();
        // m >= 1 and the largest weight is exp(0) = 1, so the total is positive.
        let dist = WeightedIndex::new(&weights).expect("swap size weights have a positive total");
        dist.sample(rng) + 1
    }
}

/// `ln(C(s, j) * C(u, j))` for `j` in `1..=m`, with `m <= min(s, u)`.
///
/// Built in one pass from `C(n, j) = C(n, j - 1) * (n - j + 1) / j`.
fn swap_size_ln_weights(s: usize, u: usize, m: usize) -> Vec<f64> {
    let mut ln_weights = Vec::with_capacity(m);
    let mut ln_w = 0.0;
    for j in 1..=m {
        let jf = j as f64;
        ln_w += ((s - j + 1) as f64 / jf).ln() + ((u - j + 1) as f64 / jf).ln();
        ln_weights.push(ln_w);
    }
    ln_weights
}

impl Neighborhood<SubsetSolution> for MultiSwapNeighborhood {
    type Move = SubsetMove;

    fn random_move<R: Rng + ?Sized>(
        &self,
        solution: &SubsetSolution,
        rng: &mut R,
    ) -> Option<SubsetMove> {
        let (del, add) = self.pools(solution);
        let m = self.swap_limit(del.len(), add.len());
        if m == 0 {
            trace!(
                selected = del.len(),
                unselected = add.len(),
                "no multi-swap move available"
            );
            return None;
        }
        let j = Self::sample_swap_size(del.len(), add.len(), m, rng);
        trace!(swap_size = j, max = m, "sampled multi-swap size");

        let deleted = sample_from_slice(&del, j, rng);
        let added = sample_from_slice(&add, j, rng);
        Some(SubsetMove::new(added, deleted))
    }

    fn all_moves(&self, solution: &SubsetSolution) -> Vec<SubsetMove> {
        let (del, add) = self.pools(solution);
        let m = self.swap_limit(del.len(), add.len());
        let mut moves = Vec::new();

        let subsets = |pool: &[usize], j: usize| -> Vec<BTreeSet<usize>> {
            Combinations::new(pool.len(), j)
                .map(|idx| idx.into_iter().map(|i| pool[i]).collect())
                .collect()
        };

        for j in 1..=m {
            let add_sets = subsets(&add[..], j);
            for deleted in subsets(&del[..], j) {
                for added in &add_sets {
                    moves.push(SubsetMove::new(added.clone(), deleted.clone()));
                }
            }
        }
        moves
    }
}
