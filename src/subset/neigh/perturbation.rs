//! Single-perturbation neighborhood: one addition, one deletion or one swap.

use std::collections::BTreeSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use super::eligible;
use crate::error::ConfigError;
use crate::neigh::Neighborhood;
use crate::subset::{SubsetMove, SubsetSolution};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Addition,
    Deletion,
    Swap,
}

/// Adds, removes or swaps a single ID while keeping the selection size
/// within `[min_size, max_size]`.
///
/// A random move first picks one of the feasible move kinds uniformly,
/// then a uniform move of that kind. Swaps never change the selection
/// size, so they are available whenever both eligible pools are nonempty.
///
/// # Examples
///
/// ```
/// use u_subset::neigh::Neighborhood;
/// use u_subset::subset::neigh::SinglePerturbationNeighborhood;
/// use u_subset::subset::SubsetSolution;
///
/// let neigh = SinglePerturbationNeighborhood::new(2, 3).unwrap();
/// let sol = SubsetSolution::with_selection(0..5, [0, 1]).unwrap();
///
/// // 3 additions + 2 * 3 swaps, no deletion at the minimum size
/// assert_eq!(neigh.all_moves(&sol).len(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct SinglePerturbationNeighborhood {
    min_size: usize,
    max_size: usize,
    fixed_ids: BTreeSet<usize>,
}

impl SinglePerturbationNeighborhood {
    /// Creates a perturbation neighborhood for selections of
    /// `min_size..=max_size` IDs.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidSizeBounds`] if `min_size > max_size`.
    pub fn new(min_size: usize, max_size: usize) -> Result<Self, ConfigError> {
        if min_size > max_size {
            return Err(ConfigError::InvalidSizeBounds {
                min: min_size,
                max: max_size,
            });
        }
        Ok(Self {
            min_size,
            max_size,
            fixed_ids: BTreeSet::new(),
        })
    }

    /// Sets the IDs that are never added or removed.
    pub fn with_fixed_ids<I: IntoIterator<Item = usize>>(mut self, ids: I) -> Self {
        self.fixed_ids = ids.into_iter().collect();
        self
    }

    pub fn min_size(&self) -> usize {
        self.min_size
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn fixed_ids(&self) -> &BTreeSet<usize> {
        &self.fixed_ids
    }

    fn feasible_kinds(&self, size: usize, del: &[usize], add: &[usize]) -> Vec<Kind> {
        let mut kinds = Vec::with_capacity(3);
        if size < self.max_size && !add.is_empty() {
            kinds.push(Kind::Addition);
        }
        if size > self.min_size && !del.is_empty() {
            kinds.push(Kind::Deletion);
        }
        if !add.is_empty() && !del.is_empty() {
            kinds.push(Kind::Swap);
        }
        kinds
    }
}

impl Neighborhood<SubsetSolution> for SinglePerturbationNeighborhood {
    type Move = SubsetMove;

    fn random_move<R: Rng + ?Sized>(
        &self,
        solution: &SubsetSolution,
        rng: &mut R,
    ) -> Option<SubsetMove> {
        let del = eligible(solution.selected(), &self.fixed_ids);
        let add = eligible(solution.unselected(), &self.fixed_ids);
        let kinds = self.feasible_kinds(solution.num_selected(), &del, &add);

        match kinds.choose(rng)? {
            Kind::Addition => add.choose(rng).map(|&id| SubsetMove::addition(id)),
            Kind::Deletion => del.choose(rng).map(|&id| SubsetMove::deletion(id)),
            Kind::Swap => {
                let (&d, &a) = (del.choose(rng)?, add.choose(rng)?);
                Some(SubsetMove::swap(a, d))
            }
        }
    }

    fn all_moves(&self, solution: &SubsetSolution) -> Vec<SubsetMove> {
        let del = eligible(solution.selected(), &self.fixed_ids);
        let add = eligible(solution.unselected(), &self.fixed_ids);
        let mut moves = Vec::new();
        for kind in self.feasible_kinds(solution.num_selected(), &del, &add) {
            match kind {
                Kind::Addition => moves.extend(add.iter().map(|&id| SubsetMove::addition(id))),
                Kind::Deletion => moves.extend(del.iter().map(|&id| SubsetMove::deletion(id))),
                Kind::Swap => {
                    for &d in &del {
                        moves.extend(add.iter().map(|&a| SubsetMove::swap(a, d)));
                    }
                }
            }
        }
        moves
    }
}
