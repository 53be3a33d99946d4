//! Single-addition neighborhood.

use std::collections::BTreeSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use super::eligible;
use crate::neigh::Neighborhood;
use crate::subset::{SubsetMove, SubsetSolution};

/// Adds one unselected ID to the selection.
///
/// No move is generated once the selection has reached `max_size`.
#[derive(Debug, Clone)]
pub struct SingleAdditionNeighborhood {
    max_size: usize,
    fixed_ids: BTreeSet<usize>,
}

impl Default for SingleAdditionNeighborhood {
    fn default() -> Self {
        Self {
            max_size: usize::MAX,
            fixed_ids: BTreeSet::new(),
        }
    }
}

impl SingleAdditionNeighborhood {
    /// Creates an addition neighborhood without size limit or fixed IDs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum selection size.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Sets the IDs that are never added.
    pub fn with_fixed_ids<I: IntoIterator<Item = usize>>(mut self, ids: I) -> Self {
        self.fixed_ids = ids.into_iter().collect();
        self
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn fixed_ids(&self) -> &BTreeSet<usize> {
        &self.fixed_ids
    }

    fn candidates(&self, solution: &SubsetSolution) -> Vec<usize> {
        if solution.num_selected() >= self.max_size {
            return Vec::new();
        }
        eligible(solution.unselected(), &self.fixed_ids)
    }
}

impl Neighborhood<SubsetSolution> for SingleAdditionNeighborhood {
    type Move = SubsetMove;

    fn random_move<R: Rng + ?Sized>(
        &self,
        solution: &SubsetSolution,
        rng: &mut R,
    ) -> Option<SubsetMove> {
        self.candidates(solution)
            .choose(rng)
            .map(|&id| SubsetMove::addition(id))
    }

    fn all_moves(&self, solution: &SubsetSolution) -> Vec<SubsetMove> {
        self.candidates(solution)
            .into_iter()
            .map(SubsetMove::addition)
            .collect()
    }
}
