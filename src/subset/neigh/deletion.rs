//! Single-deletion neighborhood.

use std::collections::BTreeSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use super::eligible;
use crate::neigh::Neighborhood;
use crate::subset::{SubsetMove, SubsetSolution};

/// Removes one selected ID from the selection.
///
/// No move is generated once the selection has shrunk to `min_size`.
#[derive(Debug, Clone, Default)]
pub struct SingleDeletionNeighborhood {
    min_size: usize,
    fixed_ids: BTreeSet<usize>,
}

impl SingleDeletionNeighborhood {
    /// Creates a deletion neighborhood without size limit or fixed IDs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum selection size.
    pub fn with_min_size(mut self, min_size: usize) -> Self {
        self.min_size = min_size;
        self
    }

    /// Sets the IDs that are never removed.
    pub fn with_fixed_ids<I: IntoIterator<Item = usize>>(mut self, ids: I) -> Self {
        self.fixed_ids = ids.into_iter().collect();
        self
    }

    pub fn min_size(&self) -> usize {
        self.min_size
    }

    pub fn fixed_ids(&self) -> &BTreeSet<usize> {
        &self.fixed_ids
    }

    fn candidates(&self, solution: &SubsetSolution) -> Vec<usize> {
        if solution.num_selected() <= self.min_size {
            return Vec::new();
        }
        eligible(solution.selected(), &self.fixed_ids)
    }
}

impl Neighborhood<SubsetSolution> for SingleDeletionNeighborhood {
    type Move = SubsetMove;

    fn random_move<R: Rng + ?Sized>(
        &self,
        solution: &SubsetSolution,
        rng: &mut R,
    ) -> Option<SubsetMove> {
        self.candidates(solution)
            .choose(rng)
            .map(|&id| SubsetMove::deletion(id))
    }

    fn all_moves(&self, solution: &SubsetSolution) -> Vec<SubsetMove> {
        self.candidates(solution)
            .into_iter()
            .map(SubsetMove::deletion)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neigh::Move;
    use crate::random::create_rng;

    #[test]
    fn test_all_moves() {
        let sol = SubsetSolution::with_selection(0..6, [0, 1, 4]).unwrap();
        let moves = SingleDeletionNeighborhood::new().all_moves(&sol);
        assert_eq!(moves.len(), 3);
        for mv in &moves {
            assert_eq!((mv.num_added(), mv.num_deleted()), (0, 1));
            assert!(mv.deleted_ids().is_subset(sol.selected()));
        }
    }

    #[test]
    fn test_min_size_stops_shrinking() {
        let mut rng = create_rng(1);
        let mut sol = SubsetSolution::new(0..10);
        sol.select_all();
        let neigh = SingleDeletionNeighborhood::new().with_min_size(4);
        while let Some(mv) = neigh.random_move(&sol, &mut rng) {
            mv.apply(&mut sol).unwrap();
        }
        assert_eq!(sol.num_selected(), 4);
        assert!(neigh.all_moves(&sol).is_empty());
    }

    #[test]
    fn test_fixed_ids_never_removed() {
        let mut rng = create_rng(2);
        let mut sol = SubsetSolution::new(0..10);
        sol.select_all();
        let neigh = SingleDeletionNeighborhood::new().with_fixed_ids([3, 5]);
        while let Some(mv) = neigh.random_move(&sol, &mut rng) {
            mv.apply(&mut sol).unwrap();
        }
        assert_eq!(sol.selected(), &BTreeSet::from([3, 5]));
    }
}
