//! Single-swap neighborhood.

use std::collections::BTreeSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use super::eligible;
use crate::neigh::Neighborhood;
use crate::subset::{SubsetMove, SubsetSolution};

/// Swaps one selected ID for one unselected ID.
///
/// With `s` eligible selected and `u` eligible unselected IDs there are
/// `s * u` moves; a random move picks each side uniformly and
/// independently.
#[derive(Debug, Clone, Default)]
pub struct SingleSwapNeighborhood {
    fixed_ids: BTreeSet<usize>,
}

impl SingleSwapNeighborhood {
    /// Creates a single-swap neighborhood without fixed IDs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a single-swap neighborhood that never swaps the given IDs.
    pub fn with_fixed_ids<I: IntoIterator<Item = usize>>(ids: I) -> Self {
        Self {
            fixed_ids: ids.into_iter().collect(),
        }
    }

    pub fn fixed_ids(&self) -> &BTreeSet<usize> {
        &self.fixed_ids
    }
}

impl Neighborhood<SubsetSolution> for SingleSwapNeighborhood {
    type Move = SubsetMove;

    fn random_move<R: Rng + ?Sized>(
        &self,
        solution: &SubsetSolution,
        rng: &mut R,
    ) -> Option<SubsetMove> {
        let del = eligible(solution.selected(), &self.fixed_ids);
        let add = eligible(solution.unselected(), &self.fixed_ids);
        let (&d, &a) = (del.choose(rng)?, add.choose(rng)?);
        Some(SubsetMove::swap(a, d))
    }

    fn all_moves(&self, solution: &SubsetSolution) -> Vec<SubsetMove> {
        let del = eligible(solution.selected(), &self.fixed_ids);
        let add = eligible(solution.unselected(), &self.fixed_ids);
        let mut moves = Vec::with_capacity(del.len() * add.len());
        for &d in &del {
            for &a in &add {
                moves.push(SubsetMove::swap(a, d));
            }
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neigh::Move;
    use crate::random::{create_rng, random_subset};
    use std::collections::{HashMap, HashSet};

    fn half_selected(n: usize, seed: u64) -> SubsetSolution {
        let mut rng = create_rng(seed);
        let mut sol = SubsetSolution::new(0..n);
        let chosen = random_subset(sol.all_ids(), n / 2, &mut rng);
        sol.select_many(chosen).unwrap();
        sol
    }

    #[test]
    fn test_all_moves_count_and_shape() {
        let sol = half_selected(20, 1);
        let moves = SingleSwapNeighborhood::new().all_moves(&sol);
        assert_eq!(moves.len(), 100);

        let unique: HashSet<&SubsetMove> = moves.iter().collect();
        assert_eq!(unique.len(), 100);
        for mv in &moves {
            assert_eq!((mv.num_added(), mv.num_deleted()), (1, 1));
            assert!(mv.added_ids().is_subset(sol.unselected()));
            assert!(mv.deleted_ids().is_subset(sol.selected()));
        }
    }

    #[test]
    fn test_random_move_valid() {
        let mut rng = create_rng(2);
        let mut sol = half_selected(20, 2);
        let neigh = SingleSwapNeighborhood::new();
        for _ in 0..1000 {
            let mv = neigh.random_move(&sol, &mut rng).unwrap();
            assert!(mv.added_ids().is_subset(sol.unselected()));
            assert!(mv.deleted_ids().is_subset(sol.selected()));
            mv.apply(&mut sol).unwrap();
            assert_eq!(sol.num_selected(), 10);
        }
    }

    #[test]
    fn test_no_move_on_empty_or_full_solution() {
        let mut rng = create_rng(3);
        let neigh = SingleSwapNeighborhood::new();
        let mut sol = SubsetSolution::new(0..10);
        assert!(neigh.random_move(&sol, &mut rng).is_none());
        assert!(neigh.all_moves(&sol).is_empty());

        sol.select_all();
        assert!(neigh.random_move(&sol, &mut rng).is_none());
        assert!(neigh.all_moves(&sol).is_empty());
    }

    #[test]
    fn test_fixed_ids_respected() {
        let mut rng = create_rng(4);
        let sol = half_selected(20, 4);
        let fixed = random_subset(sol.all_ids(), 10, &mut rng);
        let neigh = SingleSwapNeighborhood::with_fixed_ids(fixed.iter().copied());

        let s = sol.selected().difference(&fixed).count();
        let u = sol.unselected().difference(&fixed).count();
        let moves = neigh.all_moves(&sol);
        assert_eq!(moves.len(), s * u);

        for mv in moves
            .iter()
            .cloned()
            .chain((0..1000).filter_map(|_| neigh.random_move(&sol, &mut rng)))
        {
            assert!(mv.added_ids().is_disjoint(&fixed));
            assert!(mv.deleted_ids().is_disjoint(&fixed));
        }
    }

    #[test]
    fn test_all_fixed_yields_nothing() {
        let mut rng = create_rng(5);
        let empty = SubsetSolution::new(0..20);
        let mut full = empty.clone();
        full.select_all();

        for sol in [empty, half_selected(20, 5), full] {
            let neigh = SingleSwapNeighborhood::with_fixed_ids(sol.all_ids().iter().copied());
            assert!(neigh.random_move(&sol, &mut rng).is_none());
            assert!(neigh.all_moves(&sol).is_empty());
        }
    }

    #[test]
    fn test_random_move_uniform() {
        // 3 selected, 3 unselected: 9 equally likely swaps
        let mut rng = create_rng(6);
        let sol = SubsetSolution::with_selection(0..6, [0, 2, 4]).unwrap();
        let neigh = SingleSwapNeighborhood::new();
        let trials = 9000;

        let mut counts: HashMap<SubsetMove, usize> = HashMap::new();
        for _ in 0..trials {
            let mv = neigh.random_move(&sol, &mut rng).unwrap();
            *counts.entry(mv).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 9);
        let expected = trials / 9;
        for (mv, &count) in &counts {
            assert!(
                count.abs_diff(expected) < 150,
                "{:?} drawn {} times, expected about {}",
                mv,
                count,
                expected
            );
        }
    }
}
