//! Moves on subset solutions.

use std::collections::BTreeSet;

use super::solution::{ModificationResult, SubsetSolution};
use crate::neigh::Move;

/// A move that adds a set of IDs to the selection and removes another.
///
/// Added IDs must be unselected and deleted IDs selected when the move is
/// applied. The two sets are disjoint. Two moves are equal when they add
/// and delete the same IDs, regardless of which neighborhood produced
/// them.
///
/// # Examples
///
/// ```
/// use u_subset::neigh::Move;
/// use u_subset::subset::{SubsetMove, SubsetSolution};
///
/// let mut sol = SubsetSolution::with_selection(0..4, [0]).unwrap();
/// let mv = SubsetMove::swap(2, 0);
///
/// mv.apply(&mut sol).unwrap();
/// assert!(sol.is_selected(2) && !sol.is_selected(0));
///
/// mv.undo(&mut sol).unwrap();
/// assert!(sol.is_selected(0) && !sol.is_selected(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubsetMove {
    added: BTreeSet<usize>,
    deleted: BTreeSet<usize>,
}

impl SubsetMove {
    /// Creates a general move.
    ///
    /// Moves are built by neighborhoods from the two sides of a partition,
    /// so the sets are disjoint by construction; overlapping sets are a
    /// caller bug, not a runtime condition, and are not reported through
    /// [`ConfigError`](crate::error::ConfigError).
    ///
    /// # Panics
    /// Panics if the added and deleted sets overlap.
    #[track_caller]
    pub fn new(added: BTreeSet<usize>, deleted: BTreeSet<usize>) -> Self {
        assert!(
            added.is_disjoint(&deleted),
            "added and deleted IDs must be disjoint"
        );
        Self { added, deleted }
    }

    /// Adds `add` and removes `delete`.
    ///
    /// # Panics
    /// Panics if `add == delete`.
    #[track_caller]
    pub fn swap(add: usize, delete: usize) -> Self {
        Self::new(BTreeSet::from([add]), BTreeSet::from([delete]))
    }

    /// Adds a single ID.
    pub fn addition(id: usize) -> Self {
        Self {
            added: BTreeSet::from([id]),
            deleted: BTreeSet::new(),
        }
    }

    /// Removes a single ID.
    pub fn deletion(id: usize) -> Self {
        Self {
            added: BTreeSet::new(),
            deleted: BTreeSet::from([id]),
        }
    }

    /// IDs added to the selection, possibly empty.
    pub fn added_ids(&self) -> &BTreeSet<usize> {
        &self.added
    }

    /// IDs removed from the selection, possibly empty.
    pub fn deleted_ids(&self) -> &BTreeSet<usize> {
        &self.deleted
    }

    pub fn num_added(&self) -> usize {
        self.added.len()
    }

    pub fn num_deleted(&self) -> usize {
        self.deleted.len()
    }

    /// The move that reverts this one.
    pub fn inverse(&self) -> Self {
        Self {
            added: self.deleted.clone(),
            deleted: self.added.clone(),
        }
    }
}

impl Move<SubsetSolution> for SubsetMove {
    fn apply(&self, solution: &mut SubsetSolution) -> ModificationResult<()> {
        solution.swap_ids(&self.added, &self.deleted)
    }

    fn undo(&self, solution: &mut SubsetSolution) -> ModificationResult<()> {
        solution.swap_ids(&self.deleted, &self.added)
    }
}
