//! Subset solution: a selected/unselected partition of a fixed universe.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::error::{ConfigError, ModificationKind, SolutionModificationError};
use crate::problem::Solution;

/// Result of a modification of a [`SubsetSolution`].
pub type ModificationResult<T> = Result<T, SolutionModificationError<SubsetSolution>>;

/// A subset of a fixed universe of IDs.
///
/// The universe is split into `selected` and `unselected` IDs. At every
/// observable point the two sets are disjoint and their union is the
/// universe: all mutations validate before they modify anything.
///
/// The universe is immutable and shared between copies; the partition is
/// owned, so a clone can be mutated independently of the original.
///
/// # Examples
///
/// ```
/// use u_subset::subset::SubsetSolution;
///
/// let mut sol = SubsetSolution::new(0..5);
/// assert!(sol.select(3).unwrap());
/// assert!(!sol.select(3).unwrap()); // already selected
/// assert!(sol.select(9).is_err()); // not in the universe
///
/// assert_eq!(sol.num_selected(), 1);
/// assert_eq!(sol.num_unselected(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubsetSolution {
    all: Arc<BTreeSet<usize>>,
    selected: BTreeSet<usize>,
    unselected: BTreeSet<usize>,
}

impl SubsetSolution {
    /// Creates a solution over the given universe with nothing selected.
    ///
    /// Duplicate IDs are collapsed.
    pub fn new<I: IntoIterator<Item = usize>>(universe: I) -> Self {
        let all: BTreeSet<usize> = universe.into_iter().collect();
        Self {
            unselected: all.clone(),
            selected: BTreeSet::new(),
            all: Arc::new(all),
        }
    }

    /// Creates a solution over the given universe with an initial selection.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownIds`] if the selection contains IDs
    /// that are not part of the universe.
    pub fn with_selection<I, J>(universe: I, selection: J) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = usize>,
        J: IntoIterator<Item = usize>,
    {
        let mut solution = Self::new(universe);
        let selection: BTreeSet<usize> = selection.into_iter().collect();
        let unknown: Vec<usize> = selection
            .iter()
            .copied()
            .filter(|id| !solution.all.contains(id))
            .collect();
        if !unknown.is_empty() {
            return Err(ConfigError::UnknownIds(unknown));
        }
        for id in selection {
            solution.unselected.remove(&id);
            solution.selected.insert(id);
        }
        Ok(solution)
    }

    /// Creates a solution over the same universe with the given selection.
    pub(crate) fn reselect(&self, selected: BTreeSet<usize>) -> Self {
        debug_assert!(selected.is_subset(&self.all));
        Self {
            unselected: self.all.difference(&selected).copied().collect(),
            selected,
            all: Arc::clone(&self.all),
        }
    }

    /// Returns an independent copy of this solution.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    fn error(&self, kind: ModificationKind) -> SolutionModificationError<SubsetSolution> {
        SolutionModificationError::new(kind, self.clone())
    }

    fn check_known(&self, id: usize) -> ModificationResult<()> {
        if self.all.contains(&id) {
            Ok(())
        } else {
            Err(self.error(ModificationKind::UnknownId(id)))
        }
    }

    /// Selects an ID.
    ///
    /// Returns `Ok(false)` if the ID was already selected.
    ///
    /// # Errors
    /// Fails if the ID is not part of the universe.
    pub fn select(&mut self, id: usize) -> ModificationResult<bool> {
        self.check_known(id)?;
        if self.unselected.remove(&id) {
            self.selected.insert(id);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Deselects an ID.
    ///
    /// Returns `Ok(false)` if the ID was not selected.
    ///
    /// # Errors
    /// Fails if the ID is not part of the universe.
    pub fn deselect(&mut self, id: usize) -> ModificationResult<bool> {
        self.check_known(id)?;
        if self.selected.remove(&id) {
            self.unselected.insert(id);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Selects every given ID. Returns `Ok(true)` if anything changed.
    ///
    /// # Errors
    /// Fails without modifying the solution if any ID is not part of the
    /// universe.
    pub fn select_many<I: IntoIterator<Item = usize>>(&mut self, ids: I) -> ModificationResult<bool> {
        let ids: Vec<usize> = ids.into_iter().collect();
        ids.iter().try_for_each(|&id| self.check_known(id))?;
        let mut changed = false;
        for id in ids {
            changed |= self.select(id)?;
        }
        Ok(changed)
    }

    /// Deselects every given ID. Returns `Ok(true)` if anything changed.
    ///
    /// # Errors
    /// Fails without modifying the solution if any ID is not part of the
    /// universe.
    pub fn deselect_many<I: IntoIterator<Item = usize>>(
        &mut self,
        ids: I,
    ) -> ModificationResult<bool> {
        let ids: Vec<usize> = ids.into_iter().collect();
        ids.iter().try_for_each(|&id| self.check_known(id))?;
        let mut changed = false;
        for id in ids {
            changed |= self.deselect(id)?;
        }
        Ok(changed)
    }

    /// Selects the whole universe.
    pub fn select_all(&mut self) {
        self.selected.append(&mut self.unselected);
    }

    /// Clears the selection.
    pub fn deselect_all(&mut self) {
        self.unselected.append(&mut self.selected);
    }

    /// Moves `added` into the selection and `deleted` out of it, atomically.
    ///
    /// Every added ID must currently be unselected and every deleted ID
    /// selected; otherwise nothing is modified.
    pub(crate) fn swap_ids(
        &mut self,
        added: &BTreeSet<usize>,
        deleted: &BTreeSet<usize>,
    ) -> ModificationResult<()> {
        for &id in added {
            self.check_known(id)?;
            if !self.unselected.contains(&id) {
                return Err(self.error(ModificationKind::NotUnselected(id)));
            }
        }
        for &id in deleted {
            self.check_known(id)?;
            if !self.selected.contains(&id) {
                return Err(self.error(ModificationKind::NotSelected(id)));
            }
        }
        for &id in added {
            self.unselected.remove(&id);
            self.selected.insert(id);
        }
        for &id in deleted {
            self.selected.remove(&id);
            self.unselected.insert(id);
        }
        Ok(())
    }

    /// Currently selected IDs.
    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    /// Currently unselected IDs.
    pub fn unselected(&self) -> &BTreeSet<usize> {
        &self.unselected
    }

    /// The whole universe.
    pub fn all_ids(&self) -> &BTreeSet<usize> {
        &self.all
    }

    pub fn num_selected(&self) -> usize {
        self.selected.len()
    }

    pub fn num_unselected(&self) -> usize {
        self.unselected.len()
    }

    pub fn num_ids(&self) -> usize {
        self.all.len()
    }

    /// Returns `true` if the ID is currently selected.
    pub fn is_selected(&self, id: usize) -> bool {
        self.selected.contains(&id)
    }

    /// Returns `true` if the ID is part of the universe.
    pub fn contains(&self, id: usize) -> bool {
        self.all.contains(&id)
    }
}

impl Solution for SubsetSolution {}

impl fmt::Display for SubsetSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SubsetSolution {{ selected: {:?}, universe size: {} }}",
            self.selected,
            self.all.len()
        )
    }
}
