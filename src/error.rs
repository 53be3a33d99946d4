//! Error types.
//!
//! Two failure kinds exist at this layer:
//!
//! - [`ConfigError`]: invalid construction parameters for a solution,
//!   neighborhood or problem. Returned eagerly from constructors, so an
//!   invalid instance never exists.
//! - [`SolutionModificationError`]: an attempted mutation that would break
//!   the selected/unselected partition of a solution. Carries a snapshot of
//!   the solution for diagnostics.
//!
//! A neighborhood that cannot produce a move is not an error; it returns
//! `None`.

use std::fmt;

use thiserror::Error;

/// Invalid configuration detected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The maximum number of swaps of a multi-swap neighborhood is below 1.
    #[error("maximum number of swaps must be at least 1, got {0}")]
    InvalidMaxSwaps(usize),

    /// The minimum subset size exceeds the maximum.
    #[error("invalid subset size bounds: minimum {min} exceeds maximum {max}")]
    InvalidSizeBounds {
        /// Requested minimum subset size.
        min: usize,
        /// Requested maximum subset size.
        max: usize,
    },

    /// The maximum subset size exceeds the number of IDs in the universe.
    #[error("maximum subset size {max} exceeds universe of {universe} IDs")]
    SizeExceedsUniverse {
        /// Requested maximum subset size.
        max: usize,
        /// Number of IDs in the universe.
        universe: usize,
    },

    /// Some IDs of an initial selection are not part of the universe.
    #[error("IDs {0:?} are not part of the universe")]
    UnknownIds(Vec<usize>),

    /// A subset problem was created over an empty universe.
    #[error("universe must contain at least one ID")]
    EmptyUniverse,
}

/// What went wrong while modifying a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModificationKind {
    /// The ID does not belong to the universe of the solution.
    UnknownId(usize),
    /// A move tried to deselect an ID that is not currently selected.
    NotSelected(usize),
    /// A move tried to select an ID that is already selected.
    NotUnselected(usize),
}

impl fmt::Display for ModificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownId(id) => write!(f, "ID {id} is not part of the universe"),
            Self::NotSelected(id) => write!(f, "ID {id} is not currently selected"),
            Self::NotUnselected(id) => write!(f, "ID {id} is already selected"),
        }
    }
}

/// An invalid modification was attempted on a solution.
///
/// The solution is captured as it was when the modification was rejected;
/// rejected modifications never change the solution, so the snapshot is
/// also its current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} -- modified solution: {solution}")]
pub struct SolutionModificationError<S: fmt::Debug + fmt::Display> {
    kind: ModificationKind,
    solution: S,
}

impl<S: fmt::Debug + fmt::Display> SolutionModificationError<S> {
    /// Creates an error for the given modification failure and solution snapshot.
    pub fn new(kind: ModificationKind, solution: S) -> Self {
        Self { kind, solution }
    }

    /// What went wrong.
    pub fn kind(&self) -> ModificationKind {
        self.kind
    }

    /// The solution that was being modified.
    pub fn solution(&self) -> &S {
        &self.solution
    }

    /// Consumes the error and returns the solution snapshot.
    pub fn into_solution(self) -> S {
        self.solution
    }
}
