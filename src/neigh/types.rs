//! Core traits for moves and neighborhoods.

use rand::Rng;

use crate::error::SolutionModificationError;
use crate::problem::Solution;

/// A reversible transition applied to a solution in place.
///
/// A move never holds a reference to the solution it modifies; the
/// solution is passed explicitly with exclusive access for the duration of
/// the call.
///
/// Both operations are atomic: if a move cannot be applied, an error is
/// returned and the solution is left exactly as it was.
pub trait Move<S: Solution> {
    /// Applies this move to the solution.
    fn apply(&self, solution: &mut S) -> Result<(), SolutionModificationError<S>>;

    /// Reverts this move, assuming it was the last one applied.
    fn undo(&self, solution: &mut S) -> Result<(), SolutionModificationError<S>>;
}

/// Generates candidate moves for a solution.
///
/// A neighborhood holds only immutable configuration. The random source is
/// supplied per call, so one neighborhood can be shared between threads
/// that each own their RNG.
pub trait Neighborhood<S: Solution>: Send + Sync {
    /// The type of move this neighborhood produces.
    type Move: Move<S>;

    /// Returns a random move, or `None` if no move exists for the
    /// current state of the solution.
    fn random_move<R: Rng + ?Sized>(&self, solution: &S, rng: &mut R) -> Option<Self::Move>;

    /// Returns every distinct move for the current state of the solution.
    ///
    /// Order is not significant. The list is empty if no move exists.
    fn all_moves(&self, solution: &S) -> Vec<Self::Move>;
}
