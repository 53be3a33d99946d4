//! Local search core for subset-selection problems.
//!
//! Choosing a best-scoring subset of a fixed universe of IDs, e.g. a
//! representative core collection from a larger population, is driven by
//! three pieces provided here:
//!
//! - **Subset solutions**: a selected/unselected partition of the universe
//!   that stays exact under repeated mutation.
//! - **Neighborhoods**: generators of reversible moves. Single swaps,
//!   bounded or unbounded multi-swaps sampled uniformly over the whole move
//!   space, and size-bounded additions, deletions and perturbations, all
//!   honouring a set of fixed IDs.
//! - **Problem contract**: evaluation, signed deltas that are positive for
//!   improvements regardless of direction, random creation and copying of
//!   solutions.
//!
//! # Architecture
//!
//! The search loop itself (iteration control, stopping criteria, tabu
//! memory, restarts) belongs to the caller. It holds a problem and a
//! solution, asks a neighborhood for a move, applies it, evaluates, and
//! keeps or undoes it. Random sources are passed to every call, so
//! neighborhoods and problems can be shared across threads while each
//! thread works on its own solution copy.

pub mod error;
pub mod neigh;
pub mod problem;
pub mod random;
pub mod subset;

pub use error::{ConfigError, ModificationKind, SolutionModificationError};
