//! Move and neighborhood contracts.
//!
//! A [`Neighborhood`] generates [`Move`]s for a solution, either one at
//! random or the complete list. Drivers apply a move, evaluate the result
//! and [`Move::undo`] it if it is rejected.

mod eval;
mod types;

pub use eval::{best_improving_move, evaluate_moves};
pub use types::{Move, Neighborhood};
