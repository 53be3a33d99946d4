//! Subset selection.
//!
//! A [`SubsetSolution`] partitions a fixed universe of IDs into selected
//! and unselected IDs. [`SubsetMove`]s add and remove IDs, and the
//! neighborhoods in [`neigh`] generate them. [`SubsetProblem`] turns an
//! objective over subsets into a [`Problem`](crate::problem::Problem).
//!
//! # Examples
//!
//! ```
//! use u_subset::neigh::{Move, Neighborhood};
//! use u_subset::problem::Problem;
//! use u_subset::random::create_rng;
//! use u_subset::subset::neigh::MultiSwapNeighborhood;
//! use u_subset::subset::{SubsetProblem, SubsetSolution};
//!
//! // pick 4 of 12 IDs with the largest sum
//! let objective = |sol: &SubsetSolution| sol.selected().iter().sum::<usize>() as f64;
//! let problem = SubsetProblem::fixed_size(objective, 0..12, 4).unwrap();
//! let neigh = MultiSwapNeighborhood::bounded(2).unwrap();
//!
//! let mut rng = create_rng(42);
//! let mut sol = problem.create_random_solution(&mut rng);
//! let mut score = problem.evaluate(&sol);
//! for _ in 0..500 {
//!     let mv = neigh.random_move(&sol, &mut rng).unwrap();
//!     mv.apply(&mut sol).unwrap();
//!     let candidate = problem.evaluate(&sol);
//!     if problem.delta(score, candidate) >= 0.0 {
//!         score = candidate;
//!     } else {
//!         mv.undo(&mut sol).unwrap();
//!     }
//! }
//! assert_eq!(sol.num_selected(), 4);
//! ```

mod moves;
pub mod neigh;
mod problem;
mod solution;

pub use moves::SubsetMove;
pub use problem::{SubsetObjective, SubsetProblem};
pub use solution::{ModificationResult, SubsetSolution};
