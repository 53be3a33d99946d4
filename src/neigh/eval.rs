//! Move evaluation against a problem.
//!
//! Each move is applied to its own copy of the solution, so the evaluation
//! never shares mutable state. With the `parallel` feature the moves are
//! evaluated on the rayon thread pool.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::types::Move;
use crate::error::SolutionModificationError;
use crate::problem::Problem;

/// Evaluates every move against `solution` and returns each move paired
/// with its delta (positive = improvement).
///
/// `current_score` must be the evaluation of `solution`. The solution
/// itself is not modified.
///
/// # Errors
/// Returns the first modification error if a move cannot be applied to
/// the solution.
pub fn evaluate_moves<P, M>(
    problem: &P,
    solution: &P::Solution,
    current_score: f64,
    moves: Vec<M>,
) -> Result<Vec<(M, f64)>, SolutionModificationError<P::Solution>>
where
    P: Problem,
    M: Move<P::Solution> + Send,
    P::Solution: Sync,
{
    let evaluate_one = |mv: M| -> Result<(M, f64), SolutionModificationError<P::Solution>> {
        let mut candidate = problem.copy_solution(solution);
        mv.apply(&mut candidate)?;
        let score = problem.evaluate(&candidate);
        Ok((mv, problem.delta(current_score, score)))
    };

    #[cfg(feature = "parallel")]
    let moves = moves.into_par_iter();
    #[cfg(not(feature = "parallel"))]
    let moves = moves.into_iter();

    moves.map(evaluate_one).collect()
}

/// Returns the move with the largest delta, if any move improves on the
/// current solution.
///
/// # Errors
/// Propagates modification errors from [`evaluate_moves`].
pub fn best_improving_move<P, M>(
    problem: &P,
    solution: &P::Solution,
    current_score: f64,
    moves: Vec<M>,
) -> Result<Option<(M, f64)>, SolutionModificationError<P::Solution>>
where
    P: Problem,
    M: Move<P::Solution> + Send,
    P::Solution: Sync,
{
    let evaluated = evaluate_moves(problem, solution, current_score, moves)?;
    Ok(evaluated
        .into_iter()
        .filter(|(_, delta)| *delta > 0.0)
        .max_by(|a, b| a.1.total_cmp(&b.1)))
}
