//! Core traits for problems and their solutions.

use std::fmt;

use rand::Rng;

/// A solution that can be evaluated by a [`Problem`].
///
/// Solutions are plain values: cloning yields an independent deep copy,
/// and `Display` is used when reporting failed modifications.
pub trait Solution: Clone + fmt::Debug + fmt::Display + Send {}

/// Whether a problem's scores are maximized or minimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Higher scores are better.
    #[default]
    Maximize,
    /// Lower scores are better.
    Minimize,
}

impl Direction {
    /// Improvement of `current` over `previous`.
    ///
    /// Positive means `current` is better, whatever the direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_subset::problem::Direction;
    ///
    /// assert_eq!(Direction::Maximize.delta(1.0, 3.0), 2.0);
    /// assert_eq!(Direction::Minimize.delta(1.0, 3.0), -2.0);
    /// ```
    pub fn delta(self, previous: f64, current: f64) -> f64 {
        match self {
            Direction::Maximize => current - previous,
            Direction::Minimize => previous - current,
        }
    }

    /// Returns `true` if `current` strictly improves on `previous`.
    pub fn is_improvement(self, previous: f64, current: f64) -> bool {
        self.delta(previous, current) > 0.0
    }

    /// The worst possible score, useful as an initial "best so far".
    pub fn worst(self) -> f64 {
        match self {
            Direction::Maximize => f64::NEG_INFINITY,
            Direction::Minimize => f64::INFINITY,
        }
    }
}

/// Defines an optimization problem over a solution type.
///
/// Whether scores are maximized or minimized is fixed per implementation.
/// [`Problem::delta`] hides that choice: a positive delta always means
/// improvement, so generic drivers can compare scores without knowing the
/// direction.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_subset::problem::{Direction, Problem};
/// use u_subset::subset::SubsetSolution;
///
/// /// Maximize the sum of the selected IDs.
/// struct SumProblem;
///
/// impl Problem for SumProblem {
///     type Solution = SubsetSolution;
///
///     fn evaluate(&self, solution: &SubsetSolution) -> f64 {
///         solution.selected().iter().sum::<usize>() as f64
///     }
///
///     fn delta(&self, previous: f64, current: f64) -> f64 {
///         Direction::Maximize.delta(previous, current)
///     }
///
///     fn create_random_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> SubsetSolution {
///         let mut sol = SubsetSolution::new(0..10);
///         let _ = sol.select(rng.random_range(0..10));
///         sol
///     }
/// }
///
/// let mut rng = u_subset::random::create_rng(3);
/// let sol = SumProblem.create_random_solution(&mut rng);
/// assert_eq!(sol.num_selected(), 1);
/// ```
pub trait Problem: Send + Sync {
    /// The solution type.
    type Solution: Solution;

    /// Evaluates a solution.
    fn evaluate(&self, solution: &Self::Solution) -> f64;

    /// Improvement of the current evaluation over the previous one.
    ///
    /// Positive means the current solution is better. Minimizing problems
    /// must negate the raw difference (see [`Direction::delta`]).
    fn delta(&self, previous: f64, current: f64) -> f64;

    /// Creates a random solution, e.g. as the starting point of a search.
    fn create_random_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Solution;

    /// Creates an independent deep copy of a solution.
    fn copy_solution(&self, solution: &Self::Solution) -> Self::Solution {
        solution.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_delta_sign() {
        assert!(Direction::Maximize.delta(1.0, 2.0) > 0.0);
        assert!(Direction::Maximize.delta(2.0, 1.0) < 0.0);
        assert!(Direction::Minimize.delta(2.0, 1.0) > 0.0);
        assert!(Direction::Minimize.delta(1.0, 2.0) < 0.0);
        assert_eq!(Direction::Minimize.delta(1.5, 1.5), 0.0);
    }

    #[test]
    fn test_direction_improvement_and_worst() {
        assert!(Direction::Maximize.is_improvement(0.0, 0.5));
        assert!(!Direction::Maximize.is_improvement(0.5, 0.5));
        assert!(Direction::Minimize.is_improvement(0.5, 0.0));

        assert!(Direction::Maximize.is_improvement(Direction::Maximize.worst(), -1e300));
        assert!(Direction::Minimize.is_improvement(Direction::Minimize.worst(), 1e300));
    }

    #[test]
    fn test_direction_default_is_maximize() {
        assert_eq!(Direction::default(), Direction::Maximize);
    }
}
