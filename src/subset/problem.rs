//! Generic subset-selection problem.
//!
//! Combines a user-supplied [`SubsetObjective`] with the universe of IDs
//! and bounds on the subset size, and implements [`Problem`] on top of it.

use std::collections::BTreeSet;

use rand::Rng;

use super::solution::SubsetSolution;
use crate::error::ConfigError;
use crate::problem::{Direction, Problem};
use crate::random::random_subset;

/// Scores a subset solution.
///
/// Closures `Fn(&SubsetSolution) -> f64` are objectives that are maximized.
pub trait SubsetObjective: Send + Sync {
    /// Evaluates the solution.
    fn evaluate(&self, solution: &SubsetSolution) -> f64;

    /// Whether scores are maximized or minimized.
    fn direction(&self) -> Direction {
        Direction::Maximize
    }
}

impl<F> SubsetObjective for F
where
    F: Fn(&SubsetSolution) -> f64 + Send + Sync,
{
    fn evaluate(&self, solution: &SubsetSolution) -> f64 {
        self(solution)
    }
}

/// Selects between `min_size` and `max_size` IDs from a universe so as to
/// optimize an objective.
///
/// # Examples
///
/// ```
/// use u_subset::problem::Problem;
/// use u_subset::random::create_rng;
/// use u_subset::subset::{SubsetProblem, SubsetSolution};
///
/// let objective = |sol: &SubsetSolution| sol.selected().iter().sum::<usize>() as f64;
/// let problem = SubsetProblem::new(objective, 0..10, 2, 4).unwrap();
///
/// let mut rng = create_rng(1);
/// let sol = problem.create_random_solution(&mut rng);
/// assert!((2..=4).contains(&sol.num_selected()));
/// assert!(problem.delta(10.0, 12.0) > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct SubsetProblem<O> {
    objective: O,
    template: SubsetSolution,
    min_size: usize,
    max_size: usize,
}

impl<O: SubsetObjective> SubsetProblem<O> {
    /// Creates a subset problem.
    ///
    /// # Errors
    /// - [`ConfigError::EmptyUniverse`] if the universe has no IDs
    /// - [`ConfigError::InvalidSizeBounds`] if `min_size > max_size`
    /// - [`ConfigError::SizeExceedsUniverse`] if `max_size` is larger than
    ///   the universe
    pub fn new<I: IntoIterator<Item = usize>>(
        objective: O,
        universe: I,
        min_size: usize,
        max_size: usize,
    ) -> Result<Self, ConfigError> {
        let template = SubsetSolution::new(universe);
        let result = if template.num_ids() == 0 {
            Err(ConfigError::EmptyUniverse)
        } else if min_size > max_size {
            Err(ConfigError::InvalidSizeBounds {
                min: min_size,
                max: max_size,
            })
        } else if max_size > template.num_ids() {
            Err(ConfigError::SizeExceedsUniverse {
                max: max_size,
                universe: template.num_ids(),
            })
        } else {
            Ok(())
        };
        result?;

        Ok(Self {
            objective,
            template,
            min_size,
            max_size,
        })
    }

    /// Creates a subset problem with a fixed subset size.
    ///
    /// # Errors
    /// See [`SubsetProblem::new`].
    pub fn fixed_size<I: IntoIterator<Item = usize>>(
        objective: O,
        universe: I,
        size: usize,
    ) -> Result<Self, ConfigError> {
        Self::new(objective, universe, size, size)
    }

    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// The universe of IDs.
    pub fn universe(&self) -> &BTreeSet<usize> {
        self.template.all_ids()
    }

    pub fn min_size(&self) -> usize {
        self.min_size
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns `true` if the solution's selection size is outside the
    /// bounds of this problem.
    pub fn rejects_size(&self, solution: &SubsetSolution) -> bool {
        !(self.min_size..=self.max_size).contains(&solution.num_selected())
    }

    /// An empty solution over this problem's universe.
    pub fn empty_solution(&self) -> SubsetSolution {
        self.template.clone()
    }
}

impl<O: SubsetObjective> Problem for SubsetProblem<O> {
    type Solution = SubsetSolution;

    fn evaluate(&self, solution: &SubsetSolution) -> f64 {
        self.objective.evaluate(solution)
    }

    fn delta(&self, previous: f64, current: f64) -> f64 {
        self.objective.direction().delta(previous, current)
    }

    /// Picks a size uniformly in `[min_size, max_size]`, then a uniformly
    /// random subset of that size.
    fn create_random_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> SubsetSolution {
        let size = rng.random_range(self.min_size..=self.max_size);
        let selected = random_subset(self.template.all_ids(), size, rng);
        self.template.reselect(selected)
    }
}
