//! The search-method contract shared by single-point and population methods.

use crate::error::ConfigResult;
use crate::problem::Problem;
use rand::RngCore;

/// Lifecycle of a search method inside a [`Trial`](crate::trial::Trial).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// Constructed, not yet validated against a problem.
    Initialized,
    /// Validated; ticks may run.
    Running,
    /// Budget exhausted; no further ticks.
    Terminated,
}

/// A metaheuristic that advances by discrete main-loop ticks.
///
/// One call to [`run_main_loop`](SearchMethod::run_main_loop) is one
/// iteration (single-point) or one generation (population). It always runs
/// to completion; the caller checks the time budget between ticks.
pub trait SearchMethod {
    /// Short display name.
    fn name(&self) -> &str;

    /// Validates the composition against `problem` and sets up the index
    /// space (e.g. commits `CURRENT` to `BACKUP`, seeds histories, draws
    /// initial memes).
    fn initialize(&mut self, problem: &mut dyn Problem, rng: &mut dyn RngCore) -> ConfigResult<()>;

    /// Executes one tick.
    fn run_main_loop(&mut self, problem: &mut dyn Problem, rng: &mut dyn RngCore);

    /// Objective value of the best solution the method currently holds.
    fn incumbent_value(&self, problem: &dyn Problem) -> f64;
}

impl<M: SearchMethod + ?Sized> SearchMethod for Box<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn initialize(&mut self, problem: &mut dyn Problem, rng: &mut dyn RngCore) -> ConfigResult<()> {
        (**self).initialize(problem, rng)
    }

    fn run_main_loop(&mut self, problem: &mut dyn Problem, rng: &mut dyn RngCore) {
        (**self).run_main_loop(problem, rng)
    }

    fn incumbent_value(&self, problem: &dyn Problem) -> f64 {
        (**self).incumbent_value(problem)
    }
}
