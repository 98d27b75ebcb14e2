//! Operator traits.

use crate::error::ConfigResult;
use crate::problem::{MemoryIndex, Problem};
use rand::RngCore;

/// A heuristic applied in place to one solution slot.
///
/// Used both as a local-search step and as a perturbation. Implementations
/// must keep every index they touch within `0..problem.number_of_variables()`
/// for bits and equal to `index` for slots.
pub trait Heuristic {
    /// Short display name.
    fn name(&self) -> &str;

    /// Applies one sweep/perturbation to the solution at `index`.
    fn apply(&self, problem: &mut dyn Problem, index: MemoryIndex, rng: &mut dyn RngCore);

    /// Checks the operator's parameters against `problem`.
    ///
    /// Called by search methods before their first tick.
    fn validate(&self, _problem: &dyn Problem) -> ConfigResult<()> {
        Ok(())
    }
}

/// A mutation whose strength is supplied per call.
///
/// Multimeme individuals decide their own intensity, so it is an argument
/// here rather than operator state.
pub trait Mutation {
    /// Short display name.
    fn name(&self) -> &str;

    /// Mutates the solution at `index` with the given intensity.
    fn mutate(
        &self,
        problem: &mut dyn Problem,
        index: MemoryIndex,
        intensity: usize,
        rng: &mut dyn RngCore,
    );
}
