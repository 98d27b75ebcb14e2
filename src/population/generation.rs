//! Pieces of the generation loop shared by memetic and multimeme search.

use super::selection::ParentSelection;
use crate::problem::{MemoryIndex, PopulationLayout, Problem};
use rand::RngCore;
use std::ops::Range;

/// Draws two parents and resolves a duplicate pick.
///
/// If both selections return the same index `k`, the second parent becomes
/// `0` when `k == P - 1` and `k + 1` otherwise. The rule is deterministic
/// and always yields a valid, distinct index (for `P >= 2`).
pub fn select_parents(
    first: &dyn ParentSelection,
    second: &dyn ParentSelection,
    problem: &dyn Problem,
    layout: PopulationLayout,
    rng: &mut dyn RngCore,
) -> (MemoryIndex, MemoryIndex) {
    let p1 = first.select(problem, layout, rng);
    let mut p2 = second.select(problem, layout, rng);
    if p1 == p2 {
        p2 = if p2 == layout.last() { 0 } else { p2 + 1 };
    }
    (p1, p2)
}

/// Index and value of the best solution in `range`, first-found on ties.
///
/// # Panics
/// Panics if `range` is empty.
pub fn best_of(problem: &dyn Problem, range: Range<MemoryIndex>) -> (MemoryIndex, f64) {
    assert!(!range.is_empty(), "cannot pick the best of an empty range");
    let mut best_index = range.start;
    let mut best_value = problem.objective_value(range.start);
    for index in range.skip(1) {
        let value = problem.objective_value(index);
        if value < best_value {
            best_index = index;
            best_value = value;
        }
    }
    (best_index, best_value)
}
