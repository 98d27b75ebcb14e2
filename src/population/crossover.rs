//! Crossover operators.

use crate::problem::{MemoryIndex, Problem};
use rand::{Rng, RngCore};

/// Recombines two parents into two children, in place in the problem's store.
pub trait Crossover {
    /// Short display name.
    fn name(&self) -> &str;

    /// Writes the offspring of `parent1 x parent2` into `child1` and `child2`.
    fn crossover(
        &self,
        problem: &mut dyn Problem,
        parent1: MemoryIndex,
        parent2: MemoryIndex,
        child1: MemoryIndex,
        child2: MemoryIndex,
        rng: &mut dyn RngCore,
    );
}

/// Uniform crossover.
///
/// Copies `parent1 -> child1` and `parent2 -> child2`, then for every
/// variable exchanges the bit between the children with probability 1/2.
/// At every position the two children hold the two parental values, either
/// as-is or swapped.
///
/// # Complexity
/// O(n)
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformCrossover;

impl Crossover for UniformCrossover {
    fn name(&self) -> &str {
        "Uniform Crossover"
    }

    fn crossover(
        &self,
        problem: &mut dyn Problem,
        parent1: MemoryIndex,
        parent2: MemoryIndex,
        child1: MemoryIndex,
        child2: MemoryIndex,
        rng: &mut dyn RngCore,
    ) {
        problem.copy_solution(parent1, child1);
        problem.copy_solution(parent2, child2);
        for bit in 0..problem.number_of_variables() {
            if rng.random::<f64>() < 0.5 {
                problem.exchange_bits(child1, child2, bit);
            }
        }
    }
}
