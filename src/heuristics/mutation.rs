//! Unconditional perturbation operators.

use super::types::{Heuristic, Mutation};
use crate::problem::{MemoryIndex, Problem};
use rand::{Rng, RngCore};

/// Flips one uniformly chosen bit, whatever the outcome.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomBitFlip;

impl Heuristic for RandomBitFlip {
    fn name(&self) -> &str {
        "Random Bit Flip"
    }

    fn apply(&self, problem: &mut dyn Problem, index: MemoryIndex, rng: &mut dyn RngCore) {
        let bit = rng.random_range(0..problem.number_of_variables());
        problem.bit_flip(bit, index);
    }
}

/// Bit mutation: `intensity` independent uniform random flips.
///
/// An intensity of zero leaves the solution unchanged. As a [`Heuristic`] it
/// uses the intensity given at construction.
#[derive(Debug, Clone, Copy)]
pub struct BitMutation {
    intensity: usize,
}

impl Default for BitMutation {
    fn default() -> Self {
        Self { intensity: 1 }
    }
}

impl BitMutation {
    /// Creates a mutation with a fixed default intensity.
    pub fn new(intensity: usize) -> Self {
        Self { intensity }
    }

    /// The intensity used when applied as a [`Heuristic`].
    pub fn intensity(&self) -> usize {
        self.intensity
    }
}

impl Mutation for BitMutation {
    fn name(&self) -> &str {
        "Bit Mutation"
    }

    fn mutate(
        &self,
        problem: &mut dyn Problem,
        index: MemoryIndex,
        intensity: usize,
        rng: &mut dyn RngCore,
    ) {
        let n = problem.number_of_variables();
        for _ in 0..intensity {
            let bit = rng.random_range(0..n);
            problem.bit_flip(bit, index);
        }
    }
}

impl Heuristic for BitMutation {
    fn name(&self) -> &str {
        "Bit Mutation"
    }

    fn apply(&self, problem: &mut dyn Problem, index: MemoryIndex, rng: &mut dyn RngCore) {
        self.mutate(problem, index, self.intensity, rng);
    }
}
