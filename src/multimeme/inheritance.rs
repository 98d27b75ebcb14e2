//! Memeplex inheritance.

use crate::problem::{MemoryIndex, Problem};
use rand::{Rng, RngCore};

/// Passes memetic material from two parents to their two children.
///
/// Called after crossover, so it overrides whatever memes the crossover's
/// solution copies left in the children.
pub trait MemeplexInheritance {
    /// Short display name.
    fn name(&self) -> &str;

    fn inherit(
        &self,
        problem: &mut dyn Problem,
        parent1: MemoryIndex,
        parent2: MemoryIndex,
        child1: MemoryIndex,
        child2: MemoryIndex,
        rng: &mut dyn RngCore,
    );
}

/// Copies every meme option of `src` to `dst`.
pub fn copy_memeplex(problem: &mut dyn Problem, src: MemoryIndex, dst: MemoryIndex) {
    for slot in 0..problem.number_of_memes() {
        let option = problem.meme_option(src, slot);
        problem.set_meme_option(dst, slot, option);
    }
}

/// Simple inheritance: both children take the memeplex of the strictly
/// better parent; on equal objective values one parent is picked uniformly.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleInheritance;

impl MemeplexInheritance for SimpleInheritance {
    fn name(&self) -> &str {
        "Simple Inheritance"
    }

    fn inherit(
        &self,
        problem: &mut dyn Problem,
        parent1: MemoryIndex,
        parent2: MemoryIndex,
        child1: MemoryIndex,
        child2: MemoryIndex,
        rng: &mut dyn RngCore,
    ) {
        let f1 = problem.objective_value(parent1);
        let f2 = problem.objective_value(parent2);
        let donor = if f1 == f2 {
            if rng.random_bool(0.5) {
                parent1
            } else {
                parent2
            }
        } else if f1 < f2 {
            parent1
        } else {
            parent2
        };
        copy_memeplex(problem, donor, child1);
        copy_memeplex(problem, donor, child2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::test_support::WeightedBits;

    /// Parents at 0 and 1 with distinct memeplexes; children at 2 and 3.
    fn family(cost1: f64, cost2: f64) -> WeightedBits {
        let mut problem = WeightedBits::new(vec![cost1, cost2], 4).with_memes(2);
        problem.set(0, &[true, false]);
        problem.set(1, &[false, true]);
        problem.memes[0] = vec![1, 1];
        problem.memes[1] = vec![2, 0];
        problem.memes[2] = vec![9, 9];
        problem.memes[3] = vec![9, 9];
        problem
    }

    #[test]
    fn test_better_parent_wins() {
        let mut rng = create_rng(0);

        let mut problem = family(1.0, 5.0);
        SimpleInheritance.inherit(&mut problem, 0, 1, 2, 3, &mut rng);
        assert_eq!(problem.memes[2], vec![1, 1]);
        assert_eq!(problem.memes[3], vec![1, 1]);

        let mut problem = family(5.0, 1.0);
        SimpleInheritance.inherit(&mut problem, 0, 1, 2, 3, &mut rng);
        assert_eq!(problem.memes[2], vec![2, 0]);
        assert_eq!(problem.memes[3], vec![2, 0]);
    }

    #[test]
    fn test_equal_parents_pick_one_for_both_children() {
        let mut rng = create_rng(42);
        let mut picked = [false; 2];
        for _ in 0..100 {
            let mut problem = family(3.0, 3.0);
            SimpleInheritance.inherit(&mut problem, 0, 1, 2, 3, &mut rng);
            assert_eq!(problem.memes[2], problem.memes[3]);
            match problem.memes[2].as_slice() {
                [1, 1] => picked[0] = true,
                [2, 0] => picked[1] = true,
                other => panic!("unexpected memeplex {other:?}"),
            }
        }
        assert_eq!(picked, [true, true]);
    }

    #[test]
    fn test_parents_keep_their_memes() {
        let mut rng = create_rng(1);
        let mut problem = family(1.0, 5.0);
        SimpleInheritance.inherit(&mut problem, 0, 1, 2, 3, &mut rng);
        assert_eq!(problem.memes[0], vec![1, 1]);
        assert_eq!(problem.memes[1], vec![2, 0]);
    }
}
