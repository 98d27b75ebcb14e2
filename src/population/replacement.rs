//! Generation replacement strategies.
//!
//! A strategy inspects parents and offspring in `[0, 2P)` and returns the
//! source index of each of the `P` survivors. [`apply_generation`] then
//! copies the survivors into `[0, P)`.

use super::generation::best_of;
use crate::problem::{MemoryIndex, PopulationLayout, Problem};

/// Decides which solutions form the next generation.
pub trait Replacement {
    /// Short display name.
    fn name(&self) -> &str;

    /// Source index for each slot of the next generation.
    ///
    /// Entry `i` must be either the offspring `P + i` or a parent index in
    /// `[0, P)`.
    fn next_generation(&self, problem: &dyn Problem, layout: PopulationLayout) -> Vec<MemoryIndex>;

    /// Computes the next generation and moves it into `[0, P)`.
    fn replace(&self, problem: &mut dyn Problem, layout: PopulationLayout) {
        let survivors = self.next_generation(problem, layout);
        apply_generation(problem, layout, &survivors);
    }
}

/// Copies `survivors` into `[0, P)` without clobbering a source before it
/// is read.
///
/// Parent survivors are first staged into the offspring slot they displace,
/// then every offspring slot `P + i` is copied to `i`.
pub fn apply_generation(problem: &mut dyn Problem, layout: PopulationLayout, survivors: &[MemoryIndex]) {
    debug_assert_eq!(survivors.len(), layout.size());
    for (i, &source) in survivors.iter().enumerate() {
        let (slot, _) = layout.offspring_pair(i);
        if source != slot {
            debug_assert!(source < layout.size(), "survivor {source} displaces offspring {slot}");
            problem.copy_solution(source, slot);
        }
    }
    for i in layout.population() {
        problem.copy_solution(layout.size() + i, i);
    }
}

/// Generational replacement: the offspring replace the parents unchanged.
///
/// Not elitist; the best parent can be lost.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicReplacement;

impl Replacement for BasicReplacement {
    fn name(&self) -> &str {
        "Basic Replacement"
    }

    fn next_generation(&self, _problem: &dyn Problem, layout: PopulationLayout) -> Vec<MemoryIndex> {
        layout.offspring().collect()
    }
}

/// Trans-generational replacement with elitism.
///
/// The offspring survive, except that if the best solution of `[0, 2P)` is
/// a parent it overwrites the worst offspring (first-found on ties). The
/// best objective value of the population therefore never increases.
#[derive(Debug, Default, Clone, Copy)]
pub struct ElitistReplacement;

impl Replacement for ElitistReplacement {
    fn name(&self) -> &str {
        "Trans-generational Elitist Replacement"
    }

    fn next_generation(&self, problem: &dyn Problem, layout: PopulationLayout) -> Vec<MemoryIndex> {
        let (best, _) = best_of(problem, layout.combined());
        let mut survivors: Vec<MemoryIndex> = layout.offspring().collect();

        if best < layout.size() {
            let mut worst = 0;
            let mut worst_value = f64::NEG_INFINITY;
            for (position, &index) in survivors.iter().enumerate() {
                let value = problem.objective_value(index);
                if value > worst_value {
                    worst = position;
                    worst_value = value;
                }
            }
            survivors[worst] = best;
        }
        survivors
    }
}
