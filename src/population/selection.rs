//! Parent selection over `[0, P)`.
//!
//! All strategies assume **minimization** and break ties in favour of the
//! first index found or drawn.

use super::generation::best_of;
use crate::error::{ConfigError, ConfigResult};
use crate::problem::{MemoryIndex, PopulationLayout, Problem};
use rand::{Rng, RngCore};

/// Chooses one parent index from the current population.
pub trait ParentSelection {
    /// Short display name.
    fn name(&self) -> &str;

    /// Returns an index in `layout.population()`.
    fn select(
        &self,
        problem: &dyn Problem,
        layout: PopulationLayout,
        rng: &mut dyn RngCore,
    ) -> MemoryIndex;
}

/// Always returns the globally best parent.
///
/// # Complexity
/// O(P) per selection
#[derive(Debug, Default, Clone, Copy)]
pub struct FittestSelection;

impl ParentSelection for FittestSelection {
    fn name(&self) -> &str {
        "Fittest"
    }

    fn select(
        &self,
        problem: &dyn Problem,
        layout: PopulationLayout,
        _rng: &mut dyn RngCore,
    ) -> MemoryIndex {
        best_of(problem, layout.population()).0
    }
}

/// Tournament selection: draw `size` members, return the best.
///
/// Members are drawn uniformly with replacement. A draw equal to an earlier
/// one (and not `P - 1`) is bumped by one. This thins out duplicates but
/// does not guarantee distinct members: a bumped draw may still coincide
/// with another member.
///
/// # Complexity
/// O(size²) per selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TournamentSelection {
    size: usize,
}

impl TournamentSelection {
    pub fn new(size: usize) -> ConfigResult<Self> {
        if size == 0 {
            return Err(ConfigError::InvalidTournamentSize(size));
        }
        Ok(Self { size })
    }

    /// Number of contestants.
    pub fn size(&self) -> usize {
        self.size
    }

    fn draw(&self, layout: PopulationLayout, rng: &mut dyn RngCore) -> Vec<MemoryIndex> {
        let last = layout.last();
        let mut members: Vec<MemoryIndex> = Vec::with_capacity(self.size);
        for _ in 0..self.size {
            let mut draw = rng.random_range(layout.population());
            if draw != last && members.contains(&draw) {
                draw += 1;
            }
            members.push(draw);
        }
        members
    }
}

impl ParentSelection for TournamentSelection {
    fn name(&self) -> &str {
        "Tournament"
    }

    fn select(
        &self,
        problem: &dyn Problem,
        layout: PopulationLayout,
        rng: &mut dyn RngCore,
    ) -> MemoryIndex {
        let members = self.draw(layout, rng);
        let mut best = members[0];
        let mut best_value = problem.objective_value(best);
        for &member in &members[1..] {
            let value = problem.objective_value(member);
            if value < best_value {
                best = member;
                best_value = value;
            }
        }
        best
    }
}
