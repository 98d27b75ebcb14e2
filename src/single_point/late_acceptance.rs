//! Late Acceptance hill climbing.

use super::{prepare_slots, settle, MoveStats};
use crate::error::{ConfigError, ConfigResult};
use crate::heuristics::{Heuristic, RandomBitFlip};
use crate::problem::{Problem, BACKUP, CURRENT};
use crate::search::SearchMethod;
use rand::RngCore;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Late Acceptance with a FIFO history of length `L`.
///
/// The history is seeded with `L` copies of the initial objective value.
/// Each tick pops the oldest value, flips one random bit of `CURRENT`, and
/// accepts iff the new value is no worse than the popped one. The accepted
/// value (or, on rejection, the popped value) is pushed back, so the history
/// always holds exactly `L` entries. A tick without a prior `initialize`
/// seeds the history from the current value first.
pub struct LateAcceptance {
    length: usize,
    history: VecDeque<f64>,
    stats: MoveStats,
}

impl LateAcceptance {
    pub fn new(length: usize) -> ConfigResult<Self> {
        if length == 0 {
            return Err(ConfigError::InvalidHistoryLength);
        }
        Ok(Self {
            length,
            history: VecDeque::with_capacity(length),
            stats: MoveStats::default(),
        })
    }

    /// Configured history length `L`.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Accepted values, oldest first.
    pub fn history(&self) -> &VecDeque<f64> {
        &self.history
    }

    /// Tick and acceptance counters.
    pub fn stats(&self) -> MoveStats {
        self.stats
    }

    fn seed_history(&mut self, initial: f64) {
        self.history.clear();
        self.history.extend(std::iter::repeat(initial).take(self.length));
        debug!(length = self.length, initial, "late acceptance history seeded");
    }
}

impl SearchMethod for LateAcceptance {
    fn name(&self) -> &str {
        "Late Acceptance"
    }

    fn initialize(&mut self, problem: &mut dyn Problem, _rng: &mut dyn RngCore) -> ConfigResult<()> {
        prepare_slots(problem)?;
        self.seed_history(problem.objective_value(CURRENT));
        Ok(())
    }

    fn run_main_loop(&mut self, problem: &mut dyn Problem, rng: &mut dyn RngCore) {
        if self.history.is_empty() {
            problem.copy_solution(CURRENT, BACKUP);
            self.seed_history(problem.objective_value(CURRENT));
        }
        let compared = self.history.pop_front().unwrap_or(f64::INFINITY);

        RandomBitFlip.apply(problem, CURRENT, rng);
        let candidate = problem.objective_value(CURRENT);

        let accept = candidate <= compared;
        self.history
            .push_back(if accept { candidate } else { compared });
        settle(problem, accept, &mut self.stats);
        trace!(compared, candidate, accept, "late acceptance tick");
    }

    fn incumbent_value(&self, problem: &dyn Problem) -> f64 {
        problem.objective_value(CURRENT)
    }
}
