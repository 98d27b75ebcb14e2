//! Iterated Local Search.

use super::config::IlsConfig;
use super::{prepare_slots, settle, MoveStats};
use crate::error::ConfigResult;
use crate::heuristics::Heuristic;
use crate::problem::{Problem, CURRENT};
use crate::search::SearchMethod;
use rand::RngCore;
use tracing::{debug, trace};

/// Iterated Local Search over the `CURRENT`/`BACKUP` pair.
///
/// One tick applies the mutation heuristic `intensity_of_mutation` times,
/// then the local-search heuristic `depth_of_search` times, and accepts the
/// result if it is no worse than the value at the start of the tick.
///
/// # Examples
///
/// ```
/// use u_memetic::heuristics::{DavisBitHc, RandomBitFlip};
/// use u_memetic::single_point::{IlsConfig, IteratedLocalSearch};
///
/// let ils = IteratedLocalSearch::new(
///     IlsConfig::default().with_intensity_of_mutation(2),
///     RandomBitFlip,
///     DavisBitHc::new(),
/// );
/// ```
pub struct IteratedLocalSearch {
    config: IlsConfig,
    mutation: Box<dyn Heuristic>,
    local_search: Box<dyn Heuristic>,
    stats: MoveStats,
}

impl IteratedLocalSearch {
    pub fn new(
        config: IlsConfig,
        mutation: impl Heuristic + 'static,
        local_search: impl Heuristic + 'static,
    ) -> Self {
        Self {
            config,
            mutation: Box::new(mutation),
            local_search: Box::new(local_search),
            stats: MoveStats::default(),
        }
    }

    /// Tick and acceptance counters.
    pub fn stats(&self) -> MoveStats {
        self.stats
    }
}

impl SearchMethod for IteratedLocalSearch {
    fn name(&self) -> &str {
        "Iterated Local Search"
    }

    fn initialize(&mut self, problem: &mut dyn Problem, _rng: &mut dyn RngCore) -> ConfigResult<()> {
        self.mutation.validate(problem)?;
        self.local_search.validate(problem)?;
        prepare_slots(problem)?;
        debug!(
            mutation = self.mutation.name(),
            local_search = self.local_search.name(),
            iom = self.config.intensity_of_mutation,
            dos = self.config.depth_of_search,
            "ils initialized"
        );
        Ok(())
    }

    fn run_main_loop(&mut self, problem: &mut dyn Problem, rng: &mut dyn RngCore) {
        let before = problem.objective_value(CURRENT);

        for _ in 0..self.config.intensity_of_mutation {
            self.mutation.apply(problem, CURRENT, rng);
        }
        for _ in 0..self.config.depth_of_search {
            self.local_search.apply(problem, CURRENT, rng);
        }

        let after = problem.objective_value(CURRENT);
        let accept = after <= before;
        settle(problem, accept, &mut self.stats);
        trace!(before, after, accept, "ils tick");
    }

    fn incumbent_value(&self, problem: &dyn Problem) -> f64 {
        problem.objective_value(CURRENT)
    }
}
