//! Simulated Annealing.

use super::config::{SaConfig, Temperature};
use super::{prepare_slots, settle, MoveStats};
use crate::error::ConfigResult;
use crate::heuristics::{Heuristic, RandomBitFlip};
use crate::problem::{Problem, CURRENT};
use crate::search::SearchMethod;
use rand::{Rng, RngCore};
use tracing::{debug, trace};

/// Simulated Annealing with a single random bit flip per tick.
///
/// A tick flips one random bit of `CURRENT` and accepts it if
/// `delta < 0` or `u < exp(-delta / T)` with `u ~ U[0, 1)`. The schedule
/// advances exactly once per tick, whatever the outcome.
pub struct SimulatedAnnealing {
    temperature: Temperature,
    name: String,
    stats: MoveStats,
}

impl SimulatedAnnealing {
    pub fn new(config: SaConfig) -> ConfigResult<Self> {
        let name = format!("Simulated Annealing with {}", config.cooling);
        Ok(Self {
            temperature: Temperature::new(config)?,
            name,
            stats: MoveStats::default(),
        })
    }

    /// Temperature that the next tick will use.
    pub fn current_temperature(&self) -> f64 {
        self.temperature.current()
    }

    /// Tick and acceptance counters.
    pub fn stats(&self) -> MoveStats {
        self.stats
    }
}

/// Metropolis criterion. Improvements are always accepted.
fn metropolis(delta: f64, temperature: f64, draw: f64) -> bool {
    delta < 0.0 || draw < (-delta / temperature).exp()
}

impl SearchMethod for SimulatedAnnealing {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialize(&mut self, problem: &mut dyn Problem, _rng: &mut dyn RngCore) -> ConfigResult<()> {
        prepare_slots(problem)?;
        debug!(
            temperature = self.temperature.current(),
            cooling = %self.temperature.config().cooling,
            "simulated annealing initialized"
        );
        Ok(())
    }

    fn run_main_loop(&mut self, problem: &mut dyn Problem, rng: &mut dyn RngCore) {
        let before = problem.objective_value(CURRENT);
        RandomBitFlip.apply(problem, CURRENT, rng);
        let after = problem.objective_value(CURRENT);

        let delta = after - before;
        let draw: f64 = rng.random();
        let temperature = self.temperature.current();
        let accept = metropolis(delta, temperature, draw);

        settle(problem, accept, &mut self.stats);
        self.temperature.advance();
        trace!(delta, temperature, accept, "sa tick");
    }

    fn incumbent_value(&self, problem: &dyn Problem) -> f64 {
        problem.objective_value(CURRENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::BACKUP;
    use crate::random::create_rng;
    use crate::single_point::CoolingSchedule;
    use crate::test_support::{ScriptedProblem, WeightedBits};

    /// Yields near-maximal words, so every `random::<f64>()` draw lands
    /// just below 1.0.
    struct HighRng;

    impl RngCore for HighRng {
        fn next_u32(&mut self) -> u32 {
            0xFFFF_F000
        }
        fn next_u64(&mut self) -> u64 {
            0xFFFF_FFFF_FFFF_F000
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0xF0);
        }
    }

    fn cold() -> SaConfig {
        SaConfig::default()
            .with_initial_temperature(1e-9)
            .with_min_temperature(1e-12)
    }

    #[test]
    fn test_metropolis_improvement_always_accepted() {
        assert!(metropolis(-1.0, 1e-300, 0.999_999));
        assert!(metropolis(-1.0, 1e6, 0.999_999));
        assert!(!metropolis(1.0, 1e-9, 0.0));
    }

    #[test]
    fn test_improving_move_accepted_regardless_of_draw() {
        let mut problem = ScriptedProblem::new(5.0, 2, &[4.0]);
        let mut rng = HighRng;
        let mut sa = SimulatedAnnealing::new(cold()).unwrap();
        sa.initialize(&mut problem, &mut rng).unwrap();
        sa.run_main_loop(&mut problem, &mut rng);
        assert_eq!(sa.stats().accepted, 1);
        assert_eq!(problem.objective_value(BACKUP), 4.0);
    }

    #[test]
    fn test_worsening_move_rejected_when_cold() {
        let mut problem = ScriptedProblem::new(5.0, 2, &[6.0]);
        let mut rng = HighRng;
        let mut sa = SimulatedAnnealing::new(cold()).unwrap();
        sa.initialize(&mut problem, &mut rng).unwrap();
        sa.run_main_loop(&mut problem, &mut rng);
        assert_eq!(sa.stats().accepted, 0);
        assert_eq!(problem.objective_value(CURRENT), 5.0);
    }

    #[test]
    fn test_schedule_advances_every_tick() {
        let config = SaConfig::default()
            .with_initial_temperature(8.0)
            .with_min_temperature(0.001)
            .with_cooling(CoolingSchedule::Geometric { alpha: 0.5 });
        let mut problem = ScriptedProblem::new(5.0, 2, &[4.0, 9.0]);
        let mut rng = create_rng(1);
        let mut sa = SimulatedAnnealing::new(config).unwrap();
        sa.initialize(&mut problem, &mut rng).unwrap();
        sa.run_main_loop(&mut problem, &mut rng);
        assert!((sa.current_temperature() - 4.0).abs() < 1e-12);
        sa.run_main_loop(&mut problem, &mut rng);
        assert!((sa.current_temperature() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_commit_invariant_every_tick() {
        let mut problem = WeightedBits::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2);
        let mut rng = create_rng(42);
        let mut sa = SimulatedAnnealing::new(SaConfig::default()).unwrap();
        sa.initialize(&mut problem, &mut rng).unwrap();
        for _ in 0..500 {
            sa.run_main_loop(&mut problem, &mut rng);
            assert_eq!(
                problem.objective_value(CURRENT),
                problem.objective_value(BACKUP)
            );
        }
        assert_eq!(sa.stats().iterations, 500);
    }

    #[test]
    fn test_hot_accepts_most_uphill_moves() {
        let config = SaConfig::default()
            .with_initial_temperature(1e8)
            .with_min_temperature(1e7)
            .with_cooling(CoolingSchedule::Geometric { alpha: 0.99 });
        let mut problem = WeightedBits::new(vec![1.0; 10], 2);
        let mut rng = create_rng(42);
        let mut sa = SimulatedAnnealing::new(config).unwrap();
        sa.initialize(&mut problem, &mut rng).unwrap();
        for _ in 0..1000 {
            sa.run_main_loop(&mut problem, &mut rng);
        }
        let ratio = sa.stats().accepted as f64 / sa.stats().iterations as f64;
        assert!(ratio > 0.9, "expected high acceptance at high temp, got {ratio}");
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::Geometric { alpha: 2.0 });
        assert!(SimulatedAnnealing::new(config).is_err());
    }
}
