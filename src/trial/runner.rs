//! Trial execution.

use super::config::TrialConfig;
use crate::error::ConfigResult;
use crate::problem::Problem;
use crate::random::{create_rng, SearchRng};
use crate::search::{SearchMethod, SearchState};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome of one trial.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialResult {
    /// Display name of the search method.
    pub method: String,

    /// Seed the trial ran with.
    pub seed: u64,

    /// Number of completed ticks.
    pub iterations: usize,

    /// Incumbent value when the trial stopped.
    pub final_value: f64,

    /// Best incumbent value observed at any point of the trial.
    pub best_value: f64,

    /// Incumbent value before the first tick and after every tick that
    /// finished within the time budget. Empty when tracing is disabled.
    pub trace: Vec<f64>,

    /// Whether the trial stopped because the cancel flag was raised.
    pub cancelled: bool,
}

/// One independent run of a search method on a problem.
///
/// # Examples
///
/// ```
/// use u_memetic::heuristics::{DavisBitHc, RandomBitFlip};
/// use u_memetic::random::create_rng;
/// use u_memetic::sat::{Formula, SatProblem};
/// use u_memetic::single_point::{IlsConfig, IteratedLocalSearch};
/// use u_memetic::trial::{Trial, TrialConfig};
///
/// let mut rng = create_rng(3);
/// let formula = Formula::random(20, 80, 3, &mut rng);
/// let problem = SatProblem::new(formula, 2, &mut rng);
/// let ils = IteratedLocalSearch::new(IlsConfig::default(), RandomBitFlip, DavisBitHc::new());
///
/// let mut trial = Trial::new(problem, ils, TrialConfig::default().with_max_iterations(50));
/// let result = trial.run().unwrap();
/// assert_eq!(result.iterations, 50);
/// assert!(result.best_value <= result.trace[0]);
/// ```
pub struct Trial<P, M> {
    problem: P,
    method: M,
    rng: SearchRng,
    config: TrialConfig,
    state: SearchState,
    iterations: usize,
    best_value: f64,
    trace: Vec<f64>,
    cancel: Option<Arc<AtomicBool>>,
    cancelled: bool,
}

impl<P: Problem, M: SearchMethod> Trial<P, M> {
    /// Creates a trial whose random stream is seeded from `config.seed`.
    pub fn new(problem: P, method: M, config: TrialConfig) -> Self {
        let rng = create_rng(config.seed);
        Self::with_rng(problem, method, rng, config)
    }

    /// Creates a trial that continues an existing random stream.
    ///
    /// Useful when the same stream already produced the problem's initial
    /// solutions.
    pub fn with_rng(problem: P, method: M, rng: SearchRng, config: TrialConfig) -> Self {
        Self {
            problem,
            method,
            rng,
            config,
            state: SearchState::Initialized,
            iterations: 0,
            best_value: f64::INFINITY,
            trace: Vec::new(),
            cancel: None,
            cancelled: false,
        }
    }

    /// Stops the trial at the end of the tick during which `flag` is set.
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn method(&self) -> &M {
        &self.method
    }

    /// Completed ticks.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Gives the problem back, e.g. to read its best solution.
    pub fn into_problem(self) -> P {
        self.problem
    }

    /// Validates and initializes the search method.
    ///
    /// Does nothing once the trial has started.
    pub fn start(&mut self) -> ConfigResult<()> {
        if self.state != SearchState::Initialized {
            return Ok(());
        }
        self.method.initialize(&mut self.problem, &mut self.rng)?;
        self.state = SearchState::Running;

        let value = self.method.incumbent_value(&self.problem);
        self.best_value = value;
        if self.config.record_trace {
            self.trace.push(value);
        }
        debug!(
            method = self.method.name(),
            seed = self.config.seed,
            initial = value,
            "trial started"
        );
        Ok(())
    }

    /// Runs one tick and returns the incumbent value afterwards.
    ///
    /// Starts the trial first if needed. A terminated trial does not tick.
    pub fn step(&mut self) -> ConfigResult<f64> {
        self.start()?;
        if self.state == SearchState::Terminated {
            return Ok(self.method.incumbent_value(&self.problem));
        }

        self.method.run_main_loop(&mut self.problem, &mut self.rng);
        self.iterations += 1;

        let value = self.method.incumbent_value(&self.problem);
        if value < self.best_value {
            debug!(
                method = self.method.name(),
                iteration = self.iterations,
                best = value,
                "new best"
            );
            self.best_value = value;
        }
        Ok(value)
    }

    /// Ticks until the time budget expires, the iteration cap is reached
    /// or the cancel flag is raised.
    ///
    /// The problem's budget is checked between ticks only; a tick always
    /// completes. The value after the tick that crossed the budget is not
    /// traced.
    ///
    /// Without an iteration cap this only returns if the problem's
    /// [`has_time_expired`](Problem::has_time_expired) eventually holds.
    pub fn run(&mut self) -> ConfigResult<TrialResult> {
        self.start()?;
        while self.state == SearchState::Running {
            if self.should_stop() {
                self.state = SearchState::Terminated;
                break;
            }
            let value = self.step()?;
            if self.config.record_trace && !self.problem.has_time_expired() {
                self.trace.push(value);
            }
        }

        let result = self.result();
        info!(
            method = %result.method,
            seed = result.seed,
            iterations = result.iterations,
            best = result.best_value,
            cancelled = result.cancelled,
            "trial finished"
        );
        Ok(result)
    }

    /// Snapshot of the trial so far.
    pub fn result(&self) -> TrialResult {
        TrialResult {
            method: self.method.name().to_string(),
            seed: self.config.seed,
            iterations: self.iterations,
            final_value: self.method.incumbent_value(&self.problem),
            best_value: self.best_value,
            trace: self.trace.clone(),
            cancelled: self.cancelled,
        }
    }

    fn should_stop(&mut self) -> bool {
        if let Some(ref flag) = self.cancel {
            if flag.load(Ordering::Relaxed) {
                self.cancelled = true;
                return true;
            }
        }
        if self
            .config
            .max_iterations
            .is_some_and(|cap| self.iterations >= cap)
        {
            return true;
        }
        self.problem.has_time_expired()
    }
}

/// Runs one trial per seed, sequentially.
///
/// For each seed a fresh stream is created and handed to `factory`, which
/// builds the problem and the search method; the trial then continues that
/// stream. Stops at the first configuration error.
pub fn run_trials<P, M, F>(
    seeds: &[u64],
    config: &TrialConfig,
    factory: F,
) -> ConfigResult<Vec<TrialResult>>
where
    P: Problem,
    M: SearchMethod,
    F: Fn(&mut SearchRng) -> (P, M),
{
    seeds
        .iter()
        .map(|&seed| run_seeded(seed, config, &factory))
        .collect()
}

/// Runs one trial per seed on the rayon thread pool.
///
/// Results are in seed order and identical to [`run_trials`].
#[cfg(feature = "parallel")]
pub fn run_trials_parallel<P, M, F>(
    seeds: &[u64],
    config: &TrialConfig,
    factory: F,
) -> ConfigResult<Vec<TrialResult>>
where
    P: Problem,
    M: SearchMethod,
    F: Fn(&mut SearchRng) -> (P, M) + Sync,
{
    use rayon::prelude::*;

    seeds
        .par_iter()
        .map(|&seed| run_seeded(seed, config, &factory))
        .collect()
}

fn run_seeded<P, M, F>(seed: u64, config: &TrialConfig, factory: &F) -> ConfigResult<TrialResult>
where
    P: Problem,
    M: SearchMethod,
    F: Fn(&mut SearchRng) -> (P, M),
{
    let mut rng = create_rng(seed);
    let (problem, method) = factory(&mut rng);
    let config = config.clone().with_seed(seed);
    Trial::with_rng(problem, method, rng, config).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::heuristics::{DavisBitHc, RandomBitFlip};
    use crate::problem::CURRENT;
    use crate::sat::{Formula, SatProblem};
    use crate::single_point::{IlsConfig, IteratedLocalSearch, LateAcceptance};
    use crate::test_support::WeightedBits;

    fn ils() -> IteratedLocalSearch {
        IteratedLocalSearch::new(IlsConfig::default(), RandomBitFlip, DavisBitHc::new())
    }

    #[test]
    fn test_state_transitions() {
        let problem = WeightedBits::new(vec![1.0; 4], 2);
        let mut trial = Trial::new(problem, ils(), TrialConfig::default().with_max_iterations(3));
        assert_eq!(trial.state(), SearchState::Initialized);
        trial.start().unwrap();
        assert_eq!(trial.state(), SearchState::Running);
        let result = trial.run().unwrap();
        assert_eq!(trial.state(), SearchState::Terminated);
        assert_eq!(result.iterations, 3);

        // Terminated trials do not tick.
        trial.step().unwrap();
        assert_eq!(trial.iterations(), 3);
    }

    #[test]
    fn test_trace_skips_tick_past_budget() {
        // Five budget checks: three ticks run, the third crosses the budget.
        let problem = WeightedBits::new(vec![1.0; 4], 2).expire_after(5);
        let mut trial = Trial::new(problem, ils(), TrialConfig::default());
        let result = trial.run().unwrap();
        assert_eq!(result.iterations, 3);
        // Initial value plus the first two ticks.
        assert_eq!(result.trace.len(), 3);
        assert_eq!(result.trace[0], 4.0);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_expired_before_start_runs_nothing() {
        let problem = WeightedBits::new(vec![1.0; 4], 2).expire_after(0);
        let mut trial = Trial::new(problem, ils(), TrialConfig::default());
        let result = trial.run().unwrap();
        assert_eq!(result.iterations, 0);
        assert_eq!(result.trace, vec![4.0]);
        assert_eq!(result.final_value, 4.0);
    }

    #[test]
    fn test_cancel_flag() {
        let flag = Arc::new(AtomicBool::new(true));
        let problem = WeightedBits::new(vec![1.0; 4], 2);
        let mut trial = Trial::new(problem, ils(), TrialConfig::default()).with_cancel(flag);
        let result = trial.run().unwrap();
        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_no_trace_when_disabled() {
        let problem = WeightedBits::new(vec![1.0; 4], 2);
        let config = TrialConfig::default()
            .with_max_iterations(5)
            .with_record_trace(false);
        let result = Trial::new(problem, ils(), config).run().unwrap();
        assert!(result.trace.is_empty());
        assert_eq!(result.best_value, 0.0);
    }

    #[test]
    fn test_config_error_surfaces() {
        let problem = WeightedBits::new(vec![1.0; 4], 1);
        let mut trial = Trial::new(problem, ils(), TrialConfig::default());
        assert_eq!(
            trial.run().err(),
            Some(ConfigError::InsufficientMemory {
                required: 2,
                available: 1
            })
        );
        assert_eq!(trial.state(), SearchState::Initialized);
    }

    #[test]
    fn test_best_tracks_minimum_of_trace() {
        let mut rng = create_rng(17);
        let formula = Formula::random(30, 130, 3, &mut rng);
        let problem = SatProblem::new(formula, 2, &mut rng);
        let method = LateAcceptance::new(5).unwrap();
        let mut trial = Trial::with_rng(
            problem,
            method,
            rng,
            TrialConfig::default().with_max_iterations(200),
        );
        let result = trial.run().unwrap();
        let min = result.trace.iter().copied().fold(f64::INFINITY, f64::min);
        assert_eq!(result.best_value, min);
        assert_eq!(result.final_value, trial.problem().objective_value(CURRENT));
    }

    #[test]
    fn test_run_trials_is_reproducible() {
        let factory = |rng: &mut SearchRng| {
            let formula = Formula::random(25, 100, 3, rng);
            (SatProblem::new(formula, 2, rng), ils())
        };
        let config = TrialConfig::default().with_max_iterations(20);
        let first = run_trials(&[1, 2, 3], &config, factory).unwrap();
        let second = run_trials(&[1, 2, 3], &config, factory).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.iter().map(|r| r.seed).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let factory = |rng: &mut SearchRng| {
            let formula = Formula::random(25, 100, 3, rng);
            (SatProblem::new(formula, 2, rng), ils())
        };
        let config = TrialConfig::default().with_max_iterations(20);
        let sequential = run_trials(&[5, 6, 7, 8], &config, factory).unwrap();
        let parallel = run_trials_parallel(&[5, 6, 7, 8], &config, factory).unwrap();
        assert_eq!(sequential, parallel);
    }
}
