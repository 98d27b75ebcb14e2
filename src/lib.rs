//! Composable metaheuristics over index-addressed solution memory.
//!
//! Search methods never own solutions. A [`Problem`](problem::Problem)
//! keeps a fixed arena of candidate solutions addressed by integer
//! [`MemoryIndex`](problem::MemoryIndex), and every operator works by
//! flipping, exchanging and copying bits between slots of that arena.
//!
//! - **Heuristics** ([`heuristics`]): Davis's bit hill climbing (single and
//!   k-bit), steepest and shallowest descent, random bit flip and bit
//!   mutation, with pluggable move acceptance.
//! - **Single-point search** ([`single_point`]): Iterated Local Search,
//!   Simulated Annealing and Late Acceptance over the `CURRENT`/`BACKUP`
//!   pair, with commit/rollback after every tick.
//! - **Population search** ([`population`]): a memetic algorithm assembled
//!   from parent selection, crossover, mutation, local search and
//!   replacement operators.
//! - **Multimeme** ([`multimeme`]): per-individual memeplexes that choose
//!   the mutation intensity and the local-search operator, inherited and
//!   innovated across generations.
//! - **SAT** ([`sat`]): a MAX-SAT problem with incremental evaluation and a
//!   DIMACS reader, used as the reference domain.
//! - **Trials** ([`trial`]): seeded, reproducible runs driven by a time
//!   budget or an iteration cap.
//!
//! All objectives are minimized. All randomness is passed in explicitly
//! (see [`random`]), so a seed fully determines a run.
//!
//! # Example
//!
//! ```
//! use u_memetic::heuristics::{BitMutation, DavisBitHc};
//! use u_memetic::population::{
//!     ElitistReplacement, MemeticAlgorithm, MemeticConfig, TournamentSelection,
//!     UniformCrossover,
//! };
//! use u_memetic::random::create_rng;
//! use u_memetic::sat::{Formula, SatProblem};
//! use u_memetic::trial::{Trial, TrialConfig};
//!
//! let mut rng = create_rng(42);
//! let formula = Formula::random(30, 120, 3, &mut rng);
//! let config = MemeticConfig::default().with_population_size(8);
//! let problem = SatProblem::new(formula, config.layout().unwrap().required_memory(), &mut rng);
//!
//! let ma = MemeticAlgorithm::builder(config)
//!     .crossover(UniformCrossover)
//!     .mutation(BitMutation::default())
//!     .local_search(DavisBitHc::new())
//!     .parent_selection(TournamentSelection::new(3).unwrap(), TournamentSelection::new(3).unwrap())
//!     .replacement(ElitistReplacement)
//!     .build()
//!     .unwrap();
//!
//! let result = Trial::with_rng(problem, ma, rng, TrialConfig::default().with_max_iterations(10))
//!     .run()
//!     .unwrap();
//! assert!(result.best_value <= result.trace[0]);
//! ```

pub mod error;
pub mod heuristics;
pub mod multimeme;
pub mod population;
pub mod problem;
pub mod random;
pub mod sat;
pub mod search;
pub mod single_point;
pub mod trial;

#[cfg(test)]
mod test_support;
