//! Population-based search methods and their operators.
//!
//! One generation pairs up parents from `[0, P)`, writes two offspring per
//! pair into `[P, 2P)`, improves them in place, and finally lets a
//! [`Replacement`] decide which solutions become the next `[0, P)`.
//!
//! # Operators
//!
//! - [`ParentSelection`]: [`FittestSelection`], [`TournamentSelection`]
//! - [`Crossover`]: [`UniformCrossover`]
//! - [`Replacement`]: [`BasicReplacement`], [`ElitistReplacement`]
//!
//! # Search methods
//!
//! - [`MemeticAlgorithm`]: crossover, mutation and local search with fixed
//!   operators
//!
//! The adaptive variant lives in [`multimeme`](crate::multimeme).
//!
//! # References
//!
//! - Moscato (1989), "On Evolution, Search, Optimization, Genetic Algorithms
//!   and Martial Arts: Towards Memetic Algorithms"
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

mod config;
mod crossover;
mod generation;
mod memetic;
mod replacement;
mod selection;

pub use config::MemeticConfig;
pub use crossover::{Crossover, UniformCrossover};
pub use generation::{best_of, select_parents};
pub use memetic::{MemeticAlgorithm, MemeticBuilder};
pub use replacement::{apply_generation, BasicReplacement, ElitistReplacement, Replacement};
pub use selection::{FittestSelection, ParentSelection, TournamentSelection};
