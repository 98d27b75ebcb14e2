//! Single-point search methods.
//!
//! All methods keep one incumbent at [`CURRENT`](crate::problem::CURRENT)
//! and its last committed copy at [`BACKUP`](crate::problem::BACKUP). Every
//! tick ends by either committing `CURRENT -> BACKUP` or rolling back
//! `BACKUP -> CURRENT`, so both slots hold equal objective values between
//! ticks.
//!
//! - [`IteratedLocalSearch`]: perturb, descend, accept if not worse
//! - [`SimulatedAnnealing`]: Metropolis acceptance under a cooling schedule
//! - [`LateAcceptance`]: compare against the value accepted `L` ticks ago
//!
//! # References
//!
//! - Lourenço, Martin & Stützle (2003), "Iterated Local Search"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Burke & Bykov (2017), "The Late Acceptance Hill-Climbing Heuristic"

mod annealing;
mod config;
mod ils;
mod late_acceptance;

pub use annealing::SimulatedAnnealing;
pub use config::{CoolingSchedule, IlsConfig, SaConfig, Temperature};
pub use ils::IteratedLocalSearch;
pub use late_acceptance::LateAcceptance;

use crate::error::{ConfigError, ConfigResult};
use crate::problem::{Problem, BACKUP, CURRENT};

/// Counters shared by the single-point methods.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveStats {
    /// Ticks executed.
    pub iterations: usize,
    /// Ticks that committed `CURRENT -> BACKUP`.
    pub accepted: usize,
}

/// Checks the store can host `CURRENT`/`BACKUP` and aligns the two slots.
fn prepare_slots(problem: &mut dyn Problem) -> ConfigResult<()> {
    if problem.number_of_variables() == 0 {
        return Err(ConfigError::NoVariables);
    }
    let available = problem.memory_size();
    if available <= BACKUP {
        return Err(ConfigError::InsufficientMemory {
            required: BACKUP + 1,
            available,
        });
    }
    problem.copy_solution(CURRENT, BACKUP);
    Ok(())
}

/// Commits or rolls back the tick's move.
fn settle(problem: &mut dyn Problem, accept: bool, stats: &mut MoveStats) {
    stats.iterations += 1;
    if accept {
        stats.accepted += 1;
        problem.copy_solution(CURRENT, BACKUP);
    } else {
        problem.copy_solution(BACKUP, CURRENT);
    }
}
