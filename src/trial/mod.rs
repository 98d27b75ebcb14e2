//! Trial driver.
//!
//! A [`Trial`] owns one problem, one search method and one random stream,
//! and ticks the method until the problem's time budget runs out, an
//! optional iteration cap is reached, or a cancel flag is raised. Trials
//! share nothing, so [`run_trials`] (and, with the `parallel` feature,
//! [`run_trials_parallel`]) can run many of them from a list of seeds.

mod config;
mod runner;

pub use config::TrialConfig;
#[cfg(feature = "parallel")]
pub use runner::run_trials_parallel;
pub use runner::{run_trials, Trial, TrialResult};
