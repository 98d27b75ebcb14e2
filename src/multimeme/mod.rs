//! Multimeme memetic algorithm.
//!
//! Every individual carries a *memeplex*: one discrete option per meme
//! slot, stored by the [`Problem`](crate::problem::Problem) next to the
//! decision variables. The memeplex decides how the individual is treated
//! after crossover:
//!
//! - the option in [`MemeRoles::intensity_slot`] is the number of mutation
//!   flips applied to it;
//! - the option in [`MemeRoles::local_search_slot`] indexes the local-search
//!   table.
//!
//! Children inherit a memeplex from their parents
//! ([`MemeplexInheritance`]) and each meme is then reassigned at random with
//! probability equal to the innovation rate. Operator choice thus evolves
//! alongside the solutions.
//!
//! # References
//!
//! Krasnogor & Smith (2001), "Emergence of Profitable Search Strategies
//! Based on a Simple Inheritance Mechanism"
//!
//! [`MemeRoles::intensity_slot`]: crate::problem::MemeRoles::intensity_slot
//! [`MemeRoles::local_search_slot`]: crate::problem::MemeRoles::local_search_slot

mod config;
mod inheritance;
mod runner;

pub use config::MultiMemeConfig;
pub use inheritance::{copy_memeplex, MemeplexInheritance, SimpleInheritance};
pub use runner::{MultiMemeAlgorithm, MultiMemeBuilder};
