//! The problem contract and the solution memory model.
//!
//! A [`Problem`] owns an arena of candidate solutions addressed by integer
//! [`MemoryIndex`] values. Search methods never look inside a solution: they
//! flip bits, exchange bits, copy slots and read cached objective values.
//!
//! # Index conventions
//!
//! - Single-point methods use the two reserved slots [`CURRENT`] and
//!   [`BACKUP`].
//! - Population methods use a [`PopulationLayout`]: parents in `[0, P)`,
//!   offspring in `[P, 2P)`.

mod memory;
mod types;

pub use memory::{MemeRoles, MemoryIndex, PopulationLayout, BACKUP, CURRENT};
pub use types::Problem;
