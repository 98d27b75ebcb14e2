//! Leaf operators acting on a single memory index.
//!
//! Operators hold no orchestration logic: each call performs one sweep (or
//! one perturbation) on the slot it is given and returns.
//!
//! # Local search
//!
//! - [`DavisBitHc`]: first-improvement sweep in random permutation order
//! - [`KBitDavisHc`]: the same sweep over blocks of `k` bits
//! - [`SteepestDescentHc`]: best single flip of a full neighbourhood scan
//! - [`ShallowestDescentHc`]: smallest strictly improving single flip
//! - [`NoopHeuristic`]: leaves the solution untouched
//!
//! # Perturbation
//!
//! - [`RandomBitFlip`]: one unconditional random flip
//! - [`BitMutation`]: `intensity` unconditional random flips
//!
//! # Acceptance
//!
//! - [`MoveAcceptance`] decouples the accept rule from the traversal order
//!   of the bit-flip drivers.

mod acceptance;
mod hill_climbing;
mod mutation;
mod types;

pub use acceptance::{MoveAcceptance, NonWorsening, StrictImprovement};
pub use hill_climbing::{
    DavisBitHc, KBitDavisHc, NoopHeuristic, ShallowestDescentHc, SteepestDescentHc,
};
pub use mutation::{BitMutation, RandomBitFlip};
pub use types::{Heuristic, Mutation};
