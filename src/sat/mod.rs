//! MAX-SAT problem domain.
//!
//! A concrete [`Problem`](crate::problem::Problem) whose objective is the
//! number of unsatisfied clauses of a CNF formula. It backs the tests and
//! benchmarks of this crate and can be used directly by a harness.
//!
//! - [`Formula`]: clause storage, DIMACS parsing and random k-SAT generation
//! - [`SatProblem`]: an arena of assignments with incrementally maintained
//!   objective values and per-slot memes

mod formula;
mod problem;

pub use formula::{Formula, Literal};
pub use problem::SatProblem;
