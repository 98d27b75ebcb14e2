//! Error types.
//!
//! Two families exist: [`ConfigError`] for misconfigured operators and
//! compositions (surfaced at construction or at
//! [`SearchMethod::initialize`](crate::search::SearchMethod::initialize)),
//! and [`SatError`] for malformed DIMACS input. Accept/reject decisions are
//! plain booleans and never travel through these types.

use thiserror::Error;

/// Misconfiguration of an operator, a search method or a composition.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// A composition was built without one of its required operators.
    #[error("missing required operator: {0}")]
    MissingOperator(&'static str),

    /// Population size must be a positive even number (offspring come in pairs).
    #[error("population size must be positive and even, got {0}")]
    InvalidPopulationSize(usize),

    /// Tournament needs at least one contestant.
    #[error("tournament size must be at least 1, got {0}")]
    InvalidTournamentSize(usize),

    /// A k-bit block needs at least one bit.
    #[error("k-bit block size must be at least 1")]
    ZeroBlockSize,

    /// A k-bit block cannot exceed the solution length.
    #[error("k-bit block size {k} is invalid for {variables} variables")]
    InvalidBlockSize { k: usize, variables: usize },

    /// The problem store is too small for the index layout of a search method.
    #[error("memory holds {available} solutions but {required} are required")]
    InsufficientMemory { required: usize, available: usize },

    /// `options_per_meme` does not cover every meme slot of the problem.
    #[error("options per meme has {configured} entries but the problem has {memes} memes")]
    MemeCountMismatch { configured: usize, memes: usize },

    /// A meme slot has no options to choose from.
    #[error("meme slot {0} must allow at least one option")]
    EmptyMemeOptions(usize),

    /// A meme role points at a slot the problem does not have.
    #[error("meme role `{role}` uses slot {slot}, but only {memes} memes exist")]
    MemeSlotOutOfRange {
        role: &'static str,
        slot: usize,
        memes: usize,
    },

    /// Local-search meme options and the operator table disagree in size.
    #[error("local-search meme allows {options} options but {operators} operators are configured")]
    LocalSearchTableMismatch { options: usize, operators: usize },

    /// Probability-valued parameter outside `[0, 1]`.
    #[error("{name} must be in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    /// Temperature or cooling parameter out of range.
    #[error("invalid cooling schedule: {0}")]
    InvalidCooling(String),

    /// Late acceptance needs a history of at least one value.
    #[error("late acceptance length must be at least 1")]
    InvalidHistoryLength,

    /// A search method needs at least one decision variable.
    #[error("problem has no decision variables")]
    NoVariables,
}

/// Failure while reading a CNF formula.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SatError {
    /// Missing or malformed `p cnf <vars> <clauses>` line.
    #[error("line {line}: invalid problem header")]
    InvalidHeader { line: usize },

    /// Clause data appeared before the header.
    #[error("line {line}: clause data before problem header")]
    MissingHeader { line: usize },

    /// A token could not be parsed as a literal.
    #[error("line {line}: invalid literal `{token}`")]
    InvalidLiteral { line: usize, token: String },

    /// A literal references a variable beyond the declared count.
    #[error("line {line}: variable {variable} exceeds declared count {declared}")]
    VariableOutOfRange {
        line: usize,
        variable: usize,
        declared: usize,
    },

    /// The number of parsed clauses differs from the header.
    #[error("expected {expected} clauses, found {found}")]
    ClauseCountMismatch { expected: usize, found: usize },
}

/// Result alias for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;
