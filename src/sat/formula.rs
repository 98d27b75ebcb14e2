//! CNF formulas.

use crate::error::SatError;
use rand::{Rng, RngCore};

/// A literal: a variable and its polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal {
    /// Zero-based variable index.
    pub variable: usize,
    /// `true` for `x`, `false` for `¬x`.
    pub positive: bool,
}

impl Literal {
    /// Creates a literal.
    pub fn new(variable: usize, positive: bool) -> Self {
        Self { variable, positive }
    }

    /// Converts a non-zero DIMACS integer (`3`, `-3`) to a literal.
    pub fn from_dimacs(value: i64) -> Option<Self> {
        if value == 0 {
            return None;
        }
        Some(Self::new(value.unsigned_abs() as usize - 1, value > 0))
    }

    /// Whether the literal holds under `value` for its variable.
    #[inline]
    pub fn is_satisfied_by(&self, value: bool) -> bool {
        value == self.positive
    }
}

/// A formula in conjunctive normal form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    num_variables: usize,
    clauses: Vec<Vec<Literal>>,
}

impl Formula {
    /// Creates a formula from explicit clauses.
    ///
    /// # Panics
    /// Panics if a literal references a variable `>= num_variables`.
    pub fn new(num_variables: usize, clauses: Vec<Vec<Literal>>) -> Self {
        assert!(
            clauses
                .iter()
                .flatten()
                .all(|lit| lit.variable < num_variables),
            "literal references unknown variable"
        );
        Self {
            num_variables,
            clauses,
        }
    }

    /// Parses DIMACS CNF text.
    ///
    /// Comment lines (`c ...`) are skipped, clauses may span lines and are
    /// terminated by `0`, and a trailing `%` line ends the clause section.
    pub fn from_dimacs(text: &str) -> Result<Self, SatError> {
        let mut header: Option<(usize, usize)> = None;
        let mut clauses = Vec::new();
        let mut pending: Vec<Literal> = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('c') {
                continue;
            }
            if trimmed.starts_with('%') {
                break;
            }
            if trimmed.starts_with('p') {
                header = Some(parse_header(trimmed, line)?);
                continue;
            }

            let Some((declared, _)) = header else {
                return Err(SatError::MissingHeader { line });
            };

            for token in trimmed.split_whitespace() {
                let value: i64 = token.parse().map_err(|_| SatError::InvalidLiteral {
                    line,
                    token: token.to_string(),
                })?;
                match Literal::from_dimacs(value) {
                    None => clauses.push(std::mem::take(&mut pending)),
                    Some(lit) if lit.variable >= declared => {
                        return Err(SatError::VariableOutOfRange {
                            line,
                            variable: lit.variable + 1,
                            declared,
                        });
                    }
                    Some(lit) => pending.push(lit),
                }
            }
        }

        let Some((num_variables, expected)) = header else {
            return Err(SatError::InvalidHeader { line: 0 });
        };
        if !pending.is_empty() {
            clauses.push(pending);
        }
        if clauses.len() != expected {
            return Err(SatError::ClauseCountMismatch {
                expected,
                found: clauses.len(),
            });
        }

        Ok(Self {
            num_variables,
            clauses,
        })
    }

    /// Generates a uniform random k-SAT instance.
    ///
    /// Each clause draws `k` distinct variables with random polarity.
    ///
    /// # Panics
    /// Panics if `k > num_variables` or `k == 0`.
    pub fn random(num_variables: usize, num_clauses: usize, k: usize, rng: &mut dyn RngCore) -> Self {
        assert!(k > 0 && k <= num_variables, "clause width must be in 1..=variables");
        let clauses = (0..num_clauses)
            .map(|_| {
                let mut clause: Vec<Literal> = Vec::with_capacity(k);
                while clause.len() < k {
                    let variable = rng.random_range(0..num_variables);
                    if clause.iter().all(|lit| lit.variable != variable) {
                        clause.push(Literal::new(variable, rng.random_bool(0.5)));
                    }
                }
                clause
            })
            .collect();
        Self {
            num_variables,
            clauses,
        }
    }

    /// Number of variables.
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// Number of clauses.
    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// The clauses.
    pub fn clauses(&self) -> &[Vec<Literal>] {
        &self.clauses
    }

    /// Counts clauses left unsatisfied by `assignment`.
    ///
    /// Reference evaluation used to cross-check the incremental cache.
    pub fn count_unsatisfied(&self, assignment: &[bool]) -> usize {
        self.clauses
            .iter()
            .filter(|clause| {
                !clause
                    .iter()
                    .any(|lit| lit.is_satisfied_by(assignment[lit.variable]))
            })
            .count()
    }
}

fn parse_header(line_text: &str, line: usize) -> Result<(usize, usize), SatError> {
    let parts: Vec<&str> = line_text.split_whitespace().collect();
    match parts.as_slice() {
        ["p", "cnf", vars, clauses] => {
            let vars = vars.parse().map_err(|_| SatError::InvalidHeader { line })?;
            let clauses = clauses.parse().map_err(|_| SatError::InvalidHeader { line })?;
            Ok((vars, clauses))
        }
        _ => Err(SatError::InvalidHeader { line }),
    }
}
