//! Single-bit hill-climbing heuristics.
//!
//! All climbers evaluate through the problem's cached objective and undo
//! rejected flips immediately, so the slot never ends a sweep worse than it
//! started (under strict or non-worsening acceptance).

use super::acceptance::{MoveAcceptance, StrictImprovement};
use super::types::Heuristic;
use crate::error::{ConfigError, ConfigResult};
use crate::problem::{MemoryIndex, Problem};
use crate::random::random_permutation;
use rand::RngCore;

/// Davis's bit hill climbing.
///
/// Visits every variable once in a fresh random permutation, flips it, and
/// keeps the flip if the acceptance predicate approves; otherwise flips it
/// straight back.
///
/// # Complexity
/// O(n) evaluations per sweep
#[derive(Debug, Default, Clone)]
pub struct DavisBitHc<A = StrictImprovement> {
    acceptance: A,
}

impl DavisBitHc {
    /// Creates a climber that accepts strict improvements only.
    pub fn new() -> Self {
        Self {
            acceptance: StrictImprovement,
        }
    }
}

impl<A: MoveAcceptance> DavisBitHc<A> {
    /// Creates a climber driven by a custom acceptance predicate.
    pub fn with_acceptance(acceptance: A) -> Self {
        Self { acceptance }
    }
}

impl<A: MoveAcceptance> Heuristic for DavisBitHc<A> {
    fn name(&self) -> &str {
        "DBHC"
    }

    fn apply(&self, problem: &mut dyn Problem, index: MemoryIndex, rng: &mut dyn RngCore) {
        let perm = random_permutation(problem.number_of_variables(), rng);
        let mut current = problem.objective_value(index);

        for &bit in &perm {
            problem.bit_flip(bit, index);
            let candidate = problem.objective_value(index);
            if self.acceptance.accept(current, candidate) {
                current = candidate;
            } else {
                problem.bit_flip(bit, index);
            }
        }
    }
}

/// Davis's bit hill climbing over blocks of `k` consecutive permutation
/// positions.
///
/// Block starts run over `0..=n-k`; the block is flipped, evaluated and kept
/// or undone as a unit. Trailing positions are only reached as members of
/// earlier blocks.
#[derive(Debug, Clone)]
pub struct KBitDavisHc<A = StrictImprovement> {
    k: usize,
    acceptance: A,
}

impl KBitDavisHc {
    /// Creates a `k`-bit climber with strict acceptance.
    ///
    /// `k` must be at least 1; the upper bound is checked against the
    /// problem in [`Heuristic::validate`].
    pub fn new(k: usize) -> ConfigResult<Self> {
        Self::with_acceptance(k, StrictImprovement)
    }
}

impl<A: MoveAcceptance> KBitDavisHc<A> {
    /// Creates a `k`-bit climber with a custom acceptance predicate.
    pub fn with_acceptance(k: usize, acceptance: A) -> ConfigResult<Self> {
        if k == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        Ok(Self { k, acceptance })
    }

    /// Block size.
    pub fn k(&self) -> usize {
        self.k
    }
}

impl<A: MoveAcceptance> Heuristic for KBitDavisHc<A> {
    fn name(&self) -> &str {
        "kBDHC"
    }

    fn apply(&self, problem: &mut dyn Problem, index: MemoryIndex, rng: &mut dyn RngCore) {
        let n = problem.number_of_variables();
        let perm = random_permutation(n, rng);
        let mut current = problem.objective_value(index);

        // k > n yields no block starts at all.
        let starts = (n + 1).saturating_sub(self.k);
        for start in 0..starts {
            let block = &perm[start..start + self.k];
            for &bit in block {
                problem.bit_flip(bit, index);
            }
            let candidate = problem.objective_value(index);
            if self.acceptance.accept(current, candidate) {
                current = candidate;
            } else {
                for &bit in block {
                    problem.bit_flip(bit, index);
                }
            }
        }
    }

    fn validate(&self, problem: &dyn Problem) -> ConfigResult<()> {
        let variables = problem.number_of_variables();
        if self.k > variables {
            return Err(ConfigError::InvalidBlockSize {
                k: self.k,
                variables,
            });
        }
        Ok(())
    }
}

/// Steepest descent: scans every single flip, applies only the one with the
/// largest strict improvement.
///
/// # Complexity
/// O(n) evaluations, at most one committed flip per sweep
#[derive(Debug, Default, Clone, Copy)]
pub struct SteepestDescentHc;

impl Heuristic for SteepestDescentHc {
    fn name(&self) -> &str {
        "Steepest Descent HC"
    }

    fn apply(&self, problem: &mut dyn Problem, index: MemoryIndex, _rng: &mut dyn RngCore) {
        let mut best = problem.objective_value(index);
        let mut best_bit = None;

        for bit in 0..problem.number_of_variables() {
            problem.bit_flip(bit, index);
            let candidate = problem.objective_value(index);
            if candidate < best {
                best = candidate;
                best_bit = Some(bit);
            }
            problem.bit_flip(bit, index);
        }

        if let Some(bit) = best_bit {
            problem.bit_flip(bit, index);
        }
    }
}

/// Shallowest descent: scans every single flip, applies only the one with
/// the smallest strictly positive improvement.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShallowestDescentHc;

impl Heuristic for ShallowestDescentHc {
    fn name(&self) -> &str {
        "Shallowest Descent HC"
    }

    fn apply(&self, problem: &mut dyn Problem, index: MemoryIndex, _rng: &mut dyn RngCore) {
        let base = problem.objective_value(index);
        let mut least = f64::MAX;
        let mut least_bit = None;

        for bit in 0..problem.number_of_variables() {
            problem.bit_flip(bit, index);
            let improvement = base - problem.objective_value(index);
            if improvement > 0.0 && improvement < least {
                least = improvement;
                least_bit = Some(bit);
            }
            problem.bit_flip(bit, index);
        }

        if let Some(bit) = least_bit {
            problem.bit_flip(bit, index);
        }
    }
}

/// Does nothing. Fills local-search tables where "no local search" is an
/// option.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHeuristic;

impl Heuristic for NoopHeuristic {
    fn name(&self) -> &str {
        "Noop"
    }

    fn apply(&self, _problem: &mut dyn Problem, _index: MemoryIndex, _rng: &mut dyn RngCore) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::NonWorsening;
    use crate::problem::CURRENT;
    use crate::random::create_rng;
    use crate::test_support::WeightedBits;

    fn weighted() -> WeightedBits {
        // All bits start set, so every flip of a positive weight improves.
        WeightedBits::new(vec![4.0, 1.0, 3.0, 2.0, 5.0], 2)
    }

    #[test]
    fn test_davis_reaches_optimum_on_separable_problem() {
        let mut problem = weighted();
        let mut rng = create_rng(42);
        DavisBitHc::new().apply(&mut problem, CURRENT, &mut rng);
        assert_eq!(problem.objective_value(CURRENT), 0.0);
    }

    #[test]
    fn test_davis_never_worsens() {
        let mut problem = WeightedBits::new(vec![1.0, -2.0, 3.0, -1.0, 0.5], 1);
        problem.set(CURRENT, &[false, true, true, false, false]);
        let mut rng = create_rng(3);
        for _ in 0..20 {
            let before = problem.objective_value(CURRENT);
            DavisBitHc::new().apply(&mut problem, CURRENT, &mut rng);
            assert!(problem.objective_value(CURRENT) <= before);
        }
        // Optimum: negative weights set, positive weights cleared.
        assert_eq!(problem.objective_value(CURRENT), -3.0);
    }

    #[test]
    fn test_davis_non_worsening_walks_plateaus() {
        let mut problem = WeightedBits::new(vec![0.0, 0.0, 1.0], 1);
        let mut rng = create_rng(5);
        DavisBitHc::with_acceptance(NonWorsening).apply(&mut problem, CURRENT, &mut rng);
        // Zero-weight bits are flipped (ties accepted), the weighted one cleared.
        assert_eq!(problem.slots[CURRENT], vec![false, false, false]);
    }

    #[test]
    fn test_kbit_flips_blocks_atomically() {
        // Pairs containing the -10 bit always improve; others never do alone.
        let mut problem = WeightedBits::new(vec![1.0, 1.0, -10.0], 1);
        problem.set(CURRENT, &[false, false, false]);
        let mut rng = create_rng(11);
        let hc = KBitDavisHc::new(2).unwrap();
        hc.apply(&mut problem, CURRENT, &mut rng);
        let value = problem.objective_value(CURRENT);
        assert!(value < 0.0, "expected the -10 bit to be set, got {value}");
    }

    #[test]
    fn test_kbit_equal_to_length_is_single_block() {
        let mut problem = WeightedBits::new(vec![1.0, 1.0, 1.0], 1);
        let mut rng = create_rng(1);
        KBitDavisHc::new(3)
            .unwrap()
            .apply(&mut problem, CURRENT, &mut rng);
        assert_eq!(problem.objective_value(CURRENT), 0.0);
    }

    #[test]
    fn test_kbit_validation() {
        assert_eq!(KBitDavisHc::new(0).err(), Some(ConfigError::ZeroBlockSize));
        let problem = weighted();
        let hc = KBitDavisHc::new(6).unwrap();
        assert_eq!(
            hc.validate(&problem),
            Err(ConfigError::InvalidBlockSize { k: 6, variables: 5 })
        );
        assert!(KBitDavisHc::new(5).unwrap().validate(&problem).is_ok());
    }

    #[test]
    fn test_kbit_too_large_is_noop() {
        let mut problem = weighted();
        let mut rng = create_rng(1);
        KBitDavisHc::new(9)
            .unwrap()
            .apply(&mut problem, CURRENT, &mut rng);
        assert_eq!(problem.objective_value(CURRENT), 15.0);
    }

    #[test]
    fn test_steepest_takes_largest_improvement() {
        let mut problem = weighted();
        let mut rng = create_rng(0);
        SteepestDescentHc.apply(&mut problem, CURRENT, &mut rng);
        // Weight 5.0 removed.
        assert_eq!(problem.objective_value(CURRENT), 10.0);
        assert!(!problem.slots[CURRENT][4]);
    }

    #[test]
    fn test_shallowest_takes_smallest_improvement() {
        let mut problem = weighted();
        let mut rng = create_rng(0);
        ShallowestDescentHc.apply(&mut problem, CURRENT, &mut rng);
        // Weight 1.0 removed.
        assert_eq!(problem.objective_value(CURRENT), 14.0);
        assert!(!problem.slots[CURRENT][1]);
    }

    #[test]
    fn test_steepest_dominates_shallowest() {
        let mut steep = weighted();
        let mut shallow = weighted();
        let mut rng = create_rng(0);
        SteepestDescentHc.apply(&mut steep, CURRENT, &mut rng);
        ShallowestDescentHc.apply(&mut shallow, CURRENT, &mut rng);
        assert!(steep.objective_value(CURRENT) <= shallow.objective_value(CURRENT));
        assert!(shallow.objective_value(CURRENT) <= 15.0);
    }

    #[test]
    fn test_descent_without_improving_bit_is_noop() {
        let mut problem = weighted();
        problem.set(CURRENT, &[false; 5]);
        let mut rng = create_rng(0);
        SteepestDescentHc.apply(&mut problem, CURRENT, &mut rng);
        ShallowestDescentHc.apply(&mut problem, CURRENT, &mut rng);
        assert_eq!(problem.slots[CURRENT], vec![false; 5]);
    }

    #[test]
    fn test_noop_leaves_solution() {
        let mut problem = weighted();
        let mut rng = create_rng(0);
        NoopHeuristic.apply(&mut problem, CURRENT, &mut rng);
        assert_eq!(problem.objective_value(CURRENT), 15.0);
    }
}
