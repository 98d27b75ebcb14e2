//! Index-addressed MAX-SAT solution store.

use super::formula::Formula;
use crate::problem::{MemoryIndex, Problem};
use rand::{Rng, RngCore};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// One stored candidate solution.
#[derive(Debug, Clone)]
struct Slot {
    assignment: Vec<bool>,
    /// Number of true literals per clause.
    true_literals: Vec<u32>,
    unsatisfied: usize,
    memes: Vec<usize>,
}

/// MAX-SAT over a fixed arena of solution slots.
///
/// The objective of a slot is its number of unsatisfied clauses. Each slot
/// caches per-clause true-literal counts so [`bit_flip`](Problem::bit_flip)
/// costs O(occurrences of the variable) instead of a full re-evaluation.
///
/// # Examples
///
/// ```
/// use u_memetic::problem::{Problem, CURRENT};
/// use u_memetic::random::create_rng;
/// use u_memetic::sat::{Formula, SatProblem};
///
/// let formula = Formula::from_dimacs("p cnf 2 2\n1 2 0\n-1 0\n").unwrap();
/// let mut rng = create_rng(1);
/// let mut sat = SatProblem::new(formula, 2, &mut rng);
/// let before = sat.objective_value(CURRENT);
/// sat.bit_flip(0, CURRENT);
/// sat.bit_flip(0, CURRENT);
/// assert_eq!(sat.objective_value(CURRENT), before);
/// ```
#[derive(Debug, Clone)]
pub struct SatProblem {
    formula: Arc<Formula>,
    /// For each variable, the clauses it appears in and with which polarity.
    occurrences: Vec<Vec<(usize, bool)>>,
    slots: Vec<Slot>,
    best_value: f64,
    best_assignment: Vec<bool>,
    started: Instant,
    time_limit: Option<Duration>,
}

impl SatProblem {
    /// Creates a store of `memory_size` random assignments for `formula`.
    ///
    /// # Panics
    /// Panics if `memory_size == 0`.
    pub fn new(formula: impl Into<Arc<Formula>>, memory_size: usize, rng: &mut dyn RngCore) -> Self {
        assert!(memory_size > 0, "memory must hold at least one solution");
        let formula: Arc<Formula> = formula.into();
        let n = formula.num_variables();

        let mut occurrences = vec![Vec::new(); n];
        for (c, clause) in formula.clauses().iter().enumerate() {
            for lit in clause {
                occurrences[lit.variable].push((c, lit.positive));
            }
        }

        let slots: Vec<Slot> = (0..memory_size)
            .map(|_| {
                let assignment: Vec<bool> = (0..n).map(|_| rng.random_bool(0.5)).collect();
                build_slot(&formula, assignment)
            })
            .collect();

        let mut problem = Self {
            formula,
            occurrences,
            best_value: f64::INFINITY,
            best_assignment: Vec::new(),
            slots,
            started: Instant::now(),
            time_limit: None,
        };
        for index in 0..memory_size {
            problem.track_best(index);
        }
        problem
    }

    /// Attaches `count` meme slots, all starting at option 0, to every solution.
    pub fn with_memes(mut self, count: usize) -> Self {
        for slot in &mut self.slots {
            slot.memes = vec![0; count];
        }
        self
    }

    /// Starts a wall-clock budget; [`has_time_expired`](Problem::has_time_expired)
    /// turns true once it elapses.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.started = Instant::now();
        self.time_limit = Some(limit);
        self
    }

    /// The formula being solved.
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// Assignment stored at `index`.
    pub fn assignment(&self, index: MemoryIndex) -> &[bool] {
        &self.slots[index].assignment
    }

    /// Overwrites the assignment at `index` and rebuilds its cache.
    pub fn set_assignment(&mut self, index: MemoryIndex, assignment: Vec<bool>) {
        assert_eq!(
            assignment.len(),
            self.formula.num_variables(),
            "assignment length must match variable count"
        );
        let memes = std::mem::take(&mut self.slots[index].memes);
        self.slots[index] = build_slot(&self.formula, assignment);
        self.slots[index].memes = memes;
        self.track_best(index);
    }

    /// Lowest objective value seen in any slot since construction.
    pub fn best_value(&self) -> f64 {
        self.best_value
    }

    /// The best-ever assignment as a `0`/`1` string.
    pub fn best_solution_as_string(&self) -> String {
        self.best_assignment
            .iter()
            .map(|&b| if b { '1' } else { '0' })
            .collect()
    }

    /// Time elapsed since construction or since the budget was set.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    fn flip_in_slot(&mut self, bit: usize, index: MemoryIndex) {
        let slot = &mut self.slots[index];
        let was = slot.assignment[bit];
        for &(clause, positive) in &self.occurrences[bit] {
            let count = &mut slot.true_literals[clause];
            if was == positive {
                *count -= 1;
                if *count == 0 {
                    slot.unsatisfied += 1;
                }
            } else {
                *count += 1;
                if *count == 1 {
                    slot.unsatisfied -= 1;
                }
            }
        }
        slot.assignment[bit] = !was;
    }

    fn track_best(&mut self, index: MemoryIndex) {
        let value = self.slots[index].unsatisfied as f64;
        if value < self.best_value {
            self.best_value = value;
            self.best_assignment.clone_from(&self.slots[index].assignment);
        }
    }
}

fn build_slot(formula: &Formula, assignment: Vec<bool>) -> Slot {
    let true_literals: Vec<u32> = formula
        .clauses()
        .iter()
        .map(|clause| {
            clause
                .iter()
                .filter(|lit| lit.is_satisfied_by(assignment[lit.variable]))
                .count() as u32
        })
        .collect();
    let unsatisfied = true_literals.iter().filter(|&&c| c == 0).count();
    Slot {
        assignment,
        true_literals,
        unsatisfied,
        memes: Vec::new(),
    }
}

impl Problem for SatProblem {
    fn objective_value(&self, index: MemoryIndex) -> f64 {
        self.slots[index].unsatisfied as f64
    }

    fn bit_flip(&mut self, bit: usize, index: MemoryIndex) {
        self.flip_in_slot(bit, index);
        self.track_best(index);
    }

    fn copy_solution(&mut self, src: MemoryIndex, dst: MemoryIndex) {
        if src == dst {
            return;
        }
        let source = self.slots[src].clone();
        self.slots[dst].clone_from(&source);
    }

    fn exchange_bits(&mut self, a: MemoryIndex, b: MemoryIndex, bit: usize) {
        if self.slots[a].assignment[bit] != self.slots[b].assignment[bit] {
            self.flip_in_slot(bit, a);
            self.flip_in_slot(bit, b);
            self.track_best(a);
            self.track_best(b);
        }
    }

    fn number_of_variables(&self) -> usize {
        self.formula.num_variables()
    }

    fn memory_size(&self) -> usize {
        self.slots.len()
    }

    fn number_of_memes(&self) -> usize {
        self.slots[0].memes.len()
    }

    fn meme_option(&self, index: MemoryIndex, slot: usize) -> usize {
        self.slots[index].memes[slot]
    }

    fn set_meme_option(&mut self, index: MemoryIndex, slot: usize, option: usize) {
        self.slots[index].memes[slot] = option;
    }

    fn has_time_expired(&self) -> bool {
        self.time_limit
            .is_some_and(|limit| self.started.elapsed() >= limit)
    }
}
