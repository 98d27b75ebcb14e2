//! Small deterministic problems shared by unit tests.

use crate::problem::{MemoryIndex, Problem};
use std::cell::Cell;
use std::collections::VecDeque;

/// Objective = sum of the weights of the set bits.
///
/// Flipping a set bit with weight `w` lowers the cost by exactly `w`, which
/// makes hill-climbing outcomes easy to predict.
#[derive(Debug, Clone)]
pub struct WeightedBits {
    pub weights: Vec<f64>,
    pub slots: Vec<Vec<bool>>,
    pub memes: Vec<Vec<usize>>,
    pub checks_left: Cell<usize>,
}

impl WeightedBits {
    pub fn new(weights: Vec<f64>, memory: usize) -> Self {
        let n = weights.len();
        Self {
            weights,
            slots: vec![vec![true; n]; memory],
            memes: vec![Vec::new(); memory],
            checks_left: Cell::new(usize::MAX),
        }
    }

    pub fn with_memes(mut self, count: usize) -> Self {
        for memes in &mut self.memes {
            *memes = vec![0; count];
        }
        self
    }

    /// `has_time_expired` turns true after `checks` calls.
    pub fn expire_after(self, checks: usize) -> Self {
        self.checks_left.set(checks);
        self
    }

    pub fn set(&mut self, index: MemoryIndex, bits: &[bool]) {
        self.slots[index] = bits.to_vec();
    }
}

impl Problem for WeightedBits {
    fn objective_value(&self, index: MemoryIndex) -> f64 {
        self.slots[index]
            .iter()
            .zip(&self.weights)
            .filter(|(bit, _)| **bit)
            .map(|(_, w)| w)
            .sum()
    }

    fn bit_flip(&mut self, bit: usize, index: MemoryIndex) {
        self.slots[index][bit] = !self.slots[index][bit];
    }

    fn copy_solution(&mut self, src: MemoryIndex, dst: MemoryIndex) {
        self.slots[dst] = self.slots[src].clone();
        self.memes[dst] = self.memes[src].clone();
    }

    fn exchange_bits(&mut self, a: MemoryIndex, b: MemoryIndex, bit: usize) {
        let tmp = self.slots[a][bit];
        self.slots[a][bit] = self.slots[b][bit];
        self.slots[b][bit] = tmp;
    }

    fn number_of_variables(&self) -> usize {
        self.weights.len()
    }

    fn memory_size(&self) -> usize {
        self.slots.len()
    }

    fn number_of_memes(&self) -> usize {
        self.memes[0].len()
    }

    fn meme_option(&self, index: MemoryIndex, slot: usize) -> usize {
        self.memes[index][slot]
    }

    fn set_meme_option(&mut self, index: MemoryIndex, slot: usize, option: usize) {
        self.memes[index][slot] = option;
    }

    fn has_time_expired(&self) -> bool {
        let left = self.checks_left.get();
        if left == 0 {
            return true;
        }
        self.checks_left.set(left - 1);
        false
    }
}

/// Every bit flip replaces the flipped slot's objective with the next
/// scripted value; copies move values between slots.
#[derive(Debug, Clone)]
pub struct ScriptedProblem {
    pub values: Vec<f64>,
    pub script: VecDeque<f64>,
    pub variables: usize,
}

impl ScriptedProblem {
    pub fn new(initial: f64, memory: usize, script: &[f64]) -> Self {
        Self {
            values: vec![initial; memory],
            script: script.iter().copied().collect(),
            variables: 4,
        }
    }
}

impl Problem for ScriptedProblem {
    fn objective_value(&self, index: MemoryIndex) -> f64 {
        self.values[index]
    }

    fn bit_flip(&mut self, _bit: usize, index: MemoryIndex) {
        if let Some(next) = self.script.pop_front() {
            self.values[index] = next;
        }
    }

    fn copy_solution(&mut self, src: MemoryIndex, dst: MemoryIndex) {
        self.values[dst] = self.values[src];
    }

    fn exchange_bits(&mut self, _a: MemoryIndex, _b: MemoryIndex, _bit: usize) {}

    fn number_of_variables(&self) -> usize {
        self.variables
    }

    fn memory_size(&self) -> usize {
        self.values.len()
    }

    fn has_time_expired(&self) -> bool {
        false
    }
}
