//! Core trait for the problem collaborator.

use super::memory::MemoryIndex;

/// An optimization problem over fixed-length bit strings stored in an
/// index-addressed arena.
///
/// The search core drives a problem exclusively through this trait. It is
/// object safe so operators can be stored in heterogeneous tables and
/// called through `&mut dyn Problem`.
///
/// # Minimization
///
/// Lower objective values are better.
///
/// # Contract
///
/// - [`objective_value`](Problem::objective_value) reflects the most recent
///   mutation of that slot.
/// - [`bit_flip`](Problem::bit_flip) is an involution: two identical calls
///   restore the assignment and the objective value exactly.
/// - [`copy_solution`](Problem::copy_solution) copies the assignment, the
///   cached objective value and the memeplex.
/// - Indices passed in are always `< memory_size()`; the core guarantees
///   this by construction rather than by checking.
pub trait Problem {
    /// Objective value of the solution at `index`.
    fn objective_value(&self, index: MemoryIndex) -> f64;

    /// Toggles decision variable `bit` of the solution at `index`.
    fn bit_flip(&mut self, bit: usize, index: MemoryIndex);

    /// Deep-copies slot `src` into slot `dst`.
    fn copy_solution(&mut self, src: MemoryIndex, dst: MemoryIndex);

    /// Swaps the value of variable `bit` between slots `a` and `b`.
    fn exchange_bits(&mut self, a: MemoryIndex, b: MemoryIndex, bit: usize);

    /// Number of decision variables per solution.
    fn number_of_variables(&self) -> usize;

    /// Number of solution slots in the arena.
    fn memory_size(&self) -> usize;

    /// Number of meme slots attached to every solution.
    fn number_of_memes(&self) -> usize {
        0
    }

    /// Current option of meme `slot` for the solution at `index`.
    fn meme_option(&self, _index: MemoryIndex, _slot: usize) -> usize {
        0
    }

    /// Sets the option of meme `slot` for the solution at `index`.
    fn set_meme_option(&mut self, _index: MemoryIndex, _slot: usize, _option: usize) {}

    /// External termination signal, checked between main-loop ticks.
    fn has_time_expired(&self) -> bool;
}
