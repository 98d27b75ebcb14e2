//! Move-acceptance predicates.

/// Decides whether a candidate cost replaces the current cost.
pub trait MoveAcceptance {
    /// Short display name.
    fn name(&self) -> &str;

    /// `true` if the move from `current` to `candidate` is kept.
    fn accept(&self, current: f64, candidate: f64) -> bool;
}

/// Accepts only strict improvements (`candidate < current`).
#[derive(Debug, Default, Clone, Copy)]
pub struct StrictImprovement;

impl MoveAcceptance for StrictImprovement {
    fn name(&self) -> &str {
        "StrictImprovement"
    }

    #[inline]
    fn accept(&self, current: f64, candidate: f64) -> bool {
        candidate < current
    }
}

/// Accepts improving and equal moves (`candidate <= current`).
///
/// Lets a sweep drift across plateaus.
#[derive(Debug, Default, Clone, Copy)]
pub struct NonWorsening;

impl MoveAcceptance for NonWorsening {
    fn name(&self) -> &str {
        "NonWorsening"
    }

    #[inline]
    fn accept(&self, current: f64, candidate: f64) -> bool {
        candidate <= current
    }
}
