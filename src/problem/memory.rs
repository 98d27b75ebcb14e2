//! Memory index conventions.

use crate::error::{ConfigError, ConfigResult};
use std::ops::Range;

/// Handle of one stored solution inside a [`Problem`](super::Problem).
pub type MemoryIndex = usize;

/// Slot holding the incumbent of a single-point search.
pub const CURRENT: MemoryIndex = 0;

/// Slot holding the last committed incumbent of a single-point search.
pub const BACKUP: MemoryIndex = 1;

/// Index layout of a population-based search.
///
/// Parents live in `[0, P)` and the offspring of one generation in
/// `[P, 2P)`. Replacement copies the next generation back into `[0, P)`,
/// so slots are reused rather than reallocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationLayout {
    size: usize,
}

impl PopulationLayout {
    /// Creates a layout for `size` individuals.
    ///
    /// The size must be positive and even since offspring come in pairs.
    pub fn new(size: usize) -> ConfigResult<Self> {
        if size == 0 || size % 2 != 0 {
            return Err(ConfigError::InvalidPopulationSize(size));
        }
        Ok(Self { size })
    }

    /// Population size `P`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Parent slots `[0, P)`.
    pub fn population(&self) -> Range<MemoryIndex> {
        0..self.size
    }

    /// Offspring slots `[P, 2P)`.
    pub fn offspring(&self) -> Range<MemoryIndex> {
        self.size..2 * self.size
    }

    /// Parents and offspring together, `[0, 2P)`.
    pub fn combined(&self) -> Range<MemoryIndex> {
        0..2 * self.size
    }

    /// Offspring slots produced by the pair starting at position `i`.
    pub fn offspring_pair(&self, i: usize) -> (MemoryIndex, MemoryIndex) {
        (self.size + i, self.size + i + 1)
    }

    /// Last parent slot, `P - 1`.
    pub fn last(&self) -> MemoryIndex {
        self.size - 1
    }

    /// Number of arena slots this layout needs.
    pub fn required_memory(&self) -> usize {
        2 * self.size
    }

    /// Checks that a store of `available` slots fits this layout.
    pub fn check_memory(&self, available: usize) -> ConfigResult<()> {
        if available < self.required_memory() {
            return Err(ConfigError::InsufficientMemory {
                required: self.required_memory(),
                available,
            });
        }
        Ok(())
    }
}

/// Which meme slot drives which adaptive decision.
///
/// Multimeme individuals read their mutation intensity from
/// `intensity_slot` and pick their local-search operator from
/// `local_search_slot`. Both are validated against the problem before a
/// run starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemeRoles {
    /// Meme whose option is the number of mutation flips.
    pub intensity_slot: usize,
    /// Meme whose option indexes the local-search table.
    pub local_search_slot: usize,
}

impl Default for MemeRoles {
    fn default() -> Self {
        Self {
            intensity_slot: 0,
            local_search_slot: 1,
        }
    }
}

impl MemeRoles {
    /// Verifies both slots exist on a problem with `memes` meme slots.
    pub fn validate(&self, memes: usize) -> ConfigResult<()> {
        for (role, slot) in [
            ("intensity", self.intensity_slot),
            ("local_search", self.local_search_slot),
        ] {
            if slot >= memes {
                return Err(ConfigError::MemeSlotOutOfRange { role, slot, memes });
            }
        }
        Ok(())
    }
}
