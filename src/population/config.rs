//! Memetic algorithm configuration.

use crate::error::ConfigResult;
use crate::problem::PopulationLayout;

/// Configuration for the [`MemeticAlgorithm`](super::MemeticAlgorithm).
///
/// # Examples
///
/// ```
/// use u_memetic::population::MemeticConfig;
///
/// let config = MemeticConfig::default()
///     .with_population_size(16)
///     .with_mutation_intensity(2);
/// assert!(config.validate().is_ok());
/// assert!(config.with_population_size(7).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemeticConfig {
    /// Number of individuals `P`. Must be positive and even.
    pub population_size: usize,

    /// Intensity handed to the mutation operator for every offspring.
    pub mutation_intensity: usize,
}

impl Default for MemeticConfig {
    fn default() -> Self {
        Self {
            population_size: 16,
            mutation_intensity: 1,
        }
    }
}

impl MemeticConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_mutation_intensity(mut self, n: usize) -> Self {
        self.mutation_intensity = n;
        self
    }

    /// Index layout implied by the population size.
    pub fn layout(&self) -> ConfigResult<PopulationLayout> {
        PopulationLayout::new(self.population_size)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        self.layout().map(|_| ())
    }
}
