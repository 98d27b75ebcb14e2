//! Multimeme configuration.

use crate::error::{ConfigError, ConfigResult};
use crate::problem::{MemeRoles, PopulationLayout, Problem};

/// Configuration for the [`MultiMemeAlgorithm`](super::MultiMemeAlgorithm).
///
/// `options_per_meme[s]` bounds the options of meme slot `s` to
/// `0..options_per_meme[s]`.
///
/// # Examples
///
/// ```
/// use u_memetic::multimeme::MultiMemeConfig;
///
/// // Mutation intensity in 0..6, two local-search operators.
/// let config = MultiMemeConfig::new(vec![6, 2])
///     .with_population_size(8)
///     .with_innovation_rate(0.2);
/// assert!(config.validate().is_ok());
/// assert!(config.clone().with_innovation_rate(1.5).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiMemeConfig {
    /// Number of individuals `P`. Must be positive and even.
    pub population_size: usize,

    /// Probability that a child's meme is reassigned, per slot.
    pub innovation_rate: f64,

    /// Option count for each meme slot.
    pub options_per_meme: Vec<usize>,

    /// Which slot drives which decision.
    pub roles: MemeRoles,
}

impl MultiMemeConfig {
    /// Creates a configuration with the given option table and default
    /// population size (16), innovation rate (0.2) and roles.
    pub fn new(options_per_meme: Vec<usize>) -> Self {
        Self {
            population_size: 16,
            innovation_rate: 0.2,
            options_per_meme,
            roles: MemeRoles::default(),
        }
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_innovation_rate(mut self, rate: f64) -> Self {
        self.innovation_rate = rate;
        self
    }

    pub fn with_roles(mut self, roles: MemeRoles) -> Self {
        self.roles = roles;
        self
    }

    /// Index layout implied by the population size.
    pub fn layout(&self) -> ConfigResult<PopulationLayout> {
        PopulationLayout::new(self.population_size)
    }

    /// Number of local-search operators the table must hold.
    pub fn local_search_options(&self) -> usize {
        self.options_per_meme
            .get(self.roles.local_search_slot)
            .copied()
            .unwrap_or(0)
    }

    /// Validates the configuration on its own.
    pub fn validate(&self) -> ConfigResult<()> {
        self.layout()?;
        if !(0.0..=1.0).contains(&self.innovation_rate) {
            return Err(ConfigError::InvalidProbability {
                name: "innovation_rate",
                value: self.innovation_rate,
            });
        }
        if let Some(slot) = self.options_per_meme.iter().position(|&n| n == 0) {
            return Err(ConfigError::EmptyMemeOptions(slot));
        }
        self.roles.validate(self.options_per_meme.len())
    }

    /// Validates the configuration against the meme slots of `problem`.
    pub fn validate_for(&self, problem: &dyn Problem) -> ConfigResult<()> {
        let memes = problem.number_of_memes();
        if self.options_per_meme.len() != memes {
            return Err(ConfigError::MemeCountMismatch {
                configured: self.options_per_meme.len(),
                memes,
            });
        }
        self.validate()
    }
}
