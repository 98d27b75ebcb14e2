//! Single-point configuration and cooling schedules.

use crate::error::{ConfigError, ConfigResult};

/// Configuration for [`IteratedLocalSearch`](super::IteratedLocalSearch).
///
/// # Examples
///
/// ```
/// use u_memetic::single_point::IlsConfig;
///
/// let config = IlsConfig::default()
///     .with_intensity_of_mutation(3)
///     .with_depth_of_search(2);
/// assert_eq!(config.intensity_of_mutation, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IlsConfig {
    /// Times the mutation heuristic is applied per tick.
    pub intensity_of_mutation: usize,
    /// Times the local-search heuristic is applied per tick.
    pub depth_of_search: usize,
}

impl Default for IlsConfig {
    fn default() -> Self {
        Self {
            intensity_of_mutation: 1,
            depth_of_search: 1,
        }
    }
}

impl IlsConfig {
    pub fn with_intensity_of_mutation(mut self, n: usize) -> Self {
        self.intensity_of_mutation = n;
        self
    }

    pub fn with_depth_of_search(mut self, n: usize) -> Self {
        self.depth_of_search = n;
        self
    }
}

/// Cooling schedule for temperature reduction.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - Linear: fixed-duration cooling
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric cooling: `T_{k+1} = alpha * T_k`.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Linear cooling from `T_0` to `T_min` over `steps` ticks.
    Linear {
        /// Ticks until the minimum temperature is reached.
        steps: usize,
    },

    /// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
    LundyMees {
        /// Cooling parameter. Typically `(T_0 - T_min) / (max_iter * T_0 * T_min)`.
        beta: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.95 }
    }
}

impl std::fmt::Display for CoolingSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoolingSchedule::Geometric { alpha } => write!(f, "Geometric Cooling (alpha={alpha})"),
            CoolingSchedule::Linear { steps } => write!(f, "Linear Cooling ({steps} steps)"),
            CoolingSchedule::LundyMees { beta } => write!(f, "Lundy-Mees Cooling (beta={beta})"),
        }
    }
}

/// Configuration for [`SimulatedAnnealing`](super::SimulatedAnnealing).
///
/// # Examples
///
/// ```
/// use u_memetic::single_point::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(10.0)
///     .with_min_temperature(0.001)
///     .with_cooling(CoolingSchedule::LundyMees { beta: 1e-4 });
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Temperature floor. The schedule never cools below this, which keeps
    /// `exp(-delta / T)` defined.
    pub min_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            min_temperature: 1e-6,
            cooling: CoolingSchedule::default(),
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if !positive_finite(self.initial_temperature) {
            return Err(ConfigError::InvalidCooling(
                "initial_temperature must be positive and finite".into(),
            ));
        }
        if !positive_finite(self.min_temperature) {
            return Err(ConfigError::InvalidCooling(
                "min_temperature must be positive and finite".into(),
            ));
        }
        if self.min_temperature > self.initial_temperature {
            return Err(ConfigError::InvalidCooling(
                "min_temperature must not exceed initial_temperature".into(),
            ));
        }
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if !(alpha > 0.0 && alpha < 1.0) {
                    return Err(ConfigError::InvalidCooling(format!(
                        "geometric alpha must be in (0, 1), got {alpha}"
                    )));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if !positive_finite(beta) {
                    return Err(ConfigError::InvalidCooling(format!(
                        "lundy-mees beta must be positive and finite, got {beta}"
                    )));
                }
            }
            CoolingSchedule::Linear { steps } => {
                if steps == 0 {
                    return Err(ConfigError::InvalidCooling(
                        "linear cooling needs at least one step".into(),
                    ));
                }
            }
        }
        Ok(())
    }
}

fn positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Mutable temperature state driven by a [`SaConfig`].
///
/// Advances exactly once per annealing tick and never drops below
/// `min_temperature`.
#[derive(Debug, Clone)]
pub struct Temperature {
    config: SaConfig,
    current: f64,
    step: usize,
}

impl Temperature {
    /// Starts at the configured initial temperature.
    pub fn new(config: SaConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            current: config.initial_temperature,
            config,
            step: 0,
        })
    }

    /// Temperature for the current tick.
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Number of times the schedule has advanced.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Moves to the next temperature.
    pub fn advance(&mut self) {
        let next = match self.config.cooling {
            CoolingSchedule::Geometric { alpha } => self.current * alpha,
            CoolingSchedule::Linear { steps } => {
                let span = self.config.initial_temperature - self.config.min_temperature;
                self.config.initial_temperature - (self.step + 1) as f64 * span / steps as f64
            }
            CoolingSchedule::LundyMees { beta } => self.current / (1.0 + beta * self.current),
        };
        self.current = next.max(self.config.min_temperature);
        self.step += 1;
    }

    /// The schedule this state follows.
    pub fn config(&self) -> &SaConfig {
        &self.config
    }
}
