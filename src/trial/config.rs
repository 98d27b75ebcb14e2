//! Trial configuration.

/// Configuration for a [`Trial`](super::Trial).
///
/// # Examples
///
/// ```
/// use u_memetic::trial::TrialConfig;
///
/// let config = TrialConfig::default()
///     .with_seed(7)
///     .with_max_iterations(1_000);
/// assert_eq!(config.max_iterations, Some(1_000));
/// assert!(config.record_trace);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialConfig {
    /// Seed of the trial's random stream.
    pub seed: u64,

    /// Stop after this many ticks even if time remains.
    ///
    /// With `None` the trial relies on the problem's time budget alone.
    pub max_iterations: Option<usize>,

    /// Whether to keep the incumbent value after every tick.
    pub record_trace: bool,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_iterations: None,
            record_trace: true,
        }
    }
}

impl TrialConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    pub fn with_record_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }
}
