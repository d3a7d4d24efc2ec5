//! Engine configuration.
//!
//! [`EngineConfig`] holds the run-level knobs that are independent of the
//! fitness and mutation strategies.

/// Configuration for an [`EvolutionEngine`](crate::EvolutionEngine).
///
/// # Defaults
///
/// ```
/// use microevo::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.seed, None);
/// assert!(!config.parallel);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use microevo::EngineConfig;
///
/// let config = EngineConfig::default().with_seed(42).with_parallel(true);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Random seed for reproducibility.
    ///
    /// With `Some(seed)`, every call to the engine replays the same
    /// sequence of selections and mutations. `None` draws a fresh seed
    /// per run.
    pub seed: Option<u64>,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Only takes effect when the crate is built with the `parallel`
    /// feature; otherwise evaluation stays sequential. Results are
    /// identical either way, only the wall-clock time changes.
    pub parallel: bool,
}

impl EngineConfig {
    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel fitness evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
