//! Tabu Search configuration.

use std::time::Duration;

use crate::error::{Result, TspError};

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use tsp_tabu::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_tenure(7)
///     .with_aspiration(true);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_tenure, 7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TabuConfig {
    /// Maximum number of accepted moves.
    pub max_iterations: usize,
    /// How many iterations a move stays in the tabu memory.
    pub tabu_tenure: usize,
    /// Whether to use aspiration criterion (override tabu if the move
    /// produces a new global best).
    #[cfg_attr(feature = "serde", serde(alias = "aspiration_enabled"))]
    pub aspiration: bool,
    /// Random seed for the initial tour (None for OS entropy).
    #[cfg_attr(feature = "serde", serde(alias = "random_seed"))]
    pub seed: Option<u64>,
    /// Wall-clock limit, checked before each iteration.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub time_limit: Option<Duration>,
    /// Whether to evaluate neighbor lengths in parallel using rayon.
    pub parallel: bool,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            tabu_tenure: 10,
            aspiration: true,
            seed: None,
            time_limit: None,
            parallel: false,
        }
    }
}

impl TabuConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu tenure (number of iterations a move remains tabu).
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Enables or disables aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets a wall-clock limit.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Enables or disables parallel neighbor evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(TspError::InvalidConfig(
                "max_iterations must be positive".into(),
            ));
        }
        if self.tabu_tenure == 0 {
            return Err(TspError::InvalidConfig("tabu_tenure must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabu_config_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.max_iterations, 500);
        assert_eq!(config.tabu_tenure, 10);
        assert!(config.aspiration);
        assert!(config.seed.is_none());
        assert!(config.time_limit.is_none());
        assert!(!config.parallel);
    }

    #[test]
    fn test_tabu_config_builder() {
        let config = TabuConfig::default()
            .with_max_iterations(1000)
            .with_tabu_tenure(3)
            .with_aspiration(false)
            .with_seed(123)
            .with_time_limit(Duration::from_millis(250))
            .with_parallel(true);

        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.tabu_tenure, 3);
        assert!(!config.aspiration);
        assert_eq!(config.seed, Some(123));
        assert_eq!(config.time_limit, Some(Duration::from_millis(250)));
        assert!(config.parallel);
    }

    #[test]
    fn test_validate_ok() {
        assert!(TabuConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_iterations() {
        let err = TabuConfig::default()
            .with_max_iterations(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, TspError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_zero_tenure() {
        let config = TabuConfig::default().with_tabu_tenure(0);
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_with_aliases() {
        let config: TabuConfig =
            serde_yaml::from_str("max_iterations: 50\naspiration_enabled: false\nrandom_seed: 9\n")
                .unwrap();
        assert_eq!(config.max_iterations, 50);
        assert!(!config.aspiration);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.tabu_tenure, 10);
    }
}
