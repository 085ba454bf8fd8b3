//! Search configuration.
//!
//! All tunable constants of a run live in [`SearchConfig`]. The struct is passed
//! to the search entry point and checked once by [`SearchConfig::validate`]
//! before any individual is created, so structural mistakes surface at startup
//! rather than in the middle of a run.

use oxo_engine::Player;
use oxo_evaluator::move_policy::PolicyKind;
use serde::{Deserialize, Serialize};

pub const DEFAULT_POPULATION_SIZE: usize = 100;
pub const DEFAULT_NUM_GENERATIONS: usize = 5;
pub const DEFAULT_MUTATION_PROBABILITY: f64 = 0.1;
pub const DEFAULT_TRIALS_PER_EVALUATION: u32 = 100;

/// Immutable parameters of one search run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Individuals per generation. Must be positive and even.
    pub population_size: usize,
    /// Generations to evaluate. Must be at least 1.
    pub num_generations: usize,
    /// Probability that each child is mutated after crossover.
    pub mutation_probability: f64,
    /// Matches played per fitness evaluation. Must be at least 1.
    pub trials_per_evaluation: u32,
    /// Side the candidates play during evaluation.
    pub role: Player,
    /// How candidates turn their genotype into moves.
    pub policy: PolicyKind,
    /// Evaluate individuals of a generation on separate threads.
    ///
    /// Results are identical to sequential evaluation for the same seed.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            num_generations: DEFAULT_NUM_GENERATIONS,
            mutation_probability: DEFAULT_MUTATION_PROBABILITY,
            trials_per_evaluation: DEFAULT_TRIALS_PER_EVALUATION,
            role: Player::A,
            policy: PolicyKind::Blind,
            parallel: false,
        }
    }
}

/// A configuration value that the search cannot run with.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("population size must be positive and even, got {size}")]
    PopulationSize { size: usize },
    #[display("number of generations must be at least 1")]
    NoGenerations,
    #[display("trials per evaluation must be at least 1")]
    NoTrials,
    #[display("mutation probability must be within [0, 1], got {value}")]
    MutationProbability { value: f64 },
}

impl SearchConfig {
    /// Checks the structural invariants of the configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use oxo_training::config::{ConfigError, SearchConfig};
    ///
    /// assert!(SearchConfig::default().validate().is_ok());
    ///
    /// let config = SearchConfig {
    ///     population_size: 5,
    ///     ..SearchConfig::default()
    /// };
    /// assert_eq!(config.validate(), Err(ConfigError::PopulationSize { size: 5 }));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 || self.population_size % 2 != 0 {
            return Err(ConfigError::PopulationSize {
                size: self.population_size,
            });
        }
        if self.num_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        if self.trials_per_evaluation == 0 {
            return Err(ConfigError::NoTrials);
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(ConfigError::MutationProbability {
                value: self.mutation_probability,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = SearchConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.num_generations, 5);
        assert!((config.mutation_probability - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.trials_per_evaluation, 100);
        assert_eq!(config.role, Player::A);
        assert_eq!(config.policy, PolicyKind::Blind);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_and_odd_population() {
        for size in [0, 1, 99] {
            let config = SearchConfig {
                population_size: size,
                ..SearchConfig::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::PopulationSize { size }));
        }
    }

    #[test]
    fn test_rejects_zero_generations_and_trials() {
        let config = SearchConfig {
            num_generations: 0,
            ..SearchConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoGenerations));

        let config = SearchConfig {
            trials_per_evaluation: 0,
            ..SearchConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoTrials));
    }

    #[test]
    fn test_rejects_mutation_probability_out_of_range() {
        for value in [-0.1, 1.5, f64::NAN] {
            let config = SearchConfig {
                mutation_probability: value,
                ..SearchConfig::default()
            };
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigError::MutationProbability { .. })
                ),
                "{value} should be rejected"
            );
        }
        for value in [0.0, 1.0] {
            let config = SearchConfig {
                mutation_probability: value,
                ..SearchConfig::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"population_size": 4, "policy": "preference"}"#).unwrap();
        assert_eq!(config.population_size, 4);
        assert_eq!(config.policy, PolicyKind::Preference);
        assert_eq!(config.num_generations, DEFAULT_NUM_GENERATIONS);
    }
}
