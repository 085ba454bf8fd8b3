//! The generation loop.
//!
//! [`Search`] ties configuration, evaluation and breeding together:
//!
//! ```text
//! Population::random
//!     ↓
//! ┌─> evaluate ──> GenerationReport ──> observer
//! │       ↓
//! │   evolve (skipped after the last generation)
//! └───────┘
//!     ↓
//! best individual of the last evaluated generation
//! ```
//!
//! [`run_search`] is the one-call entry point that returns just the winning
//! strategy.

use log::{debug, info, warn};
use oxo_engine::IllegalMoveError;
use oxo_evaluator::{
    fitness_evaluator::{FitnessEvaluator, WinCountEvaluator},
    strategy::Strategy,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    config::{ConfigError, SearchConfig},
    genetic::{Individual, Population, PopulationEvolver},
    selection::{SelectionError, SelectionMode},
    stats::FitnessStats,
};

/// Why a search could not run to completion.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SearchError {
    #[display("invalid search configuration: {_0}")]
    Config(ConfigError),
    #[display("illegal move during evaluation: {_0}")]
    IllegalMove(IllegalMoveError),
    #[display("parent selection failed: {_0}")]
    Selection(SelectionError),
}

/// Progress record for one evaluated generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// 1-based generation number.
    pub generation: usize,
    /// First individual with the highest fitness.
    pub best: Individual,
    pub stats: FitnessStats,
    /// How parents were chosen when breeding from this generation.
    ///
    /// `None` for the last generation, which is not bred.
    pub selection: Option<SelectionMode>,
}

/// Result of a full search run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Best individual of the last evaluated generation.
    pub best: Individual,
    /// One report per evaluated generation, in order.
    pub generations: Vec<GenerationReport>,
}

/// A configured search, ready to run.
#[derive(Debug)]
pub struct Search<E = WinCountEvaluator> {
    config: SearchConfig,
    evaluator: E,
}

impl Search {
    /// Validates `config` and builds a search that scores strategies with
    /// [`WinCountEvaluator`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is unusable.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        let evaluator = WinCountEvaluator::new(config.trials_per_evaluation, config.policy);
        Self::with_evaluator(config, evaluator)
    }
}

impl<E> Search<E>
where
    E: FitnessEvaluator,
{
    /// Validates `config` and builds a search with a custom fitness function.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is unusable.
    pub fn with_evaluator(config: SearchConfig, evaluator: E) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, evaluator })
    }

    /// Runs every generation, passing each report to `observer` as soon as
    /// the generation has been evaluated and bred.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if a match produced an illegal move or parent
    /// selection failed.
    pub fn run<R, F>(&self, rng: &mut R, mut observer: F) -> Result<SearchOutcome, SearchError>
    where
        R: Rng + ?Sized,
        F: FnMut(&GenerationReport),
    {
        let SearchConfig {
            population_size,
            num_generations,
            mutation_probability,
            role,
            parallel,
            ..
        } = self.config;
        let evolver = PopulationEvolver {
            mutation_probability,
        };

        let mut population = Population::random(population_size, rng);
        let mut generations = Vec::with_capacity(num_generations);

        for generation in 1..=num_generations {
            let evaluated = population.evaluate(&self.evaluator, role, parallel, rng)?;
            for (i, ind) in evaluated.individuals().iter().enumerate() {
                debug!(
                    "generation {generation} individual {i}: {} => {}",
                    ind.strategy(),
                    ind.fitness()
                );
            }

            let best = *evaluated.best_individual();
            let stats = evaluated.fitness_stats();
            info!(
                "generation {generation}: best fitness {} ({}), mean {:.2}",
                best.fitness(),
                best.strategy(),
                stats.mean
            );

            let selection = if generation < num_generations {
                let (next, mode) = evolver.evolve(&evaluated, rng)?;
                if mode.is_uniform() {
                    warn!(
                        "generation {generation}: every individual scored zero, selecting parents uniformly"
                    );
                }
                population = next;
                Some(mode)
            } else {
                None
            };

            let report = GenerationReport {
                generation,
                best,
                stats,
                selection,
            };
            observer(&report);
            generations.push(report);
        }

        let best = generations
            .last()
            .map(|report| report.best)
            .expect("at least one generation is evaluated");
        Ok(SearchOutcome { best, generations })
    }
}

/// Runs a complete search and returns the best strategy of the last
/// generation.
///
/// # Errors
///
/// Returns [`SearchError::Config`] before any work is done if `config` is
/// invalid, or another [`SearchError`] if the run fails.
///
/// # Example
///
/// ```
/// use oxo_engine::CELL_COUNT;
/// use oxo_training::{config::SearchConfig, seed::SearchSeed};
///
/// let config = SearchConfig {
///     population_size: 4,
///     num_generations: 2,
///     trials_per_evaluation: 10,
///     ..SearchConfig::default()
/// };
/// let seed: SearchSeed = "5eed".parse().unwrap();
/// let strategy = oxo_training::run_search(&config, &mut seed.rng()).unwrap();
/// assert_eq!(strategy.genes().len(), CELL_COUNT);
/// ```
pub fn run_search<R>(config: &SearchConfig, rng: &mut R) -> Result<Strategy, SearchError>
where
    R: Rng + ?Sized,
{
    let search = Search::new(config.clone())?;
    let outcome = search.run(rng, |_| {})?;
    Ok(*outcome.best.strategy())
}
