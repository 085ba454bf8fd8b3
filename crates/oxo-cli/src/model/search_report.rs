use chrono::{DateTime, Utc};
use oxo_evaluator::{fitness_evaluator::Fitness, strategy::Strategy};
use oxo_training::{
    config::SearchConfig,
    search::{GenerationReport, SearchOutcome},
    seed::SearchSeed,
};
use serde::{Deserialize, Serialize};

/// Machine-readable summary of a `train` run.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchReport {
    pub finished_at: DateTime<Utc>,
    pub seed: SearchSeed,
    pub config: SearchConfig,
    pub best_strategy: Strategy,
    pub best_fitness: Fitness,
    pub generations: Vec<GenerationReport>,
}

impl SearchReport {
    pub fn new(seed: SearchSeed, config: SearchConfig, outcome: SearchOutcome) -> Self {
        let SearchOutcome { best, generations } = outcome;
        Self {
            finished_at: Utc::now(),
            seed,
            config,
            best_strategy: *best.strategy(),
            best_fitness: best.fitness(),
            generations,
        }
    }
}
