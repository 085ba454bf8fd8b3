//! Genetic search for tic-tac-toe strategies.
//!
//! This crate evolves [`Strategy`](oxo_evaluator::strategy::Strategy)
//! genotypes. Each generation is scored by a
//! [`FitnessEvaluator`](oxo_evaluator::fitness_evaluator::FitnessEvaluator)
//! (by default, the number of wins against a random opponent) and bred into
//! the next generation with roulette-wheel selection, single-point crossover
//! and single-locus mutation.
//!
//! # Architecture
//!
//! ```text
//! SearchConfig + SearchSeed
//!     ↓ drive
//! Search (search)
//!     ↓ evaluates
//! Population (genetic) ── FitnessEvaluator (oxo-evaluator)
//!     ↓ bred by
//! PopulationEvolver (genetic)
//!     ↓ uses
//! ParentSelector (selection) + operators (genes)
//! ```
//!
//! # Reproducibility
//!
//! All randomness comes from the generator passed in by the caller. Seeding a
//! [`SearchSeed`](seed::SearchSeed) generator and running with the same
//! [`SearchConfig`](config::SearchConfig) reproduces the whole run, with or
//! without parallel evaluation.
//!
//! # Example
//!
//! ```
//! use oxo_training::{config::SearchConfig, search::Search, seed::SearchSeed};
//!
//! let config = SearchConfig {
//!     population_size: 6,
//!     num_generations: 3,
//!     trials_per_evaluation: 20,
//!     ..SearchConfig::default()
//! };
//! let search = Search::new(config).unwrap();
//! let seed: SearchSeed = "c0ffee".parse().unwrap();
//! let outcome = search
//!     .run(&mut seed.rng(), |report| {
//!         println!("generation {}: {}", report.generation, report.best.fitness());
//!     })
//!     .unwrap();
//! assert_eq!(outcome.generations.len(), 3);
//! ```
//!
//! # Current Limitations
//!
//! - **No elitism**: the best individual of a generation can be lost when breeding
//! - **Noisy fitness**: win counts against a random opponent vary between evaluations,
//!   so the best individual of one generation may score lower when re-evaluated

pub use self::search::run_search;

pub mod config;
pub mod genes;
pub mod genetic;
pub mod search;
pub mod seed;
pub mod selection;
pub mod stats;
