//! Generational genetic algorithm over strategy genotypes.
//!
//! One generation goes through these steps:
//!
//! 1. **Evaluate** - every strategy plays `trials` matches and gets a win count
//! 2. **Select** - parents are drawn with probability proportional to fitness
//! 3. **Crossover** - each pair of parents yields two children by single-point crossover
//! 4. **Mutate** - each child independently has one locus resampled with the mutation probability
//!
//! Children replace the whole generation: there is no elitism and no
//! survivor selection. The population is never sorted, so ties in fitness
//! resolve to the earliest individual.
//!
//! # Key Components
//!
//! - [`Population`] - The strategies of one generation, not yet scored
//! - [`EvaluatedPopulation`] - The same strategies paired with their fitness
//! - [`PopulationEvolver`] - Breeds the next [`Population`] from an evaluated one
//!
//! # Parallelization
//!
//! [`Population::evaluate`] can spawn one scoped thread per individual. Before
//! any match is played, a seed is drawn for every individual in population
//! order from the caller's generator, and each individual gets its own
//! generator from that seed. The outcome therefore depends only on the
//! caller's generator, not on thread scheduling.

use std::{panic, thread};

use oxo_engine::{IllegalMoveError, Player};
use oxo_evaluator::{
    fitness_evaluator::{Fitness, FitnessEvaluator},
    strategy::Strategy,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    genes,
    seed::SearchSeed,
    selection::{ParentSelector, SelectionError, SelectionMode},
    stats::FitnessStats,
};

/// A strategy together with the fitness it scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    strategy: Strategy,
    fitness: Fitness,
}

impl Individual {
    #[must_use]
    pub const fn new(strategy: Strategy, fitness: Fitness) -> Self {
        Self { strategy, fitness }
    }

    #[must_use]
    pub const fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Number of evaluation matches this strategy won.
    #[must_use]
    pub const fn fitness(&self) -> Fitness {
        self.fitness
    }
}

/// The strategies of one generation.
///
/// A population is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    strategies: Vec<Strategy>,
}

impl Population {
    /// Creates a population of `count` uniformly random strategies.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn random<R>(count: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let strategies = (0..count).map(|_| genes::random(rng)).collect();
        Self::from_strategies(strategies)
    }

    /// Wraps existing strategies, keeping their order.
    ///
    /// # Panics
    ///
    /// Panics if `strategies` is empty.
    #[must_use]
    pub fn from_strategies(strategies: Vec<Strategy>) -> Self {
        assert!(!strategies.is_empty(), "population must not be empty");
        Self { strategies }
    }

    #[must_use]
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Scores every strategy with `evaluator`, playing as `role`.
    ///
    /// With `parallel` set, each individual is evaluated on its own scoped
    /// thread. Either way, the result for a given `rng` state is the same.
    ///
    /// # Errors
    ///
    /// Returns the first [`IllegalMoveError`] (in population order) raised by
    /// any evaluation.
    pub fn evaluate<E, R>(
        &self,
        evaluator: &E,
        role: Player,
        parallel: bool,
        rng: &mut R,
    ) -> Result<EvaluatedPopulation, IllegalMoveError>
    where
        E: FitnessEvaluator + ?Sized,
        R: Rng + ?Sized,
    {
        let seeds = self
            .strategies
            .iter()
            .map(|_| rng.random())
            .collect::<Vec<SearchSeed>>();

        let score = |strategy: &Strategy, seed: SearchSeed| {
            let mut rng = seed.rng();
            let fitness = evaluator.evaluate(strategy, role, &mut rng)?;
            Ok::<_, IllegalMoveError>(Individual::new(*strategy, fitness))
        };

        let individuals = if parallel {
            thread::scope(|s| {
                let handles = std::iter::zip(&self.strategies, seeds)
                    .map(|(strategy, seed)| s.spawn(move || score(strategy, seed)))
                    .collect::<Vec<_>>();
                handles
                    .into_iter()
                    .map(|handle| handle.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                    .collect::<Result<Vec<_>, _>>()
            })?
        } else {
            std::iter::zip(&self.strategies, seeds)
                .map(|(strategy, seed)| score(strategy, seed))
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(EvaluatedPopulation { individuals })
    }
}

/// A generation whose strategies have all been scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedPopulation {
    individuals: Vec<Individual>,
}

impl EvaluatedPopulation {
    /// Individuals in population order.
    #[must_use]
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    #[must_use]
    pub fn fitness_scores(&self) -> Vec<Fitness> {
        self.individuals.iter().map(Individual::fitness).collect()
    }

    /// Returns the individual with the highest fitness.
    ///
    /// Ties resolve to the one that comes first in population order.
    #[must_use]
    pub fn best_individual(&self) -> &Individual {
        let mut best = &self.individuals[0];
        for ind in &self.individuals[1..] {
            if ind.fitness > best.fitness {
                best = ind;
            }
        }
        best
    }

    #[must_use]
    pub fn fitness_stats(&self) -> FitnessStats {
        FitnessStats::new(self.fitness_scores()).expect("population is never empty")
    }
}

/// Breeds the next generation.
#[derive(Debug, Clone, Copy)]
pub struct PopulationEvolver {
    /// Probability that each child gets one locus resampled
    pub mutation_probability: f64,
}

impl PopulationEvolver {
    /// Creates the next generation from an evaluated one.
    ///
    /// Pairs of parents are drawn by [`ParentSelector`]; each pair produces two
    /// children by crossover, each child is mutated independently, and both
    /// are appended until the new population has the same size as the old
    /// one. Also returns how parents were selected.
    ///
    /// # Panics
    ///
    /// Panics if `mutation_probability` is outside `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] if the fitness scores cannot be turned into
    /// selection weights.
    pub fn evolve<R>(
        &self,
        population: &EvaluatedPopulation,
        rng: &mut R,
    ) -> Result<(Population, SelectionMode), SelectionError>
    where
        R: Rng + ?Sized,
    {
        let selector = ParentSelector::new(&population.fitness_scores())?;
        let size = population.len();
        let mut next = Vec::with_capacity(size + 1);

        while next.len() < size {
            let (i, j) = selector.select_parents(rng);
            let p1 = &population.individuals[i].strategy;
            let p2 = &population.individuals[j].strategy;
            let (c1, c2) = genes::crossover(p1, p2, rng);
            for child in [c1, c2] {
                let child = if rng.random_bool(self.mutation_probability) {
                    genes::mutate(&child, rng)
                } else {
                    child
                };
                next.push(child);
            }
        }
        next.truncate(size);

        Ok((Population::from_strategies(next), selector.mode()))
    }
}
