//! Fitness-proportionate ("roulette wheel") parent selection.
//!
//! Each parent is drawn independently, with replacement, with probability
//! `fitness[i] / Σ fitness`. An individual with zero fitness is never drawn as
//! long as some individual has positive fitness.
//!
//! # Degenerate Generations
//!
//! When every individual scored zero wins the proportional weights are
//! undefined. Instead of dividing by zero, the selector falls back to uniform
//! selection for that generation and reports it as [`SelectionMode::Uniform`].

use oxo_evaluator::fitness_evaluator::Fitness;
use rand::{
    Rng,
    distr::{Distribution, weighted::WeightedIndex},
};
use serde::{Deserialize, Serialize};

/// How parents were drawn for a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionMode {
    /// Probability proportional to fitness.
    Proportional,
    /// All fitness scores were zero; every individual is equally likely.
    Uniform,
}

/// Parent selection cannot be set up.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SelectionError {
    #[display("cannot select parents from an empty population")]
    EmptyPopulation,
    #[display("invalid fitness weights: {reason}")]
    InvalidWeights { reason: String },
}

/// Samples parent indices from one generation's fitness scores.
#[derive(Debug, Clone)]
pub struct ParentSelector {
    kind: SelectorKind,
}

#[derive(Debug, Clone)]
enum SelectorKind {
    Proportional(WeightedIndex<u64>),
    Uniform { len: usize },
}

impl ParentSelector {
    /// Builds a selector for the given fitness scores (in population order).
    ///
    /// # Example
    ///
    /// ```
    /// use oxo_training::selection::{ParentSelector, SelectionMode};
    ///
    /// let selector = ParentSelector::new(&[0, 0, 0, 0]).unwrap();
    /// assert_eq!(selector.mode(), SelectionMode::Uniform);
    ///
    /// let selector = ParentSelector::new(&[0, 3, 0, 1]).unwrap();
    /// assert_eq!(selector.mode(), SelectionMode::Proportional);
    /// ```
    pub fn new(fitness: &[Fitness]) -> Result<Self, SelectionError> {
        if fitness.is_empty() {
            return Err(SelectionError::EmptyPopulation);
        }
        let kind = if fitness.iter().all(|f| *f == 0) {
            SelectorKind::Uniform { len: fitness.len() }
        } else {
            let weights = fitness.iter().map(|f| u64::from(*f));
            let dist = WeightedIndex::new(weights).map_err(|e| SelectionError::InvalidWeights {
                reason: e.to_string(),
            })?;
            SelectorKind::Proportional(dist)
        };
        Ok(Self { kind })
    }

    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        match self.kind {
            SelectorKind::Proportional(_) => SelectionMode::Proportional,
            SelectorKind::Uniform { .. } => SelectionMode::Uniform,
        }
    }

    /// Draws one individual index.
    pub fn select<R>(&self, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
    {
        match &self.kind {
            SelectorKind::Proportional(dist) => dist.sample(rng),
            SelectorKind::Uniform { len } => rng.random_range(0..*len),
        }
    }

    /// Draws two parent indices independently (the same index may appear twice).
    pub fn select_parents<R>(&self, rng: &mut R) -> (usize, usize)
    where
        R: Rng + ?Sized,
    {
        (self.select(rng), self.select(rng))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn histogram(selector: &ParentSelector, len: usize, draws: usize) -> Vec<usize> {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut counts = vec![0; len];
        for _ in 0..draws {
            let (a, b) = selector.select_parents(&mut rng);
            counts[a] += 1;
            counts[b] += 1;
        }
        counts
    }

    #[test]
    fn test_zero_fitness_is_never_selected() {
        let fitness = [0, 5, 0, 10, 0];
        let selector = ParentSelector::new(&fitness).unwrap();
        let counts = histogram(&selector, fitness.len(), 5000);
        assert_eq!(counts[0], 0);
        assert_eq!(counts[2], 0);
        assert_eq!(counts[4], 0);
        // 10 vs 5: about twice as often
        let ratio = counts[3] as f64 / counts[1] as f64;
        assert!((1.7..2.3).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn test_all_zero_falls_back_to_uniform() {
        let fitness = [0; 4];
        let selector = ParentSelector::new(&fitness).unwrap();
        assert!(selector.mode().is_uniform());
        let counts = histogram(&selector, fitness.len(), 4000);
        for count in &counts {
            // 8000 draws over 4 individuals
            assert!((1700..2300).contains(count), "{counts:?}");
        }
    }

    #[test]
    fn test_single_positive_individual_always_wins() {
        let selector = ParentSelector::new(&[0, 0, 7]).unwrap();
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(selector.select_parents(&mut rng), (2, 2));
        }
    }

    #[test]
    fn test_empty_population_is_rejected() {
        assert_eq!(
            ParentSelector::new(&[]).unwrap_err(),
            SelectionError::EmptyPopulation
        );
    }
}
