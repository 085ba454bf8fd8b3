//! Genetic operators on strategy genotypes.
//!
//! - **Initialization**: [`random`] draws every locus uniformly from the three cell values
//! - **Crossover**: [`crossover`] performs single-point recombination
//! - **Mutation**: [`mutate`] resamples one locus
//!
//! Operators never modify their inputs; they return new strategies. The
//! `*_at` variants take the random choice as an argument and are deterministic,
//! which is what the randomized versions delegate to.

use oxo_engine::{CELL_COUNT, Cell, CellIndex};
use oxo_evaluator::strategy::Strategy;
use rand::Rng;

/// Generates a random strategy.
pub fn random<R>(rng: &mut R) -> Strategy
where
    R: Rng + ?Sized,
{
    rng.random()
}

/// Single-point crossover with a uniformly chosen point in `1..CELL_COUNT`.
///
/// See [`crossover_at`] for how children are assembled.
pub fn crossover<R>(p1: &Strategy, p2: &Strategy, rng: &mut R) -> (Strategy, Strategy)
where
    R: Rng + ?Sized,
{
    let point = rng.random_range(1..CELL_COUNT);
    crossover_at(p1, p2, point)
}

/// Single-point crossover at a fixed point.
///
/// The first child takes `p1`'s loci before `point` and `p2`'s from `point`
/// on; the second child is the complementary combination. Together the two
/// children hold exactly one copy of every locus of both parents.
///
/// # Panics
///
/// Panics if `point` is not in `1..CELL_COUNT`.
///
/// # Example
///
/// ```
/// use oxo_evaluator::strategy::Strategy;
/// use oxo_training::genes;
///
/// let p1: Strategy = "XXXXXXXXX".parse().unwrap();
/// let p2: Strategy = "OOOOOOOOO".parse().unwrap();
/// let (c1, c2) = genes::crossover_at(&p1, &p2, 3);
/// assert_eq!(c1.to_string(), "XXXOOOOOO");
/// assert_eq!(c2.to_string(), "OOOXXXXXX");
/// ```
#[must_use]
pub fn crossover_at(p1: &Strategy, p2: &Strategy, point: usize) -> (Strategy, Strategy) {
    assert!(
        (1..CELL_COUNT).contains(&point),
        "crossover point {point} must be in 1..{CELL_COUNT}"
    );
    let mut c1 = *p1.genes();
    let mut c2 = *p2.genes();
    c1[point..].copy_from_slice(&p2.genes()[point..]);
    c2[point..].copy_from_slice(&p1.genes()[point..]);
    (Strategy::from_genes(c1), Strategy::from_genes(c2))
}

/// Returns a copy of `strategy` with one uniformly chosen locus resampled.
///
/// The new value is drawn uniformly from all three cell values and may equal
/// the old one, so a mutation does not always change the strategy.
pub fn mutate<R>(strategy: &Strategy, rng: &mut R) -> Strategy
where
    R: Rng + ?Sized,
{
    let locus = CellIndex::from_index(rng.random_range(0..CELL_COUNT))
        .expect("locus is sampled within the board");
    let value: Cell = rng.random();
    mutate_at(strategy, locus, value)
}

/// Returns a copy of `strategy` with `locus` set to `value`.
#[must_use]
pub fn mutate_at(strategy: &Strategy, locus: CellIndex, value: Cell) -> Strategy {
    strategy.with_gene(locus, value)
}
