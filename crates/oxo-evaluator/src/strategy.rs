//! Strategy genotype.
//!
//! A [`Strategy`] holds exactly [`CELL_COUNT`] loci, one per board cell, each an
//! [`Cell`] value. The length is part of the type, so every strategy built by
//! initialization, crossover or mutation has the right shape.
//!
//! # Text Form
//!
//! Strategies print and parse as nine characters in row-major order, using the
//! cell characters `X`, `O` and `.`:
//!
//! ```
//! use oxo_engine::{Cell, CellIndex};
//! use oxo_evaluator::strategy::Strategy;
//!
//! let strategy: Strategy = "X.O\n.X.\nO.X".parse().unwrap();
//! assert_eq!(strategy.to_string(), "X.O.X.O.X");
//! assert_eq!(strategy.gene(CellIndex::new(0, 2).unwrap()), Cell::PlayerB);
//! ```
//!
//! Whitespace between characters is ignored so that a board laid out in rows
//! can be pasted directly. Serde uses the same compact string.

use std::{fmt, str::FromStr};

use oxo_engine::{CELL_COUNT, Cell, CellIndex};
use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Candidate solution evolved by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Strategy {
    genes: [Cell; CELL_COUNT],
}

/// Error returned when parsing a [`Strategy`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseStrategyError {
    #[display("expected {CELL_COUNT} cells, got {len}")]
    WrongLength { len: usize },
    #[display("invalid cell character {ch:?} at position {position}")]
    InvalidChar { ch: char, position: usize },
}

/// Samples a strategy with every locus drawn uniformly from the three cell values.
impl Distribution<Strategy> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Strategy {
        let mut genes = [Cell::Empty; CELL_COUNT];
        for gene in &mut genes {
            *gene = rng.random();
        }
        Strategy { genes }
    }
}

impl Strategy {
    #[must_use]
    pub const fn from_genes(genes: [Cell; CELL_COUNT]) -> Self {
        Self { genes }
    }

    #[must_use]
    pub const fn genes(&self) -> &[Cell; CELL_COUNT] {
        &self.genes
    }

    /// Returns the locus associated with a board cell.
    #[must_use]
    pub const fn gene(&self, index: CellIndex) -> Cell {
        self.genes[index.get()]
    }

    /// Returns a copy with one locus replaced.
    #[must_use]
    pub const fn with_gene(mut self, index: CellIndex, value: Cell) -> Self {
        self.genes[index.get()] = value;
        self
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gene in &self.genes {
            write!(f, "{}", gene.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars = s.chars().filter(|c| !c.is_whitespace());
        let len = chars.clone().count();
        if len != CELL_COUNT {
            return Err(ParseStrategyError::WrongLength { len });
        }
        let mut genes = [Cell::Empty; CELL_COUNT];
        for (position, (gene, ch)) in genes.iter_mut().zip(chars).enumerate() {
            *gene = Cell::from_char(ch).ok_or(ParseStrategyError::InvalidChar { ch, position })?;
        }
        Ok(Self { genes })
    }
}

impl Serialize for Strategy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Strategy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid strategy {s:?}: {e}")))
    }
}
