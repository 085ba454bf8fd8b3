//! Strategy genotypes and fitness evaluation by simulated play.
//!
//! This crate sits between the game engine and the training loop:
//!
//! 1. **Strategy** ([`strategy`]) - The genotype: one [`Cell`](oxo_engine::Cell) value
//!    per board cell, evolved by the genetic algorithm.
//! 2. **Move Policy** ([`move_policy`]) - Turns a strategy (or nothing at all) into a
//!    move on the current board.
//! 3. **Fitness Evaluation** ([`fitness_evaluator`]) - Plays many matches of a candidate
//!    policy against a uniformly random opponent and counts wins.
//!
//! # Architecture
//!
//! ```text
//! Fitness Evaluation (win count for training)
//!     ↓ plays matches with
//! Move Policy (candidate vs random opponent)
//!     ↓ interprets
//! Strategy (genotype)
//! ```
//!
//! # Genotype-Blind Candidates
//!
//! With [`PolicyKind::Blind`](move_policy::PolicyKind::Blind), the default, a
//! candidate picks uniformly random moves: the genotype is carried through
//! selection and breeding but never consulted during play.
//! [`PolicyKind::Preference`](move_policy::PolicyKind::Preference) reads the
//! genotype when choosing moves, which gives the search something to
//! optimize.
//!
//! # Example
//!
//! ```
//! use oxo_engine::Player;
//! use oxo_evaluator::{
//!     fitness_evaluator::{FitnessEvaluator, WinCountEvaluator},
//!     move_policy::PolicyKind,
//!     strategy::Strategy,
//! };
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg32;
//!
//! let strategy: Strategy = "XXX.O.O..".parse().unwrap();
//! let evaluator = WinCountEvaluator::new(100, PolicyKind::Preference);
//! let mut rng = Pcg32::seed_from_u64(1);
//! let wins = evaluator.evaluate(&strategy, Player::A, &mut rng).unwrap();
//! assert!(wins <= 100);
//! ```

pub mod fitness_evaluator;
pub mod move_policy;
pub mod strategy;
