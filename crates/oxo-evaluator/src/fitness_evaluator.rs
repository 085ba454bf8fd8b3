//! Fitness evaluation: win counts from simulated matches.
//!
//! A candidate's fitness is the number of matches it wins out of a fixed number
//! of trials against [`RandomMovePolicy`]. Each trial starts from an empty
//! board; draws and losses both count as zero.
//!
//! ```text
//! fitness = |{ trial : winner(trial) == role }|,  0 <= fitness <= trials
//! ```
//!
//! The candidate plays the side given by `role`. Since [`Player::A`] always
//! moves first, evaluating as B means the candidate answers the random
//! opponent's opening move.

use std::fmt;

use oxo_engine::{IllegalMoveError, Player, play};
use rand::RngCore;

use crate::{
    move_policy::{PolicyKind, RandomMovePolicy},
    strategy::Strategy,
};

/// Number of matches won by a candidate.
pub type Fitness = u32;

/// Computes the fitness of a single strategy.
///
/// Used by the training loop for every individual in every generation.
pub trait FitnessEvaluator: fmt::Debug + Send + Sync {
    /// Plays the evaluation matches and returns the number won by `role`.
    fn evaluate(
        &self,
        strategy: &Strategy,
        role: Player,
        rng: &mut dyn RngCore,
    ) -> Result<Fitness, IllegalMoveError>;

    /// Upper bound of [`evaluate`](Self::evaluate).
    fn max_fitness(&self) -> Fitness;
}

/// Default evaluator: plays `trials` matches against a random opponent.
#[derive(Debug, Clone, Copy)]
pub struct WinCountEvaluator {
    trials: u32,
    policy: PolicyKind,
}

impl WinCountEvaluator {
    /// Creates a new evaluator.
    ///
    /// # Arguments
    /// * `trials` - Matches played per evaluation
    /// * `policy` - How the candidate turns its strategy into moves
    #[must_use]
    pub const fn new(trials: u32, policy: PolicyKind) -> Self {
        Self { trials, policy }
    }

    #[must_use]
    pub const fn trials(&self) -> u32 {
        self.trials
    }

    #[must_use]
    pub const fn policy(&self) -> PolicyKind {
        self.policy
    }
}

impl FitnessEvaluator for WinCountEvaluator {
    fn evaluate(
        &self,
        strategy: &Strategy,
        role: Player,
        rng: &mut dyn RngCore,
    ) -> Result<Fitness, IllegalMoveError> {
        let candidate = self.policy.policy_for(strategy);
        let opponent = RandomMovePolicy;
        let mut wins = 0;
        for _ in 0..self.trials {
            let outcome = match role {
                Player::A => play(&candidate, &opponent, rng)?,
                Player::B => play(&opponent, &candidate, rng)?,
            };
            if outcome.winner() == Some(role) {
                wins += 1;
            }
        }
        Ok(wins)
    }

    fn max_fitness(&self) -> Fitness {
        self.trials
    }
}
