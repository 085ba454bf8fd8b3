use arrayvec::ArrayVec;
use rand::RngCore;

use crate::{
    IllegalMoveError,
    core::{Board, CELL_COUNT, CellIndex, Outcome, Player},
};

use super::policy::MovePolicy;

/// A single match in progress.
///
/// Owns a fresh [`Board`] for its whole lifetime. Every move is validated by
/// [`Board::place`], so a cell is written at most once.
#[derive(Debug, Clone)]
pub struct GameMatch {
    board: Board,
    to_move: Player,
    moves: ArrayVec<CellIndex, CELL_COUNT>,
    outcome: Option<Outcome>,
}

impl Default for GameMatch {
    fn default() -> Self {
        Self::new()
    }
}

impl GameMatch {
    /// Creates a match on an empty board with [`Player::A`] to move.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            board: Board::EMPTY,
            to_move: Player::A,
            moves: ArrayVec::new_const(),
            outcome: None,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the moves played so far, in order.
    #[must_use]
    pub fn moves(&self) -> &[CellIndex] {
        &self.moves
    }

    /// Returns the result once the match is over.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Marks `index` for the player to move and passes the turn.
    ///
    /// Returns the outcome if this move ended the match.
    pub fn apply_move(&mut self, index: CellIndex) -> Result<Option<Outcome>, IllegalMoveError> {
        let player = self.to_move;
        if self.outcome.is_some() {
            return Err(IllegalMoveError::MatchOver { player, index });
        }
        self.board.place(index, player)?;
        self.moves.push(index);
        self.to_move = player.opponent();
        self.outcome = self.board.outcome();
        Ok(self.outcome)
    }

    /// Plays the match to completion.
    ///
    /// Each turn the active player's policy picks a cell. The first illegal
    /// selection stops the match and is returned as an error.
    pub fn play_out<A, B>(
        &mut self,
        policy_a: &A,
        policy_b: &B,
        rng: &mut dyn RngCore,
    ) -> Result<Outcome, IllegalMoveError>
    where
        A: MovePolicy + ?Sized,
        B: MovePolicy + ?Sized,
    {
        loop {
            if let Some(outcome) = self.outcome {
                return Ok(outcome);
            }
            let index = match self.to_move {
                Player::A => policy_a.select_move(&self.board, Player::A, rng),
                Player::B => policy_b.select_move(&self.board, Player::B, rng),
            };
            self.apply_move(index)?;
        }
    }
}

/// Plays one full match between two policies.
///
/// `policy_a` moves first. The board is created for this match and dropped
/// when it returns.
pub fn play<A, B>(
    policy_a: &A,
    policy_b: &B,
    rng: &mut dyn RngCore,
) -> Result<Outcome, IllegalMoveError>
where
    A: MovePolicy + ?Sized,
    B: MovePolicy + ?Sized,
{
    GameMatch::new().play_out(policy_a, policy_b, rng)
}
