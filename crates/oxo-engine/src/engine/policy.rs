use std::fmt;

use rand::RngCore;

use crate::core::{Board, CellIndex, Player};

/// Move-selection capability for one side of a match.
///
/// The simulator calls [`select_move`](Self::select_move) once per turn with
/// the current board and the player to move. Implementations must return an
/// empty cell; anything else aborts the match with
/// [`IllegalMoveError`](crate::IllegalMoveError).
///
/// Randomness is passed in explicitly so that a seeded generator makes the
/// whole match reproducible.
pub trait MovePolicy: fmt::Debug {
    fn select_move(&self, board: &Board, player: Player, rng: &mut dyn RngCore) -> CellIndex;
}

impl<P> MovePolicy for &P
where
    P: MovePolicy + ?Sized,
{
    fn select_move(&self, board: &Board, player: Player, rng: &mut dyn RngCore) -> CellIndex {
        (**self).select_move(board, player, rng)
    }
}

impl<P> MovePolicy for Box<P>
where
    P: MovePolicy + ?Sized,
{
    fn select_move(&self, board: &Board, player: Player, rng: &mut dyn RngCore) -> CellIndex {
        (**self).select_move(board, player, rng)
    }
}
