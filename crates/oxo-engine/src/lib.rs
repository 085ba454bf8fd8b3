//! Tic-tac-toe game model and match simulator.
//!
//! - [`core`] holds the data model: [`Cell`], [`Player`], [`CellIndex`] and [`Board`]
//! - [`engine`] plays matches: [`GameMatch`], the [`MovePolicy`] trait and [`play`]
//!
//! # Example
//!
//! ```
//! use oxo_engine::{Board, Cell, Outcome, Player};
//!
//! let board = Board::from_rows([
//!     [Cell::PlayerA, Cell::PlayerA, Cell::PlayerA],
//!     [Cell::PlayerB, Cell::PlayerB, Cell::Empty],
//!     [Cell::Empty, Cell::Empty, Cell::Empty],
//! ]);
//! assert_eq!(board.outcome(), Some(Outcome::Win(Player::A)));
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// A coordinate outside the board was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cell ({row}, {col}) is outside the board")]
pub struct OutOfBoundsError {
    pub row: usize,
    pub col: usize,
}

/// A move that the rules do not allow.
///
/// Policies must only return empty cells. The simulator stops the match with
/// this error instead of picking another cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IllegalMoveError {
    #[display("{player} tried to mark {index}, which already holds {cell}")]
    Occupied {
        player: Player,
        index: CellIndex,
        cell: Cell,
    },
    #[display("{player} tried to mark {index} after the match ended")]
    MatchOver { player: Player, index: CellIndex },
}
