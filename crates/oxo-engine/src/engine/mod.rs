//! Match simulation.
//!
//! - [`GameMatch`] - a single match in progress (board, side to move, move list)
//! - [`MovePolicy`] - move-selection capability queried once per turn
//! - [`play`] - runs a match between two policies to completion
//!
//! # Match Flow
//!
//! 1. Start from an empty board with [`Player::A`](crate::Player::A) to move
//! 2. Ask the active player's policy for an empty cell
//! 3. Mark the cell and check for a completed line or a full board
//! 4. Hand the turn to the opponent and repeat until an [`Outcome`](crate::Outcome)
//!
//! # Example
//!
//! ```
//! use oxo_engine::{MovePolicy, Outcome, play};
//! use oxo_engine::{Board, CellIndex, Player};
//! use rand::{RngCore, SeedableRng as _};
//! use rand_pcg::Pcg32;
//!
//! #[derive(Debug)]
//! struct FirstEmpty;
//!
//! impl MovePolicy for FirstEmpty {
//!     fn select_move(&self, board: &Board, _player: Player, _rng: &mut dyn RngCore) -> CellIndex {
//!         board.empty_cells()[0]
//!     }
//! }
//!
//! let mut rng = Pcg32::seed_from_u64(0);
//! let outcome = play(&FirstEmpty, &FirstEmpty, &mut rng).unwrap();
//! // A completes the anti-diagonal (2, 4, 6) on its fourth move.
//! assert_eq!(outcome, Outcome::Win(Player::A));
//! ```

pub use self::{game_match::*, policy::*};

mod game_match;
mod policy;
