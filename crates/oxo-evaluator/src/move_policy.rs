//! Move-selection policies used during fitness evaluation.
//!
//! - [`RandomMovePolicy`] - uniform choice among empty cells (the opponent)
//! - [`PreferenceMovePolicy`] - genotype-driven choice for a candidate
//! - [`CandidatePolicy`] - the policy a candidate plays with, chosen by [`PolicyKind`]
//!
//! All policies only ever return empty cells. The simulator never queries a
//! policy on a finished board, so there is always at least one empty cell.

use oxo_engine::{Board, CellIndex, MovePolicy, Player};
use rand::{RngCore, seq::IndexedRandom as _};
use serde::{Deserialize, Serialize};

use crate::strategy::Strategy;

const NO_EMPTY_CELL: &str = "policies are only queried while the board has empty cells";

/// Picks a uniformly random empty cell.
///
/// # Panics
///
/// [`select_move`](MovePolicy::select_move) panics if the board has no empty
/// cell. [`play`](oxo_engine::play) never asks on a finished board.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomMovePolicy;

impl MovePolicy for RandomMovePolicy {
    fn select_move(&self, board: &Board, _player: Player, rng: &mut dyn RngCore) -> CellIndex {
        *board.empty_cells().choose(rng).expect(NO_EMPTY_CELL)
    }
}

/// Reads the genotype as "preferred mark per cell".
///
/// Among the empty cells, the first one (row-major) whose locus equals the
/// acting player's mark is chosen. When no empty cell matches, a uniformly
/// random empty cell is played instead.
///
/// # Panics
///
/// [`select_move`](MovePolicy::select_move) panics if the board has no empty
/// cell.
#[derive(Debug, Clone, Copy)]
pub struct PreferenceMovePolicy<'a> {
    strategy: &'a Strategy,
}

impl<'a> PreferenceMovePolicy<'a> {
    #[must_use]
    pub const fn new(strategy: &'a Strategy) -> Self {
        Self { strategy }
    }
}

impl MovePolicy for PreferenceMovePolicy<'_> {
    fn select_move(&self, board: &Board, player: Player, rng: &mut dyn RngCore) -> CellIndex {
        let empty = board.empty_cells();
        let mark = player.cell();
        empty
            .iter()
            .copied()
            .find(|index| self.strategy.gene(*index) == mark)
            .or_else(|| empty.choose(rng).copied())
            .expect(NO_EMPTY_CELL)
    }
}

/// Which policy a candidate strategy plays with.
///
/// Parses from `blind` or `preference` (any case).
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// Ignores the genotype and plays uniformly random moves.
    #[default]
    #[display("blind")]
    Blind,
    /// Plays by [`PreferenceMovePolicy`].
    #[display("preference")]
    Preference,
}

impl PolicyKind {
    /// Builds the policy a candidate with `strategy` plays with.
    #[must_use]
    pub fn policy_for(self, strategy: &Strategy) -> CandidatePolicy<'_> {
        match self {
            Self::Blind => CandidatePolicy::Blind(RandomMovePolicy),
            Self::Preference => CandidatePolicy::Preference(PreferenceMovePolicy::new(strategy)),
        }
    }
}

/// Policy used by a candidate during evaluation.
#[derive(Debug, Clone, Copy)]
pub enum CandidatePolicy<'a> {
    Blind(RandomMovePolicy),
    Preference(PreferenceMovePolicy<'a>),
}

impl MovePolicy for CandidatePolicy<'_> {
    fn select_move(&self, board: &Board, player: Player, rng: &mut dyn RngCore) -> CellIndex {
        match self {
            Self::Blind(policy) => policy.select_move(board, player, rng),
            Self::Preference(policy) => policy.select_move(board, player, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use oxo_engine::Cell::{Empty as E, PlayerA as A, PlayerB as B};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn index(row: usize, col: usize) -> CellIndex {
        CellIndex::new(row, col).unwrap()
    }

    #[test]
    fn test_random_policy_only_returns_empty_cells() {
        let board = Board::from_rows([[A, B, A], [E, B, E], [A, E, B]]);
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..100 {
            let choice = RandomMovePolicy.select_move(&board, Player::A, &mut rng);
            assert!(board.get(choice).is_empty(), "picked {choice}");
        }
    }

    #[test]
    #[should_panic(expected = "empty cells")]
    fn test_random_policy_panics_on_full_board() {
        let board = Board::from_rows([[A, B, A], [A, B, B], [B, A, A]]);
        let mut rng = Pcg32::seed_from_u64(1);
        let _ = RandomMovePolicy.select_move(&board, Player::A, &mut rng);
    }

    #[test]
    #[should_panic(expected = "empty cells")]
    fn test_preference_policy_panics_on_full_board() {
        let strategy: Strategy = "XXXXXXXXX".parse().unwrap();
        let board = Board::from_rows([[A, B, A], [A, B, B], [B, A, A]]);
        let mut rng = Pcg32::seed_from_u64(1);
        let _ = PreferenceMovePolicy::new(&strategy).select_move(&board, Player::A, &mut rng);
    }

    #[test]
    fn test_preference_picks_first_matching_empty_cell() {
        // A prefers (0, 0) and (2, 2); (0, 0) is taken.
        let strategy: Strategy = "X.O......".parse().unwrap();
        let strategy = strategy.with_gene(index(2, 2), A);
        let board = Board::from_rows([[B, E, E], [E, E, E], [E, E, E]]);
        let mut rng = Pcg32::seed_from_u64(0);
        let policy = PreferenceMovePolicy::new(&strategy);
        assert_eq!(policy.select_move(&board, Player::A, &mut rng), index(2, 2));
        // B prefers (0, 2).
        assert_eq!(policy.select_move(&board, Player::B, &mut rng), index(0, 2));
    }

    #[test]
    fn test_preference_falls_back_to_random_empty_cell() {
        let strategy: Strategy = "OOOOOOOOO".parse().unwrap();
        let board = Board::from_rows([[A, B, E], [E, A, B], [E, E, E]]);
        let policy = PreferenceMovePolicy::new(&strategy);
        let mut rng = Pcg32::seed_from_u64(4);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let choice = policy.select_move(&board, Player::A, &mut rng);
            assert!(board.get(choice).is_empty());
            if !seen.contains(&choice) {
                seen.push(choice);
            }
        }
        assert_eq!(seen.len(), board.empty_cells().len());
    }

    #[test]
    fn test_blind_policy_ignores_genotype() {
        let board = Board::EMPTY;
        let first: Strategy = "XXXXXXXXX".parse().unwrap();
        let second: Strategy = "OO.OO.OO.".parse().unwrap();
        let mut rng1 = Pcg32::seed_from_u64(21);
        let mut rng2 = Pcg32::seed_from_u64(21);
        for _ in 0..50 {
            let a = PolicyKind::Blind
                .policy_for(&first)
                .select_move(&board, Player::A, &mut rng1);
            let b = PolicyKind::Blind
                .policy_for(&second)
                .select_move(&board, Player::A, &mut rng2);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_policy_kind_parse_and_display() {
        assert_eq!("blind".parse::<PolicyKind>().unwrap(), PolicyKind::Blind);
        assert_eq!(
            "Preference".parse::<PolicyKind>().unwrap(),
            PolicyKind::Preference
        );
        assert!("greedy".parse::<PolicyKind>().is_err());
        assert_eq!(PolicyKind::Preference.to_string(), "preference");
        assert_eq!(
            serde_json::to_string(&PolicyKind::Blind).unwrap(),
            "\"blind\""
        );
    }
}
