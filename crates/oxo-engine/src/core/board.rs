use std::fmt;

use arrayvec::ArrayVec;

use crate::{IllegalMoveError, OutOfBoundsError};

use super::cell::{Cell, Player};

/// Side length of the square board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board (and loci in a strategy genotype).
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[expect(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
const LINE_TARGET: i32 = BOARD_SIZE as i32;

/// Bounds-checked position of a cell.
///
/// Cells are numbered in row-major order, so `index = row * BOARD_SIZE + col`.
/// A `CellIndex` can only be built for a position that exists on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex(u8);

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

impl CellIndex {
    /// Creates an index from row and column.
    ///
    /// # Example
    ///
    /// ```
    /// use oxo_engine::CellIndex;
    ///
    /// let index = CellIndex::new(1, 2).unwrap();
    /// assert_eq!(index.get(), 5);
    /// assert!(CellIndex::new(3, 0).is_err());
    /// ```
    pub fn new(row: usize, col: usize) -> Result<Self, OutOfBoundsError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(OutOfBoundsError { row, col });
        }
        Ok(Self::from_index_unchecked(row * BOARD_SIZE + col))
    }

    /// Creates an index from a flat row-major position.
    pub fn from_index(index: usize) -> Result<Self, OutOfBoundsError> {
        if index >= CELL_COUNT {
            return Err(OutOfBoundsError {
                row: index / BOARD_SIZE,
                col: index % BOARD_SIZE,
            });
        }
        Ok(Self::from_index_unchecked(index))
    }

    #[expect(clippy::cast_possible_truncation)]
    const fn from_index_unchecked(index: usize) -> Self {
        Self(index as u8)
    }

    /// Returns an iterator over every cell position in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CELL_COUNT).map(Self::from_index_unchecked)
    }

    /// Returns the flat row-major position.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.get() / BOARD_SIZE
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.get() % BOARD_SIZE
    }
}

/// Square grid of [`Cell`] values.
///
/// A board is owned by a single match and discarded afterwards. Cells only
/// change through [`Board::place`], which refuses to overwrite a mark.
///
/// # Terminal Detection
///
/// Cells are encoded as `+1` (A), `-1` (B) and `0` (empty). A player wins when
/// any row, column or diagonal sums to `+BOARD_SIZE` (A) or `-BOARD_SIZE` (B).
/// A full board without such a line is a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const EMPTY: Self = Self {
        cells: [Cell::Empty; CELL_COUNT],
    };

    /// Builds a board from rows, top to bottom.
    #[must_use]
    pub fn from_rows(rows: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (chunk, row) in cells.chunks_exact_mut(BOARD_SIZE).zip(rows) {
            chunk.copy_from_slice(&row);
        }
        Self { cells }
    }

    #[must_use]
    pub fn get(&self, index: CellIndex) -> Cell {
        self.cells[index.get()]
    }

    /// Marks an empty cell for `player`.
    ///
    /// Fails without modifying the board if the cell is already marked.
    pub fn place(&mut self, index: CellIndex, player: Player) -> Result<(), IllegalMoveError> {
        let cell = self.get(index);
        if !cell.is_empty() {
            return Err(IllegalMoveError::Occupied {
                player,
                index,
                cell,
            });
        }
        self.cells[index.get()] = player.cell();
        Ok(())
    }

    /// Returns the positions of all empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> ArrayVec<CellIndex, CELL_COUNT> {
        CellIndex::all()
            .filter(|index| self.get(*index).is_empty())
            .collect()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns the player owning a complete line, if any.
    ///
    /// Lines are checked for A first, then B. On boards reachable through
    /// legal play at most one player can own a line.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        let sums = self.line_sums();
        if sums.contains(&LINE_TARGET) {
            Some(Player::A)
        } else if sums.contains(&-LINE_TARGET) {
            Some(Player::B)
        } else {
            None
        }
    }

    /// Returns the result if the match on this board is over.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(player) = self.winner() {
            Some(Outcome::Win(player))
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Sums of every row, column and both diagonals.
    fn line_sums(&self) -> ArrayVec<i32, { 2 * BOARD_SIZE + 2 }> {
        let value = |row: usize, col: usize| self.cells[row * BOARD_SIZE + col].line_value();
        let mut sums = ArrayVec::new();
        for i in 0..BOARD_SIZE {
            sums.push((0..BOARD_SIZE).map(|col| value(i, col)).sum());
            sums.push((0..BOARD_SIZE).map(|row| value(row, i)).sum());
        }
        sums.push((0..BOARD_SIZE).map(|i| value(i, i)).sum());
        sums.push((0..BOARD_SIZE).map(|i| value(i, BOARD_SIZE - 1 - i)).sum());
        sums
    }
}

/// Result of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Outcome {
    #[display("{_0} wins")]
    Win(Player),
    #[display("draw")]
    Draw,
}

impl Outcome {
    /// Returns the winning player, or `None` for a draw.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::Win(player) => Some(player),
            Self::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg32;

    use super::*;

    use crate::Cell::{Empty as E, PlayerA as A, PlayerB as B};

    /// Reference line check written directly against the rows.
    fn has_line(board: &Board, cell: Cell) -> bool {
        let c = |r: usize, k: usize| board.cells[r * BOARD_SIZE + k];
        let rows = (0..BOARD_SIZE).any(|r| (0..BOARD_SIZE).all(|k| c(r, k) == cell));
        let cols = (0..BOARD_SIZE).any(|k| (0..BOARD_SIZE).all(|r| c(r, k) == cell));
        let diag = (0..BOARD_SIZE).all(|i| c(i, i) == cell);
        let anti = (0..BOARD_SIZE).all(|i| c(i, BOARD_SIZE - 1 - i) == cell);
        rows || cols || diag || anti
    }

    #[test]
    fn test_row_win_for_a() {
        let board = Board::from_rows([[A, A, A], [B, B, E], [E, E, E]]);
        assert_eq!(board.winner(), Some(Player::A));
        assert_eq!(board.outcome(), Some(Outcome::Win(Player::A)));
    }

    #[test]
    fn test_column_and_diagonal_wins_for_b() {
        let column = Board::from_rows([[A, B, A], [E, B, A], [E, B, E]]);
        assert_eq!(column.outcome(), Some(Outcome::Win(Player::B)));

        let diagonal = Board::from_rows([[B, A, A], [E, B, E], [A, E, B]]);
        assert_eq!(diagonal.outcome(), Some(Outcome::Win(Player::B)));

        let anti_diagonal = Board::from_rows([[A, A, B], [E, B, E], [B, A, E]]);
        assert_eq!(anti_diagonal.outcome(), Some(Outcome::Win(Player::B)));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_rows([[A, B, A], [A, B, B], [B, A, A]]);
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
        assert_eq!(board.outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let board = Board::from_rows([[A, B, A], [B, A, B], [B, A, A]]);
        assert!(board.is_full());
        assert_eq!(board.outcome(), Some(Outcome::Win(Player::A)));
    }

    #[test]
    fn test_open_board_has_no_outcome() {
        assert_eq!(Board::EMPTY.outcome(), None);
        let board = Board::from_rows([[A, B, E], [E, E, E], [E, E, E]]);
        assert_eq!(board.outcome(), None);
    }

    #[test]
    fn test_line_sums_agree_with_reference_check() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..2000 {
            let mut cells = [E; CELL_COUNT];
            for cell in &mut cells {
                *cell = rng.random();
            }
            let board = Board { cells };
            let a_line = has_line(&board, A);
            let b_line = has_line(&board, B);
            let expected = if a_line {
                Some(Outcome::Win(Player::A))
            } else if b_line {
                Some(Outcome::Win(Player::B))
            } else if board.is_full() {
                Some(Outcome::Draw)
            } else {
                None
            };
            assert_eq!(board.outcome(), expected, "board: {:?}", board.cells);
        }
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = Board::EMPTY;
        let index = CellIndex::new(1, 1).unwrap();
        board.place(index, Player::A).unwrap();
        assert_eq!(board.get(index), A);

        let err = board.place(index, Player::B).unwrap_err();
        assert_eq!(
            err,
            IllegalMoveError::Occupied {
                player: Player::B,
                index,
                cell: A,
            }
        );
        assert_eq!(board.get(index), A, "occupied cell must not be overwritten");
    }

    #[test]
    fn test_cell_index_bounds() {
        assert_eq!(
            CellIndex::new(0, 3),
            Err(OutOfBoundsError { row: 0, col: 3 })
        );
        assert!(CellIndex::from_index(CELL_COUNT).is_err());
        let index = CellIndex::from_index(7).unwrap();
        assert_eq!((index.row(), index.col()), (2, 1));
        assert_eq!(index.to_string(), "(2, 1)");
        assert_eq!(CellIndex::all().count(), CELL_COUNT);
    }

    #[test]
    fn test_empty_cells_shrink_as_board_fills() {
        let mut board = Board::EMPTY;
        assert_eq!(board.empty_cells().len(), CELL_COUNT);
        board.place(CellIndex::new(0, 0).unwrap(), Player::A).unwrap();
        board.place(CellIndex::new(2, 2).unwrap(), Player::B).unwrap();
        let empty = board.empty_cells();
        assert_eq!(empty.len(), CELL_COUNT - 2);
        assert!(empty.iter().all(|index| board.get(*index).is_empty()));
    }
}
