use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

/// One of the two sides of a match.
///
/// [`Player::A`] always moves first. Parses from `a`/`b` (any case).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
pub enum Player {
    #[default]
    #[display("A")]
    A,
    #[display("B")]
    B,
}

impl Player {
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    /// Returns the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Returns the mark this player leaves on the board.
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Self::A => Cell::PlayerA,
            Self::B => Cell::PlayerB,
        }
    }
}

/// Contents of a single board cell.
///
/// The same three values are used as genotype loci, so a cell value carries no
/// game-specific meaning beyond "empty" or "marked by one side".
///
/// Text form is one character: `X` for [`Cell::PlayerA`], `O` for
/// [`Cell::PlayerB`], `.` for [`Cell::Empty`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[repr(u8)]
pub enum Cell {
    #[default]
    #[display(".")]
    Empty,
    #[display("X")]
    PlayerA,
    #[display("O")]
    PlayerB,
}

impl Distribution<Cell> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        match rng.random_range(0..=2) {
            0 => Cell::Empty,
            1 => Cell::PlayerA,
            _ => Cell::PlayerB,
        }
    }
}

impl Cell {
    pub const ALL: [Self; 3] = [Self::Empty, Self::PlayerA, Self::PlayerB];

    /// Returns the player owning this cell, or `None` if it is empty.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::PlayerA => Some(Player::A),
            Self::PlayerB => Some(Player::B),
        }
    }

    /// Signed value used for line sums: `+1` for A, `-1` for B, `0` for empty.
    ///
    /// A line belongs to a player when its sum reaches `±BOARD_SIZE`.
    #[must_use]
    pub const fn line_value(self) -> i32 {
        match self {
            Self::Empty => 0,
            Self::PlayerA => 1,
            Self::PlayerB => -1,
        }
    }

    /// Returns the character representation of this cell.
    ///
    /// # Example
    ///
    /// ```
    /// use oxo_engine::Cell;
    ///
    /// assert_eq!(Cell::PlayerA.as_char(), 'X');
    /// assert_eq!(Cell::Empty.as_char(), '.');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::PlayerA => 'X',
            Self::PlayerB => 'O',
        }
    }

    /// Parses a cell from its character representation.
    ///
    /// Lowercase `x`/`o` and `-` for empty are accepted as well.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | '-' => Some(Self::Empty),
            'X' | 'x' => Some(Self::PlayerA),
            'O' | 'o' => Some(Self::PlayerB),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.cell()
    }
}
