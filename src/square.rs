use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of rows (ranks) and columns (files) on the board.
pub const BOARD_SIZE: i8 = 8;

/// A (row, column) board coordinate.
///
/// Row 0 is rank 1 and column 0 is file a, so `Square::at(3, 4)` is e4.
/// Construction does not clamp: off-board squares are ordinary values that
/// move generation produces as candidates and filters with
/// [`Square::is_on_board`] before touching the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: i8,
    col: i8,
}

impl Square {
    #[inline]
    pub const fn at(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Returns true if both coordinates lie in `0..8`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// The square `dr` rows and `dc` columns away. May leave the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Self {
        Self::at(self.row.saturating_add(dr), self.col.saturating_add(dc))
    }

    /// Grid index for on-board squares.
    #[inline]
    pub(crate) fn index(self) -> Option<(usize, usize)> {
        self.is_on_board()
            .then_some((self.row as usize, self.col as usize))
    }

    /// Iterates all 64 on-board squares, rank 1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::at(row, col)))
    }
}

/// Algebraic notation ("e4") for on-board squares, raw coordinates otherwise.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", (b'a' + self.col as u8) as char, self.row + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// Error when parsing algebraic square notation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid square notation: '{0}'")]
pub struct SquareParseError(String);

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .to_ascii_lowercase()
            .parse::<shakmaty::Square>()
            .map(Square::from)
            .map_err(|_| SquareParseError(s.to_string()))
    }
}

impl From<shakmaty::Square> for Square {
    fn from(square: shakmaty::Square) -> Self {
        Self::at(square.rank() as i8, square.file() as i8)
    }
}

impl TryFrom<Square> for shakmaty::Square {
    type Error = Square;

    /// Fails with the original square when it is off the board.
    fn try_from(square: Square) -> Result<Self, Self::Error> {
        if square.is_on_board() {
            Ok(shakmaty::Square::from_coords(
                shakmaty::File::new(square.col as u32),
                shakmaty::Rank::new(square.row as u32),
            ))
        } else {
            Err(square)
        }
    }
}

/// Owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row delta of a pawn step: White moves up the board, Black down.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// Row from which a pawn may advance two squares.
    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => 6,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::White => "white",
            Player::Black => "black",
        })
    }
}

impl From<shakmaty::Color> for Player {
    fn from(color: shakmaty::Color) -> Self {
        match color {
            shakmaty::Color::White => Player::White,
            shakmaty::Color::Black => Player::Black,
        }
    }
}

impl From<Player> for shakmaty::Color {
    fn from(player: Player) -> Self {
        match player {
            Player::White => shakmaty::Color::White,
            Player::Black => shakmaty::Color::Black,
        }
    }
}
