//! Board coordinates.

use std::fmt;

use thiserror::Error;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: u8 = 8;

/// Returns true if `(row, col)` names a square on the board.
///
/// Coordinates are 1-indexed: rows 1-8 are ranks, columns 1-8 are files a-h.
/// Signed inputs let callers test a step off the edge before building a
/// [`Position`].
#[inline]
pub const fn is_on_board(row: i32, col: i32) -> bool {
    row >= 1 && row <= BOARD_SIZE as i32 && col >= 1 && col <= BOARD_SIZE as i32
}

/// Error for coordinates that do not name a square on the board.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("({row}, {col}) is not on the board")]
pub struct OffBoard {
    pub row: u8,
    pub col: u8,
}

/// A square on the board, addressed by 1-indexed row and column.
///
/// A `Position` always lies on the board: every constructor runs
/// [`is_on_board`] first and returns `None` for anything outside it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(u8, u8)", into = "(u8, u8)")
)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// The corner at row 1, column 1.
    pub const A1: Position = Position { row: 1, col: 1 };
    /// The corner at row 8, column 8.
    pub const H8: Position = Position { row: 8, col: 8 };

    /// Creates a position from row and column (both 1-8).
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if is_on_board(row as i32, col as i32) {
            Some(Position { row, col })
        } else {
            None
        }
    }

    /// Parses a position from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || rank < b'1' {
            return None;
        }
        Self::new(rank - b'0', file - b'a' + 1)
    }

    /// Returns the row (rank), 1-8.
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (file), 1-8.
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the position `d_row` rows and `d_col` columns away, if it is on the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i32 + d_row as i32;
        let col = self.col as i32 + d_col as i32;
        if is_on_board(row, col) {
            Some(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Returns the file letter ('a'-'h').
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col - 1) as char
    }

    /// Returns the rank digit ('1'-'8').
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'0' + self.row) as char
    }

    /// Returns the algebraic notation for this position.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }

    /// Iterates over all 64 positions, row by row from (1, 1).
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=BOARD_SIZE).flat_map(|row| (1..=BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = OffBoard;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Position::new(row, col).ok_or(OffBoard { row, col })
    }
}

impl From<Position> for (u8, u8) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
