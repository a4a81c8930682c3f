//! Board occupancy.
//!
//! Move generation only needs to ask "what stands on this square?", so it
//! depends on the [`Board`] trait rather than on a concrete board type.
//! [`ChessBoard`] is the 8x8 snapshot used by callers that do not bring
//! their own representation.

use std::collections::HashMap;
use std::fmt;

use crate::{Piece, PieceKind, Position, Team};

/// Read-only access to the occupant of each square.
pub trait Board {
    /// Returns the piece on `position`, or `None` if the square is empty.
    fn piece_at(&self, position: Position) -> Option<Piece>;

    /// Returns true if no piece stands on `position`.
    #[inline]
    fn is_empty_at(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }
}

impl<B: Board + ?Sized> Board for &B {
    #[inline]
    fn piece_at(&self, position: Position) -> Option<Piece> {
        (**self).piece_at(position)
    }
}

impl Board for HashMap<Position, Piece> {
    #[inline]
    fn piece_at(&self, position: Position) -> Option<Piece> {
        self.get(&position).copied()
    }
}

/// Back row piece order from column 1 to column 8.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 board snapshot.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct ChessBoard {
    /// Indexed `[row - 1][col - 1]`.
    squares: [[Option<Piece>; 8]; 8],
}

impl ChessBoard {
    /// Creates an empty board.
    pub const fn new() -> Self {
        ChessBoard {
            squares: [[None; 8]; 8],
        }
    }

    /// Creates a board with the standard starting layout.
    pub fn standard() -> Self {
        let mut board = ChessBoard::new();
        board.reset();
        board
    }

    /// Clears the board and sets up the standard starting layout.
    pub fn reset(&mut self) {
        *self = ChessBoard::new();
        for team in Team::ALL {
            let back = team.back_row();
            let pawns = team.pawn_start_row();
            for (col, kind) in (1..=8).zip(BACK_ROW) {
                self.squares[back as usize - 1][col - 1] = Some(Piece::new(team, kind));
                self.squares[pawns as usize - 1][col - 1] =
                    Some(Piece::new(team, PieceKind::Pawn));
            }
        }
    }

    /// Places `piece` on `position`, returning whatever stood there before.
    pub fn add_piece(&mut self, position: Position, piece: Piece) -> Option<Piece> {
        self.slot_mut(position).replace(piece)
    }

    /// Removes and returns the piece on `position`.
    pub fn remove_piece(&mut self, position: Position) -> Option<Piece> {
        self.slot_mut(position).take()
    }

    /// Iterates over all occupied squares, row by row from (1, 1).
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    /// Returns the number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().filter(|sq| sq.is_some()).count()
    }

    #[inline]
    fn slot_mut(&mut self, position: Position) -> &mut Option<Piece> {
        &mut self.squares[position.row() as usize - 1][position.col() as usize - 1]
    }
}

impl Board for ChessBoard {
    #[inline]
    fn piece_at(&self, position: Position) -> Option<Piece> {
        self.squares[position.row() as usize - 1][position.col() as usize - 1]
    }
}

impl fmt::Debug for ChessBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChessBoard({})", self.to_placement())
    }
}

impl fmt::Display for ChessBoard {
    /// Draws the board with row 8 at the top, `.` for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=8u8).rev() {
            for col in 1..=8u8 {
                let c = Position::new(row, col)
                    .and_then(|pos| self.piece_at(pos))
                    .map_or('.', Piece::to_fen_char);
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
