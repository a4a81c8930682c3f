//! Move generation.
//!
//! This module produces the geometrically legal moves of a single piece:
//! the squares its movement rules allow, without checking whether the move
//! would leave its own king attacked.

mod knight;
mod pawn;
mod sliding;

use chess_core::{Board, Move, Piece, PieceKind, Position};
use thiserror::Error;

pub use knight::KNIGHT_OFFSETS;
pub use sliding::{SlideRule, ALL_DIRECTIONS, DIAGONAL, ORTHOGONAL};

/// Errors from move generation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveGenError {
    /// Moves were requested for a square with no piece on it.
    #[error("no piece on {0}")]
    EmptySquare(Position),
}

/// A list of moves with a fixed maximum capacity.
///
/// A single piece has at most 27 moves (a centralized queen), so we use a
/// fixed-size array to avoid heap allocations during move generation.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Maximum number of moves one piece can have, rounded up.
    pub const MAX_MOVES: usize = 32;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// Returns an iterator over the moves.
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Move>> {
        self.as_slice().iter().copied()
    }

    /// Returns true if the list contains `m`.
    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.as_slice().contains(m)
    }

    /// Copies the moves into a `Vec`.
    pub fn to_vec(&self) -> Vec<Move> {
        self.as_slice().to_vec()
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates the moves of the piece standing on `position`.
///
/// Returns [`MoveGenError::EmptySquare`] if nothing stands there; asking for
/// the moves of an empty square is a caller bug, not an empty answer.
pub fn piece_moves<B: Board + ?Sized>(
    board: &B,
    position: Position,
) -> Result<MoveList, MoveGenError> {
    let Some(piece) = board.piece_at(position) else {
        tracing::debug!(%position, "move generation requested for an empty square");
        return Err(MoveGenError::EmptySquare(position));
    };
    Ok(moves_for(board, position, piece))
}

/// Generates the moves `piece` would have standing on `position`.
///
/// The board is not consulted for `position` itself, so the caller is
/// trusted to pass the piece actually standing there.
pub fn moves_for<B: Board + ?Sized>(board: &B, position: Position, piece: Piece) -> MoveList {
    let mut moves = MoveList::new();
    let team = piece.team();

    match SlideRule::for_kind(piece.kind()) {
        Some(rule) => sliding::slide_moves(board, position, team, rule, &mut moves),
        None if piece.kind() == PieceKind::Knight => {
            knight::knight_moves(board, position, team, &mut moves)
        }
        None => pawn::pawn_moves(board, position, team, &mut moves),
    }

    tracing::trace!(%position, %piece, count = moves.len(), "generated piece moves");
    moves
}
