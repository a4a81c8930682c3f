//! FEN piece placement parsing and serialization.
//!
//! Only the board field of a FEN record is handled here, e.g.
//! `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`. Side to move, castling
//! and clocks belong to game state and are not part of a board snapshot.

use thiserror::Error;

use crate::{Board, ChessBoard, Piece, Position};

/// Errors that can occur when parsing a piece placement string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid piece placement: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid character '{character}' in rank {rank}")]
    InvalidCharacter { character: char, rank: u8 },

    #[error("rank {rank} has {squares} squares, expected 8")]
    InvalidSquareCount { rank: u8, squares: u32 },
}

impl ChessBoard {
    /// The starting layout in FEN piece placement form.
    pub const STANDARD_PLACEMENT: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Builds a board from a FEN piece placement string.
    ///
    /// A full FEN record is accepted too; everything after the first
    /// whitespace is ignored. Adjacent digit runs (`44` for an empty rank)
    /// are summed rather than rejected; only the square count per rank is
    /// checked.
    pub fn from_placement(placement: &str) -> Result<Self, LayoutError> {
        let placement = placement.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(LayoutError::InvalidRankCount(ranks.len()));
        }

        let mut board = ChessBoard::new();
        for (rank, rank_str) in (1..=8u8).rev().zip(ranks) {
            let mut squares = 0u32;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    squares += run;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    squares += 1;
                    let col = u8::try_from(squares).unwrap_or(u8::MAX);
                    if let Some(pos) = Position::new(rank, col) {
                        board.add_piece(pos, piece);
                    }
                } else {
                    return Err(LayoutError::InvalidCharacter { character: c, rank });
                }
            }
            if squares != 8 {
                return Err(LayoutError::InvalidSquareCount { rank, squares });
            }
        }

        Ok(board)
    }

    /// Serializes the board as a FEN piece placement string.
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(64);
        for row in (1..=8u8).rev() {
            let mut empty = 0;
            for col in 1..=8u8 {
                match Position::new(row, col).and_then(|pos| self.piece_at(pos)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row > 1 {
                out.push('/');
            }
        }
        out
    }
}

impl std::str::FromStr for ChessBoard {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_placement(s)
    }
}
