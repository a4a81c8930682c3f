//! Move representation.

use crate::{PieceKind, Position};
use std::fmt;

/// A move from one position to another.
///
/// The promotion kind is present only for a pawn move that lands on its
/// team's last row; every other move carries `None`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    start: Position,
    end: Position,
    promotion: Option<PieceKind>,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(start: Position, end: Position, promotion: Option<PieceKind>) -> Self {
        Move {
            start,
            end,
            promotion,
        }
    }

    /// Creates a move without promotion.
    #[inline]
    pub const fn normal(start: Position, end: Position) -> Self {
        Self::new(start, end, None)
    }

    /// Creates a promoting move.
    #[inline]
    pub const fn promotion(start: Position, end: Position, kind: PieceKind) -> Self {
        Self::new(start, end, Some(kind))
    }

    /// Returns the starting position.
    #[inline]
    pub const fn start(self) -> Position {
        self.start
    }

    /// Returns the ending position.
    #[inline]
    pub const fn end(self) -> Position {
        self.end
    }

    /// Returns the kind a pawn promotes to, if any.
    #[inline]
    pub const fn promotion_kind(self) -> Option<PieceKind> {
        self.promotion
    }

    /// Returns true if this is a promotion move.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Returns the long algebraic notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_uci(self) -> String {
        match self.promotion {
            Some(kind) => format!("{}{}{}", self.start, self.end, kind.to_char()),
            None => format!("{}{}", self.start, self.end),
        }
    }

    /// Parses a move from long algebraic notation.
    ///
    /// Only the coordinates and promotion letter are checked; whether the
    /// move is playable depends on the board it is applied to.
    pub fn from_uci(s: &str) -> Option<Self> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return None;
        }
        let start = Position::from_algebraic(&s[0..2])?;
        let end = Position::from_algebraic(&s[2..4])?;
        let promotion = match s.chars().nth(4) {
            Some(c) => {
                let kind = PieceKind::from_char(c)?;
                if !kind.is_promotion_target() {
                    return None;
                }
                Some(kind)
            }
            None => None,
        };
        Some(Move::new(start, end, promotion))
    }

    /// A null move (used as placeholder, not a playable move).
    pub const NULL: Move = Move::normal(Position::A1, Position::A1);
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
