//! Directional walking shared by kings, queens, rooks and bishops.

use chess_core::{Board, Move, PieceKind, Position, Team};

use super::MoveList;

/// Orthogonal unit steps as (row delta, column delta).
pub const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Diagonal unit steps as (row delta, column delta).
pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

/// All eight compass steps, clockwise from north.
pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// How far and in which directions a piece walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideRule {
    pub directions: &'static [(i8, i8)],
    pub max_steps: u8,
}

impl SlideRule {
    pub const KING: SlideRule = SlideRule {
        directions: &ALL_DIRECTIONS,
        max_steps: 1,
    };
    pub const QUEEN: SlideRule = SlideRule {
        directions: &ALL_DIRECTIONS,
        max_steps: 7,
    };
    pub const ROOK: SlideRule = SlideRule {
        directions: &ORTHOGONAL,
        max_steps: 7,
    };
    pub const BISHOP: SlideRule = SlideRule {
        directions: &DIAGONAL,
        max_steps: 7,
    };

    /// Returns the walking rule for `kind`, or `None` for knights and pawns.
    pub const fn for_kind(kind: PieceKind) -> Option<SlideRule> {
        match kind {
            PieceKind::King => Some(Self::KING),
            PieceKind::Queen => Some(Self::QUEEN),
            PieceKind::Rook => Some(Self::ROOK),
            PieceKind::Bishop => Some(Self::BISHOP),
            PieceKind::Knight | PieceKind::Pawn => None,
        }
    }
}

/// Walks each direction of `rule` outward from `from`, pushing a move for
/// every empty square and for the first enemy-occupied square.
///
/// A direction ends at the board edge, at the first occupied square, or
/// after `rule.max_steps` squares.
pub(crate) fn slide_moves<B: Board + ?Sized>(
    board: &B,
    from: Position,
    team: Team,
    rule: SlideRule,
    moves: &mut MoveList,
) {
    for &(d_row, d_col) in rule.directions {
        let mut current = from;
        for _ in 0..rule.max_steps {
            let Some(to) = current.offset(d_row, d_col) else {
                break;
            };
            match board.piece_at(to) {
                None => moves.push(Move::normal(from, to)),
                Some(occupant) => {
                    if occupant.team() != team {
                        moves.push(Move::normal(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}
