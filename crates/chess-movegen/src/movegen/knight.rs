//! Knight jumps.

use chess_core::{Board, Move, Position, Team};

use super::MoveList;

/// Knight move offsets as (row delta, column delta).
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Pushes a move to every on-board knight target that is empty or holds an enemy.
pub(crate) fn knight_moves<B: Board + ?Sized>(
    board: &B,
    from: Position,
    team: Team,
    moves: &mut MoveList,
) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Some(to) = from.offset(d_row, d_col) {
            let blocked = board.piece_at(to).is_some_and(|p| p.team() == team);
            if !blocked {
                moves.push(Move::normal(from, to));
            }
        }
    }
}
