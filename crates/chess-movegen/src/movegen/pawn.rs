//! Pawn pushes, captures and promotions.

use chess_core::{Board, Move, PieceKind, Position, Team};

use super::MoveList;

/// Pushes all pawn moves for a `team` pawn standing on `from`.
///
/// Pawns push straight ahead onto empty squares only, may push twice from
/// their start row when both squares are empty, and capture one square
/// diagonally forward. There is no en passant.
pub(crate) fn pawn_moves<B: Board + ?Sized>(
    board: &B,
    from: Position,
    team: Team,
    moves: &mut MoveList,
) {
    let dir = team.pawn_direction();

    // Single push, then double push from the start row through it
    if let Some(one) = from.offset(dir, 0).filter(|&to| board.is_empty_at(to)) {
        push_pawn_move(from, one, team, moves);

        if from.row() == team.pawn_start_row() {
            if let Some(two) = one.offset(dir, 0).filter(|&to| board.is_empty_at(to)) {
                push_pawn_move(from, two, team, moves);
            }
        }
    }

    // Diagonal captures
    for d_col in [-1, 1] {
        if let Some(to) = from.offset(dir, d_col) {
            if board.piece_at(to).is_some_and(|p| p.team() != team) {
                push_pawn_move(from, to, team, moves);
            }
        }
    }
}

/// Pushes `from -> to`, expanded into one move per promotion kind when `to`
/// is on the team's last row.
fn push_pawn_move(from: Position, to: Position, team: Team, moves: &mut MoveList) {
    if to.row() == team.promotion_row() {
        for kind in PieceKind::PROMOTIONS {
            moves.push(Move::promotion(from, to, kind));
        }
    } else {
        moves.push(Move::normal(from, to));
    }
}
