//! Move generation on concrete board layouts.
//!
//! Layouts are written as FEN piece placements, rank 8 first.

use std::collections::HashSet;

use chess_core::{ChessBoard, Move, PieceKind, Position};
use chess_movegen::{piece_moves, MoveGenError};

fn pos(s: &str) -> Position {
    Position::from_algebraic(s).unwrap()
}

fn board(placement: &str) -> ChessBoard {
    ChessBoard::from_placement(placement).expect("valid placement")
}

fn targets(board: &ChessBoard, from: &str) -> HashSet<String> {
    piece_moves(board, pos(from))
        .expect("piece on square")
        .iter()
        .map(|m| m.end().to_algebraic())
        .collect()
}

fn set(squares: &[&str]) -> HashSet<String> {
    squares.iter().map(|s| s.to_string()).collect()
}

/// Routes `tracing` output to the test harness when a test wants it.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn standard_layout_move_counts() {
    init_tracing();
    let board = ChessBoard::standard();
    for (position, piece) in board.pieces() {
        let expected = match piece.kind() {
            PieceKind::Pawn | PieceKind::Knight => 2,
            _ => 0,
        };
        let moves = piece_moves(&board, position).unwrap();
        assert_eq!(moves.len(), expected, "{} on {}", piece, position);
    }
}

#[test]
fn knight_in_center_has_eight_moves() {
    let board = board("8/8/8/8/3N4/8/8/8");
    assert_eq!(
        targets(&board, "d4"),
        set(&["c2", "e2", "b3", "f3", "b5", "f5", "c6", "e6"])
    );
}

#[test]
fn rook_blocked_by_friend_captures_enemy() {
    // White rook d4, white pawn d6, black knight f4
    let board = board("8/8/3P4/8/3R1n2/8/8/8");
    assert_eq!(
        targets(&board, "d4"),
        set(&["d5", "e4", "f4", "c4", "b4", "a4", "d3", "d2", "d1"])
    );
}

#[test]
fn bishop_stops_on_capture() {
    // Black bishop c8, white pawn e6, black pawn b7
    let board = board("2b5/1p6/4P3/8/8/8/8/8");
    assert_eq!(targets(&board, "c8"), set(&["d7", "e6"]));
}

#[test]
fn queen_combines_rook_and_bishop() {
    let board = board("8/8/8/8/8/8/1k6/Q7");
    // a-file: 7, first rank: 7, diagonal stops on the king at b2
    let moves = targets(&board, "a1");
    assert_eq!(moves.len(), 15);
    assert!(moves.contains("b2"));
    assert!(!moves.contains("c3"));
}

#[test]
fn king_moves_next_to_enemy_king() {
    // Check safety is not considered: both kings may step next to each other
    let board = board("8/8/8/3k4/8/3K4/8/8");
    let moves = targets(&board, "d3");
    assert_eq!(moves.len(), 8);
    assert!(moves.contains("d4"));
    assert!(moves.contains("e4"));
}

#[test]
fn pawn_double_step_gating() {
    let open = board("8/8/8/8/8/8/4P3/8");
    assert_eq!(targets(&open, "e2"), set(&["e3", "e4"]));

    let blocked_by_friend = board("8/8/8/8/8/4N3/4P3/8");
    assert!(targets(&blocked_by_friend, "e2").is_empty());

    let blocked_by_enemy = board("8/8/8/8/8/4n3/4P3/8");
    assert!(targets(&blocked_by_enemy, "e2").is_empty());

    let far_square_blocked = board("8/8/8/8/4n3/8/4P3/8");
    assert_eq!(targets(&far_square_blocked, "e2"), set(&["e3"]));
}

#[test]
fn pawn_promotion_expansion() {
    let board = board("8/3P4/8/8/8/8/8/8");
    let moves = piece_moves(&board, pos("d7")).unwrap();
    assert_eq!(moves.len(), 4);
    let kinds: HashSet<PieceKind> = moves.iter().filter_map(|m| m.promotion_kind()).collect();
    let expected: HashSet<PieceKind> = PieceKind::PROMOTIONS.into_iter().collect();
    assert_eq!(kinds, expected);
    assert!(moves.iter().all(|m| m.end() == pos("d8")));
}

#[test]
fn pawn_without_promotion_is_single_move() {
    let board = board("8/8/8/8/8/3P4/8/8");
    let moves = piece_moves(&board, pos("d3")).unwrap();
    assert_eq!(moves.as_slice(), &[Move::normal(pos("d3"), pos("d4"))]);
}

#[test]
fn pawn_diagonal_capture_only() {
    let empty_diagonals = board("8/8/8/8/8/8/4p3/8");
    assert_eq!(targets(&empty_diagonals, "e2"), set(&["e1"]));
    assert_eq!(piece_moves(&empty_diagonals, pos("e2")).unwrap().len(), 4);

    // Black pawn e2 can capture on d1 or promote straight on e1
    let capture = board("8/8/8/8/8/8/4p3/3R4");
    let moves = piece_moves(&capture, pos("e2")).unwrap();
    assert_eq!(moves.len(), 8);
    assert_eq!(moves.iter().filter(|m| m.end() == pos("d1")).count(), 4);

    let mid_board = board("8/8/8/2p5/3P4/8/8/8");
    let moves = piece_moves(&mid_board, pos("d4")).unwrap();
    assert_eq!(moves.iter().filter(|m| m.end() == pos("c5")).count(), 1);
    assert_eq!(moves.len(), 2);
}

#[test]
fn cornered_pawn_has_no_moves() {
    let board = board("8/8/8/8/8/p7/P7/8");
    assert!(piece_moves(&board, pos("a2")).unwrap().is_empty());
}

#[test]
fn empty_square_reported() {
    let board = ChessBoard::new();
    assert_eq!(
        piece_moves(&board, pos("a1")).unwrap_err(),
        MoveGenError::EmptySquare(pos("a1"))
    );
}

#[test]
fn concurrent_queries_share_board() {
    let board = ChessBoard::standard();
    let expected = piece_moves(&board, pos("b8")).unwrap().to_vec();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| piece_moves(&board, pos("b8")).unwrap().to_vec()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
