//! Per-piece move generation.
//!
//! This crate provides:
//! - [`piece_moves`] - the moves of whatever piece stands on a square
//! - [`moves_for`] - the moves of a given piece placed on a square
//! - [`MoveList`] - the fixed-capacity list both return
//! - [`SlideRule`] and the direction/offset tables behind each piece kind
//!
//! Generation is geometric: a move is produced whenever the piece's movement
//! rules allow it, regardless of whether it exposes the mover's king. Castling
//! and en passant are not generated. Legality filtering, turn order and game
//! state belong to the layer above.
//!
//! Every function here is pure: it borrows the board immutably for the
//! duration of one call and returns a freshly built list.
//!
//! # Example
//!
//! ```
//! use chess_core::{ChessBoard, Position};
//! use chess_movegen::piece_moves;
//!
//! let board = ChessBoard::standard();
//! let g1 = Position::from_algebraic("g1").unwrap();
//! let moves = piece_moves(&board, g1).unwrap();
//! assert_eq!(moves.len(), 2); // Nf3 and Nh3
//! ```

pub mod movegen;

pub use movegen::{moves_for, piece_moves, MoveGenError, MoveList, SlideRule};
