//! Core types for chess.
//!
//! This crate provides the value types shared by the move generator and
//! anything built on top of it:
//! - [`Team`], [`PieceKind`] and [`Piece`] for piece representation
//! - [`Position`] and [`is_on_board`] for board coordinates
//! - [`Move`] for move representation
//! - the [`Board`] occupancy trait and the [`ChessBoard`] snapshot
//! - FEN piece placement parsing and serialization
//!
//! Enable the `serde` feature to derive `Serialize`/`Deserialize` for the
//! value types.

mod board;
mod fen;
mod mov;
mod piece;
mod position;
mod team;

pub use board::{Board, ChessBoard};
pub use fen::LayoutError;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use position::{is_on_board, OffBoard, Position, BOARD_SIZE};
pub use team::Team;
