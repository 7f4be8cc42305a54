//! Simplified chess.
//!
//! - White moves first and travels toward row 0; black toward row 7
//! - Pieces move by geometry alone: no check, castling, en passant or
//!   promotion
//! - Capturing a king ends the game
//!
//! Evaluation is material (king 100) plus half a point per occupied centre
//! square.

mod board;
mod game;
mod piece;

pub use board::{ChessBoard, ChessMove, SIZE};
pub use game::{Chess, MoveRecord};
pub use piece::{Piece, PieceKind};
