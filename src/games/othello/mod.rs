//! Othello (Reversi).
//!
//! - 8x8 board, black moves first from the standard four-disc opening
//! - A placement is legal when it brackets at least one run of opponent
//!   discs in any of the eight directions; every bracketed run flips
//! - A side with no placement passes; the game ends when neither side can
//!   move, and the side with more discs wins
//!
//! Temporary moves record their flip list and are undone from it, never by
//! recomputing flips.

mod board;
mod game;

pub use board::{Board, Flips, Square, SIZE};
pub use game::{Othello, TurnRecord};
