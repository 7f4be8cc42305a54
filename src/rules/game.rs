//! Capability traits a game model implements to be searchable.
//!
//! - `SearchableGame`: legal moves, reversible temporary moves, static
//!   evaluation. Enough for `Minimax`.
//! - `RolloutGame`: random playouts to the end of the game. Required by
//!   `MonteCarlo`.
//! - `PlayableGame`: permanent moves and game-over detection, used by
//!   `Bot` and the arena.
//!
//! ## Implementation Notes
//!
//! - `valid_moves`: return an empty vec when the side to move cannot act;
//!   engines treat that as a leaf.
//! - `apply_temporary`/`undo_temporary`: strict LIFO pairing. After an
//!   apply followed by an undo of the same move the model must compare
//!   equal to its pre-apply self.
//! - `evaluate`: pure; no hidden mutation, no randomness.

use std::fmt::Debug;

use crate::core::{GameRng, Result};

/// Result of a finished game from one side's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    /// `+1`, `-1` or `0`.
    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            Outcome::Win => 1,
            Outcome::Loss => -1,
            Outcome::Draw => 0,
        }
    }

    /// Outcome from a signed score (positive means the viewer is ahead).
    #[must_use]
    pub fn from_score(score: i64) -> Self {
        match score.signum() {
            1 => Outcome::Win,
            -1 => Outcome::Loss,
            _ => Outcome::Draw,
        }
    }
}

/// The reversible game-state contract driven by the search engines.
pub trait SearchableGame {
    /// Game-specific move token, opaque to the engines.
    type Move: Clone + Debug;

    /// Seat identifier used to orient evaluations.
    type Player: Copy + Eq + Debug;

    /// Side whose turn it is.
    fn side_to_move(&self) -> Self::Player;

    /// All legal moves for the side to move, in enumeration order.
    fn valid_moves(&self) -> Vec<Self::Move>;

    /// Play `mv` without recording it in permanent history.
    ///
    /// Must be paired with exactly one `undo_temporary`.
    fn apply_temporary(&mut self, mv: &Self::Move) -> Result<()>;

    /// Reverse the most recent `apply_temporary`.
    ///
    /// Fails with `EngineError::UnbalancedUndo` when nothing is outstanding.
    fn undo_temporary(&mut self, mv: &Self::Move) -> Result<()>;

    /// Static score of the current state; positive favors `perspective`.
    fn evaluate(&self, perspective: Self::Player) -> f64;
}

/// Random playouts for the Monte-Carlo strategy.
pub trait RolloutGame: SearchableGame {
    /// Play uniformly random moves from the current state to the end of
    /// the game and report the result for `perspective`.
    ///
    /// The live state must be left exactly as it was found.
    fn simulate_random_game(&mut self, perspective: Self::Player, rng: &mut GameRng) -> Outcome;
}

/// Permanent moves, as made by a human or a bot's final choice.
pub trait PlayableGame: SearchableGame {
    /// Apply `mv` for real: recorded in history, turn passes.
    fn play(&mut self, mv: &Self::Move) -> Result<()>;

    /// True when neither side can continue.
    fn is_over(&self) -> bool;
}
