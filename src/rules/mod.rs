//! Game-model contract.
//!
//! Games implement these traits to define:
//! - Legal moves for the side to move
//! - Reversible temporary moves for search
//! - Static evaluation and random playouts
//!
//! The engines call into these traits but never interpret game-specific
//! concepts directly.

pub mod game;

pub use game::{Outcome, PlayableGame, RolloutGame, SearchableGame};
