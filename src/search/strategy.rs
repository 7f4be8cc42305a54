//! Pluggable move-selection strategies.
//!
//! A `Strategy` is anything that looks at a live game and proposes a move
//! for the side to move. `Minimax` and `RandomMover` work for every
//! `SearchableGame`; `MonteCarlo` additionally needs `RolloutGame`.

use crate::core::{GameRng, Result};
use crate::rules::{RolloutGame, SearchableGame};

use super::minimax::Minimax;
use super::rollout::MonteCarlo;

/// Move selection for a game type.
pub trait Strategy<G: SearchableGame> {
    /// Short label for logs.
    fn name(&self) -> &'static str;

    /// Propose a move, `Ok(None)` when there is none.
    ///
    /// The game must be left as it was found.
    fn choose_move(&mut self, game: &mut G) -> Result<Option<G::Move>>;
}

impl<G: SearchableGame> Strategy<G> for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn choose_move(&mut self, game: &mut G) -> Result<Option<G::Move>> {
        Minimax::choose_move(self, game)
    }
}

impl<G: RolloutGame> Strategy<G> for MonteCarlo {
    fn name(&self) -> &'static str {
        "monte-carlo"
    }

    fn choose_move(&mut self, game: &mut G) -> Result<Option<G::Move>> {
        MonteCarlo::choose_move(self, game)
    }
}

/// Uniformly random legal move from an injected generator.
#[derive(Clone, Debug)]
pub struct RandomMover {
    rng: GameRng,
}

impl RandomMover {
    /// Create a mover drawing from `rng`.
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl<G: SearchableGame> Strategy<G> for RandomMover {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose_move(&mut self, game: &mut G) -> Result<Option<G::Move>> {
        let moves = game.valid_moves();
        Ok(self.rng.choose(&moves).cloned())
    }
}
