//! Flat Monte-Carlo move selection.
//!
//! Every candidate move is scored by the fraction of random playouts the
//! searching side wins after making it. No tree is built; the engine is an
//! alternative to `Minimax`, not a companion.

use std::time::Instant;

use log::{debug, trace};

use crate::core::{EngineError, GameRng, Result};
use crate::rules::{Outcome, RolloutGame};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Flat Monte-Carlo engine.
#[derive(Clone, Debug)]
pub struct MonteCarlo {
    config: SearchConfig,
    rng: GameRng,
    stats: SearchStats,
}

impl MonteCarlo {
    /// Create an engine running `config.simulations` playouts per move.
    pub fn new(config: SearchConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Create an engine with default settings and the given playout count.
    pub fn with_simulations(simulations: u32) -> Self {
        Self::new(SearchConfig::default().with_simulations(simulations))
    }

    /// Configured playouts per move.
    #[must_use]
    pub fn simulations(&self) -> u32 {
        self.config.simulations
    }

    /// Statistics from the most recent `choose_move`.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Win rate of every legal move, in enumeration order.
    pub fn score_moves<G: RolloutGame>(&mut self, game: &mut G) -> Result<Vec<(G::Move, f64)>> {
        let n = self.config.simulations;
        if n == 0 {
            return Err(EngineError::InvalidConfig(
                "simulations must be at least 1".into(),
            ));
        }

        let perspective = game.side_to_move();
        let mut scored = Vec::new();

        for mv in game.valid_moves() {
            game.apply_temporary(&mv)?;
            self.stats.nodes += 1;
            let mut wins = 0u32;
            for _ in 0..n {
                if game.simulate_random_game(perspective, &mut self.rng) == Outcome::Win {
                    wins += 1;
                }
            }
            self.stats.simulations += u64::from(n);
            game.undo_temporary(&mv)?;

            let rate = f64::from(wins) / f64::from(n);
            trace!("move {:?} won {}/{} playouts", mv, wins, n);
            scored.push((mv, rate));
        }

        Ok(scored)
    }

    /// Pick the move with the strictly highest win rate; the first move
    /// wins ties. Returns `Ok(None)` when there is no legal move.
    pub fn choose_move<G: RolloutGame>(&mut self, game: &mut G) -> Result<Option<G::Move>> {
        let start = Instant::now();
        self.stats.reset();

        let scored = self.score_moves(game)?;
        let best = scored.into_iter().reduce(|best, current| {
            if current.1 > best.1 {
                current
            } else {
                best
            }
        });

        self.stats.time_us = start.elapsed().as_micros() as u64;
        match &best {
            Some((mv, rate)) => debug!(
                "monte-carlo chose {:?} (win rate {:.3}, {} playouts)",
                mv, rate, self.stats.simulations
            ),
            None => debug!("monte-carlo found no legal move"),
        }

        Ok(best.map(|(mv, _)| mv))
    }
}
