//! Minimax search with alpha-beta pruning.
//!
//! The engine explores the live game in place: every child is reached with
//! `apply_temporary` and left with `undo_temporary`, so the model is back in
//! its original state when `choose_move` returns. Moves are visited in the
//! order the model enumerates them; there is no move ordering, iterative
//! deepening or time cut-off.

use std::time::Instant;

use log::{debug, trace};

use crate::core::{EngineError, Result};
use crate::rules::SearchableGame;

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Fixed-depth minimax engine.
#[derive(Clone, Debug)]
pub struct Minimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl Minimax {
    /// Create an engine searching `config.depth` plies.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Create an engine with default settings and the given depth.
    pub fn with_depth(depth: u32) -> Self {
        Self::new(SearchConfig::default().with_depth(depth))
    }

    /// Configured depth.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.config.depth
    }

    /// Statistics from the most recent `choose_move`.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick the best move for the side to move.
    ///
    /// Each root move is scored with `search(depth - 1, minimizing)`; the
    /// first move with the strictly highest score wins. Returns `Ok(None)`
    /// when there is no legal move.
    pub fn choose_move<G: SearchableGame>(&mut self, game: &mut G) -> Result<Option<G::Move>> {
        if self.config.depth == 0 {
            return Err(EngineError::InvalidConfig(
                "minimax depth must be at least 1".into(),
            ));
        }

        let start = Instant::now();
        self.stats.reset();

        let perspective = game.side_to_move();
        let mut best: Option<(G::Move, f64)> = None;

        for mv in game.valid_moves() {
            game.apply_temporary(&mv)?;
            self.stats.nodes += 1;
            let score = self.search(
                game,
                perspective,
                self.config.depth - 1,
                false,
                f64::NEG_INFINITY,
                f64::INFINITY,
            );
            game.undo_temporary(&mv)?;
            let score = score?;
            trace!("root move {:?} scored {}", mv, score);

            let improves = match &best {
                Some((_, best_score)) => score > *best_score,
                None => true,
            };
            if improves {
                best = Some((mv, score));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        match &best {
            Some((mv, score)) => debug!(
                "minimax depth {} chose {:?} (score {}, {} nodes, {} cutoffs)",
                self.config.depth, mv, score, self.stats.nodes, self.stats.cutoffs
            ),
            None => debug!("minimax found no legal move"),
        }

        Ok(best.map(|(mv, _)| mv))
    }

    /// Alpha-beta minimax value of the current state.
    ///
    /// Leaves (depth 0 or no legal move) return `evaluate(perspective)`.
    /// The maximizing branch raises `alpha`, the minimizing branch lowers
    /// `beta`, and the remaining siblings are skipped once `beta <= alpha`.
    pub fn search<G: SearchableGame>(
        &mut self,
        game: &mut G,
        perspective: G::Player,
        depth: u32,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> Result<f64> {
        if depth == 0 {
            self.stats.leaves += 1;
            return checked_eval(game, perspective);
        }

        let moves = game.valid_moves();
        if moves.is_empty() {
            self.stats.leaves += 1;
            return checked_eval(game, perspective);
        }

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for mv in &moves {
            game.apply_temporary(mv)?;
            self.stats.nodes += 1;
            let value = self.search(game, perspective, depth - 1, !maximizing, alpha, beta);
            game.undo_temporary(mv)?;
            let value = value?;

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(best)
    }
}

/// Plain minimax without pruning.
///
/// Visits every node of the tree; alpha-beta must always agree with it.
pub fn minimax_unpruned<G: SearchableGame>(
    game: &mut G,
    perspective: G::Player,
    depth: u32,
    maximizing: bool,
) -> Result<f64> {
    let moves = game.valid_moves();
    if depth == 0 || moves.is_empty() {
        return checked_eval(game, perspective);
    }

    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };

    for mv in &moves {
        game.apply_temporary(mv)?;
        let value = minimax_unpruned(game, perspective, depth - 1, !maximizing);
        game.undo_temporary(mv)?;
        let value = value?;
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    Ok(best)
}

fn checked_eval<G: SearchableGame>(game: &G, perspective: G::Player) -> Result<f64> {
    let score = game.evaluate(perspective);
    if score.is_nan() {
        return Err(EngineError::ContractViolation(
            "evaluate returned NaN".into(),
        ));
    }
    Ok(score)
}
