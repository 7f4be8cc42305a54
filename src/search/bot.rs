//! A seat at the table driven by a strategy.
//!
//! `Bot` owns the "thinking" state that a UI loop consults before asking
//! for another move, plus the last move it made. The state lives on the
//! bot, never on the game, and `take_turn` holds `&mut` to both for the
//! whole search, so temporary moves from two searches can never interleave
//! on one game.

use std::marker::PhantomData;

use log::info;

use crate::core::{EngineError, Result};
use crate::rules::PlayableGame;

use super::strategy::Strategy;

/// What the bot is doing right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BotState {
    #[default]
    Idle,
    Thinking,
}

/// Strategy plus turn bookkeeping.
pub struct Bot<G: PlayableGame, S: Strategy<G>> {
    strategy: S,
    state: BotState,
    last_move: Option<G::Move>,
    _game: PhantomData<fn(&mut G)>,
}

impl<G: PlayableGame, S: Strategy<G>> Bot<G, S> {
    /// Seat a strategy.
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            state: BotState::Idle,
            last_move: None,
            _game: PhantomData,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> BotState {
        self.state
    }

    /// True while a search is in progress.
    #[must_use]
    pub fn is_thinking(&self) -> bool {
        self.state == BotState::Thinking
    }

    /// Most recent move this bot played.
    #[must_use]
    pub fn last_move(&self) -> Option<&G::Move> {
        self.last_move.as_ref()
    }

    /// The underlying strategy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Choose a move and play it for real.
    ///
    /// Returns `Ok(None)` when the side to move has no legal move; the
    /// game is left untouched in that case.
    pub fn take_turn(&mut self, game: &mut G) -> Result<Option<G::Move>> {
        if self.is_thinking() {
            return Err(EngineError::Busy);
        }
        if game.is_over() {
            return Err(EngineError::GameOver);
        }

        self.state = BotState::Thinking;
        let choice = self.strategy.choose_move(game);
        self.state = BotState::Idle;

        let Some(mv) = choice? else {
            return Ok(None);
        };
        game.play(&mv)?;
        info!("{} played {:?}", self.strategy.name(), mv);
        self.last_move = Some(mv.clone());
        Ok(Some(mv))
    }
}
