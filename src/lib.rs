//! # tabletop-ai
//!
//! Game-playing engines for turn-based tabletop games.
//!
//! ## Design Principles
//!
//! 1. **Engines Know Nothing About Games**: search runs against the
//!    capability traits in `rules`. A game model supplies moves, reversible
//!    temporary application and a static evaluation.
//!
//! 2. **Mutate and Undo**: search explores the live game in place. Every
//!    temporary move is undone before its caller continues, so a search
//!    leaves the model exactly as it found it.
//!
//! 3. **Injected Randomness**: rollouts, fallbacks and shuffles draw from a
//!    caller-supplied seeded `GameRng`, so every game is replayable.
//!
//! ## Modules
//!
//! - `core`: sides, errors, RNG, the temporary-move stack
//! - `rules`: `SearchableGame`, `RolloutGame`, `PlayableGame`
//! - `search`: minimax with alpha-beta, Monte-Carlo rollouts, bots
//! - `decision`: prioritized rule engine
//! - `games`: Othello, chess and five-card draw

pub mod core;
pub mod decision;
pub mod games;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{EngineError, GameRng, GameRngState, Result, Side, SideMap, TempStack};

pub use crate::rules::{Outcome, PlayableGame, RolloutGame, SearchableGame};

pub use crate::search::{
    minimax_unpruned, Bot, BotState, Minimax, MonteCarlo, RandomMover, SearchConfig, SearchStats,
    Strategy,
};

pub use crate::decision::{Rule, RuleEngine};
