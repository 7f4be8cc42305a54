//! Adversarial search over the `rules` contract.
//!
//! ## Overview
//!
//! - **Minimax**: fixed-depth minimax with alpha-beta pruning, exploring
//!   the live game through temporary moves
//! - **MonteCarlo**: flat random-playout scoring of each root move
//! - **RandomMover**: uniform choice from an injected RNG
//! - **Bot**: runs a strategy on a seat and plays its choice for real
//!
//! ## Usage
//!
//! ```rust
//! use tabletop_ai::games::othello::Othello;
//! use tabletop_ai::rules::PlayableGame;
//! use tabletop_ai::search::{Minimax, SearchConfig};
//!
//! let mut game = Othello::new();
//! let mut engine = Minimax::new(SearchConfig::default().with_depth(2));
//!
//! if let Some(mv) = engine.choose_move(&mut game).unwrap() {
//!     game.play(&mv).unwrap();
//! }
//! ```

pub mod bot;
pub mod config;
pub mod minimax;
pub mod rollout;
pub mod stats;
pub mod strategy;

pub use bot::{Bot, BotState};
pub use config::SearchConfig;
pub use minimax::{minimax_unpruned, Minimax};
pub use rollout::MonteCarlo;
pub use stats::SearchStats;
pub use strategy::{RandomMover, Strategy};
