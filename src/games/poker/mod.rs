//! Five-card draw poker against a rule-based bot.
//!
//! Unlike the board games this is not searched: the bot's stakes and
//! exchanges come from a `RuleEngine`.

mod bot;
mod cards;
mod game;
mod hand;

pub use bot::{PokerBot, FLUSH_BET, MIN_BET, PAIR_BET};
pub use cards::{Card, Deck, Rank, Suit};
pub use game::{Phase, Poker, PokerMode, RoundResult, Seat, HAND_SIZE, STARTING_CREDITS};
pub use hand::{evaluate_hand, is_flush, is_straight, rank_counts, suit_counts, HandRank};
