//! Rule-based decision making for games where search does not fit.
//!
//! A `RuleEngine<S, A>` holds `(condition, action, priority)` rules over a
//! state `S`. The highest-priority matching rule decides; ties go to the
//! rule registered first. With no match, a fallback closure decides with
//! access to the caller's `GameRng`.

pub mod engine;
pub mod rule;

pub use engine::{Fallback, RuleEngine};
pub use rule::{Action, Condition, Rule, DEFAULT_PRIORITY};
