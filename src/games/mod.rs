//! Game models.
//!
//! - `othello`, `chess`: implement the `rules` traits and are driven by the
//!   search engines
//! - `poker`: five-card draw with a rule-based opponent

pub mod chess;
pub mod othello;
pub mod poker;
