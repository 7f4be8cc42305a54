//! Engine error taxonomy.
//!
//! An empty move set is never an error: engines report it as `Ok(None)`.
//! Everything here is either a programming mistake in a game model
//! (`ContractViolation`, `UnbalancedUndo`) or a caller mistake.

/// Errors raised by game models, engines and bots.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A game model broke the reversible-state contract.
    #[error("contract violation: {0}")]
    ContractViolation(String),

    /// `undo_temporary` was called with no outstanding temporary move.
    #[error("undo requested with no outstanding temporary move")]
    UnbalancedUndo,

    /// The move is not legal in the current state.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// Engine configuration cannot be used for a search.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The game has already finished.
    #[error("game is over")]
    GameOver,

    /// The bot is already thinking about a move.
    #[error("bot is already thinking")]
    Busy,
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EngineError::IllegalMove("(0, 0)".into()).to_string(),
            "illegal move: (0, 0)"
        );
        assert_eq!(
            EngineError::UnbalancedUndo.to_string(),
            "undo requested with no outstanding temporary move"
        );
        assert_eq!(
            EngineError::ContractViolation("evaluate returned NaN".into()).to_string(),
            "contract violation: evaluate returned NaN"
        );
    }
}
