//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Result};

/// Configuration shared by the minimax and Monte-Carlo engines.
///
/// Each engine reads only the fields it needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched by `Minimax`, counting the root move (default: 3).
    pub depth: u32,

    /// Random playouts per candidate move for `MonteCarlo` (default: 1000).
    pub simulations: u32,

    /// Seed for playouts and random fallbacks.
    /// Same seed produces identical choices.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            simulations: 1000,
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Set the search depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the number of playouts per move.
    #[must_use]
    pub fn with_simulations(mut self, simulations: u32) -> Self {
        self.simulations = simulations;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject settings no engine can run with.
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            return Err(EngineError::InvalidConfig(
                "depth must be at least 1 to choose a move".into(),
            ));
        }
        if self.simulations == 0 {
            return Err(EngineError::InvalidConfig(
                "simulations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 3);
        assert_eq!(config.simulations, 1000);
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_depth(2)
            .with_simulations(50)
            .with_seed(7);
        assert_eq!(config.depth, 2);
        assert_eq!(config.simulations, 50);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(matches!(
            SearchConfig::default().with_depth(0).validate(),
            Err(EngineError::InvalidConfig(_))
        ));
        assert!(matches!(
            SearchConfig::default().with_simulations(0).validate(),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_serialization_fills_missing_fields() {
        let config: SearchConfig = serde_json::from_str(r#"{"depth": 2}"#).unwrap();
        assert_eq!(config, SearchConfig::default().with_depth(2));

        let json = serde_json::to_string(&config).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
