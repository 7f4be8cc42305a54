//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters collected during one `choose_move` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Temporary moves applied.
    pub nodes: u64,

    /// Static evaluations performed.
    pub leaves: u64,

    /// Alpha-beta cutoffs taken.
    pub cutoffs: u64,

    /// Random playouts run.
    pub simulations: u64,

    /// Wall time spent (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Nodes per second, 0 when no time was recorded.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_per_second() {
        let mut stats = SearchStats::new();
        assert_eq!(stats.nodes_per_second(), 0.0);

        stats.nodes = 500;
        stats.time_us = 500_000;
        assert_eq!(stats.nodes_per_second(), 1000.0);
    }

    #[test]
    fn test_reset() {
        let mut stats = SearchStats::new();
        stats.nodes = 10;
        stats.cutoffs = 3;
        stats.reset();
        assert_eq!(stats, SearchStats::default());
    }
}
