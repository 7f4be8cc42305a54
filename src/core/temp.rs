//! Stack of outstanding temporary moves.
//!
//! Game models push an undo record for every `apply_temporary` and pop it
//! on `undo_temporary`. The stack enforces LIFO discipline and turns an
//! undo without a matching apply into `EngineError::UnbalancedUndo`
//! instead of silently corrupting the board.

use smallvec::SmallVec;

use super::error::{EngineError, Result};

/// LIFO store of undo records. Nesting depth equals search depth, so the
/// first few records stay inline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TempStack<R> {
    records: SmallVec<[R; 8]>,
}

impl<R> Default for TempStack<R> {
    fn default() -> Self {
        Self {
            records: SmallVec::new(),
        }
    }
}

impl<R> TempStack<R> {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a temporary move.
    pub fn push(&mut self, record: R) {
        self.records.push(record);
    }

    /// Take the most recent record.
    pub fn pop(&mut self) -> Result<R> {
        self.records.pop().ok_or(EngineError::UnbalancedUndo)
    }

    /// Number of outstanding temporary moves.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.records.len()
    }

    /// True when no temporary move is outstanding.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
