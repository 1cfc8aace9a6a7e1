//! Session state.
//!
//! `SessionState` is everything the game remembers between events:
//! - The two selection slots
//! - The progress cursor
//! - A history of evaluated pairs
//!
//! The history uses an `im` persistent vector, so cloning the state for a
//! snapshot or a what-if evaluation is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::{PairId, TileHandle};
use crate::rules::MatchOutcome;
use crate::selection::{ProgressCursor, SelectionTracker};

/// One evaluated pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub first: TileHandle,
    pub second: TileHandle,
    /// Pair ids of `first` and `second`.
    pub pairs: (PairId, PairId),
    /// Cursor value when the pair was judged.
    pub cursor: PairId,
    pub outcome: MatchOutcome,
}

/// Mutable session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Pending selections.
    pub selection: SelectionTracker,

    /// Next pair id to match.
    pub cursor: ProgressCursor,

    history: Vector<EvaluationRecord>,
}

impl SessionState {
    /// Create a fresh state with the cursor at `initial_cursor`.
    #[must_use]
    pub fn new(initial_cursor: PairId) -> Self {
        Self {
            selection: SelectionTracker::new(),
            cursor: ProgressCursor::new(initial_cursor),
            history: Vector::new(),
        }
    }

    /// Shorthand for the cursor's current value.
    #[must_use]
    pub fn current_pair(&self) -> PairId {
        self.cursor.current()
    }

    /// Record an evaluated pair.
    pub fn record(&mut self, record: EvaluationRecord) {
        self.history.push_back(record);
    }

    /// Evaluated pairs, oldest first. Grows with every evaluation and is
    /// only cleared by a session reset.
    #[must_use]
    pub fn history(&self) -> &Vector<EvaluationRecord> {
        &self.history
    }

    /// Number of pairs evaluated since the last reset.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// Number of evaluations that ended in a miss since the last reset.
    #[must_use]
    pub fn misses(&self) -> usize {
        self.history.iter().filter(|r| !r.outcome.is_success()).count()
    }

    /// Back to defaults: empty slots, initial cursor, no history.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.cursor.reset();
        self.history.clear();
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(PairId::FIRST)
    }
}
