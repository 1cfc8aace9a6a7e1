//! Progress cursor: the pair id the player must match next.

use serde::{Deserialize, Serialize};

use crate::core::PairId;

/// Ascending progression through pair ids.
///
/// Only moves forward during play; [`reset`](Self::reset) puts it back
/// at the value it was created with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressCursor {
    current: PairId,
    initial: PairId,
}

impl ProgressCursor {
    /// Create a cursor starting at `initial`.
    #[must_use]
    pub const fn new(initial: PairId) -> Self {
        Self {
            current: initial,
            initial,
        }
    }

    /// The pair id expected next.
    #[must_use]
    pub const fn current(&self) -> PairId {
        self.current
    }

    /// The value restored on reset.
    #[must_use]
    pub const fn initial(&self) -> PairId {
        self.initial
    }

    /// Whether `pair` is the one expected next.
    #[must_use]
    pub fn expects(&self, pair: PairId) -> bool {
        self.current == pair
    }

    /// Move to the next pair id.
    pub fn advance(&mut self) {
        self.current = self.current.next();
    }

    /// Return to the initial value.
    pub fn reset(&mut self) {
        self.current = self.initial;
    }
}

impl Default for ProgressCursor {
    fn default() -> Self {
        Self::new(PairId::FIRST)
    }
}
