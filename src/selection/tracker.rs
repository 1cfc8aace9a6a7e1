//! Two-slot selection tracking.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::TileHandle;

/// Result of offering a tile to the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// The tile filled the empty first slot.
    First,
    /// The tile filled the second slot; the pair is ready for evaluation.
    PairComplete {
        first: TileHandle,
        second: TileHandle,
    },
    /// The tile already occupies the first slot. Nothing changed.
    Duplicate,
    /// Both slots were already filled. Nothing changed.
    Full,
}

impl SelectOutcome {
    /// Returns the completed pair, if any.
    #[must_use]
    pub fn pair(self) -> Option<(TileHandle, TileHandle)> {
        match self {
            SelectOutcome::PairComplete { first, second } => Some((first, second)),
            _ => None,
        }
    }
}

/// Holds zero, one, or two selected tiles pending evaluation.
///
/// A handle never occupies both slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionTracker {
    first: Option<TileHandle>,
    second: Option<TileHandle>,
}

impl SelectionTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The tile in the first slot.
    #[must_use]
    pub fn first(&self) -> Option<TileHandle> {
        self.first
    }

    /// The tile in the second slot.
    #[must_use]
    pub fn second(&self) -> Option<TileHandle> {
        self.second
    }

    /// Both slots are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }

    /// Offer a tile for selection.
    ///
    /// Selecting the tile that already sits in the first slot is advisory:
    /// it is logged and ignored.
    pub fn try_select(&mut self, tile: TileHandle) -> SelectOutcome {
        match (self.first, self.second) {
            (None, _) => {
                self.first = Some(tile);
                debug!(%tile, "first tile selected");
                SelectOutcome::First
            }
            (Some(first), _) if first == tile => {
                info!(%tile, "tile is already selected, ignoring");
                SelectOutcome::Duplicate
            }
            (Some(first), None) => {
                self.second = Some(tile);
                debug!(%first, second = %tile, "pair selected");
                SelectOutcome::PairComplete { first, second: tile }
            }
            (Some(_), Some(_)) => SelectOutcome::Full,
        }
    }

    /// Empty both slots.
    pub fn clear(&mut self) {
        self.first = None;
        self.second = None;
    }
}
