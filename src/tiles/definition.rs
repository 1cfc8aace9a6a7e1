//! Tile descriptors.

use serde::{Deserialize, Serialize};

use crate::core::{CueId, PairId, TileHandle, VisualId};

/// Static identity of a tile.
///
/// Descriptors never change after scene load. The only mutable part of a
/// tile, its visibility, is held by the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDescriptor {
    /// Registry slot of this tile.
    pub handle: TileHandle,

    /// Matching key shared with the tile's partner.
    pub pair: PairId,

    /// Sound played when the tile is flipped.
    pub cue: CueId,

    /// Face shown when the tile is revealed.
    pub visual: VisualId,
}

impl TileDescriptor {
    /// Create a new descriptor.
    #[must_use]
    pub const fn new(handle: TileHandle, pair: PairId, cue: CueId, visual: VisualId) -> Self {
        Self {
            handle,
            pair,
            cue,
            visual,
        }
    }

    /// Whether two tiles share a pair id. Instance identity is not checked.
    #[must_use]
    pub fn pairs_with(&self, other: &TileDescriptor) -> bool {
        self.pair == other.pair
    }
}

/// A registered tile: its descriptor plus visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub descriptor: TileDescriptor,
    pub visible: bool,
}

impl Tile {
    /// A face-down tile.
    #[must_use]
    pub const fn hidden(descriptor: TileDescriptor) -> Self {
        Self {
            descriptor,
            visible: false,
        }
    }
}
