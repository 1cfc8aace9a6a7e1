//! Identifier types.
//!
//! Tiles are never referenced directly. Everything the session keeps
//! (selection slots, the interaction candidate, history records) is a
//! `TileHandle`: an index into the externally owned [`TileRegistry`].
//! Handles stay valid across scene reinitialization because tiles are
//! never destroyed during play.
//!
//! ## Identity vs. pairing
//!
//! - `TileHandle`: instance identity. Two tiles are "the same tile" only
//!   if their handles are equal.
//! - `PairId`: the matching key. The two tiles of a pair share a `PairId`
//!   and the progress cursor counts in `PairId`s.
//!
//! ```
//! use memory_tiles::core::{PairId, TileHandle};
//!
//! let left = TileHandle::new(0);
//! let right = TileHandle::new(1);
//! assert_ne!(left, right);
//!
//! let first = PairId::FIRST;
//! assert_eq!(first.next(), PairId::new(2));
//! ```
//!
//! [`TileRegistry`]: crate::tiles::TileRegistry

use serde::{Deserialize, Serialize};

/// Stable index of a tile inside a [`TileRegistry`](crate::tiles::TileRegistry).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileHandle(pub u32);

impl TileHandle {
    /// Create a handle from a raw index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into a registry's tile table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for TileHandle {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for TileHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile#{}", self.0)
    }
}

/// Pair identity shared by the two tiles of a pair.
///
/// Pair ids are also the progression order: the cursor starts at
/// [`PairId::FIRST`] and must be matched in ascending order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairId(pub u32);

impl PairId {
    /// The first pair in progression order.
    pub const FIRST: Self = Self(1);

    /// Create a new pair ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The pair that follows this one in progression order.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// Opaque audio clip handle. The audio host decides what it plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CueId(pub u32);

impl CueId {
    /// Create a new cue ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cue({})", self.0)
    }
}

/// Opaque renderable handle for a tile's face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualId(pub u32);

impl VisualId {
    /// Create a new visual ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for VisualId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Visual({})", self.0)
    }
}
