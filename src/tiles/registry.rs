//! Tile registry.
//!
//! The `TileRegistry` is the externally owned table of tiles in the scene.
//! The session never stores tiles, only [`TileHandle`]s into this table.
//!
//! ## Example
//!
//! ```
//! use memory_tiles::core::{CueId, PairId, VisualId};
//! use memory_tiles::tiles::TileRegistry;
//!
//! let mut registry = TileRegistry::new();
//! let a = registry.add(PairId::new(1), CueId::new(10), VisualId::new(0));
//! let b = registry.add(PairId::new(1), CueId::new(10), VisualId::new(1));
//!
//! assert_ne!(a, b);
//! assert_eq!(registry.handles_for(PairId::new(1)), &[a, b]);
//! assert!(!registry.is_visible(a));
//! ```

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::warn;

use super::definition::{Tile, TileDescriptor};
use crate::core::{CueId, LayoutRng, PairId, TileHandle, VisualId};

/// Handles of the tiles sharing one pair id. Pairs almost always have two.
type PairMembers = SmallVec<[TileHandle; 2]>;

/// Table of every tile in the scene.
#[derive(Clone, Debug, Default)]
pub struct TileRegistry {
    tiles: Vec<Tile>,
    by_pair: FxHashMap<PairId, PairMembers>,
}

impl TileRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal `pair_count` pairs (ids `1..=pair_count`) in a shuffled layout.
    ///
    /// Visual ids follow layout position; `cue_for` picks each pair's cue.
    pub fn deal(pair_count: u32, rng: &mut LayoutRng, cue_for: impl Fn(PairId) -> CueId) -> Self {
        let mut pairs: Vec<PairId> = (1..=pair_count)
            .flat_map(|id| [PairId::new(id), PairId::new(id)])
            .collect();
        rng.shuffle(&mut pairs);

        let mut registry = Self::new();
        for (slot, pair) in pairs.into_iter().enumerate() {
            registry.add(pair, cue_for(pair), VisualId::new(slot as u32));
        }
        registry
    }

    /// Register a face-down tile and return its handle.
    pub fn add(&mut self, pair: PairId, cue: CueId, visual: VisualId) -> TileHandle {
        let handle = TileHandle::new(self.tiles.len() as u32);
        self.tiles.push(Tile::hidden(TileDescriptor::new(handle, pair, cue, visual)));
        self.by_pair.entry(pair).or_default().push(handle);
        handle
    }

    /// Get a tile's descriptor.
    #[must_use]
    pub fn get(&self, handle: TileHandle) -> Option<&TileDescriptor> {
        self.tiles.get(handle.index()).map(|t| &t.descriptor)
    }

    /// Check if a handle belongs to this registry.
    #[must_use]
    pub fn contains(&self, handle: TileHandle) -> bool {
        handle.index() < self.tiles.len()
    }

    /// Whether the tile is face up. Unknown handles are never visible.
    #[must_use]
    pub fn is_visible(&self, handle: TileHandle) -> bool {
        self.tiles.get(handle.index()).is_some_and(|t| t.visible)
    }

    /// Set a tile's visibility. Returns its visual for forwarding to the
    /// renderer, or `None` if the handle is unknown.
    pub fn set_visible(&mut self, handle: TileHandle, visible: bool) -> Option<VisualId> {
        let tile = self.tiles.get_mut(handle.index())?;
        tile.visible = visible;
        Some(tile.descriptor.visual)
    }

    /// Turn every tile face down.
    pub fn hide_all(&mut self) {
        for tile in &mut self.tiles {
            tile.visible = false;
        }
    }

    /// Number of face-up tiles.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.visible).count()
    }

    /// Handles of the tiles with a given pair id.
    #[must_use]
    pub fn handles_for(&self, pair: PairId) -> &[TileHandle] {
        self.by_pair.get(&pair).map(|members| members.as_slice()).unwrap_or(&[])
    }

    /// Distinct pair ids in ascending order.
    #[must_use]
    pub fn pair_ids(&self) -> Vec<PairId> {
        let mut ids: Vec<PairId> = self.by_pair.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Log pair ids that cannot be matched because they don't have exactly
    /// two tiles. Returns the offending ids.
    pub fn audit_pairs(&self) -> Vec<PairId> {
        let odd: Vec<PairId> = self
            .pair_ids()
            .into_iter()
            .filter(|pair| self.handles_for(*pair).len() != 2)
            .collect();
        for pair in &odd {
            warn!(%pair, tiles = self.handles_for(*pair).len(), "pair id does not have exactly two tiles");
        }
        odd
    }

    /// Get the number of registered tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over all tiles in handle order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_pairs() -> TileRegistry {
        let mut registry = TileRegistry::new();
        registry.add(PairId::new(1), CueId::new(10), VisualId::new(0));
        registry.add(PairId::new(2), CueId::new(20), VisualId::new(1));
        registry.add(PairId::new(1), CueId::new(10), VisualId::new(2));
        registry.add(PairId::new(2), CueId::new(20), VisualId::new(3));
        registry
    }

    #[test]
    fn test_add_and_get() {
        let registry = two_pairs();

        assert_eq!(registry.len(), 4);
        let tile = registry.get(TileHandle::new(2)).unwrap();
        assert_eq!(tile.pair, PairId::new(1));
        assert_eq!(tile.visual, VisualId::new(2));
        assert_eq!(tile.handle, TileHandle::new(2));
        assert!(registry.get(TileHandle::new(4)).is_none());
        assert!(!registry.contains(TileHandle::new(4)));
    }

    #[test]
    fn test_handles_for() {
        let registry = two_pairs();

        assert_eq!(
            registry.handles_for(PairId::new(2)),
            &[TileHandle::new(1), TileHandle::new(3)]
        );
        assert!(registry.handles_for(PairId::new(9)).is_empty());
        assert_eq!(registry.pair_ids(), vec![PairId::new(1), PairId::new(2)]);
    }

    #[test]
    fn test_visibility() {
        let mut registry = two_pairs();

        assert_eq!(registry.set_visible(TileHandle::new(1), true), Some(VisualId::new(1)));
        assert_eq!(registry.set_visible(TileHandle::new(3), true), Some(VisualId::new(3)));
        assert!(registry.is_visible(TileHandle::new(1)));
        assert_eq!(registry.visible_count(), 2);

        registry.hide_all();
        assert_eq!(registry.visible_count(), 0);

        assert_eq!(registry.set_visible(TileHandle::new(99), true), None);
        assert!(!registry.is_visible(TileHandle::new(99)));
    }

    #[test]
    fn test_audit_pairs() {
        let mut registry = two_pairs();
        assert!(registry.audit_pairs().is_empty());

        registry.add(PairId::new(3), CueId::new(30), VisualId::new(4));
        assert_eq!(registry.audit_pairs(), vec![PairId::new(3)]);
    }

    #[test]
    fn test_deal() {
        let mut rng = LayoutRng::new(42);
        let registry = TileRegistry::deal(4, &mut rng, |pair| CueId::new(100 + pair.raw()));

        assert_eq!(registry.len(), 8);
        assert!(registry.audit_pairs().is_empty());
        for tile in registry.iter() {
            assert_eq!(tile.descriptor.cue, CueId::new(100 + tile.descriptor.pair.raw()));
            assert_eq!(tile.descriptor.visual.0, tile.descriptor.handle.raw());
            assert!(!tile.visible);
        }
    }

    #[test]
    fn test_deal_is_deterministic() {
        let layout = |seed| {
            let registry = TileRegistry::deal(6, &mut LayoutRng::new(seed), |_| CueId::new(0));
            registry.iter().map(|t| t.descriptor.pair).collect::<Vec<_>>()
        };

        assert_eq!(layout(9), layout(9));
    }
}
