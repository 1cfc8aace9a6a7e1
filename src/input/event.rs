//! Events delivered by the host.

use serde::{Deserialize, Serialize};

use super::movement::Vec2;
use crate::core::TileHandle;

/// A trigger zone the avatar entered or left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    /// The interaction zone of a tile.
    Tile(TileHandle),
    /// Any other trigger. Ignored by the session.
    Other,
}

impl Zone {
    /// The tile this zone belongs to, if any.
    #[must_use]
    pub fn tile(self) -> Option<TileHandle> {
        match self {
            Zone::Tile(tile) => Some(tile),
            Zone::Other => None,
        }
    }
}

/// Everything the session reacts to.
///
/// Zone events come from the physics host, the rest from input mapping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Event {
    ZoneEnter(Zone),
    ZoneExit(Zone),
    /// Flip the tile the avatar is standing on.
    Interact,
    /// Reset the session and reload the scene.
    Reload,
    /// Raw 2D move input.
    Move(Vec2),
}

impl Event {
    /// Shorthand for entering a tile's zone.
    #[must_use]
    pub fn enter(tile: TileHandle) -> Self {
        Event::ZoneEnter(Zone::Tile(tile))
    }

    /// Shorthand for leaving a tile's zone.
    #[must_use]
    pub fn exit(tile: TileHandle) -> Self {
        Event::ZoneExit(Zone::Tile(tile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_tile() {
        assert_eq!(Zone::Tile(TileHandle::new(2)).tile(), Some(TileHandle::new(2)));
        assert_eq!(Zone::Other.tile(), None);
    }

    #[test]
    fn test_shorthands() {
        let tile = TileHandle::new(1);
        assert_eq!(Event::enter(tile), Event::ZoneEnter(Zone::Tile(tile)));
        assert_eq!(Event::exit(tile), Event::ZoneExit(Zone::Tile(tile)));
    }
}
