//! Tile descriptors and the registry that owns them.
//!
//! - `TileDescriptor`: pair id, cue, and visual of one tile
//! - `TileRegistry`: handle-indexed table of every tile in the scene

mod definition;
mod registry;

pub use definition::{Tile, TileDescriptor};
pub use registry::TileRegistry;
