//! # memory-tiles
//!
//! Event-driven core for an ordered memory-matching tile game.
//!
//! An avatar walks over face-down tiles, flips them with an "interact"
//! press, and tries to find pairs. Pairs must be found in ascending order:
//! pair 1 first, then pair 2, and so on. A wrong pair, or a right pair
//! found too early, is punished.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: Rendering, physics, audio, and scene loading live
//!    in the host. The core consumes events and emits requests through the
//!    traits in [`host`].
//!
//! 2. **Handles, Not References**: Tiles live in a [`TileRegistry`] owned
//!    outside the session state. Selections are [`TileHandle`]s, which stay
//!    valid across scene reloads.
//!
//! 3. **Declarative Rules**: [`MatchRules`] returns an [`EffectBatch`]; only
//!    the [`EffectResolver`] mutates anything.
//!
//! 4. **No Singletons**: A [`Session`] is built explicitly and owned by the
//!    host loop.
//!
//! ## Modules
//!
//! - `core`: Identifiers, configuration, session state, layout RNG
//! - `tiles`: Tile descriptors and the registry
//! - `selection`: Selection slots and the progress cursor
//! - `rules`: Match evaluation
//! - `effects`: Effect definitions and resolution
//! - `input`: Host events, zone tracking, avatar movement
//! - `host`: Audio, visibility, and scene traits
//! - `session`: The session and its builder

pub mod core;
pub mod effects;
pub mod error;
pub mod host;
pub mod input;
pub mod rules;
pub mod selection;
pub mod session;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{
    CueId, PairId, TileHandle, VisualId,
    MissPolicy, SessionConfig,
    EvaluationRecord, SessionState,
    LayoutRng,
};

pub use crate::tiles::{Tile, TileDescriptor, TileRegistry};

pub use crate::selection::{ProgressCursor, SelectOutcome, SelectionTracker};

pub use crate::rules::{Evaluation, MatchOutcome, MatchRules, OrderedMatchRules};

pub use crate::effects::{Effect, EffectBatch, EffectResolver, ResolverContext};

pub use crate::input::{Avatar, Event, InteractOutcome, InteractionAdapter, Vec2, Zone};

pub use crate::host::{AudioSink, HostCall, Recorder, SceneHost, VisibilitySink};

pub use crate::session::{EventOutcome, Session, SessionBuilder};

pub use crate::error::ConfigError;
