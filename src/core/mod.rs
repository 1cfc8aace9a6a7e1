//! Core types: identifiers, configuration, session state, layout RNG.
//!
//! Everything here is independent of the host engine. Hosts configure the
//! session through `SessionConfig` rather than by changing the core.

pub mod config;
pub mod ids;
pub mod rng;
pub mod state;

pub use config::{MissPolicy, SessionConfig, DEFAULT_AVATAR_SPEED};
pub use ids::{CueId, PairId, TileHandle, VisualId};
pub use rng::LayoutRng;
pub use state::{EvaluationRecord, SessionState};
