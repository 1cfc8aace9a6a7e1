//! Host collaborators.
//!
//! The session never plays audio, draws, or loads scenes itself. It sends
//! fire-and-forget requests to three traits implemented by the host:
//!
//! - [`AudioSink`]: play a cue
//! - [`VisibilitySink`]: show or hide a tile's visual
//! - [`SceneHost`]: reinitialize the scene after a full reset
//!
//! [`Recorder`] implements all three by logging calls, which is what the
//! tests and headless runs use.

mod recorder;

pub use recorder::{HostCall, Recorder};

use crate::core::{CueId, VisualId};

/// Plays audio cues.
pub trait AudioSink {
    /// Play a cue once. No acknowledgement.
    fn play(&mut self, cue: CueId);
}

/// Shows and hides tile visuals.
pub trait VisibilitySink {
    /// Set a visual's visibility.
    fn set_visible(&mut self, visual: VisualId, visible: bool);
}

/// Owns scene loading.
pub trait SceneHost {
    /// Reload the scene: every tile face down, zone events re-delivered.
    fn reinitialize(&mut self);
}
