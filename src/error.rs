//! Configuration errors.
//!
//! Gameplay never produces errors: invalid selections are advisory
//! outcomes. Only session setup can fail, and a failed setup leaves the
//! session inert instead of crashing the host.

use thiserror::Error;

/// A session could not be configured.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No audio sink was attached.
    #[error("no audio sink attached to the session")]
    MissingAudioSink,

    /// No visibility sink was attached.
    #[error("no visibility sink attached to the session")]
    MissingVisibilitySink,

    /// No scene host was attached.
    #[error("no scene host attached to the session")]
    MissingSceneHost,

    /// The tile registry has no tiles.
    #[error("tile registry is empty")]
    EmptyRegistry,

    /// Progression starts at pair 1 or later.
    #[error("initial cursor must be at least 1, got {0}")]
    InvalidInitialCursor(u32),

    /// Avatar speed must be a finite, non-negative number.
    #[error("avatar speed must be finite and non-negative, got {0}")]
    InvalidSpeed(f32),

    /// The TOML source could not be parsed.
    #[error("failed to parse session config: {0}")]
    Parse(#[from] toml::de::Error),
}
