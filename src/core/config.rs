//! Session configuration.
//!
//! Hosts configure the session at startup by providing a `SessionConfig`:
//! which cues signal success and failure, where progression starts, how a
//! miss is punished, and how fast the avatar moves.
//!
//! Configs are built in code with the `with_*` builders or loaded from TOML:
//!
//! ```
//! use memory_tiles::core::{CueId, MissPolicy, SessionConfig};
//!
//! let config = SessionConfig::from_toml_str(r#"
//!     success_cue = 10
//!     failure_cue = 11
//!     miss_policy = "reload_scene"
//! "#).unwrap();
//!
//! assert_eq!(config.success_cue, CueId::new(10));
//! assert_eq!(config.miss_policy, MissPolicy::ReloadScene);
//! assert_eq!(config.avatar_speed, 5.0);
//! ```

use serde::{Deserialize, Serialize};

use super::{CueId, PairId};
use crate::error::ConfigError;

/// Default avatar speed in world units per physics tick.
pub const DEFAULT_AVATAR_SPEED: f32 = 5.0;

/// How a wrong pick (mismatch or out-of-order match) is punished.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissPolicy {
    /// Flip the two selected tiles back and let the player try again.
    #[default]
    HideSelected,
    /// Reset the whole session and reload the scene.
    ReloadScene,
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Cursor value after construction and after every reset.
    pub initial_cursor: PairId,

    /// Cue played when a pair is matched in order.
    pub success_cue: CueId,

    /// Cue played on a mismatch or an out-of-order match.
    pub failure_cue: CueId,

    /// Punishment for a wrong pick.
    pub miss_policy: MissPolicy,

    /// Avatar speed multiplier applied to the normalized move input.
    pub avatar_speed: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_cursor: PairId::FIRST,
            success_cue: CueId::new(0),
            failure_cue: CueId::new(1),
            miss_policy: MissPolicy::default(),
            avatar_speed: DEFAULT_AVATAR_SPEED,
        }
    }
}

impl SessionConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the success and failure cues.
    #[must_use]
    pub fn with_cues(mut self, success: CueId, failure: CueId) -> Self {
        self.success_cue = success;
        self.failure_cue = failure;
        self
    }

    /// Set the miss policy.
    #[must_use]
    pub fn with_miss_policy(mut self, policy: MissPolicy) -> Self {
        self.miss_policy = policy;
        self
    }

    /// Set the cursor value used at start and on reset.
    #[must_use]
    pub fn with_initial_cursor(mut self, cursor: PairId) -> Self {
        self.initial_cursor = cursor;
        self
    }

    /// Set the avatar speed.
    #[must_use]
    pub fn with_avatar_speed(mut self, speed: f32) -> Self {
        self.avatar_speed = speed;
        self
    }

    /// Check values that cannot be expressed in the types.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_cursor.raw() == 0 {
            return Err(ConfigError::InvalidInitialCursor(0));
        }
        if !self.avatar_speed.is_finite() || self.avatar_speed < 0.0 {
            return Err(ConfigError::InvalidSpeed(self.avatar_speed));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::new();

        assert_eq!(config.initial_cursor, PairId::FIRST);
        assert_eq!(config.miss_policy, MissPolicy::HideSelected);
        assert_eq!(config.avatar_speed, DEFAULT_AVATAR_SPEED);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new()
            .with_cues(CueId::new(3), CueId::new(4))
            .with_miss_policy(MissPolicy::ReloadScene)
            .with_initial_cursor(PairId::new(2))
            .with_avatar_speed(8.0);

        assert_eq!(config.success_cue, CueId::new(3));
        assert_eq!(config.failure_cue, CueId::new(4));
        assert_eq!(config.miss_policy, MissPolicy::ReloadScene);
        assert_eq!(config.initial_cursor, PairId::new(2));
        assert_eq!(config.avatar_speed, 8.0);
    }

    #[test]
    fn test_validate_rejects_zero_cursor() {
        let config = SessionConfig::new().with_initial_cursor(PairId::new(0));
        assert!(matches!(config.validate(), Err(ConfigError::InvalidInitialCursor(0))));
    }

    #[test]
    fn test_validate_rejects_bad_speed() {
        let negative = SessionConfig::new().with_avatar_speed(-1.0);
        assert!(matches!(negative.validate(), Err(ConfigError::InvalidSpeed(_))));

        let nan = SessionConfig::new().with_avatar_speed(f32::NAN);
        assert!(matches!(nan.validate(), Err(ConfigError::InvalidSpeed(_))));
    }

    #[test]
    fn test_from_toml_defaults() {
        let config = SessionConfig::from_toml_str("").unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_from_toml_full() {
        let config = SessionConfig::from_toml_str(
            r#"
            initial_cursor = 3
            success_cue = 7
            failure_cue = 8
            miss_policy = "hide_selected"
            avatar_speed = 2.5
            "#,
        )
        .unwrap();

        assert_eq!(config.initial_cursor, PairId::new(3));
        assert_eq!(config.success_cue, CueId::new(7));
        assert_eq!(config.failure_cue, CueId::new(8));
        assert_eq!(config.avatar_speed, 2.5);
    }

    #[test]
    fn test_from_toml_parse_error() {
        let result = SessionConfig::from_toml_str("miss_policy = \"explode\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_toml_validates() {
        let result = SessionConfig::from_toml_str("initial_cursor = 0");
        assert!(matches!(result, Err(ConfigError::InvalidInitialCursor(0))));
    }
}
