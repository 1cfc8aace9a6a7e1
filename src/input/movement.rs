//! Avatar movement.
//!
//! The host integrates positions; this only turns the raw move input into
//! a velocity. Input is normalized so diagonal movement is not faster.

use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_AVATAR_SPEED;

/// Inputs shorter than this are treated as no input.
const NORMALIZE_EPSILON: f32 = 1e-5;

/// A 2D vector in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction, or zero for (near-)zero input.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > NORMALIZE_EPSILON {
            Self::new(self.x / len, self.y / len)
        } else {
            Self::ZERO
        }
    }

    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

/// The player-controlled avatar's movement state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    speed: f32,
    direction: Vec2,
}

impl Avatar {
    /// Create a stationary avatar.
    #[must_use]
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            direction: Vec2::ZERO,
        }
    }

    /// Store the latest move input.
    pub fn on_move(&mut self, input: Vec2) {
        self.direction = input.normalized();
    }

    /// Normalized movement direction.
    #[must_use]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Velocity for the next physics tick.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.direction.scaled(self.speed)
    }

    /// Stop moving.
    pub fn halt(&mut self) {
        self.direction = Vec2::ZERO;
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new(DEFAULT_AVATAR_SPEED)
    }
}
