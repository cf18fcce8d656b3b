//! Game setup configuration
//!
//! All playfield geometry and timing comes from here. Validation happens
//! once at loop construction; the tick path assumes a well-formed config
//! and never re-checks.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected configuration values. A malformed config is a startup failure,
/// never a tick-time condition.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("field dimensions must be positive, got {0}x{1}")]
    Field(f32, f32),
    #[error("{0} dimensions must be positive")]
    Size(&'static str),
    #[error("initial velocity must be non-zero on both axes, got ({0}, {1})")]
    Velocity(f32, f32),
    #[error("tick period must be non-zero")]
    TickPeriod,
    #[error("paddle height {paddle} exceeds field height {field}")]
    PaddleFit { paddle: f32, field: f32 },
}

/// Playfield and entity dimensions plus tick timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PongConfig {
    /// Playfield width and height in pixels
    pub field: Vec2,
    /// Paddle width and height in pixels
    pub paddle_size: Vec2,
    /// Ball width and height in pixels
    pub ball_size: Vec2,
    /// Ball velocity in pixels per tick, applied on reset
    pub initial_velocity: Vec2,
    /// Fixed tick period in milliseconds
    pub tick_ms: u64,
}

impl Default for PongConfig {
    fn default() -> Self {
        Self {
            field: Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            ball_size: Vec2::new(BALL_SIZE, BALL_SIZE),
            initial_velocity: BALL_START_VEL,
            tick_ms: TICK_MS,
        }
    }
}

impl PongConfig {
    /// Check every setup invariant the tick loop relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field.x <= 0.0 || self.field.y <= 0.0 {
            return Err(ConfigError::Field(self.field.x, self.field.y));
        }
        if self.paddle_size.x <= 0.0 || self.paddle_size.y <= 0.0 {
            return Err(ConfigError::Size("paddle"));
        }
        if self.ball_size.x <= 0.0 || self.ball_size.y <= 0.0 {
            return Err(ConfigError::Size("ball"));
        }
        // Zero on either axis means collisions on that axis can never resolve
        if self.initial_velocity.x == 0.0 || self.initial_velocity.y == 0.0 {
            return Err(ConfigError::Velocity(
                self.initial_velocity.x,
                self.initial_velocity.y,
            ));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::TickPeriod);
        }
        if self.paddle_size.y > self.field.y {
            return Err(ConfigError::PaddleFit {
                paddle: self.paddle_size.y,
                field: self.field.y,
            });
        }
        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
