//! Flat Pong - a two-paddle ball game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, game loop)
//! - `surface`: Drawing surface abstraction the loop renders through
//! - `config`: Data-driven game setup with validation
//! - `input`: Pointer-to-paddle target mapping

pub mod config;
pub mod input;
pub mod sim;
pub mod surface;

pub use config::{ConfigError, PongConfig};
pub use surface::{DrawSurface, RecordingSurface, SurfaceOp};

/// Game configuration constants (reference game dimensions)
pub mod consts {
    use glam::Vec2;

    /// Playfield dimensions in pixels
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 32.0;
    pub const PADDLE_HEIGHT: f32 = 128.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 32.0;
    /// Ball velocity in pixels per tick, restored on every reset
    pub const BALL_START_VEL: Vec2 = Vec2::new(10.0, 11.0);
    /// Horizontal gap between the left paddle and the ball's serve position
    pub const SERVE_GAP: f32 = 1.0;
    /// Row the ball is served on
    pub const SERVE_Y: f32 = 1.0;

    /// Fixed simulation tick period in milliseconds
    pub const TICK_MS: u64 = 20;
    /// Maximum ticks run per timer pump to prevent spiral of death
    pub const MAX_TICKS_PER_ADVANCE: u32 = 8;
}
