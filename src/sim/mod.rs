//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - Stable collision check order (paddles, then walls)
//! - No platform dependencies beyond the `DrawSurface` trait

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{BounceResponse, Collision, CollisionChannel, CollisionHandler, Target};
pub use rect::{Bounds, Rect};
pub use state::{Ball, FillStyle, Paddle, Sprite, Wall};
pub use tick::{GameLoop, LoopState};
