//! Game entities
//!
//! Explicit composition instead of a shared drawable base: `Sprite` embeds a
//! `Rect` plus a fill style, and `Paddle`/`Ball` embed a `Sprite`. Entities
//! are created once at startup by the game loop and live for the process
//! lifetime; only the loop moves them and only collision handlers correct
//! the ball's velocity or position.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::{Bounds, Rect};
use crate::surface::DrawSurface;

/// Named fill color a drawing surface understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FillStyle {
    #[default]
    Black,
    Blue,
    Red,
}

impl FillStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            FillStyle::Black => "black",
            FillStyle::Blue => "blue",
            FillStyle::Red => "red",
        }
    }
}

/// A drawable, positionable entity.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub rect: Rect,
    pub fill: FillStyle,
}

impl Sprite {
    pub fn new(width: f32, height: f32, fill: FillStyle) -> Self {
        Self {
            rect: Rect::new(width, height),
            fill,
        }
    }

    /// Erase the region at the current position. Must run before the entity
    /// moves, since moving changes the stored position.
    pub fn clear(&self, surface: &mut dyn DrawSurface) {
        let pos = self.rect.pos();
        let size = self.rect.size();
        surface.clear_region(pos.x, pos.y, size.x, size.y);
    }

    /// Set the surface fill style and fill the rect at the current position.
    /// The fill style is shared surface state; it does not persist across
    /// entities.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.set_fill_style(self.fill);
        let pos = self.rect.pos();
        let size = self.rect.size();
        surface.fill_region(pos.x, pos.y, size.x, size.y);
    }
}

/// A player paddle: a sprite plus a pending clamped target position.
///
/// Input sampling is decoupled from the tick: `set_target` may be called any
/// number of times between ticks, but the paddle commits at most one step per
/// tick via `commit_move`.
#[derive(Debug, Clone)]
pub struct Paddle {
    pub sprite: Sprite,
    target: Option<Vec2>,
    /// Highest legal y position: field height minus paddle height.
    travel_max: f32,
}

impl Paddle {
    pub fn new(width: f32, height: f32, fill: FillStyle, field_height: f32) -> Self {
        Self {
            sprite: Sprite::new(width, height, fill),
            target: None,
            travel_max: field_height - height,
        }
    }

    /// Store a pending vertical target, clamped to keep the paddle fully on
    /// the field. Does not move the paddle.
    pub fn set_target(&mut self, y: f32) {
        let y = y.clamp(0.0, self.travel_max);
        let x = self.sprite.rect.pos().x;
        self.target = Some(Vec2::new(x, y));
    }

    /// Commit the pending target, if any. After this call the paddle's y is
    /// always within `[0, field_height - paddle_height]`.
    pub fn commit_move(&mut self) {
        if let Some(target) = self.target {
            self.sprite.rect.place(target.x, target.y);
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.sprite.rect.bounds()
    }
}

/// The ball: a sprite plus a constant per-tick velocity.
#[derive(Debug, Clone)]
pub struct Ball {
    pub sprite: Sprite,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(width: f32, height: f32, fill: FillStyle) -> Self {
        Self {
            sprite: Sprite::new(width, height, fill),
            vel: Vec2::ZERO,
        }
    }

    /// Advance one tick: constant-velocity integration, no sub-tick
    /// interpolation.
    pub fn advance(&mut self) {
        let pos = self.sprite.rect.pos();
        self.sprite.rect.place(pos.x + self.vel.x, pos.y + self.vel.y);
    }

    /// Negate the horizontal velocity. Called only from collision handlers.
    pub fn reverse_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Negate the vertical velocity. Called only from collision handlers.
    pub fn reverse_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Reposition so the ball's left edge sits at `x`, keeping y.
    pub fn snap_left_to(&mut self, x: f32) {
        let y = self.sprite.rect.pos().y;
        self.sprite.rect.place(x, y);
    }

    /// Reposition so the ball's right edge sits at `x`, keeping y.
    pub fn snap_right_to(&mut self, x: f32) {
        let y = self.sprite.rect.pos().y;
        self.sprite.rect.place(x - self.sprite.rect.width(), y);
    }

    pub fn bounds(&self) -> Bounds {
        self.sprite.rect.bounds()
    }
}

/// Playfield boundary sentinel: a detection-only collision target, never
/// drawn, never moved, never a receiver of collision events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
}

impl Wall {
    /// Half-plane bounds with infinite horizontal extent, so no x coordinate
    /// can ever separate the ball from a wall.
    pub fn bounds(&self, field_height: f32) -> Bounds {
        match self {
            Wall::Top => Bounds {
                left: f32::NEG_INFINITY,
                right: f32::INFINITY,
                top: f32::NEG_INFINITY,
                bottom: 0.0,
            },
            Wall::Bottom => Bounds {
                left: f32::NEG_INFINITY,
                right: f32::INFINITY,
                top: field_height,
                bottom: f32::INFINITY,
            },
        }
    }
}
