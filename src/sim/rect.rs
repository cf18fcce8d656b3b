//! Axis-aligned rectangle geometry
//!
//! Everything the game collides is a `Rect` or a `Bounds`. A `Rect` starts
//! unplaced and must be placed before any geometric query; the derived edge
//! coordinates are computed from position and size on demand, never stored.

use glam::Vec2;

/// Derived edge coordinates of a placed rectangle.
///
/// Also used directly for the playfield wall sentinels, which have infinite
/// horizontal extent and no backing `Rect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Inclusive overlap test: rectangles sharing an edge coordinate count
    /// as overlapping, so a ball exactly reaching a paddle edge still hits.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        !(self.bottom < other.top
            || self.top > other.bottom
            || self.right < other.left
            || self.left > other.right)
    }
}

/// A positionable axis-aligned rectangle.
///
/// Size is fixed at construction; position is set by [`Rect::place`].
/// Querying geometry on an unplaced rect is a programming error and panics.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    size: Vec2,
    pos: Option<Vec2>,
}

impl Rect {
    /// Create an unplaced rect of the given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            pos: None,
        }
    }

    /// Set the position. Returns `&mut Self` for chaining.
    pub fn place(&mut self, x: f32, y: f32) -> &mut Self {
        self.pos = Some(Vec2::new(x, y));
        self
    }

    /// True once `place` has been called at least once.
    pub fn placed(&self) -> bool {
        self.pos.is_some()
    }

    /// Current position. Panics if the rect has never been placed.
    pub fn pos(&self) -> Vec2 {
        self.pos.expect("rect queried before being placed")
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Edge coordinates derived from position and size.
    ///
    /// Invariant: `right - left == width` and `bottom - top == height`.
    /// Panics if the rect has never been placed.
    pub fn bounds(&self) -> Bounds {
        let pos = self.pos();
        Bounds {
            left: pos.x,
            right: pos.x + self.size.x,
            top: pos.y,
            bottom: pos.y + self.size.y,
        }
    }

    /// Inclusive axis-aligned overlap test. Panics if either rect is unplaced.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.bounds().overlaps(&other.bounds())
    }
}
