//! Drawing surface abstraction
//!
//! The simulation never touches a real canvas; it issues clear/fill calls
//! against this trait. The surface operates in the same fixed pixel
//! coordinate space as the playfield. Fill color is shared mutable surface
//! state, set immediately before each fill.

use crate::sim::FillStyle;

/// The interface the game loop renders through.
pub trait DrawSurface {
    fn set_fill_style(&mut self, style: FillStyle);
    fn clear_region(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_region(&mut self, x: f32, y: f32, w: f32, h: f32);
}

/// A single recorded surface call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceOp {
    SetFill(FillStyle),
    Clear { x: f32, y: f32, w: f32, h: f32 },
    Fill { x: f32, y: f32, w: f32, h: f32 },
}

/// Surface that records every call, for tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fill calls recorded so far.
    pub fn fill_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Fill { .. }))
            .count()
    }

    /// Number of clear calls recorded so far.
    pub fn clear_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Clear { .. }))
            .count()
    }

    /// Drain and return the recorded calls.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }
}

impl DrawSurface for RecordingSurface {
    fn set_fill_style(&mut self, style: FillStyle) {
        self.ops.push(SurfaceOp::SetFill(style));
    }

    fn clear_region(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(SurfaceOp::Clear { x, y, w, h });
    }

    fn fill_region(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(SurfaceOp::Fill { x, y, w, h });
    }
}
