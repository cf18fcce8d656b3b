//! Pointer-to-paddle target mapping
//!
//! One paddle centers itself on the pointer; the other tracks the mirrored
//! coordinate on the opposite half of the field. The mirroring is the
//! observed control scheme of the reference game, preserved as-is. Targets
//! are raw; the paddle clamps them when they are applied.

/// Pending vertical targets for both paddles, derived from one pointer
/// sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleTargets {
    /// Left paddle: centered on the pointer.
    pub direct: f32,
    /// Right paddle: mirrored across the field's horizontal midline.
    pub mirrored: f32,
}

/// Map a pointer y coordinate to targets for both paddles.
pub fn pointer_targets(pointer_y: f32, paddle_height: f32, field_height: f32) -> PaddleTargets {
    let half = paddle_height / 2.0;
    PaddleTargets {
        direct: pointer_y - half,
        mirrored: field_height - pointer_y - half,
    }
}
