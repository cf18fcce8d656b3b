//! Collision events and response
//!
//! Detection (in the tick loop) is decoupled from response through a typed
//! listener list: the loop publishes one event per intersecting pair per
//! tick, and subscribers mutate the ball. Delivery is synchronous, in
//! registration order, on the detecting thread. Single pass per tick: if a
//! handler repositions the ball out of the overlap, the pair is not
//! re-evaluated until the next tick.

use super::rect::Bounds;
use super::state::{Ball, Wall};

/// What the ball struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Target {
    LeftPaddle,
    RightPaddle,
    Wall(Wall),
}

/// Ephemeral collision event, produced once per intersecting pair per tick
/// and consumed synchronously. Carries the struck object's bounds so
/// handlers can correct the ball's position without holding a reference to
/// the object itself.
#[derive(Debug, Clone, Copy)]
pub struct Collision {
    pub target: Target,
    pub bounds: Bounds,
}

/// Subscriber seam for collision response.
pub trait CollisionHandler {
    fn on_collision(&mut self, ball: &mut Ball, hit: &Collision);
}

impl<F> CollisionHandler for F
where
    F: FnMut(&mut Ball, &Collision),
{
    fn on_collision(&mut self, ball: &mut Ball, hit: &Collision) {
        self(ball, hit)
    }
}

/// The single named collision channel.
#[derive(Default)]
pub struct CollisionChannel {
    handlers: Vec<Box<dyn CollisionHandler>>,
}

impl CollisionChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: impl CollisionHandler + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Deliver the event to every handler, in registration order.
    pub fn publish(&mut self, ball: &mut Ball, hit: &Collision) {
        for handler in &mut self.handlers {
            handler.on_collision(ball, hit);
        }
    }
}

impl std::fmt::Debug for CollisionChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollisionChannel")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// Default bounce policy, registered on the channel at loop construction:
/// paddles reverse the ball horizontally and snap it flush against the
/// struck face so the pair cannot re-trigger next tick; walls reverse it
/// vertically with no position correction (they have no interior depth).
#[derive(Debug, Default)]
pub struct BounceResponse;

impl CollisionHandler for BounceResponse {
    fn on_collision(&mut self, ball: &mut Ball, hit: &Collision) {
        match hit.target {
            Target::LeftPaddle => {
                ball.reverse_x();
                ball.snap_left_to(hit.bounds.right);
            }
            Target::RightPaddle => {
                ball.reverse_x();
                ball.snap_right_to(hit.bounds.left);
            }
            Target::Wall(_) => ball.reverse_y(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::FillStyle;
    use glam::Vec2;

    fn ball_at(x: f32, y: f32, vel: Vec2) -> Ball {
        let mut ball = Ball::new(32.0, 32.0, FillStyle::Black);
        ball.sprite.rect.place(x, y);
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_left_paddle_bounce_reverses_and_snaps() {
        let mut ball = ball_at(5.0, 0.0, Vec2::new(-5.0, 6.0));
        let hit = Collision {
            target: Target::LeftPaddle,
            bounds: Bounds {
                left: 0.0,
                right: 32.0,
                top: 0.0,
                bottom: 128.0,
            },
        };

        BounceResponse.on_collision(&mut ball, &hit);

        assert_eq!(ball.vel.x, 5.0);
        assert_eq!(ball.bounds().left, 32.0);
    }

    #[test]
    fn test_right_paddle_bounce_reverses_and_snaps() {
        let mut ball = ball_at(595.0, 0.0, Vec2::new(5.0, 6.0));
        let hit = Collision {
            target: Target::RightPaddle,
            bounds: Bounds {
                left: 568.0,
                right: 600.0,
                top: 0.0,
                bottom: 128.0,
            },
        };

        BounceResponse.on_collision(&mut ball, &hit);

        assert_eq!(ball.vel.x, -5.0);
        assert_eq!(ball.bounds().right, 568.0);
    }

    #[test]
    fn test_wall_bounce_flips_y_only() {
        let mut ball = ball_at(100.0, 568.0, Vec2::new(3.0, 5.0));
        let hit = Collision {
            target: Target::Wall(Wall::Bottom),
            bounds: Wall::Bottom.bounds(600.0),
        };

        BounceResponse.on_collision(&mut ball, &hit);

        assert_eq!(ball.vel, Vec2::new(3.0, -5.0));
        // Walls never reposition the ball
        assert_eq!(ball.sprite.rect.pos(), Vec2::new(100.0, 568.0));
    }

    #[test]
    fn test_channel_delivers_in_registration_order() {
        let mut channel = CollisionChannel::new();
        channel.subscribe(|ball: &mut Ball, _hit: &Collision| {
            ball.vel.x += 1.0;
        });
        channel.subscribe(|ball: &mut Ball, _hit: &Collision| {
            ball.vel.x *= 10.0;
        });

        let mut ball = ball_at(0.0, 0.0, Vec2::new(1.0, 1.0));
        let hit = Collision {
            target: Target::Wall(Wall::Top),
            bounds: Wall::Top.bounds(600.0),
        };
        channel.publish(&mut ball, &hit);

        // (1 + 1) * 10, not 1 * 10 + 1
        assert_eq!(ball.vel.x, 20.0);
    }
}
