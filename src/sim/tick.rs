//! Fixed timestep game loop
//!
//! Owns the entity registry, the collision channel, and the tick timer.
//! Per-tick order is load-bearing: clear, move, collide-and-publish, draw.
//! Handlers run inside the collision pass, so the ball is never drawn at a
//! position that still overlaps what it just bounced off.

use crate::config::{ConfigError, PongConfig};
use crate::consts::{MAX_TICKS_PER_ADVANCE, SERVE_GAP, SERVE_Y};
use crate::input::pointer_targets;
use crate::surface::DrawSurface;

use super::collision::{BounceResponse, Collision, CollisionChannel, CollisionHandler, Target};
use super::state::{Ball, FillStyle, Paddle, Wall};

/// Lifecycle state of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// No active tick timer.
    Idle,
    /// Ticking on a fixed period.
    Running,
}

/// Fixed-period tick timer, pumped with elapsed wall-clock time.
#[derive(Debug, Clone)]
struct TickTimer {
    period_ms: u64,
    accumulated_ms: u64,
}

impl TickTimer {
    fn new(period_ms: u64) -> Self {
        Self {
            period_ms,
            accumulated_ms: 0,
        }
    }

    /// Bank elapsed time and return the number of whole periods now due,
    /// capped at [`MAX_TICKS_PER_ADVANCE`]. Whole periods beyond the cap are
    /// dropped, so a long stall can never queue an unbounded tick backlog.
    fn accrue(&mut self, elapsed_ms: u64) -> u32 {
        self.accumulated_ms += elapsed_ms;
        let due = self.accumulated_ms / self.period_ms;
        self.accumulated_ms %= self.period_ms;
        due.min(u64::from(MAX_TICKS_PER_ADVANCE)) as u32
    }
}

/// The game: entity registry, collision channel, and timer, driving an
/// external drawing surface.
///
/// Entities are created once at construction and live as long as the loop.
/// The ball starts unplaced; [`GameLoop::reset`] serves it. Only the loop
/// moves entities, and only collision handlers correct the ball.
#[derive(Debug)]
pub struct GameLoop {
    config: PongConfig,
    ball: Ball,
    left_paddle: Paddle,
    right_paddle: Paddle,
    channel: CollisionChannel,
    timer: Option<TickTimer>,
    ticks: u64,
}

impl GameLoop {
    /// Build the loop from a validated config. The default bounce response
    /// is registered first, so later subscribers observe corrected state.
    pub fn new(config: PongConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let field = config.field;
        let paddle = config.paddle_size;

        let mut left_paddle = Paddle::new(paddle.x, paddle.y, FillStyle::Blue, field.y);
        left_paddle.sprite.rect.place(0.0, 0.0);

        let mut right_paddle = Paddle::new(paddle.x, paddle.y, FillStyle::Red, field.y);
        right_paddle
            .sprite
            .rect
            .place(field.x - paddle.x, field.y - paddle.y);

        let ball = Ball::new(config.ball_size.x, config.ball_size.y, FillStyle::Black);

        let mut channel = CollisionChannel::new();
        channel.subscribe(BounceResponse);

        Ok(Self {
            config,
            ball,
            left_paddle,
            right_paddle,
            channel,
            timer: None,
            ticks: 0,
        })
    }

    pub fn state(&self) -> LoopState {
        if self.timer.is_some() {
            LoopState::Running
        } else {
            LoopState::Idle
        }
    }

    /// Ticks run since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn left_paddle(&self) -> &Paddle {
        &self.left_paddle
    }

    pub fn right_paddle(&self) -> &Paddle {
        &self.right_paddle
    }

    /// Register an additional collision handler after the default bounce.
    pub fn subscribe(&mut self, handler: impl CollisionHandler + 'static) {
        self.channel.subscribe(handler);
    }

    /// Serve: cancel any active timer, erase the ball's last-drawn region,
    /// place it adjacent to the left paddle with the configured initial
    /// velocity, and start a fresh timer. Calling this twice in a row still
    /// leaves exactly one active timer.
    pub fn reset(&mut self, surface: &mut dyn DrawSurface) {
        self.timer = None;

        if self.ball.sprite.rect.placed() {
            self.ball.sprite.clear(surface);
        }

        let serve_x = self.left_paddle.bounds().right + SERVE_GAP;
        self.ball.sprite.rect.place(serve_x, SERVE_Y);
        self.ball.vel = self.config.initial_velocity;

        self.timer = Some(TickTimer::new(self.config.tick_ms));
        log::info!(
            "reset: ball served at ({}, {}) with velocity ({}, {})",
            serve_x,
            SERVE_Y,
            self.ball.vel.x,
            self.ball.vel.y
        );
    }

    /// Cancel the timer without touching entity state.
    pub fn stop(&mut self) {
        self.timer = None;
        log::info!("loop stopped after {} ticks", self.ticks);
    }

    /// Route one pointer sample to both paddles as pending targets. The left
    /// paddle centers on the pointer; the right tracks the mirrored
    /// coordinate. Safe to call at any rate between ticks: only targets are
    /// written, never current positions.
    pub fn track_pointer(&mut self, pointer_y: f32) {
        let targets = pointer_targets(pointer_y, self.config.paddle_size.y, self.config.field.y);
        self.left_paddle.set_target(targets.direct);
        self.right_paddle.set_target(targets.mirrored);
    }

    /// One fixed-timestep update: clear and move every movable, test the
    /// ball against every other tracked object, publish one event per hit,
    /// then draw left paddle, right paddle, ball.
    pub fn tick(&mut self, surface: &mut dyn DrawSurface) {
        self.left_paddle.sprite.clear(surface);
        self.left_paddle.commit_move();
        self.right_paddle.sprite.clear(surface);
        self.right_paddle.commit_move();
        self.ball.sprite.clear(surface);
        self.ball.advance();

        let field_height = self.config.field.y;
        let checks = [
            Collision {
                target: Target::LeftPaddle,
                bounds: self.left_paddle.bounds(),
            },
            Collision {
                target: Target::RightPaddle,
                bounds: self.right_paddle.bounds(),
            },
            Collision {
                target: Target::Wall(Wall::Top),
                bounds: Wall::Top.bounds(field_height),
            },
            Collision {
                target: Target::Wall(Wall::Bottom),
                bounds: Wall::Bottom.bounds(field_height),
            },
        ];

        // Single pass: ball bounds are re-read per check so a handler's
        // position correction is visible to the remaining checks, but no
        // pair is ever re-tested within a tick.
        for hit in checks {
            if self.ball.bounds().overlaps(&hit.bounds) {
                log::debug!("tick {}: ball struck {:?}", self.ticks, hit.target);
                self.channel.publish(&mut self.ball, &hit);
            }
        }

        self.left_paddle.sprite.draw(surface);
        self.right_paddle.sprite.draw(surface);
        self.ball.sprite.draw(surface);

        self.ticks += 1;
    }

    /// Timer pump: bank elapsed wall-clock time and run one `tick` per whole
    /// period due, at most [`MAX_TICKS_PER_ADVANCE`] per call. No-op while
    /// idle. Returns the number of ticks run.
    pub fn advance(&mut self, elapsed_ms: u64, surface: &mut dyn DrawSurface) -> u32 {
        let due = match self.timer.as_mut() {
            Some(timer) => timer.accrue(elapsed_ms),
            None => return 0,
        };
        for _ in 0..due {
            self.tick(surface);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceOp};
    use glam::Vec2;

    fn running_loop(surface: &mut RecordingSurface) -> GameLoop {
        let mut game = GameLoop::new(PongConfig::default()).unwrap();
        game.reset(surface);
        game
    }

    #[test]
    fn test_new_rejects_malformed_config() {
        let config = PongConfig {
            initial_velocity: Vec2::new(0.0, 11.0),
            ..Default::default()
        };
        assert!(GameLoop::new(config).is_err());
    }

    #[test]
    fn test_reset_serves_ball_next_to_left_paddle() {
        let mut surface = RecordingSurface::new();
        let game = running_loop(&mut surface);

        assert_eq!(game.state(), LoopState::Running);
        assert_eq!(game.ball().bounds().left, 33.0);
        assert_eq!(game.ball().bounds().top, 1.0);
        assert_eq!(game.ball().vel, Vec2::new(10.0, 11.0));
    }

    #[test]
    fn test_first_reset_skips_clearing_unplaced_ball() {
        let mut surface = RecordingSurface::new();
        let _game = running_loop(&mut surface);
        assert_eq!(surface.clear_count(), 0);
    }

    #[test]
    fn test_second_reset_clears_previous_ball_region() {
        let mut surface = RecordingSurface::new();
        let mut game = running_loop(&mut surface);
        surface.take_ops();

        game.ball_mut().sprite.rect.place(200.0, 300.0);
        game.reset(&mut surface);

        assert_eq!(
            surface.ops,
            vec![SurfaceOp::Clear {
                x: 200.0,
                y: 300.0,
                w: 32.0,
                h: 32.0
            }]
        );
    }

    #[test]
    fn test_double_reset_leaves_one_active_timer() {
        let mut surface = RecordingSurface::new();
        let mut game = running_loop(&mut surface);
        game.reset(&mut surface);

        // Two whole periods elapsed: exactly two ticks, not four
        let ran = game.advance(40, &mut surface);
        assert_eq!(ran, 2);
        assert_eq!(game.ticks(), 2);
    }

    #[test]
    fn test_advance_is_noop_while_idle() {
        let mut surface = RecordingSurface::new();
        let mut game = GameLoop::new(PongConfig::default()).unwrap();
        assert_eq!(game.advance(100, &mut surface), 0);
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn test_advance_banks_partial_periods() {
        let mut surface = RecordingSurface::new();
        let mut game = running_loop(&mut surface);

        assert_eq!(game.advance(15, &mut surface), 0);
        assert_eq!(game.advance(15, &mut surface), 1);
    }

    #[test]
    fn test_advance_caps_ticks_after_long_stall() {
        let mut surface = RecordingSurface::new();
        let mut game = running_loop(&mut surface);

        // An hour of banked time must not burst-run the backlog
        let ran = game.advance(3_600_000, &mut surface);
        assert_eq!(ran, MAX_TICKS_PER_ADVANCE);
        assert_eq!(game.ticks(), u64::from(MAX_TICKS_PER_ADVANCE));

        // The excess was dropped, not carried into later pumps
        assert_eq!(game.advance(20, &mut surface), 1);
    }

    #[test]
    fn test_stop_cancels_timer() {
        let mut surface = RecordingSurface::new();
        let mut game = running_loop(&mut surface);
        game.stop();
        assert_eq!(game.state(), LoopState::Idle);
        assert_eq!(game.advance(100, &mut surface), 0);
    }

    #[test]
    fn test_tick_draws_both_paddles_and_ball_once() {
        let mut surface = RecordingSurface::new();
        let mut game = running_loop(&mut surface);
        surface.take_ops();

        game.tick(&mut surface);

        assert_eq!(surface.clear_count(), 3);
        assert_eq!(surface.fill_count(), 3);
    }

    #[test]
    fn test_tick_clears_before_drawing_in_fixed_order() {
        let mut surface = RecordingSurface::new();
        let mut game = running_loop(&mut surface);
        surface.take_ops();

        game.tick(&mut surface);

        // Three clears first, then paddle1, paddle2, ball fills
        assert!(surface.ops[..3]
            .iter()
            .all(|op| matches!(op, SurfaceOp::Clear { .. })));
        let fills: Vec<_> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::SetFill(style) => Some(*style),
                _ => None,
            })
            .collect();
        assert_eq!(
            fills,
            vec![FillStyle::Blue, FillStyle::Red, FillStyle::Black]
        );
    }

    #[test]
    fn test_ball_bounces_off_left_paddle() {
        let mut surface = RecordingSurface::new();
        let mut game = running_loop(&mut surface);

        game.ball_mut().sprite.rect.place(5.0, 0.0);
        game.ball_mut().vel = Vec2::new(-5.0, 6.0);

        game.tick(&mut surface);

        assert_eq!(game.ball().vel.x, 5.0);
        assert_eq!(game.ball().bounds().left, game.left_paddle().bounds().right);
    }

    #[test]
    fn test_ball_bounces_off_right_paddle() {
        let mut surface = RecordingSurface::new();
        let mut game = running_loop(&mut surface);

        game.ball_mut().sprite.rect.place(560.0, 510.0);
        game.ball_mut().vel = Vec2::new(5.0, -6.0);

        game.tick(&mut surface);

        assert_eq!(game.ball().vel.x, -5.0);
        assert_eq!(
            game.ball().bounds().right,
            game.right_paddle().bounds().left
        );
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall_without_reposition() {
        let mut surface = RecordingSurface::new();
        let mut game = running_loop(&mut surface);

        game.ball_mut().sprite.rect.place(100.0, 595.0);
        game.ball_mut().vel = Vec2::new(5.0, 5.0);

        game.tick(&mut surface);

        assert_eq!(game.ball().vel.y, -5.0);
        // Only velocity flips; the moved-to position stands
        assert_eq!(game.ball().sprite.rect.pos(), Vec2::new(105.0, 600.0));
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let mut surface = RecordingSurface::new();
        let mut game = running_loop(&mut surface);

        game.ball_mut().sprite.rect.place(300.0, 3.0);
        game.ball_mut().vel = Vec2::new(5.0, -5.0);

        game.tick(&mut surface);

        assert_eq!(game.ball().vel.y, 5.0);
    }

    #[test]
    fn test_pointer_tracking_commits_on_next_tick() {
        let mut surface = RecordingSurface::new();
        let mut game = running_loop(&mut surface);
        // Keep the ball clear of both paddles for this tick
        game.ball_mut().sprite.rect.place(300.0, 300.0);

        game.track_pointer(400.0);
        // Targets are pending until the tick commits them
        assert_eq!(game.left_paddle().bounds().top, 0.0);

        game.tick(&mut surface);

        assert_eq!(game.left_paddle().bounds().top, 336.0);
        assert_eq!(game.right_paddle().bounds().top, 136.0);
    }

    #[test]
    fn test_extra_subscriber_runs_after_bounce() {
        let mut surface = RecordingSurface::new();
        let mut game = running_loop(&mut surface);
        game.subscribe(|ball: &mut Ball, hit: &Collision| {
            // Bounce already snapped the ball; observe the corrected state
            if hit.target == Target::LeftPaddle {
                assert_eq!(ball.bounds().left, hit.bounds.right);
            }
        });

        game.ball_mut().sprite.rect.place(5.0, 50.0);
        game.ball_mut().vel = Vec2::new(-5.0, 6.0);
        game.tick(&mut surface);

        assert_eq!(game.ball().vel.x, 5.0);
    }
}
