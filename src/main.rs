//! Flat Pong entry point
//!
//! Headless demo: drives the game loop with wall-clock time against a
//! recording surface and logs what each frame drew. Pass a JSON config path
//! to override the reference dimensions.

use std::time::{Duration, Instant};

use flat_pong::sim::GameLoop;
use flat_pong::{PongConfig, RecordingSurface};

/// How long the demo runs before stopping the loop.
const DEMO_DURATION: Duration = Duration::from_secs(3);
/// Frame pacing for the demo driver (the sim tick period is configured
/// separately; `advance` banks the difference).
const FRAME: Duration = Duration::from_millis(16);

fn load_config() -> Result<PongConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            let config = PongConfig::from_json(&json)?;
            log::info!("loaded config from {path}");
            Ok(config)
        }
        None => Ok(PongConfig::default()),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    let field_height = config.field.y;
    let mut game = GameLoop::new(config)?;
    let mut surface = RecordingSurface::new();

    game.reset(&mut surface);

    let start = Instant::now();
    let mut last_frame = start;

    while start.elapsed() < DEMO_DURATION {
        std::thread::sleep(FRAME);

        // Sweep the pointer up and down the field so both paddles move
        let phase = start.elapsed().as_secs_f32().sin() * 0.5 + 0.5;
        game.track_pointer(phase * field_height);

        let now = Instant::now();
        let elapsed_ms = now.duration_since(last_frame).as_millis() as u64;
        last_frame = now;

        let ran = game.advance(elapsed_ms, &mut surface);
        if ran > 0 {
            let ball = game.ball();
            let bounds = ball.bounds();
            log::debug!(
                "frame: {} tick(s), {} draw calls, {} ball at ({:.0}, {:.0})",
                ran,
                surface.fill_count(),
                ball.sprite.fill.as_str(),
                bounds.left,
                bounds.top
            );
        }
        surface.take_ops();
    }

    game.stop();
    log::info!("demo finished: {} ticks total", game.ticks());
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        log::error!("fatal: {err}");
        std::process::exit(1);
    }
}
