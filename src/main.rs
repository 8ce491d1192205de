//! Asteroid Field headless host
//!
//! Runs a session in real time without a window and logs what would be drawn.
//!
//! Usage: `asteroid-field [SETTINGS_JSON] [TICKS]`

use std::time::Instant;

use asteroid_field::renderer::{clear_color, frame_vertices};
use asteroid_field::{Session, Settings, SimResult};

fn main() {
    env_logger::init();
    log::info!("Asteroid Field (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> SimResult<()> {
    let mut args = std::env::args().skip(1);

    let settings = match args.next() {
        Some(path) => Settings::load(path)?,
        None => {
            log::info!("No settings file given, using defaults");
            Settings::default()
        }
    };
    // Run forever unless a tick limit is given
    let limit = args.next().and_then(|s| s.parse::<u64>().ok());

    let mut session = Session::new(settings)?;
    log::debug!("Clearing each frame to {:?}", clear_color());
    let fps = session.settings().frames_per_second.round().max(1.0) as u64;
    let period = session.tick_period();
    let mut last = Instant::now();

    loop {
        std::thread::sleep(period);
        let now = Instant::now();
        let elapsed = now - last;
        last = now;

        let mut done = false;
        session.update(elapsed, |frame| {
            if frame.tick % fps == 0 {
                let ship = &frame.ship;
                log::info!(
                    "tick {}: ship ({:.1}, {:.1}) heading {:.2} thrust {}",
                    frame.tick,
                    ship.pos.x,
                    ship.pos.y,
                    ship.heading,
                    ship.thrusting
                );
                log::debug!(
                    "tick {}: {} asteroids, {} vertices",
                    frame.tick,
                    frame.obstacles.len(),
                    frame_vertices(&frame).len()
                );
            }
            if limit.is_some_and(|n| frame.tick >= n) {
                done = true;
            }
        });

        if done {
            log::info!("Reached tick limit, stopping");
            return Ok(());
        }
    }
}
