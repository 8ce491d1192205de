//! Session ownership and fixed-rate scheduling
//!
//! A [`Session`] owns the simulation state and the control intent. Hosts feed
//! it key events and wall-clock time; tests call [`Session::tick`] directly.

use std::time::Duration;

use rand::Rng;

use crate::consts::MAX_SUBSTEPS;
use crate::error::SimResult;
use crate::settings::Settings;
use crate::sim::{ControlIntent, Key, KeyEvent, RenderFrame, SimulationState, tick};

/// Fixed timestep accumulator
///
/// Converts elapsed wall-clock time into a whole number of due ticks.
#[derive(Debug, Clone)]
pub struct FixedStep {
    period: Duration,
    accumulator: Duration,
    max_substeps: u32,
}

impl FixedStep {
    pub fn new(period: Duration, max_substeps: u32) -> Self {
        Self {
            period,
            accumulator: Duration::ZERO,
            max_substeps: max_substeps.max(1),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Add elapsed time and return how many ticks are due.
    ///
    /// At most `max_substeps` ticks are returned; any further backlog is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut due = 0;
        while self.accumulator >= self.period && due < self.max_substeps {
            self.accumulator -= self.period;
            due += 1;
        }

        if self.accumulator >= self.period {
            let dropped = self.accumulator.as_secs_f64() / self.period.as_secs_f64();
            log::warn!("Falling behind, dropping {:.0} ticks", dropped.floor());
            self.accumulator = Duration::from_nanos(
                (self.accumulator.as_nanos() % self.period.as_nanos().max(1)) as u64,
            );
        }

        due
    }
}

/// One running simulation
#[derive(Debug)]
pub struct Session {
    settings: Settings,
    state: SimulationState,
    intent: ControlIntent,
    stepper: FixedStep,
}

impl Session {
    /// Validate settings and set up the ship and asteroid belt.
    ///
    /// Uses `settings.seed` when present, otherwise a random seed.
    pub fn new(settings: Settings) -> SimResult<Self> {
        settings.validate()?;

        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        let state = SimulationState::new(&settings, seed)?;
        log::info!(
            "Session started: seed {}, {} asteroids, {}x{} world at {} fps",
            seed,
            state.obstacles.len(),
            settings.world_width,
            settings.world_height,
            settings.frames_per_second
        );

        let stepper = FixedStep::new(settings.tick_period()?, MAX_SUBSTEPS);
        Ok(Self {
            settings,
            state,
            intent: ControlIntent::default(),
            stepper,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn intent(&self) -> ControlIntent {
        self.intent
    }

    pub fn tick_period(&self) -> Duration {
        self.stepper.period()
    }

    /// Record a key press or release
    pub fn handle_key(&mut self, event: KeyEvent) {
        self.intent.apply(event, self.settings.turn_rate());
    }

    /// Record a DOM-style key code. Unknown codes are ignored.
    pub fn handle_key_code(&mut self, code: &str, pressed: bool) {
        if let Some(key) = Key::from_code(code) {
            let event = if pressed { KeyEvent::Down(key) } else { KeyEvent::Up(key) };
            self.handle_key(event);
        }
    }

    /// Run exactly one tick against the current intent
    pub fn tick(&mut self) -> RenderFrame {
        let intent = self.intent;
        tick(&mut self.state, &intent, &self.settings)
    }

    /// Run every tick due after `elapsed`, handing each frame to `on_frame`.
    /// Returns the number of ticks run.
    pub fn update(&mut self, elapsed: Duration, mut on_frame: impl FnMut(RenderFrame)) -> u32 {
        let due = self.stepper.advance(elapsed);
        for _ in 0..due {
            on_frame(self.tick());
        }
        due
    }
}
