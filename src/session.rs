//! Frame driver
//!
//! Ties keyboard input, the round and a renderer together. The host calls
//! [`Session::frame`] once per display refresh; key events may arrive in between.

use crate::platform::KeyboardState;
use crate::renderer::{Frame, Renderer};
use crate::settings::Settings;
use crate::sim::{InputState, Round, autopilot};

/// A running game: one round at a time, restartable at will
pub struct Session {
    pub round: Round,
    pub keyboard: KeyboardState,
    entity_count: usize,
    autopilot: bool,
    /// Rounds started so far (including the current one)
    rounds_started: u32,
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.seed_or_random();
        log::info!("Session seed: {seed}");
        Self {
            round: Round::new(settings.arena(), seed, settings.entity_count),
            keyboard: KeyboardState::new(),
            entity_count: settings.entity_count,
            autopilot: settings.autopilot,
            rounds_started: 1,
        }
    }

    pub fn key_down(&mut self, key: &str) {
        self.keyboard.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.keyboard.key_up(key);
    }

    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    /// Throw the current round away and spawn a new one
    pub fn restart(&mut self) {
        self.round.restart(self.entity_count);
        self.rounds_started += 1;
    }

    /// Input the player will act on this frame
    fn input_snapshot(&self) -> InputState {
        if self.autopilot {
            autopilot::steer(&self.round)
        } else {
            self.keyboard.snapshot()
        }
    }

    /// Run one frame: honor restart, tick once if the round is live, draw
    ///
    /// Returns whether the round is still in progress, so the host can stop
    /// scheduling frames once it ends.
    pub fn frame<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> bool {
        if self.keyboard.take_restart() {
            self.restart();
        }

        if self.round.is_running() {
            let input = self.input_snapshot();
            self.round.tick(&input);
        }

        renderer.draw(&Frame::capture(&self.round));
        self.round.is_running()
    }

    /// Drive frames until the round ends or `max_frames` pass
    ///
    /// Returns the number of frames run.
    pub fn run_to_end<R: Renderer + ?Sized>(&mut self, renderer: &mut R, max_frames: u64) -> u64 {
        let mut frames = 0;
        while frames < max_frames {
            frames += 1;
            if !self.frame(renderer) {
                break;
            }
        }
        frames
    }
}
