//! Log-backed HUD for headless runs

use super::{Frame, Renderer};

/// Reports the alive count when it changes, and the outcome once
#[derive(Debug, Default)]
pub struct HudLog {
    last_alive: Option<usize>,
    shown_message: Option<String>,
}

impl HudLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last alive count reported
    pub fn alive(&self) -> Option<usize> {
        self.last_alive
    }

    /// Outcome message currently on display
    pub fn message(&self) -> Option<&str> {
        self.shown_message.as_deref()
    }
}

impl Renderer for HudLog {
    fn draw(&mut self, frame: &Frame) {
        if self.last_alive != Some(frame.alive_count) {
            log::info!("Alive: {}", frame.alive_count);
            self.last_alive = Some(frame.alive_count);
        }

        if frame.message != self.shown_message {
            if let Some(msg) = &frame.message {
                log::info!("{msg}");
            }
            self.shown_message = frame.message.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(alive: usize, message: Option<&str>) -> Frame {
        Frame {
            width: 100.0,
            height: 100.0,
            entities: Vec::new(),
            alive_count: alive,
            message: message.map(str::to_owned),
        }
    }

    #[test]
    fn test_tracks_count_and_message() {
        let mut hud = HudLog::new();
        hud.draw(&frame(5, None));
        assert_eq!(hud.alive(), Some(5));
        assert_eq!(hud.message(), None);

        hud.draw(&frame(1, Some("You win! Press R to play again")));
        assert_eq!(hud.alive(), Some(1));
        assert_eq!(hud.message(), Some("You win! Press R to play again"));

        // Restart clears the message
        hud.draw(&frame(11, None));
        assert_eq!(hud.message(), None);
    }
}
