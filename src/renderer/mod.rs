//! Rendering seam
//!
//! The simulation never draws. Once per tick it hands a read-only [`Frame`] to
//! whatever implements [`Renderer`].

pub mod hud;

pub use hud::HudLog;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Color, Entity, Round};

/// Display attributes of one alive entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u32,
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
    /// Drawn with an outline for emphasis
    pub is_player: bool,
}

impl From<&Entity> for EntityView {
    fn from(e: &Entity) -> Self {
        Self {
            id: e.id,
            center: e.pos,
            radius: e.radius,
            color: e.color,
            is_player: e.is_player(),
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    /// Alive entities in insertion order
    pub entities: Vec<EntityView>,
    /// Numeric HUD value
    pub alive_count: usize,
    /// Outcome text, once the round has ended
    pub message: Option<String>,
}

impl Frame {
    pub fn capture(round: &Round) -> Self {
        Self {
            width: round.arena.width,
            height: round.arena.height,
            entities: round.alive().map(EntityView::from).collect(),
            alive_count: round.alive_count,
            message: round.message().map(str::to_owned),
        }
    }
}

/// Something that can present frames
pub trait Renderer {
    fn draw(&mut self, frame: &Frame);
}

/// Keeps every frame it receives (handy for tests and replays)
#[derive(Debug, Default)]
pub struct Recorder {
    pub frames: Vec<Frame>,
}

impl Renderer for Recorder {
    fn draw(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }
}
