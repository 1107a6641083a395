//! Demo mode: computer-steered player input
//!
//! Flees the closest circle that could absorb the player if it is near,
//! otherwise chases the closest circle the player can absorb.

use glam::Vec2;

use super::collision::{Dominance, dominance};
use super::input::{Direction, InputState};
use super::state::{Entity, Round};

/// Edge-to-edge gap under which a bigger circle counts as a threat
pub const DANGER_GAP: f32 = 60.0;

/// Axis component needed before a direction key is "pressed" (8-way steering)
const AXIS_THRESHOLD: f32 = 0.38;

/// Build an input snapshot for the player from the current round
pub fn steer(round: &Round) -> InputState {
    let Some(player) = round.alive().find(|e| e.is_player()) else {
        return InputState::IDLE;
    };

    let others = || round.alive().filter(|e| !e.is_player());

    let threat = others()
        .filter(|e| dominance(player.radius, e.radius) == Dominance::Second)
        .filter(|e| gap(player, e) < DANGER_GAP)
        .min_by(|a, b| gap(player, a).total_cmp(&gap(player, b)));

    if let Some(threat) = threat {
        return input_toward(player.pos - threat.pos);
    }

    let prey = others()
        .filter(|e| dominance(player.radius, e.radius) == Dominance::First)
        .min_by(|a, b| gap(player, a).total_cmp(&gap(player, b)));

    match prey {
        Some(prey) => input_toward(prey.pos - player.pos),
        None => InputState::IDLE,
    }
}

/// Distance between circle edges (negative when overlapping)
fn gap(a: &Entity, b: &Entity) -> f32 {
    a.pos.distance(b.pos) - a.radius - b.radius
}

/// Quantize a direction into held keys
pub fn input_toward(dir: Vec2) -> InputState {
    let Some(dir) = dir.try_normalize() else {
        return InputState::IDLE;
    };

    let mut input = InputState::IDLE;
    input.set(Direction::Right, dir.x > AXIS_THRESHOLD);
    input.set(Direction::Left, dir.x < -AXIS_THRESHOLD);
    input.set(Direction::Down, dir.y > AXIS_THRESHOLD);
    input.set(Direction::Up, dir.y < -AXIS_THRESHOLD);
    input
}
