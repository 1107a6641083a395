//! Per-frame simulation tick
//!
//! Order within a tick:
//! 1. Every alive entity picks a velocity, integrates, and reflects off the walls
//! 2. Collisions are resolved pair by pair (absorption is visible to later pairs)
//! 3. Alive count is refreshed and termination is checked

use glam::Vec2;
use rand::Rng;

use super::arena::Arena;
use super::collision::{CollisionEvent, resolve};
use super::input::InputState;
use super::state::{Entity, Outcome, Role, Round, RoundStatus};
use crate::consts::*;

/// New velocity for an entity given its role
///
/// Player: full speed along the normalized intent, or damped coasting with no input.
/// Autonomous: keeps its heading, with a small per-tick chance of a fresh random one.
pub fn compute_velocity<R: Rng + ?Sized>(
    role: Role,
    velocity: Vec2,
    input: &InputState,
    rng: &mut R,
) -> Vec2 {
    match role {
        Role::Player => player_velocity(velocity, input.intent()),
        Role::Autonomous => {
            if rng.random_bool(WANDER_CHANCE) {
                Vec2::new(
                    rng.random_range(-WANDER_SPEED..=WANDER_SPEED),
                    rng.random_range(-WANDER_SPEED..=WANDER_SPEED),
                )
            } else {
                velocity
            }
        }
    }
}

/// Player steering, split out since it needs no randomness
pub fn player_velocity(velocity: Vec2, intent: Vec2) -> Vec2 {
    if intent == Vec2::ZERO {
        velocity * PLAYER_DAMPING
    } else {
        intent.normalize() * PLAYER_SPEED
    }
}

/// Advance one entity by one step
pub fn update_entity<R: Rng + ?Sized>(
    entity: &mut Entity,
    input: &InputState,
    arena: &Arena,
    rng: &mut R,
) {
    if !entity.alive {
        return;
    }

    entity.vel = compute_velocity(entity.role, entity.vel, input, rng);
    entity.pos += entity.vel;
    arena.reflect(&mut entity.pos, &mut entity.vel, entity.radius);
}

/// Advance the round by one tick
///
/// Ticking an ended round is a no-op: nothing moves and the outcome stays put.
/// Returns the collisions that happened this tick.
pub fn tick(round: &mut Round, input: &InputState) -> Vec<CollisionEvent> {
    if round.status == RoundStatus::Ended {
        return Vec::new();
    }

    round.time_ticks += 1;

    let arena = round.arena;
    for entity in &mut round.entities {
        update_entity(entity, input, &arena, &mut round.rng);
    }

    let events = resolve(&mut round.entities);

    // Absorption growth can push a circle past a wall; pull it back in
    for entity in round.entities.iter_mut().filter(|e| e.alive) {
        entity.pos = arena.confine(entity.pos, entity.radius);
    }

    for event in &events {
        match event {
            CollisionEvent::Absorbed {
                absorber,
                absorbed,
                new_radius,
            } => log::debug!(
                "tick {}: entity {} absorbed {} (radius now {:.2})",
                round.time_ticks,
                absorber,
                absorbed,
                new_radius
            ),
            CollisionEvent::Repelled { first, second } => {
                log::trace!("tick {}: entities {} and {} repelled", round.time_ticks, first, second)
            }
        }
    }

    round.alive_count = round.count_alive();
    evaluate_termination(round);

    events
}

/// End the round once at most one entity is alive
pub fn evaluate_termination(round: &mut Round) {
    if round.alive_count > 1 {
        return;
    }

    let outcome = match round.alive().next() {
        Some(winner) if winner.is_player() => Outcome::PlayerWin,
        Some(_) => Outcome::PlayerEliminated,
        None => Outcome::NoWinner,
    };

    round.status = RoundStatus::Ended;
    round.outcome = Some(outcome);
    log::info!(
        "Round ended after {} ticks: {:?}",
        round.time_ticks,
        outcome
    );
}

impl Round {
    /// Advance by one tick, see [`tick`]
    pub fn tick(&mut self, input: &InputState) -> Vec<CollisionEvent> {
        tick(self, input)
    }
}
