//! Circle-circle collision resolution
//!
//! Every unordered pair is visited once per tick in insertion order. Absorption
//! takes effect immediately, so a circle eaten early in the pass is skipped by
//! every later pair, and an absorber's new radius is what later pairs see.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Entity;
use crate::consts::{DOMINANCE_RATIO, GROWTH_FACTOR, REPEL_IMPULSE};

/// Which side wins a collision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// First-listed circle absorbs the second
    First,
    /// Second-listed circle absorbs the first
    Second,
    /// Sizes are within tolerance of each other, both get pushed apart
    Neither,
}

/// Something that happened during resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CollisionEvent {
    Absorbed {
        absorber: u32,
        absorbed: u32,
        new_radius: f32,
    },
    Repelled {
        first: u32,
        second: u32,
    },
}

/// Decide who absorbs whom
///
/// A circle dominates only if the other is strictly below `DOMINANCE_RATIO` of its
/// radius. The first-listed side is checked first; a pair sitting exactly on the
/// ratio falls through to `Neither`.
pub fn dominance(radius_a: f32, radius_b: f32) -> Dominance {
    if radius_b < radius_a * DOMINANCE_RATIO {
        Dominance::First
    } else if radius_a < radius_b * DOMINANCE_RATIO {
        Dominance::Second
    } else {
        Dominance::Neither
    }
}

/// Whether two circles overlap
#[inline]
pub fn overlapping(a: &Entity, b: &Entity) -> bool {
    a.pos.distance(b.pos) < a.radius + b.radius
}

/// Unit vector from `b` toward `a`
///
/// Concentric circles have no defined direction, so +X is used.
pub fn separation_axis(a: Vec2, b: Vec2) -> Vec2 {
    (a - b).try_normalize().unwrap_or(Vec2::X)
}

/// Resolve all collisions among alive entities
pub fn resolve(entities: &mut [Entity]) -> Vec<CollisionEvent> {
    let mut events = Vec::new();

    for i in 0..entities.len() {
        for j in (i + 1)..entities.len() {
            let (head, tail) = entities.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            // `a` may have been absorbed by an earlier `b` in this same pass
            if !a.alive {
                break;
            }
            if !b.alive || !overlapping(a, b) {
                continue;
            }

            let event = match dominance(a.radius, b.radius) {
                Dominance::First => absorb(a, b),
                Dominance::Second => absorb(b, a),
                Dominance::Neither => {
                    let n = separation_axis(a.pos, b.pos) * REPEL_IMPULSE;
                    a.vel += n;
                    b.vel -= n;
                    CollisionEvent::Repelled {
                        first: a.id,
                        second: b.id,
                    }
                }
            };
            events.push(event);
        }
    }

    events
}

fn absorb(absorber: &mut Entity, absorbed: &mut Entity) -> CollisionEvent {
    absorber.radius += absorbed.radius * GROWTH_FACTOR;
    absorbed.alive = false;
    CollisionEvent::Absorbed {
        absorber: absorber.id,
        absorbed: absorbed.id,
        new_radius: absorber.radius,
    }
}
