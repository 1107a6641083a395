//! Seeded simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per call, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (insertion order of entities)
//! - No rendering or platform dependencies

pub mod arena;
pub mod autopilot;
pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use collision::{CollisionEvent, Dominance, dominance, resolve};
pub use input::{Direction, InputState};
pub use state::{Color, Entity, Outcome, Role, Round, RoundStatus};
pub use tick::{compute_velocity, evaluate_termination, tick, update_entity};
