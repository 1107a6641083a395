//! Circle Royale - last circle standing
//!
//! Core modules:
//! - `sim`: Seeded simulation (movement, absorption, round control)
//! - `renderer`: Read-only frame snapshots for whatever draws the arena
//! - `platform`: Keyboard translation into movement intent
//! - `session`: Frame driver tying input, simulation and rendering together
//! - `settings`: Runtime configuration

pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Nominal frame rate of the driving loop (one tick per frame)
    pub const FRAME_RATE: u32 = 60;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Autonomous entities spawned per round
    pub const DEFAULT_ENTITY_COUNT: usize = 10;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 12.0;
    /// Units per tick while a direction is held
    pub const PLAYER_SPEED: f32 = 2.5;
    /// Velocity multiplier per tick when no direction is held
    pub const PLAYER_DAMPING: f32 = 0.9;

    /// Autonomous defaults
    pub const SPAWN_RADIUS_MIN: f32 = 8.0;
    pub const SPAWN_RADIUS_MAX: f32 = 18.0;
    /// Per-tick chance that an autonomous entity picks a new heading
    pub const WANDER_CHANCE: f64 = 0.02;
    /// Max speed per axis of a wander heading
    pub const WANDER_SPEED: f32 = 1.2;
    /// Max speed per axis of the initial velocity (all roles)
    pub const INITIAL_SPEED: f32 = 1.0;

    /// Collisions
    /// A circle absorbs another only if the other is below this fraction of its radius
    pub const DOMINANCE_RATIO: f32 = 0.95;
    /// Fraction of the prey's radius added to the absorber
    pub const GROWTH_FACTOR: f32 = 0.2;
    /// Velocity kick applied to each side of a near-equal collision
    pub const REPEL_IMPULSE: f32 = 1.0;
}
