//! Runtime settings
//!
//! Read from an optional JSON file; anything missing falls back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH, DEFAULT_ENTITY_COUNT, SPAWN_RADIUS_MAX};
use crate::sim::Arena;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Round ===
    /// Autonomous circles spawned per round
    pub entity_count: usize,
    /// RNG seed; a random one is drawn when absent
    pub seed: Option<u64>,

    // === Driver ===
    /// Frame cap for headless runs
    pub max_frames: u64,
    /// Let the computer steer the player
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            entity_count: DEFAULT_ENTITY_COUNT,
            seed: None,
            max_frames: 100_000,
            autopilot: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {e}, using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Arena extents raised so the largest spawned circle always fits
    pub fn sanitized(mut self) -> Self {
        let min_extent = SPAWN_RADIUS_MAX * 2.0;
        for extent in [&mut self.arena_width, &mut self.arena_height] {
            if !extent.is_finite() || *extent < min_extent {
                log::warn!("Arena extent {} too small, using {}", extent, min_extent);
                *extent = min_extent;
            }
        }
        self
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Configured seed, or a fresh random one
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
