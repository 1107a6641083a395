//! Round state and core simulation types
//!
//! A round owns its entities and its RNG outright. Restarting throws the whole
//! collection away and spawns a fresh one.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use crate::consts::*;

/// Who decides an entity's velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Steered by the input snapshot
    Player,
    /// Wanders on its own
    Autonomous,
}

/// Display color, opaque to the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Player color (#00ccff)
    pub const PLAYER: Color = Color::rgb(0x00, 0xcc, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert from HSL (hue in degrees, saturation and lightness in 0-1)
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = lightness - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let to_byte = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgb(to_byte(r), to_byte(g), to_byte(b))
    }

    /// Random hue at the fixed saturation/lightness used for autonomous circles
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_hsl(rng.random_range(0.0..360.0), 0.7, 0.5)
    }

    /// CSS-style hex string (`#rrggbb`)
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A circular actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Grows on every absorption
    pub radius: f32,
    pub color: Color,
    pub role: Role,
    /// Once false, never true again within the round
    pub alive: bool,
}

impl Entity {
    pub fn new(id: u32, pos: Vec2, radius: f32, color: Color, role: Role) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            radius,
            color,
            role,
            alive: true,
        }
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        self.role == Role::Player
    }
}

/// Whether the round is still being ticked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    InProgress,
    Ended,
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The player is the last one standing
    PlayerWin,
    /// An autonomous circle is the last one standing
    PlayerEliminated,
    /// Nobody is left
    NoWinner,
}

impl Outcome {
    /// Human-readable end-of-round message
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::PlayerWin => "You win! Press R to play again",
            Outcome::PlayerEliminated => "You were eliminated. Press R to try again",
            Outcome::NoWinner => "No winner. Press R to restart.",
        }
    }
}

/// One play-through, from spawn to outcome
#[derive(Debug, Clone)]
pub struct Round {
    /// Seed the RNG was created from; later rounds continue the same stream
    pub seed: u64,
    /// Rounds spawned with this RNG so far, 1 for the first
    pub round_index: u32,
    pub arena: Arena,
    /// Insertion order drives pair iteration during collision resolution
    pub entities: Vec<Entity>,
    pub status: RoundStatus,
    /// Set only once the round has ended
    pub outcome: Option<Outcome>,
    /// Alive count as of the last tick (for the HUD)
    pub alive_count: usize,
    /// Ticks advanced since the last spawn
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl Round {
    /// Create a round and spawn `count` autonomous circles plus the player
    pub fn new(arena: Arena, seed: u64, count: usize) -> Self {
        let mut round = Self::empty(arena, seed);
        round.spawn(count);
        round
    }

    /// Create a round from hand-placed entities
    ///
    /// The caller is responsible for including exactly one player.
    pub fn from_entities(arena: Arena, seed: u64, entities: Vec<Entity>) -> Self {
        let mut round = Self::empty(arena, seed);
        round.next_id = entities.iter().map(|e| e.id.saturating_add(1)).max().unwrap_or(1);
        round.entities = entities;
        round.alive_count = round.count_alive();
        round
    }

    fn empty(arena: Arena, seed: u64) -> Self {
        Self {
            seed,
            arena,
            entities: Vec::new(),
            status: RoundStatus::InProgress,
            outcome: None,
            alive_count: 0,
            time_ticks: 0,
            round_index: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Throw away the current entities and spawn a fresh set
    ///
    /// The RNG keeps running, so consecutive rounds differ.
    pub fn spawn(&mut self, count: usize) {
        self.entities.clear();
        self.entities.reserve(count + 1);
        self.next_id = 1;
        self.round_index += 1;

        let id = self.next_entity_id();
        let vel = self.random_initial_velocity();
        let player = Entity::new(
            id,
            self.arena.center(),
            PLAYER_RADIUS,
            Color::PLAYER,
            Role::Player,
        )
        .with_velocity(vel);
        self.entities.push(player);

        for _ in 0..count {
            let id = self.next_entity_id();
            let radius = self.rng.random_range(SPAWN_RADIUS_MIN..=SPAWN_RADIUS_MAX);
            let pos = self.arena.random_interior(radius, &mut self.rng);
            let color = Color::random(&mut self.rng);
            let vel = self.random_initial_velocity();
            let entity = Entity::new(id, pos, radius, color, Role::Autonomous).with_velocity(vel);
            self.entities.push(entity);
        }

        self.status = RoundStatus::InProgress;
        self.outcome = None;
        self.time_ticks = 0;
        self.alive_count = self.count_alive();

        log::info!(
            "Round {} spawned: session seed={} autonomous={} arena={}x{}",
            self.round_index,
            self.seed,
            count,
            self.arena.width,
            self.arena.height
        );
    }

    /// Forced reset, allowed at any point in the round
    pub fn restart(&mut self, count: usize) {
        self.spawn(count);
    }

    fn random_initial_velocity(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.random_range(-INITIAL_SPEED..=INITIAL_SPEED),
            self.rng.random_range(-INITIAL_SPEED..=INITIAL_SPEED),
        )
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.status == RoundStatus::InProgress
    }

    pub fn count_alive(&self) -> usize {
        self.entities.iter().filter(|e| e.alive).count()
    }

    /// Alive entities in insertion order
    pub fn alive(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.alive)
    }

    /// The player, whether alive or not
    pub fn player(&self) -> Option<&Entity> {
        self.entities.iter().find(|e| e.is_player())
    }

    /// End-of-round message, if the round is over
    pub fn message(&self) -> Option<&'static str> {
        self.outcome.map(|o| o.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_layout() {
        let arena = Arena::default();
        let round = Round::new(arena, 42, 10);

        assert_eq!(round.entities.len(), 11);
        assert_eq!(round.alive_count, 11);
        assert_eq!(round.status, RoundStatus::InProgress);
        assert!(round.outcome.is_none());

        let player = &round.entities[0];
        assert_eq!(player.role, Role::Player);
        assert_eq!(player.pos, arena.center());
        assert_eq!(player.radius, PLAYER_RADIUS);
        assert_eq!(player.color, Color::PLAYER);

        for e in &round.entities[1..] {
            assert_eq!(e.role, Role::Autonomous);
            assert!(e.radius >= SPAWN_RADIUS_MIN && e.radius <= SPAWN_RADIUS_MAX);
            assert!(arena.contains(e.pos, e.radius));
            assert!(e.vel.x.abs() <= INITIAL_SPEED && e.vel.y.abs() <= INITIAL_SPEED);
        }
        assert_eq!(round.entities.iter().filter(|e| e.is_player()).count(), 1);
    }

    #[test]
    fn test_spawn_is_seeded() {
        let a = Round::new(Arena::default(), 99, 6);
        let b = Round::new(Arena::default(), 99, 6);
        for (x, y) in a.entities.iter().zip(&b.entities) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.radius, y.radius);
            assert_eq!(x.vel, y.vel);
        }
    }

    #[test]
    fn test_restart_replaces_entities() {
        let mut round = Round::new(Arena::default(), 5, 4);
        round.entities[2].alive = false;
        round.status = RoundStatus::Ended;
        round.outcome = Some(Outcome::NoWinner);
        round.time_ticks = 50;

        round.restart(7);

        assert_eq!(round.entities.len(), 8);
        assert!(round.entities.iter().all(|e| e.alive));
        assert!(round.is_running());
        assert!(round.message().is_none());
        assert_eq!(round.time_ticks, 0);
        assert_eq!(round.entities[0].id, 1);
        assert_eq!(round.round_index, 2);
    }

    #[test]
    fn test_from_entities_ids_continue() {
        let entities = vec![
            Entity::new(1, Vec2::new(50.0, 50.0), 10.0, Color::PLAYER, Role::Player),
            Entity::new(4, Vec2::new(90.0, 50.0), 6.0, Color::rgb(1, 2, 3), Role::Autonomous),
        ];
        let mut round = Round::from_entities(Arena::new(200.0, 200.0), 0, entities);
        assert_eq!(round.alive_count, 2);
        assert_eq!(round.next_entity_id(), 5);
    }

    #[test]
    fn test_from_entities_max_id_does_not_overflow() {
        let entities = vec![Entity::new(
            u32::MAX,
            Vec2::new(50.0, 50.0),
            10.0,
            Color::PLAYER,
            Role::Player,
        )];
        let round = Round::from_entities(Arena::new(200.0, 200.0), 0, entities);
        assert_eq!(round.next_id, u32::MAX);
        assert_eq!(round.alive_count, 1);
    }

    #[test]
    fn test_round_index_counts_spawns() {
        let mut round = Round::new(Arena::default(), 3, 2);
        assert_eq!(round.round_index, 1);
        round.restart(2);
        round.restart(0);
        assert_eq!(round.round_index, 3);
    }

    #[test]
    fn test_color_from_hsl() {
        assert_eq!(Color::from_hsl(0.0, 1.0, 0.5), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_hsl(120.0, 1.0, 0.5), Color::rgb(0, 255, 0));
        assert_eq!(Color::from_hsl(240.0, 1.0, 0.5), Color::rgb(0, 0, 255));
        assert_eq!(Color::from_hsl(0.0, 0.0, 1.0), Color::rgb(255, 255, 255));
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::PLAYER.to_hex(), "#00ccff");
    }

    #[test]
    fn test_outcome_messages_distinct() {
        let msgs = [
            Outcome::PlayerWin.message(),
            Outcome::PlayerEliminated.message(),
            Outcome::NoWinner.message(),
        ];
        assert_ne!(msgs[0], msgs[1]);
        assert_ne!(msgs[1], msgs[2]);
        assert!(msgs[0].contains("win"));
    }
}
