//! Arena geometry for the rectangular play field
//!
//! Coordinates are arena-local with the origin at the top-left corner:
//! - x grows to the right, in [0, width]
//! - y grows downward, in [0, height]

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// The fixed bounded rectangle every entity lives in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ARENA_WIDTH, ARENA_HEIGHT)
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent along each axis as a vector
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Whether a circle of `radius` at `pos` lies fully inside the arena
    pub fn contains(&self, pos: Vec2, radius: f32) -> bool {
        pos.x >= radius
            && pos.x <= self.width - radius
            && pos.y >= radius
            && pos.y <= self.height - radius
    }

    /// Pick a uniformly random center keeping the whole circle in bounds
    ///
    /// An axis too short to hold the circle pins the center to the middle of that axis.
    pub fn random_interior<R: Rng + ?Sized>(&self, radius: f32, rng: &mut R) -> Vec2 {
        Vec2::new(
            random_axis(self.width, radius, rng),
            random_axis(self.height, radius, rng),
        )
    }

    /// Hard reflection off the walls
    ///
    /// A circle poking past a wall is clamped back to touch it, and the velocity
    /// component along that axis is forced to point inward. The other axis is untouched.
    pub fn reflect(&self, pos: &mut Vec2, vel: &mut Vec2, radius: f32) {
        reflect_axis(&mut pos.x, &mut vel.x, radius, self.width);
        reflect_axis(&mut pos.y, &mut vel.y, radius, self.height);
    }

    /// Clamp a circle back inside the arena without touching its velocity
    pub fn confine(&self, pos: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            confine_axis(pos.x, radius, self.width),
            confine_axis(pos.y, radius, self.height),
        )
    }
}

fn random_axis<R: Rng + ?Sized>(extent: f32, radius: f32, rng: &mut R) -> f32 {
    let (lo, hi) = (radius, extent - radius);
    if lo < hi {
        rng.random_range(lo..=hi)
    } else {
        extent * 0.5
    }
}

fn reflect_axis(pos: &mut f32, vel: &mut f32, radius: f32, extent: f32) {
    if *pos < radius {
        *pos = radius;
        *vel = vel.abs();
    }
    if *pos > extent - radius {
        *pos = extent - radius;
        *vel = -vel.abs();
    }
}

fn confine_axis(pos: f32, radius: f32, extent: f32) -> f32 {
    if 2.0 * radius >= extent {
        // Circle is wider than the arena on this axis
        extent * 0.5
    } else {
        pos.clamp(radius, extent - radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_reflect_left_wall() {
        let arena = Arena::new(100.0, 100.0);
        let mut pos = Vec2::new(3.0, 50.0);
        let mut vel = Vec2::new(-2.0, 0.5);

        arena.reflect(&mut pos, &mut vel, 5.0);

        assert_eq!(pos, Vec2::new(5.0, 50.0));
        assert_eq!(vel, Vec2::new(2.0, 0.5));
    }

    #[test]
    fn test_reflect_bottom_right_corner() {
        let arena = Arena::new(100.0, 80.0);
        let mut pos = Vec2::new(99.0, 79.0);
        let mut vel = Vec2::new(1.0, 1.5);

        arena.reflect(&mut pos, &mut vel, 4.0);

        assert_eq!(pos, Vec2::new(96.0, 76.0));
        assert_eq!(vel, Vec2::new(-1.0, -1.5));
    }

    #[test]
    fn test_reflect_forces_sign_even_when_already_inward() {
        // Clamping keeps the inward direction, it never flips it outward
        let arena = Arena::new(100.0, 100.0);
        let mut pos = Vec2::new(2.0, 50.0);
        let mut vel = Vec2::new(0.7, 0.0);

        arena.reflect(&mut pos, &mut vel, 5.0);

        assert_eq!(vel.x, 0.7);
    }

    #[test]
    fn test_reflect_inside_is_noop() {
        let arena = Arena::new(100.0, 100.0);
        let mut pos = Vec2::new(50.0, 50.0);
        let mut vel = Vec2::new(-1.0, 1.0);

        arena.reflect(&mut pos, &mut vel, 10.0);

        assert_eq!(pos, Vec2::new(50.0, 50.0));
        assert_eq!(vel, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn test_random_interior_in_bounds() {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let radius = rng.random_range(1.0..=40.0);
            let pos = arena.random_interior(radius, &mut rng);
            assert!(arena.contains(pos, radius));
        }
    }

    #[test]
    fn test_random_interior_oversized_axis_uses_center() {
        let arena = Arena::new(20.0, 200.0);
        let mut rng = Pcg32::seed_from_u64(1);
        let pos = arena.random_interior(15.0, &mut rng);
        assert_eq!(pos.x, 10.0);
        assert!(pos.y >= 15.0 && pos.y <= 185.0);
    }

    #[test]
    fn test_confine() {
        let arena = Arena::new(100.0, 100.0);
        assert_eq!(arena.confine(Vec2::new(-5.0, 120.0), 10.0), Vec2::new(10.0, 90.0));
        assert_eq!(arena.confine(Vec2::new(40.0, 60.0), 10.0), Vec2::new(40.0, 60.0));
        assert_eq!(arena.confine(Vec2::new(3.0, 3.0), 60.0), Vec2::new(50.0, 50.0));
    }
}
