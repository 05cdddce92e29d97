//! Collision predicates
//!
//! Entities are axis-aligned squares drawn around a center point, but overlap
//! is tested on bounding circles: Euclidean distance between centers against
//! the sum of the half-sizes.

use glam::Vec2;

use crate::consts::OFF_ARENA_X;

/// Player-vs-entity overlap test
#[inline]
pub fn overlaps(a_pos: Vec2, a_size: f32, b_pos: Vec2, b_size: f32) -> bool {
    a_pos.distance(b_pos) < (a_size + b_size) / 2.0
}

/// True once an entity has drifted far enough past the left edge to be
/// removed without side effects
#[inline]
pub fn off_arena(pos: Vec2) -> bool {
    pos.x < OFF_ARENA_X
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_at_touch_distance() {
        // Half-sizes sum to 20; centers 19.9 apart overlap, 20.0 does not
        let a = Vec2::new(0.0, 0.0);
        assert!(overlaps(a, 22.0, Vec2::new(19.9, 0.0), 18.0));
        assert!(!overlaps(a, 22.0, Vec2::new(20.0, 0.0), 18.0));
    }

    #[test]
    fn test_overlap_is_euclidean() {
        // Diagonal separation: components individually inside the threshold,
        // but the Euclidean distance is not
        let a = Vec2::ZERO;
        let b = Vec2::new(15.0, 15.0); // distance ~21.2
        assert!(!overlaps(a, 22.0, b, 18.0));
    }

    #[test]
    fn test_off_arena_margin() {
        assert!(!off_arena(Vec2::new(-79.9, 100.0)));
        assert!(off_arena(Vec2::new(-80.1, 100.0)));
    }
}
