//! Input resolution
//!
//! Two sources feed the player each tick: discrete per-direction key state,
//! or a continuous analog vector from the touch joystick. Whichever is active
//! resolves to a raw direction, then one of two movement models turns that
//! into a velocity.

use glam::Vec2;

use crate::consts::INERTIA_DECAY;
use crate::settings::MovementModel;

/// Pressed/not-pressed state per logical direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl KeyState {
    /// Raw axis vector, components in {-1, 0, 1}. Y grows downward
    /// (canvas coordinates).
    pub fn axis(&self) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.left {
            v.x -= 1.0;
        }
        if self.right {
            v.x += 1.0;
        }
        if self.up {
            v.y -= 1.0;
        }
        if self.down {
            v.y += 1.0;
        }
        v
    }
}

/// Turn the raw directional vector into this tick's player velocity.
///
/// `Direct` normalizes the raw vector (a zero vector maps to zero velocity,
/// never NaN) and scales by max speed: instantaneous stop/start.
///
/// `Inertial` decays the previous velocity by a fixed factor and adds a
/// speed-scaled impulse; the impulse is sized so a held direction converges
/// on max speed per axis, which produces drift and momentum.
pub fn resolve_velocity(model: MovementModel, raw: Vec2, current: Vec2, speed: f32) -> Vec2 {
    match model {
        MovementModel::Direct => raw.normalize_or_zero() * speed,
        MovementModel::Inertial => {
            current * INERTIA_DECAY + raw.clamp_length_max(1.0) * speed * (1.0 - INERTIA_DECAY)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_vector_resolves_to_rest() {
        let v = resolve_velocity(MovementModel::Direct, Vec2::ZERO, Vec2::ZERO, 7.0);
        assert_eq!(v, Vec2::ZERO);
        assert!(!v.x.is_nan() && !v.y.is_nan());
    }

    #[test]
    fn test_direct_diagonal_is_normalized() {
        let raw = KeyState {
            right: true,
            down: true,
            ..Default::default()
        }
        .axis();
        let v = resolve_velocity(MovementModel::Direct, raw, Vec2::ZERO, 7.0);
        assert!((v.length() - 7.0).abs() < 0.001);
    }

    #[test]
    fn test_inertial_converges_on_max_speed() {
        let raw = Vec2::new(1.0, 0.0);
        let mut v = Vec2::ZERO;
        for _ in 0..200 {
            v = resolve_velocity(MovementModel::Inertial, raw, v, 7.0);
            assert!(v.x <= 7.0 + 0.001);
        }
        assert!((v.x - 7.0).abs() < 0.01);
    }

    #[test]
    fn test_inertial_decays_when_released() {
        let mut v = Vec2::new(7.0, 0.0);
        v = resolve_velocity(MovementModel::Inertial, Vec2::ZERO, v, 7.0);
        assert!((v.x - 7.0 * INERTIA_DECAY).abs() < 0.001);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let raw = KeyState {
            left: true,
            right: true,
            ..Default::default()
        }
        .axis();
        assert_eq!(raw, Vec2::ZERO);
    }
}
