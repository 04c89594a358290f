//! Per-tick player intent and the isometric input remap.

use glam::{Quat, Vec2, Vec3};

/// Inputs below this squared magnitude count as "no movement intent".
const INPUT_EPSILON_SQ: f32 = 1e-4;

/// The world plane is rotated 45 degrees relative to raw input, so "up" on
/// the stick runs along the screen diagonal.
const ISO_PLANE_YAW: f32 = std::f32::consts::FRAC_PI_4;

/// Normalized description of one tick of player input, produced by an
/// external binding layer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Intent {
    /// Raw movement axis in `[-1, 1]^2`; `(0, 1)` is "up".
    pub move_axis: Vec2,
    /// Interact was pressed this tick (edge, not held).
    pub interact_pressed: bool,
    /// Capture-device button was pressed this tick (edge, not held).
    pub device_pressed: bool,
}

impl Intent {
    /// No input at all.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Movement only.
    pub fn moving(move_axis: Vec2) -> Self {
        Self {
            move_axis,
            ..Default::default()
        }
    }

    /// Remap the flat input axis onto the 45-degree world plane.
    ///
    /// `(0, 1)` becomes the world diagonal `(√2/2, 0, √2/2)`. This rotation
    /// is what makes "up" feel like "up" under the isometric camera, so it
    /// must stay exact.
    pub fn isometric_direction(&self) -> Vec3 {
        if self.move_axis.length_squared() < INPUT_EPSILON_SQ {
            return Vec3::ZERO;
        }
        let flat = Vec3::new(self.move_axis.x, 0.0, self.move_axis.y);
        Quat::from_rotation_y(ISO_PLANE_YAW) * flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_maps_to_world_diagonal() {
        let intent = Intent::moving(Vec2::new(0.0, 1.0));
        let dir = intent.isometric_direction();
        let expected = std::f32::consts::FRAC_1_SQRT_2;
        assert!((dir.x - expected).abs() < 1e-5);
        assert!(dir.y.abs() < 1e-6);
        assert!((dir.z - expected).abs() < 1e-5);
    }

    #[test]
    fn remap_preserves_magnitude() {
        let intent = Intent::moving(Vec2::new(-0.3, 0.6));
        let dir = intent.isometric_direction();
        assert!((dir.length() - intent.move_axis.length()).abs() < 1e-5);
    }

    #[test]
    fn deadzone_yields_zero() {
        let intent = Intent::moving(Vec2::new(0.005, 0.005));
        assert_eq!(intent.isometric_direction(), Vec3::ZERO);
    }
}
