//! Transform component for top-down agents.

use glam::{Quat, Vec3};

/// Position and facing of a simulation agent.
///
/// Rotation is a quaternion but gameplay only ever drives yaw (rotation
/// about the vertical axis); pitch and roll stay on cosmetic child frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a new transform with position and rotation.
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Get the forward direction (positive Z at identity, y-up world).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Get the right direction (positive X at identity).
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Translate the transform by a delta.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Current yaw angle in radians.
    pub fn yaw(&self) -> f32 {
        let f = self.forward();
        f.x.atan2(f.z)
    }

    /// Face a planar direction immediately. No-op for near-zero directions.
    pub fn set_heading(&mut self, direction: Vec3) {
        if direction.length_squared() > 1e-8 {
            self.rotation = Quat::from_rotation_y(direction.x.atan2(direction.z));
        }
    }
}

/// Yaw rotation that faces a planar direction. Identity for near-zero input.
pub fn heading_from(direction: Vec3) -> Quat {
    if direction.length_squared() > 1e-8 {
        Quat::from_rotation_y(direction.x.atan2(direction.z))
    } else {
        Quat::IDENTITY
    }
}
