//! Collision-aware move primitive the motor delegates to.

use glam::Vec3;

/// Result of sweeping an agent through the environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepResult {
    /// Position after collision resolution.
    pub position: Vec3,
    /// Whether the agent ended the sweep standing on ground.
    pub grounded: bool,
}

/// Resolves an intended displacement against the environment.
///
/// The motor computes displacement and feel; the host owns the actual
/// collision response and reports back where the agent ended up.
pub trait MotionHost {
    fn sweep(&self, from: Vec3, delta: Vec3) -> SweepResult;
}

/// Infinite flat ground at a fixed height. Used by tests and the headless
/// demo; a real level would back this with a physics engine sweep.
#[derive(Debug, Clone, Copy)]
pub struct FlatTerrain {
    pub ground_height: f32,
}

impl Default for FlatTerrain {
    fn default() -> Self {
        Self { ground_height: 0.0 }
    }
}

impl MotionHost for FlatTerrain {
    fn sweep(&self, from: Vec3, delta: Vec3) -> SweepResult {
        let mut position = from + delta;
        let grounded = position.y <= self.ground_height;
        if grounded {
            position.y = self.ground_height;
        }
        SweepResult { position, grounded }
    }
}
