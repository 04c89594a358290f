//! Kinematic motor: inertial planar movement, heavy rotation, procedural
//! lean, and ground adherence.
//!
//! The motor owns the agent's velocity state and computes an intended
//! displacement each tick; actual collision response belongs to the
//! [`MotionHost`] it delegates the sweep to.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use sim_core::{heading_from, require_non_negative, require_positive, ConfigError, Transform};
use spatial::MotionHost;

/// Inputs below this squared magnitude count as "no movement intent".
const INPUT_EPSILON_SQ: f32 = 1e-4;

/// Movement feel tuning. Immutable once the motor is built.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct MotorConfig {
    /// Seconds to reach max speed from standstill.
    pub acceleration_time: f32,
    /// Seconds to come to a full stop.
    pub friction_time: f32,
    /// Max planar movement speed.
    pub max_speed: f32,
    /// Rotation speed in degrees per second. Deliberately sluggish.
    pub rotation_speed: f32,
    /// Forward lean at full speed, in degrees. Cosmetic only.
    pub lean_amount: f32,
    /// Smoothing time for the lean, in seconds.
    pub lean_smooth_time: f32,
    /// Downward acceleration while airborne.
    pub gravity: f32,
    /// Constant downward speed while grounded; keeps the agent glued over
    /// step and slope seams instead of bouncing.
    pub ground_stick_force: f32,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            acceleration_time: 0.3,
            friction_time: 0.15,
            max_speed: 6.0,
            rotation_speed: 360.0,
            lean_amount: 2.5,
            lean_smooth_time: 0.1,
            gravity: 20.0,
            ground_stick_force: 10.0,
        }
    }
}

impl MotorConfig {
    /// Reject tuning that would divide by zero at runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("acceleration_time", self.acceleration_time)?;
        require_positive("friction_time", self.friction_time)?;
        require_positive("lean_smooth_time", self.lean_smooth_time)?;
        require_positive("rotation_speed", self.rotation_speed)?;
        require_non_negative("max_speed", self.max_speed)?;
        require_non_negative("gravity", self.gravity)?;
        require_non_negative("ground_stick_force", self.ground_stick_force)?;
        Ok(())
    }
}

/// Per-agent kinematic state. Mutated exactly once per tick via [`advance`].
///
/// [`advance`]: Motor::advance
#[derive(Debug, Clone)]
pub struct Motor {
    config: MotorConfig,
    planar_velocity: Vec3,
    vertical_velocity: f32,
    /// Current cosmetic lean pitch in degrees.
    lean_pitch: f32,
    grounded: bool,
    /// Set by [`Motor::teleport`]; skips the host sweep for one tick.
    bypass_sweep: bool,
}

impl Motor {
    pub fn new(config: MotorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            planar_velocity: Vec3::ZERO,
            vertical_velocity: 0.0,
            lean_pitch: 0.0,
            grounded: false,
            bypass_sweep: false,
        })
    }

    /// Advance one tick: smooth planar velocity toward the intent, turn
    /// toward it, update lean and vertical motion, then apply the net
    /// displacement through the host.
    pub fn advance(
        &mut self,
        transform: &mut Transform,
        direction: Vec3,
        speed_multiplier: f32,
        dt: f32,
        host: &impl MotionHost,
    ) {
        let cfg = &self.config;
        let has_input = direction.length_squared() > INPUT_EPSILON_SQ;

        // Planar velocity: linear move-toward, accelerating on input and
        // braking on friction. Never overshoots the target within a step.
        let target = if has_input {
            let dir = direction.normalize();
            Vec3::new(dir.x, 0.0, dir.z) * (cfg.max_speed * speed_multiplier)
        } else {
            Vec3::ZERO
        };
        let smooth_time = if has_input {
            cfg.acceleration_time
        } else {
            cfg.friction_time
        };
        let max_step = (cfg.max_speed / smooth_time) * dt;
        self.planar_velocity = move_towards(self.planar_velocity, target, max_step);

        // Rotation: slerp toward the heading at a fixed angular rate. Zero
        // input leaves the facing alone so releasing the stick never spins
        // the agent back.
        if has_input {
            let target_rotation = heading_from(direction);
            let angle = transform.rotation.angle_between(target_rotation);
            if angle > 1e-5 {
                let max_angle = cfg.rotation_speed.to_radians() * dt;
                let t = (max_angle / angle).min(1.0);
                transform.rotation = transform.rotation.slerp(target_rotation, t).normalize();
            }
        }

        // Procedural lean: pitch a cosmetic child frame with speed. Does not
        // touch the authoritative transform.
        let speed_ratio = if cfg.max_speed > 0.0 {
            self.current_speed() / cfg.max_speed
        } else {
            0.0
        };
        let target_lean = speed_ratio * cfg.lean_amount;
        let blend = (dt / cfg.lean_smooth_time).min(1.0);
        self.lean_pitch += (target_lean - self.lean_pitch) * blend;

        // Vertical motion: stick to the ground when grounded, otherwise
        // integrate gravity with no terminal-velocity clamp.
        if self.grounded {
            self.vertical_velocity = -cfg.ground_stick_force;
        } else {
            self.vertical_velocity -= cfg.gravity * dt;
        }

        let displacement = (self.planar_velocity + Vec3::Y * self.vertical_velocity) * dt;
        if self.bypass_sweep {
            // One tick of collision bypass after a teleport.
            transform.translate(displacement);
            self.bypass_sweep = false;
        } else {
            let result = host.sweep(transform.position, displacement);
            transform.position = result.position;
            self.grounded = result.grounded;
        }
    }

    /// Atomically reposition the agent. Velocity carries over; the next
    /// tick's displacement is applied without collision resolution.
    pub fn teleport(&mut self, transform: &mut Transform, position: Vec3) {
        transform.position = position;
        self.bypass_sweep = true;
    }

    /// Current planar speed.
    pub fn current_speed(&self) -> f32 {
        Vec3::new(self.planar_velocity.x, 0.0, self.planar_velocity.z).length()
    }

    pub fn planar_velocity(&self) -> Vec3 {
        self.planar_velocity
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Cosmetic lean as a local pitch rotation for a child visual frame.
    pub fn lean_rotation(&self) -> Quat {
        Quat::from_rotation_x(self.lean_pitch.to_radians())
    }

    pub fn lean_pitch(&self) -> f32 {
        self.lean_pitch
    }

    pub fn config(&self) -> &MotorConfig {
        &self.config
    }
}

/// Step `current` toward `target` by at most `max_step`, landing exactly on
/// the target instead of overshooting.
fn move_towards(current: Vec3, target: Vec3, max_step: f32) -> Vec3 {
    let to_target = target - current;
    let distance = to_target.length();
    if distance <= max_step || distance < 1e-6 {
        target
    } else {
        current + to_target / distance * max_step
    }
}
