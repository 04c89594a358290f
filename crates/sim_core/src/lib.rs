//! Core simulation types shared across all crates.
//!
//! This crate provides the foundational pieces used by the spatial services
//! and the action core:
//! - Transform for top-down agents (position + yaw rotation)
//! - Shared world components (specimens)
//! - Seedable session RNG for deterministic capture rolls
//! - Fixed-tick clock for the headless loop
//! - Construction-time config errors

pub mod components;
pub mod error;
pub mod rng;
pub mod tick;
pub mod transform;

pub use components::*;
pub use error::*;
pub use rng::*;
pub use tick::*;
pub use transform::*;

// Re-export commonly used types
pub use glam::{Quat, Vec2, Vec3};
pub use hecs::{Entity, World};
