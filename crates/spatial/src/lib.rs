//! Spatial services consumed by the action core.
//!
//! Two seams live here:
//! - [`SpatialQuery`]: sphere overlap queries against the world, used by the
//!   interaction probe and the capture device.
//! - [`MotionHost`]: the collision-aware move primitive the motor delegates
//!   its displacement to.
//!
//! Both come with naive implementations good enough for headless play and
//! tests; a broad-phase or physics-engine backend can replace them without
//! touching the core.

pub mod motion;
pub mod query;

pub use motion::*;
pub use query::*;
