//! Construction-time configuration errors.
//!
//! Gameplay outcomes ("no target", "storage full", "capture failed") are
//! ordinary result values, never errors. Errors exist only for invalid
//! tuning that would otherwise divide by zero or wedge the state machine.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} must be non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("{name} must be within [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f32 },

    #[error("storage capacity must be at least 1")]
    ZeroCapacity,
}

/// Reject non-positive values for time constants and ranges.
pub fn require_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

/// Reject negative values for speeds and forces.
pub fn require_non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

/// Reject probabilities outside the unit interval.
pub fn require_unit_range(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { name, value })
    }
}
