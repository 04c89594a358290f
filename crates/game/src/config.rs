//! Simulation tuning. Loaded from sim.ron at startup.

use serde::{Deserialize, Serialize};
use sim_core::ConfigError;

use crate::capture::CaptureConfig;
use crate::interaction::ProbeConfig;
use crate::motor::MotorConfig;

/// Persistent tuning for a session. Loaded from `sim.ron` in the current
/// directory; missing fields take their defaults, a missing or invalid file
/// falls back to defaults entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seed for the session RNG; recorded so a session can be replayed.
    pub seed: u64,
    /// Initial capture storage capacity. Must be at least 1.
    pub storage_capacity: usize,
    /// The item specimens accept as food.
    pub food_item: String,
    pub motor: MotorConfig,
    pub capture: CaptureConfig,
    pub probe: ProbeConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            storage_capacity: 3,
            food_item: "Fern-Apple".to_string(),
            motor: MotorConfig::default(),
            capture: CaptureConfig::default(),
            probe: ProbeConfig::default(),
        }
    }
}

impl SimConfig {
    /// Load config from `sim.ron`. If the file is missing or invalid,
    /// returns default config.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Save current config to `sim.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        if let Ok(s) = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            if let Err(e) = std::fs::write(&path, s) {
                log::warn!("Could not write config to {:?}: {}", path, e);
            }
        }
    }

    /// Reject tuning the components would refuse at construction, so a bad
    /// file fails up front instead of mid-session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        self.motor.validate()?;
        self.capture.validate()?;
        self.probe.validate()?;
        Ok(())
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("sim.ron")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let cfg = SimConfig {
            storage_capacity: 0,
            ..Default::default()
        };
        assert_eq!(cfg.validate().unwrap_err(), ConfigError::ZeroCapacity);
    }

    #[test]
    fn bad_motor_tuning_is_rejected() {
        let mut cfg = SimConfig::default();
        cfg.motor.acceleration_time = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_ron_fills_missing_fields() {
        let cfg: SimConfig = ron::from_str("(seed: 7)").unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.storage_capacity, 3);
        assert_eq!(cfg.capture.eating_catch_rate, 0.90);
    }
}
