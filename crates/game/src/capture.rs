//! Capture device: an Open/Closed state machine with bounded storage and a
//! probabilistic capture roll.
//!
//! Feeding state is the intended lever: a feeding specimen is near-certain
//! to capture, a wary one almost never is. That asymmetry encodes the core
//! loop (feed, then capture) and must not be rebalanced casually.

use glam::Vec3;
use hecs::World;
use serde::{Deserialize, Serialize};
use sim_core::{require_positive, require_unit_range, ConfigError, Specimen, UnitRng};
use spatial::{Category, SpatialQuery, WorldIndex};

/// Capture tuning. Immutable once the device is built.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Scan radius around the device for candidates.
    pub range: f32,
    /// Success probability against a wary specimen.
    pub base_catch_rate: f32,
    /// Success probability against a feeding specimen.
    pub eating_catch_rate: f32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            range: 5.0,
            base_catch_rate: 0.05,
            eating_catch_rate: 0.90,
        }
    }
}

impl CaptureConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("range", self.range)?;
        require_unit_range("base_catch_rate", self.base_catch_rate)?;
        require_unit_range("eating_catch_rate", self.eating_catch_rate)?;
        Ok(())
    }
}

/// Result of one capture attempt. All of these are ordinary outcomes, not
/// errors; a failed attempt is terminal for the tick.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureOutcome {
    /// No eligible candidate within range.
    NoTarget,
    /// Storage is at capacity; no roll was consumed.
    StorageFull,
    /// The roll failed against the first candidate.
    Missed { species: String },
    /// The candidate was removed from the world and stored.
    Captured { species: String },
}

/// The capture device. One button drives it: toggle opens from Closed, and
/// while Open the orchestrator routes the same button to [`attempt`], which
/// always auto-holsters. There is deliberately no close-without-attempting
/// path.
///
/// [`attempt`]: CaptureDevice::attempt
#[derive(Debug, Clone)]
pub struct CaptureDevice {
    config: CaptureConfig,
    open: bool,
    /// Species identifiers in capture order. Only ever appended here;
    /// release/consumption is a collaborator's concern.
    stored: Vec<String>,
    capacity: usize,
}

impl CaptureDevice {
    pub fn new(config: CaptureConfig, capacity: usize) -> Result<Self, ConfigError> {
        config.validate()?;
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(Self {
            config,
            open: false,
            stored: Vec::new(),
            capacity,
        })
    }

    /// Flip the aiming state. Meaningful from Closed; while Open the caller
    /// is expected to route the button to [`CaptureDevice::attempt`] instead.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            log::info!(
                "capture device online [stored {}/{}]",
                self.stored.len(),
                self.capacity
            );
        } else {
            log::info!("capture device on standby");
        }
    }

    /// Run one capture attempt against the first candidate in range.
    ///
    /// At most one candidate is considered; the first success or failure
    /// ends the scan. A full storage rejects the attempt before any random
    /// draw. Whatever happens, the device ends Closed.
    pub fn attempt(
        &mut self,
        world: &mut World,
        origin: Vec3,
        rng: &mut dyn UnitRng,
    ) -> CaptureOutcome {
        if !self.open {
            // Attempting is only meaningful while aiming.
            return CaptureOutcome::NoTarget;
        }

        let candidate = WorldIndex::new(world)
            .overlap_sphere(origin, self.config.range, Some(Category::Specimen))
            .into_iter()
            .next();

        let outcome = match candidate {
            None => CaptureOutcome::NoTarget,
            Some(entity) => {
                let Ok((species, feeding)) = world
                    .get::<&Specimen>(entity)
                    .map(|s| (s.species.clone(), s.feeding))
                else {
                    // The query only returns specimen entities; a missing
                    // component means the world changed under us.
                    return self.holster(CaptureOutcome::NoTarget);
                };

                let chance = if feeding {
                    self.config.eating_catch_rate
                } else {
                    self.config.base_catch_rate
                };
                log::debug!("capture target {species}, chance {:.0}%", chance * 100.0);

                if self.stored.len() >= self.capacity {
                    log::info!("capture storage full, upgrade required");
                    CaptureOutcome::StorageFull
                } else if rng.next_unit() < chance {
                    // Capture is a move: the entity leaves the world and its
                    // species id enters storage.
                    world.despawn(entity).ok();
                    self.stored.push(species.clone());
                    log::info!("captured {species}");
                    CaptureOutcome::Captured { species }
                } else {
                    log::info!("capture failed on {species}");
                    CaptureOutcome::Missed { species }
                }
            }
        };

        self.holster(outcome)
    }

    /// Auto-holster: every attempt ends with the device Closed.
    fn holster(&mut self, outcome: CaptureOutcome) -> CaptureOutcome {
        self.open = false;
        outcome
    }

    /// Grow storage by `extra` slots. Never shrinks and never touches the
    /// stored entries. `extra` is expected to be positive; zero is a no-op.
    pub fn upgrade_storage(&mut self, extra: usize) {
        self.capacity += extra;
        log::info!("capture storage upgraded to {}", self.capacity);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn stored(&self) -> &[String] {
        &self.stored
    }

    pub fn stored_count(&self) -> usize {
        self.stored.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }
}
