//! Shared world components used across the simulation crates.

/// A capturable creature living in the world.
///
/// The species identifier is what a successful capture moves into device
/// storage; the entity itself is despawned at that point.
#[derive(Debug, Clone)]
pub struct Specimen {
    pub species: String,
    /// Feeding specimens are docile and far easier to capture.
    pub feeding: bool,
}

impl Specimen {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            feeding: false,
        }
    }

    pub fn set_feeding(&mut self, feeding: bool) {
        self.feeding = feeding;
    }
}

/// Tag component: the entity responds to the interaction probe.
#[derive(Debug, Clone, Copy, Default)]
pub struct Interactable;

/// Tag component for the player entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Player;
