//! Interaction probe: forward-offset scanning and capability dispatch.

use glam::Vec3;
use hecs::{Entity, World};
use serde::{Deserialize, Serialize};
use sim_core::{require_positive, ConfigError, Specimen};
use spatial::{Category, SpatialQuery};

use crate::inventory::Inventory;
use crate::npc::Npc;

/// Probe placement tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Radius of the scan sphere.
    pub detection_radius: f32,
    /// How far in front of the agent the sphere sits.
    pub forward_offset: f32,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            detection_radius: 1.5,
            forward_offset: 1.0,
        }
    }
}

impl ProbeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("detection_radius", self.detection_radius)?;
        require_positive("forward_offset", self.forward_offset)?;
        Ok(())
    }
}

/// What came out of triggering an interaction, for presentation layers.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractEvent {
    /// A specimen accepted food and started feeding.
    Fed { species: String },
    /// A specimen wanted food the actor does not carry.
    Hungry { species: String },
    /// An NPC said something.
    Dialogue { speaker: String, line: String },
    /// An NPC handed over an item (already added to the inventory).
    ItemGiven { speaker: String, item: String },
}

/// State threaded through an interaction instead of any global: who is
/// acting, their inventory, and which item counts as specimen food.
pub struct InteractContext<'a> {
    pub actor: Entity,
    pub inventory: &'a mut Inventory,
    pub food_item: &'a str,
}

/// Re-scans a forward-offset sphere every tick and caches the current
/// target. The target is the first hit in the query's enumeration order,
/// not the nearest; at probe scale the difference is invisible and keeping
/// it makes target selection stable across backends.
#[derive(Debug)]
pub struct InteractionProbe {
    config: ProbeConfig,
    current: Option<Entity>,
}

impl InteractionProbe {
    pub fn new(config: ProbeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            current: None,
        })
    }

    /// Recompute the cached target for this tick.
    pub fn refresh(
        &mut self,
        query: &impl SpatialQuery,
        position: Vec3,
        forward: Vec3,
    ) -> Option<Entity> {
        let origin = position + forward * self.config.forward_offset;
        self.current = query
            .overlap_sphere(origin, self.config.detection_radius, Some(Category::Interactable))
            .into_iter()
            .next();
        self.current
    }

    pub fn can_interact(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_target(&self) -> Option<Entity> {
        self.current
    }

    /// Invoke the cached target's interact capability exactly once. No-op
    /// without a target.
    pub fn trigger(&self, world: &mut World, ctx: &mut InteractContext) -> Option<InteractEvent> {
        let target = self.current?;

        // Tagged dispatch over the interactable implementers; no reflection.
        if let Ok(mut specimen) = world.get::<&mut Specimen>(target) {
            return interact_specimen(&mut specimen, ctx);
        }
        if let Ok(mut npc) = world.get::<&mut Npc>(target) {
            return Some(npc.on_interact(ctx));
        }
        None
    }
}

/// Feeding branch: a feeding specimen ignores the poke; otherwise food is
/// consumed from the inventory if the actor carries any.
fn interact_specimen(specimen: &mut Specimen, ctx: &mut InteractContext) -> Option<InteractEvent> {
    if specimen.feeding {
        return None;
    }
    if ctx.inventory.has_item(ctx.food_item) {
        ctx.inventory.remove_item(ctx.food_item);
        specimen.set_feeding(true);
        log::info!("{} is happily eating", specimen.species);
        Some(InteractEvent::Fed {
            species: specimen.species.clone(),
        })
    } else {
        log::info!("{} looks hungry", specimen.species);
        Some(InteractEvent::Hungry {
            species: specimen.species.clone(),
        })
    }
}
