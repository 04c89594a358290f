//! World spawn helpers for the entities the demo and tests use.

use glam::Vec3;
use hecs::{Entity, World};
use sim_core::{Interactable, Specimen, Transform};

use crate::npc::Npc;

/// Spawn a capturable, interactable specimen at a position.
pub fn spawn_specimen(world: &mut World, species: &str, position: Vec3) -> Entity {
    world.spawn((
        Transform::from_position(position),
        Specimen::new(species),
        Interactable,
    ))
}

/// Spawn a tutorial NPC, optionally with an observation point it will walk
/// to during its script.
pub fn spawn_npc(
    world: &mut World,
    name: &str,
    position: Vec3,
    observation_point: Option<Vec3>,
) -> Entity {
    let mut npc = Npc::new(name);
    if let Some(point) = observation_point {
        npc = npc.with_observation_point(point);
    }
    world.spawn((Transform::from_position(position), npc, Interactable))
}
