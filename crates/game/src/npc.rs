//! Tutorial NPC: staged dialogue and a slow walk to an observation point.

use glam::Vec3;
use hecs::World;
use sim_core::{heading_from, Transform};

use crate::interaction::{InteractContext, InteractEvent};

/// Turn-blend rate while an NPC walks, matching the deliberately soft feel
/// of the player's own rotation.
const TURN_BLEND_RATE: f32 = 5.0;

/// A scripted field guide. Each interaction advances the stage: greeting,
/// walking off for a closer look, handing over food, then a standing hint.
#[derive(Debug, Clone)]
pub struct Npc {
    pub name: String,
    pub move_speed: f32,
    /// Stop this far short of the observation point so the NPC never
    /// crowds the specimen.
    pub stopping_distance: f32,
    observation_point: Option<Vec3>,
    stage: u8,
    moving: bool,
}

impl Npc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            move_speed: 3.0,
            stopping_distance: 3.5,
            observation_point: None,
            stage: 0,
            moving: false,
        }
    }

    pub fn with_observation_point(mut self, point: Vec3) -> Self {
        self.observation_point = Some(point);
        self
    }

    pub fn stage(&self) -> u8 {
        self.stage
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Advance the tutorial script by one interaction.
    pub fn on_interact(&mut self, ctx: &mut InteractContext) -> InteractEvent {
        match self.stage {
            0 => {
                self.stage += 1;
                self.say("Welcome to the field station, researcher. Stick to move, this button to talk.")
            }
            1 => {
                self.stage += 1;
                self.moving = self.observation_point.is_some();
                self.say("See that herbivore grazing over there? I'll move in for a closer look.")
            }
            2 => {
                self.stage += 1;
                ctx.inventory.add_item(ctx.food_item);
                log::info!("{} hands over one {}", self.name, ctx.food_item);
                InteractEvent::ItemGiven {
                    speaker: self.name.clone(),
                    item: ctx.food_item.to_string(),
                }
            }
            _ => self.say("Feed it, wait for it to settle, then use the capture device."),
        }
    }

    fn say(&self, line: &str) -> InteractEvent {
        log::info!("{}: {line}", self.name);
        InteractEvent::Dialogue {
            speaker: self.name.clone(),
            line: line.to_string(),
        }
    }
}

/// Walk every moving NPC toward its observation point. Run once per tick.
pub fn update_npcs(world: &mut World, dt: f32) {
    for (_, (transform, npc)) in world.query_mut::<(&mut Transform, &mut Npc)>() {
        if !npc.moving {
            continue;
        }
        let Some(target) = npc.observation_point else {
            npc.moving = false;
            continue;
        };

        let to_target = target - transform.position;
        let distance = to_target.length();
        if distance <= npc.stopping_distance {
            npc.moving = false;
            log::info!("{} arrived at a safe observation distance", npc.name);
            continue;
        }

        let step = (npc.move_speed * dt).min(distance);
        let direction = to_target / distance;
        transform.position += direction * step;

        let blend = (TURN_BLEND_RATE * dt).min(1.0);
        transform.rotation = transform
            .rotation
            .slerp(heading_from(direction), blend)
            .normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Inventory;
    use crate::spawn::spawn_npc;

    fn ctx_parts() -> (World, hecs::Entity, Inventory) {
        let mut world = World::new();
        let actor = world.spawn(());
        (world, actor, Inventory::new())
    }

    #[test]
    fn script_hands_over_food_on_third_interaction() {
        let (_, actor, mut inventory) = ctx_parts();
        let mut npc = Npc::new("Dad");
        for expected_stage in 1..=2u8 {
            let mut ctx = InteractContext {
                actor,
                inventory: &mut inventory,
                food_item: "Fern-Apple",
            };
            npc.on_interact(&mut ctx);
            assert_eq!(npc.stage(), expected_stage);
        }
        let mut ctx = InteractContext {
            actor,
            inventory: &mut inventory,
            food_item: "Fern-Apple",
        };
        let event = npc.on_interact(&mut ctx);
        assert!(matches!(event, InteractEvent::ItemGiven { .. }));
        assert!(inventory.has_item("Fern-Apple"));

        // Later interactions stay on the hint and give nothing more.
        let mut ctx = InteractContext {
            actor,
            inventory: &mut inventory,
            food_item: "Fern-Apple",
        };
        let event = npc.on_interact(&mut ctx);
        assert!(matches!(event, InteractEvent::Dialogue { .. }));
        assert_eq!(inventory.count_of("Fern-Apple"), 1);
    }

    #[test]
    fn walks_to_observation_point_and_stops_short() {
        let mut world = World::new();
        let npc_entity = spawn_npc(
            &mut world,
            "Dad",
            Vec3::ZERO,
            Some(Vec3::new(0.0, 0.0, 10.0)),
        );
        let actor = world.spawn(());
        let mut inventory = Inventory::new();

        // Interact twice to start the walk.
        for _ in 0..2 {
            let mut npc = world.get::<&mut Npc>(npc_entity).unwrap();
            let mut ctx = InteractContext {
                actor,
                inventory: &mut inventory,
                food_item: "Fern-Apple",
            };
            npc.on_interact(&mut ctx);
        }
        assert!(world.get::<&Npc>(npc_entity).unwrap().is_moving());

        let dt = 1.0 / 60.0;
        for _ in 0..600 {
            update_npcs(&mut world, dt);
        }
        let npc = world.get::<&Npc>(npc_entity).unwrap();
        assert!(!npc.is_moving());
        let pos = world.get::<&Transform>(npc_entity).unwrap().position;
        let remaining = (Vec3::new(0.0, 0.0, 10.0) - pos).length();
        // Stopped at, not inside, the stopping distance.
        assert!(remaining <= npc.stopping_distance + 0.1);
        assert!(remaining > 3.0);
    }
}
