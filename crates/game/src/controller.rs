//! Player controller: the per-tick action orchestrator.
//!
//! Owns the agent transform, motor, probe, capture device and inventory, and
//! turns one [`Intent`] into one tick of simulation: movement first, then
//! probe refresh, then the edge-triggered actions.

use glam::Vec3;
use hecs::{Entity, World};
use sim_core::{ConfigError, Player, Transform, UnitRng};
use spatial::{MotionHost, WorldIndex};

use crate::capture::{CaptureDevice, CaptureOutcome};
use crate::config::SimConfig;
use crate::intent::Intent;
use crate::interaction::{InteractContext, InteractEvent, InteractionProbe};
use crate::inventory::Inventory;
use crate::motor::Motor;

/// Movement penalty while aiming the capture device: 60% slower.
pub const DEVICE_OPEN_SPEED_MULT: f32 = 0.4;

/// Everything one tick reported back, for presentation layers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutput {
    pub interaction: Option<InteractEvent>,
    pub capture: Option<CaptureOutcome>,
}

/// The player's per-tick coordinator.
pub struct PlayerController {
    pub transform: Transform,
    actor: Entity,
    motor: Motor,
    probe: InteractionProbe,
    device: CaptureDevice,
    inventory: Inventory,
    food_item: String,
}

impl PlayerController {
    /// Build the controller and register the player's identity entity in
    /// the world (so interactables receive a real actor id).
    pub fn spawn(
        world: &mut World,
        position: Vec3,
        config: &SimConfig,
    ) -> Result<Self, ConfigError> {
        let actor = world.spawn((Player,));
        Ok(Self {
            transform: Transform::from_position(position),
            actor,
            motor: Motor::new(config.motor)?,
            probe: InteractionProbe::new(config.probe)?,
            device: CaptureDevice::new(config.capture, config.storage_capacity)?,
            inventory: Inventory::new(),
            food_item: config.food_item.clone(),
        })
    }

    /// Run one simulation tick from the given intent.
    ///
    /// Order matters: movement uses the device state from before any button
    /// edge this tick, and the probe refreshes before an interact edge so
    /// the edge acts on this tick's target.
    pub fn update(
        &mut self,
        world: &mut World,
        intent: &Intent,
        host: &impl MotionHost,
        rng: &mut dyn UnitRng,
        dt: f32,
    ) -> TickOutput {
        let direction = intent.isometric_direction();
        let speed_multiplier = if self.device.is_open() {
            DEVICE_OPEN_SPEED_MULT
        } else {
            1.0
        };
        self.motor
            .advance(&mut self.transform, direction, speed_multiplier, dt, host);

        self.probe.refresh(
            &WorldIndex::new(world),
            self.transform.position,
            self.transform.forward(),
        );

        let mut output = TickOutput::default();

        if intent.interact_pressed {
            let mut ctx = InteractContext {
                actor: self.actor,
                inventory: &mut self.inventory,
                food_item: &self.food_item,
            };
            output.interaction = self.probe.trigger(world, &mut ctx);
        }

        if intent.device_pressed {
            // One button serves both roles: open when closed, fire when
            // open. There is no close-without-attempting.
            if self.device.is_open() {
                output.capture =
                    Some(self.device.attempt(world, self.transform.position, rng));
            } else {
                self.device.toggle();
            }
        }

        output
    }

    /// Atomically reposition the player, bypassing collision for one tick.
    pub fn teleport(&mut self, position: Vec3) {
        self.motor.teleport(&mut self.transform, position);
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    pub fn current_speed(&self) -> f32 {
        self.motor.current_speed()
    }

    pub fn actor(&self) -> Entity {
        self.actor
    }

    pub fn motor(&self) -> &Motor {
        &self.motor
    }

    pub fn probe(&self) -> &InteractionProbe {
        &self.probe
    }

    pub fn device(&self) -> &CaptureDevice {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut CaptureDevice {
        &mut self.device
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawn::spawn_specimen;
    use glam::Vec2;
    use sim_core::{FixedRng, Specimen};
    use spatial::FlatTerrain;

    const DT: f32 = 1.0 / 60.0;

    fn setup() -> (World, PlayerController, FlatTerrain) {
        let mut world = World::new();
        let config = SimConfig::default();
        let player = PlayerController::spawn(&mut world, Vec3::ZERO, &config).unwrap();
        (world, player, FlatTerrain::default())
    }

    fn press_device() -> Intent {
        Intent {
            device_pressed: true,
            ..Default::default()
        }
    }

    #[test]
    fn device_button_opens_then_fires() {
        let (mut world, mut player, host) = setup();
        let mut rng = FixedRng(0.5);

        let out = player.update(&mut world, &press_device(), &host, &mut rng, DT);
        assert!(player.device().is_open());
        assert_eq!(out.capture, None);

        let out = player.update(&mut world, &press_device(), &host, &mut rng, DT);
        assert!(!player.device().is_open());
        assert_eq!(out.capture, Some(CaptureOutcome::NoTarget));
    }

    #[test]
    fn open_device_slows_movement_by_60_percent() {
        let (mut world, mut player, host) = setup();
        let mut rng = FixedRng(0.5);

        player.update(&mut world, &press_device(), &host, &mut rng, DT);
        assert!(player.device().is_open());

        let walk = Intent::moving(Vec2::new(0.0, 1.0));
        for _ in 0..120 {
            player.update(&mut world, &walk, &host, &mut rng, DT);
        }
        let max_speed = player.motor().config().max_speed;
        assert!((player.current_speed() - max_speed * DEVICE_OPEN_SPEED_MULT).abs() < 1e-3);
    }

    #[test]
    fn full_speed_when_device_closed() {
        let (mut world, mut player, host) = setup();
        let mut rng = FixedRng(0.5);
        let walk = Intent::moving(Vec2::new(0.0, 1.0));
        for _ in 0..120 {
            player.update(&mut world, &walk, &host, &mut rng, DT);
        }
        assert!((player.current_speed() - player.motor().config().max_speed).abs() < 1e-3);
    }

    #[test]
    fn interact_edge_triggers_probe_target() {
        let (mut world, mut player, host) = setup();
        spawn_specimen(&mut world, "Nigersaurus", Vec3::new(0.0, 0.0, 1.0));
        player.inventory_mut().add_item("Fern-Apple");
        let mut rng = FixedRng(0.5);

        let intent = Intent {
            interact_pressed: true,
            ..Default::default()
        };
        let out = player.update(&mut world, &intent, &host, &mut rng, DT);
        assert_eq!(
            out.interaction,
            Some(InteractEvent::Fed {
                species: "Nigersaurus".into()
            })
        );
        assert!(!player.inventory().has_item("Fern-Apple"));
    }

    #[test]
    fn capture_through_the_controller_moves_specimen_to_storage() {
        let (mut world, mut player, host) = setup();
        let e = spawn_specimen(&mut world, "Nigersaurus", Vec3::new(0.0, 0.0, 2.0));
        world.get::<&mut Specimen>(e).unwrap().set_feeding(true);
        let mut rng = FixedRng(0.1);

        player.update(&mut world, &press_device(), &host, &mut rng, DT);
        let out = player.update(&mut world, &press_device(), &host, &mut rng, DT);
        assert_eq!(
            out.capture,
            Some(CaptureOutcome::Captured {
                species: "Nigersaurus".into()
            })
        );
        assert!(!player.device().is_open());
        assert_eq!(player.device().stored(), ["Nigersaurus"]);
        assert!(world.get::<&Specimen>(e).is_err());
    }
}
