//! Paddock headless demo: a scripted tutorial session over a fixed 60 Hz
//! tick loop. Greet the guide, collect the food he hands over, feed the
//! specimen, then open the device and capture it.

use anyhow::Result;
use glam::{Vec2, Vec3};
use hecs::World;
use sim_core::{SessionRng, TickClock};
use spatial::FlatTerrain;

use game::{spawn_npc, spawn_specimen, update_npcs, Intent, PlayerController, SimConfig};

/// One phase of the scripted session: hold an intent for a number of ticks.
struct Phase {
    ticks: u32,
    intent: Intent,
}

fn press_interact() -> Intent {
    Intent {
        interact_pressed: true,
        ..Default::default()
    }
}

fn press_device() -> Intent {
    Intent {
        device_pressed: true,
        ..Default::default()
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = SimConfig::load();
    config.validate()?;

    let mut world = World::new();
    let terrain = FlatTerrain::default();
    let mut rng = SessionRng::new(config.seed);
    let mut clock = TickClock::from_hz(60.0);

    // The guide stands just ahead; the specimen grazes farther out, past
    // probe range but inside capture range once we walk up.
    // His observation point sits so that the stopping distance keeps him
    // within the player's probe for the rest of the dialogue.
    spawn_npc(
        &mut world,
        "Dad",
        Vec3::new(0.0, 0.0, 1.2),
        Some(Vec3::new(0.0, 0.0, 4.8)),
    );
    spawn_specimen(&mut world, "Nigersaurus", Vec3::new(6.0, 0.0, 6.0));

    let mut player = PlayerController::spawn(&mut world, Vec3::ZERO, &config)?;
    log::info!("session start, seed {}", rng.seed());

    // Walking "up" runs along the 45-degree world diagonal, straight at the
    // specimen at (6, 0, 6) once the dialogue is done.
    let script = [
        // Greet the guide through his whole script: four interact presses
        // spaced out by idle ticks.
        Phase { ticks: 1, intent: press_interact() },
        Phase { ticks: 30, intent: Intent::idle() },
        Phase { ticks: 1, intent: press_interact() },
        Phase { ticks: 30, intent: Intent::idle() },
        Phase { ticks: 1, intent: press_interact() },
        Phase { ticks: 30, intent: Intent::idle() },
        Phase { ticks: 1, intent: press_interact() },
        // Walk up the diagonal to the specimen (about 7.5 units at 6 u/s
        // once the ramp is counted).
        Phase { ticks: 80, intent: Intent::moving(Vec2::new(0.0, 1.0)) },
        Phase { ticks: 20, intent: Intent::idle() },
        // Feed it, let it settle, then open and fire the device.
        Phase { ticks: 1, intent: press_interact() },
        Phase { ticks: 30, intent: Intent::idle() },
        Phase { ticks: 1, intent: press_device() },
        Phase { ticks: 1, intent: press_device() },
        Phase { ticks: 30, intent: Intent::idle() },
    ];

    for phase in &script {
        for _ in 0..phase.ticks {
            let dt = clock.advance();
            update_npcs(&mut world, dt);
            let output = player.update(&mut world, &phase.intent, &terrain, &mut rng, dt);
            if let Some(event) = output.interaction {
                log::debug!("interaction: {event:?}");
            }
            if let Some(outcome) = output.capture {
                log::info!("capture outcome: {outcome:?}");
            }
        }
    }

    log::info!(
        "session end after {} ticks ({:.1}s simulated)",
        clock.tick(),
        clock.elapsed_seconds()
    );
    println!(
        "stored specimens: {:?} ({}/{})",
        player.device().stored(),
        player.device().stored_count(),
        player.device().capacity()
    );
    println!("inventory: {:?}", player.inventory().items());
    Ok(())
}
