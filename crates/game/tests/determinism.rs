//! Two sessions with the same seed must produce identical outcomes; the
//! capture roll is the only nondeterminism in the whole simulation.

use glam::{Vec2, Vec3};
use hecs::World;
use sim_core::SessionRng;
use spatial::FlatTerrain;

use game::{spawn_specimen, Intent, PlayerController, SimConfig, TickOutput};

const DT: f32 = 1.0 / 60.0;

/// A short session against a wary specimen: walk in, then open and fire the
/// device repeatedly. With a 5% base rate most attempts miss, so the outcome
/// sequence exercises the RNG stream.
fn run_session(seed: u64) -> (Vec<TickOutput>, Vec3) {
    let config = SimConfig::default();
    let mut world = World::new();
    let host = FlatTerrain::default();
    let mut rng = SessionRng::new(seed);

    spawn_specimen(&mut world, "Nigersaurus", Vec3::new(2.0, 0.0, 2.0));
    let mut player = PlayerController::spawn(&mut world, Vec3::ZERO, &config).unwrap();

    let mut outputs = Vec::new();
    for _ in 0..30 {
        let intent = Intent::moving(Vec2::new(0.0, 0.5));
        outputs.push(player.update(&mut world, &intent, &host, &mut rng, DT));
    }
    for _ in 0..40 {
        let intent = Intent {
            device_pressed: true,
            ..Default::default()
        };
        outputs.push(player.update(&mut world, &intent, &host, &mut rng, DT));
    }
    (outputs, player.position())
}

#[test]
fn same_seed_same_session() {
    let (a_out, a_pos) = run_session(1234);
    let (b_out, b_pos) = run_session(1234);
    assert_eq!(a_out, b_out);
    assert_eq!(a_pos, b_pos);
}

#[test]
fn different_seed_may_diverge_but_movement_does_not() {
    let (_, a_pos) = run_session(1);
    let (_, b_pos) = run_session(2);
    // Movement is fully deterministic regardless of seed; only capture
    // rolls differ between sessions.
    assert_eq!(a_pos, b_pos);
}
