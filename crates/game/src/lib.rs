//! Paddock - top-down creature-capture simulation: the per-tick action core.
//!
//! The pieces, leaf-first:
//! - [`motor`]: inertial locomotion with procedural lean and ground stick
//! - [`interaction`]: forward probe and interactable dispatch
//! - [`capture`]: the Open/Closed capture device with bounded storage
//! - [`controller`]: the orchestrator turning one [`Intent`] into one tick
//!
//! Rendering, cameras, input binding and persistence are hosts' concerns;
//! this crate is headless and deterministic given a seed.
//!
//! [`Intent`]: intent::Intent

pub mod capture;
pub mod config;
pub mod controller;
pub mod intent;
pub mod interaction;
pub mod inventory;
pub mod motor;
pub mod npc;
pub mod spawn;

pub use capture::{CaptureConfig, CaptureDevice, CaptureOutcome};
pub use config::SimConfig;
pub use controller::{PlayerController, TickOutput, DEVICE_OPEN_SPEED_MULT};
pub use intent::Intent;
pub use interaction::{InteractContext, InteractEvent, InteractionProbe, ProbeConfig};
pub use inventory::Inventory;
pub use motor::{Motor, MotorConfig};
pub use npc::{update_npcs, Npc};
pub use spawn::{spawn_npc, spawn_specimen};
