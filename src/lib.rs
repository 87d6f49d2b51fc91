//! Forest Walker
//!
//! A first-person character controller library. It converts directional and
//! look input into kinematic capsule motion against a collision-aware mover,
//! integrates vertical velocity against gravity with a ground-snap reset,
//! drives a procedural head-bob camera offset, and switches between a
//! first-person and a third-person camera.
//!
//! The crate owns only the per-frame numeric state. Device input sampling,
//! collision sweeps, rendering and window/cursor application all live behind
//! small interfaces so the controller can run under any host loop.
//!
//! # Modules
//!
//! - [`input`] - Move/look axis state, cursor lock state
//! - [`player`] - Locomotion integration and the top-level [`CharacterController`]
//! - [`camera`] - Mouse look, head bob, and the dual-camera rig
//! - [`physics`] - The kinematic mover contract and contact diagnostics
//! - [`config`] - Tuning values with JSON persistence
//!
//! # Example
//!
//! ```ignore
//! use forest_walker::{CharacterController, CameraRig, FlatGroundMover};
//! use glam::{Vec2, Vec3};
//!
//! let rig = CameraRig::new(Vec3::new(0.0, 1.6, 0.0), Vec3::new(0.0, 2.0, 4.0));
//! let mut player = CharacterController::new(rig);
//! let mut mover = FlatGroundMover::new(Vec3::ZERO, 0.0);
//!
//! // From the host's input layer:
//! player.input_mut().apply_move(Vec2::new(0.0, 1.0));
//!
//! // Each frame:
//! let body_position = mover.position();
//! player.update(delta_time, &mut mover, body_position);
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod physics;
pub mod player;

// Re-export the types most hosts need at crate level.
pub use camera::{CameraRig, CameraSocket, HeadBob, LookController, ViewMode};
pub use config::{PlayerTuning, TuningError};
pub use input::{CursorLock, InputState};
pub use physics::{
    ContactEvents, ContactLogger, FlatGroundMover, KinematicMover, SolidKind, TriggerKind,
};
pub use player::{CharacterController, LocomotionIntegrator};
