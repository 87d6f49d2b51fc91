//! Player Module
//!
//! Per-frame locomotion and the top-level character controller.
//!
//! # Components
//!
//! - [`LocomotionIntegrator`] - Horizontal movement plus vertical gravity
//!   integration against a [`crate::physics::KinematicMover`], with a
//!   grounded velocity reset and grounded-gated jumping
//! - [`CharacterController`] - Facade owning input, locomotion, look,
//!   head bob and the camera rig, running them in frame order

pub mod character;
pub mod locomotion;

pub use character::CharacterController;
pub use locomotion::LocomotionIntegrator;
