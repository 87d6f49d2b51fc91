//! Physics Module
//!
//! The controller never performs collision detection itself; it submits
//! displacements to a [`KinematicMover`] and reads back a grounded flag.
//! This module defines that contract, a minimal plane-ground implementation
//! for hosts and tests that have no physics engine, and the contact
//! diagnostics capability resolved by the external collision layer.

pub mod contact;
pub mod flat_ground;
pub mod mover;

pub use contact::{ContactEvents, ContactLogger, SolidKind, TriggerKind};
pub use flat_ground::FlatGroundMover;
pub use mover::KinematicMover;
