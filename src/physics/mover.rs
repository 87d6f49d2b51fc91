//! Kinematic Mover Contract
//!
//! The capsule-sweep motion primitive the controller is built on: attempt a
//! displacement, clipped against solid geometry, and report whether the most
//! recent move left the collider in contact with walkable ground.

use glam::Vec3;

/// A collision-aware motion primitive for a capsule-shaped character.
///
/// Implementations sweep the capsule by the requested displacement, stopping
/// or sliding at obstacles. No success/failure is surfaced: a fully blocked
/// move and a free move look the same to the caller, which only ever reads
/// the grounded state afterwards.
///
/// The controller submits horizontal and vertical motion as two separate
/// `move_by` calls per frame. Implementations must resolve each call
/// independently; merging them changes how simultaneous wall/floor contact
/// resolves.
pub trait KinematicMover {
    /// Attempt to move the capsule by `displacement`, clipping at obstacles.
    fn move_by(&mut self, displacement: Vec3);

    /// Whether the most recent move left the capsule touching walkable ground.
    fn is_grounded(&self) -> bool;
}
