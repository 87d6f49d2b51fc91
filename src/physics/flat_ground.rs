//! Flat Ground Mover
//!
//! The simplest possible [`KinematicMover`]: free motion above an infinite
//! horizontal plane, with downward motion clamped at the plane. Enough to
//! run the full controller in tests, headless simulations, or a host that
//! has not wired up a real physics engine yet.

use glam::Vec3;

use crate::physics::mover::KinematicMover;

/// Kinematic mover over an infinite ground plane.
#[derive(Debug, Clone)]
pub struct FlatGroundMover {
    position: Vec3,
    ground_height: f32,
    grounded: bool,
}

impl FlatGroundMover {
    /// Create a mover at `position` over a plane at `ground_height`.
    ///
    /// The initial grounded state reflects whether the position starts on
    /// (or below, after clamping) the plane.
    pub fn new(position: Vec3, ground_height: f32) -> Self {
        let mut mover = Self {
            position,
            ground_height,
            grounded: false,
        };
        mover.clamp_to_ground();
        mover
    }

    /// Current capsule base position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Teleport the capsule, re-evaluating ground contact.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.clamp_to_ground();
    }

    /// Height of the ground plane.
    pub fn ground_height(&self) -> f32 {
        self.ground_height
    }

    fn clamp_to_ground(&mut self) {
        if self.position.y <= self.ground_height {
            self.position.y = self.ground_height;
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }
}

impl KinematicMover for FlatGroundMover {
    fn move_by(&mut self, displacement: Vec3) {
        self.position += displacement;
        self.clamp_to_ground();
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }
}
