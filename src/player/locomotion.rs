//! Locomotion Integrator
//!
//! Converts the movement axis into a world-space displacement relative to
//! the body's facing, and integrates vertical velocity against gravity.
//! Horizontal and vertical motion are submitted to the mover as two
//! separate calls per frame - the collision primitive resolves simultaneous
//! wall and floor contact differently for a combined vector, so the split
//! is load-bearing, not a style choice.
//!
//! While grounded with downward velocity, the vertical velocity is reset to
//! a small negative bias instead of zero. The bias keeps the capsule pressed
//! into the floor on the next vertical move, so the grounded query stays
//! reliably true while standing, and gravity cannot accumulate.

use glam::{Vec2, Vec3};

use crate::config::{GRAVITY, GROUNDED_VELOCITY, JUMP_IMPULSE, MOVE_SPEED, PlayerTuning};
use crate::physics::KinematicMover;

/// Horizontal movement and vertical velocity integration.
///
/// Owns the persistent vertical velocity; everything else is passed in per
/// frame. The mover is a lifetime precondition - there are no defensive
/// checks against a missing collaborator.
#[derive(Debug, Clone)]
pub struct LocomotionIntegrator {
    move_speed: f32,
    gravity: f32,
    jump_impulse: f32,
    grounded_velocity: f32,
    vertical_velocity: f32,
}

impl Default for LocomotionIntegrator {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            grounded_velocity: GROUNDED_VELOCITY,
            vertical_velocity: 0.0,
        }
    }
}

impl LocomotionIntegrator {
    /// Create an integrator with the default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an integrator from a tuning struct.
    pub fn from_tuning(tuning: &PlayerTuning) -> Self {
        Self {
            move_speed: tuning.move_speed,
            gravity: tuning.gravity,
            jump_impulse: tuning.jump_impulse,
            grounded_velocity: tuning.grounded_velocity,
            vertical_velocity: 0.0,
        }
    }

    /// Current vertical velocity in m/s (positive = upward).
    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    /// Walk speed in m/s.
    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    /// Integrate one frame of motion through the mover.
    ///
    /// `move_axis` is (strafe, forward) and `body_yaw_deg` the body's
    /// current heading - already updated by the previous frame's look, so
    /// turning affects movement direction one frame later.
    pub fn update<M: KinematicMover>(
        &mut self,
        dt: f32,
        move_axis: Vec2,
        body_yaw_deg: f32,
        mover: &mut M,
    ) {
        // Clamp delta time to prevent physics explosions.
        let dt = dt.clamp(0.0001, 0.1);

        let forward = forward_from_yaw(body_yaw_deg);
        let right = right_from_yaw(body_yaw_deg);

        let horizontal = (right * move_axis.x + forward * move_axis.y) * self.move_speed * dt;
        mover.move_by(horizontal);

        // Grounded reset happens before gravity is applied this frame, so a
        // standing character carries the bias, never an accumulated fall.
        if mover.is_grounded() && self.vertical_velocity < 0.0 {
            self.vertical_velocity = self.grounded_velocity;
        }

        self.vertical_velocity += self.gravity * dt;
        mover.move_by(Vec3::Y * self.vertical_velocity * dt);
    }

    /// Attempt to jump. Returns whether the impulse was applied.
    ///
    /// Only a grounded character can jump; an airborne trigger is a silent
    /// no-op (no double jump). A grounded jump overrides any prior vertical
    /// velocity with exactly the configured impulse.
    pub fn jump<M: KinematicMover>(&mut self, mover: &M) -> bool {
        if mover.is_grounded() {
            self.vertical_velocity = self.jump_impulse;
            true
        } else {
            false
        }
    }
}

/// Forward axis on the horizontal plane for a yaw in degrees (0 = -Z).
pub fn forward_from_yaw(yaw_deg: f32) -> Vec3 {
    let yaw = yaw_deg.to_radians();
    Vec3::new(yaw.sin(), 0.0, -yaw.cos())
}

/// Right axis on the horizontal plane for a yaw in degrees.
pub fn right_from_yaw(yaw_deg: f32) -> Vec3 {
    let forward = forward_from_yaw(yaw_deg);
    Vec3::new(-forward.z, 0.0, forward.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::FlatGroundMover;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn grounded_mover() -> FlatGroundMover {
        FlatGroundMover::new(Vec3::ZERO, 0.0)
    }

    fn airborne_mover() -> FlatGroundMover {
        FlatGroundMover::new(Vec3::new(0.0, 10.0, 0.0), 0.0)
    }

    #[test]
    fn test_forward_displacement_magnitude() {
        // moveAxis=(0,1), dt=0.1, speed=5 -> 0.5 units along forward (-Z).
        let mut loco = LocomotionIntegrator::new();
        let mut mover = grounded_mover();

        loco.update(0.1, Vec2::new(0.0, 1.0), 0.0, &mut mover);

        let pos = mover.position();
        assert!(approx_eq(pos.z, -0.5));
        assert!(approx_eq(pos.x, 0.0));
    }

    #[test]
    fn test_strafe_displacement() {
        let mut loco = LocomotionIntegrator::new();
        let mut mover = grounded_mover();

        loco.update(0.1, Vec2::new(1.0, 0.0), 0.0, &mut mover);
        assert!(approx_eq(mover.position().x, 0.5));
    }

    #[test]
    fn test_movement_follows_body_yaw() {
        let mut loco = LocomotionIntegrator::new();
        let mut mover = grounded_mover();

        // Facing +X (yaw 90), forward input moves along +X.
        loco.update(0.1, Vec2::new(0.0, 1.0), 90.0, &mut mover);
        let pos = mover.position();
        assert!(approx_eq(pos.x, 0.5));
        assert!(approx_eq(pos.z, 0.0));
    }

    #[test]
    fn test_airborne_gravity_accumulates() {
        // grounded=false, vv=0, dt=0.1 -> vv = -0.981, no reset applied.
        let mut loco = LocomotionIntegrator::new();
        let mut mover = airborne_mover();

        loco.update(0.1, Vec2::ZERO, 0.0, &mut mover);
        assert!(approx_eq(loco.vertical_velocity(), -0.981));
    }

    #[test]
    fn test_grounded_reset_before_gravity() {
        let mut loco = LocomotionIntegrator::new();
        let mut mover = grounded_mover();

        // First frame: velocity starts at zero, so no reset applies yet.
        loco.update(0.1, Vec2::ZERO, 0.0, &mut mover);
        assert!(approx_eq(loco.vertical_velocity(), -9.81 * 0.1));

        // Every following standing frame: velocity is reset to the bias
        // before gravity, never growing without bound.
        for _ in 0..100 {
            loco.update(0.1, Vec2::ZERO, 0.0, &mut mover);
            assert!(approx_eq(loco.vertical_velocity(), -1.0 + -9.81 * 0.1));
        }
    }

    #[test]
    fn test_upward_velocity_not_reset_on_ground() {
        // Only downward velocity is clamped; a fresh jump impulse survives
        // the grounded frame it was issued on.
        let mut loco = LocomotionIntegrator::new();
        let mut mover = grounded_mover();

        assert!(loco.jump(&mover));
        loco.update(0.1, Vec2::ZERO, 0.0, &mut mover);
        assert!(approx_eq(loco.vertical_velocity(), 5.0 - 0.981));
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut loco = LocomotionIntegrator::new();

        let grounded = grounded_mover();
        assert!(loco.jump(&grounded));
        assert!(approx_eq(loco.vertical_velocity(), 5.0));

        let mut loco = LocomotionIntegrator::new();
        loco.update(0.1, Vec2::ZERO, 0.0, &mut airborne_mover());
        let before = loco.vertical_velocity();
        let airborne = airborne_mover();
        assert!(!loco.jump(&airborne));
        assert!(approx_eq(loco.vertical_velocity(), before));
    }

    #[test]
    fn test_jump_overrides_prior_velocity() {
        let mut loco = LocomotionIntegrator::new();
        let mut mover = grounded_mover();
        loco.update(0.1, Vec2::ZERO, 0.0, &mut mover);
        assert!(loco.vertical_velocity() < 0.0);

        assert!(loco.jump(&mover));
        assert!(approx_eq(loco.vertical_velocity(), 5.0));
    }

    #[test]
    fn test_jump_arc_lands_back() {
        let mut loco = LocomotionIntegrator::new();
        let mut mover = grounded_mover();

        assert!(loco.jump(&mover));

        let dt = 0.016;
        let mut max_height = 0.0f32;
        let mut frames = 0;
        while frames < 1000 {
            loco.update(dt, Vec2::ZERO, 0.0, &mut mover);
            max_height = max_height.max(mover.position().y);
            if mover.is_grounded() && frames > 5 {
                break;
            }
            frames += 1;
        }

        // v0=5.0, g=9.81: peak ~ v0^2/(2g) = 1.27m (Euler integration
        // overshoots slightly at 60 fps).
        assert!(
            (max_height - 1.27).abs() < 0.15,
            "peak was {max_height}, expected ~1.27"
        );
        assert!(mover.is_grounded());
        assert!(approx_eq(mover.position().y, 0.0));
    }

    #[test]
    fn test_two_separate_move_submissions() {
        /// Mover that records every displacement it is asked to perform.
        struct RecordingMover {
            calls: Vec<Vec3>,
        }

        impl KinematicMover for RecordingMover {
            fn move_by(&mut self, displacement: Vec3) {
                self.calls.push(displacement);
            }

            fn is_grounded(&self) -> bool {
                true
            }
        }

        let mut loco = LocomotionIntegrator::new();
        let mut mover = RecordingMover { calls: Vec::new() };
        loco.update(0.1, Vec2::new(0.0, 1.0), 0.0, &mut mover);

        assert_eq!(mover.calls.len(), 2);
        // First call is purely horizontal, second purely vertical.
        assert_eq!(mover.calls[0].y, 0.0);
        assert_eq!(mover.calls[1].x, 0.0);
        assert_eq!(mover.calls[1].z, 0.0);
    }

    #[test]
    fn test_dt_clamped() {
        let mut loco = LocomotionIntegrator::new();
        let mut mover = airborne_mover();

        loco.update(100.0, Vec2::ZERO, 0.0, &mut mover);
        // dt clamps to 0.1: one frame of gravity, not ten minutes of it.
        assert!(approx_eq(loco.vertical_velocity(), -0.981));
    }

    #[test]
    fn test_axes_are_orthonormal() {
        for yaw in [0.0f32, 45.0, 90.0, 180.0, 270.0, -30.0] {
            let f = forward_from_yaw(yaw);
            let r = right_from_yaw(yaw);
            assert!(approx_eq(f.length(), 1.0));
            assert!(approx_eq(r.length(), 1.0));
            assert!(f.dot(r).abs() < EPSILON);
        }
    }

    #[test]
    fn test_from_tuning() {
        let tuning = PlayerTuning {
            move_speed: 10.0,
            jump_impulse: 8.0,
            ..Default::default()
        };
        let mut loco = LocomotionIntegrator::from_tuning(&tuning);
        let mut mover = grounded_mover();

        loco.update(0.1, Vec2::new(0.0, 1.0), 0.0, &mut mover);
        assert!(approx_eq(mover.position().z, -1.0));

        assert!(loco.jump(&mover));
        assert!(approx_eq(loco.vertical_velocity(), 8.0));
    }
}
