//! Look Controller
//!
//! Turns raw look deltas into rotation. The body yaws about the vertical
//! axis every frame regardless of view mode. In first-person the head
//! camera additionally pitches, clamped to +/-80 degrees; in third-person
//! the chase camera snaps its orientation to look at a point above the
//! character (no spring, no smoothing).
//!
//! Sensitivity scales the raw per-frame delta directly and is deliberately
//! NOT time-scaled: a mouse delta is already a per-frame quantity.

use glam::{Quat, Vec2, Vec3};

use crate::camera::rig::{CameraRig, ViewMode};
use crate::config::{LOOK_TARGET_HEIGHT, MOUSE_SENSITIVITY, PITCH_LIMIT_DEG, PlayerTuning};

/// Body yaw and head pitch from look input.
///
/// Pitch is in degrees with positive values tilting the view down. It
/// persists across view-mode switches on purpose: re-entering first-person
/// resumes the previous pitch instead of snapping level.
#[derive(Debug, Clone)]
pub struct LookController {
    sensitivity: f32,
    pitch_limit_deg: f32,
    look_target_height: f32,
    pitch_deg: f32,
}

impl Default for LookController {
    fn default() -> Self {
        Self {
            sensitivity: MOUSE_SENSITIVITY,
            pitch_limit_deg: PITCH_LIMIT_DEG,
            look_target_height: LOOK_TARGET_HEIGHT,
            pitch_deg: 0.0,
        }
    }
}

impl LookController {
    /// Create a look controller with the default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a look controller from a tuning struct.
    pub fn from_tuning(tuning: &PlayerTuning) -> Self {
        Self {
            sensitivity: tuning.mouse_sensitivity,
            pitch_limit_deg: tuning.pitch_limit_deg,
            look_target_height: tuning.look_target_height,
            pitch_deg: 0.0,
        }
    }

    /// Current head pitch in degrees (positive = looking down).
    pub fn pitch_deg(&self) -> f32 {
        self.pitch_deg
    }

    /// Look sensitivity in degrees per raw input count.
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Apply one frame of look input.
    ///
    /// `body_yaw_deg` is the character body's rotation about the vertical
    /// axis; it accumulates unclamped. `body_position` is only used by the
    /// third-person look-at.
    pub fn update(
        &mut self,
        look_axis: Vec2,
        body_yaw_deg: &mut f32,
        body_position: Vec3,
        rig: &mut CameraRig,
    ) {
        // Yaw the whole body, in either view mode.
        *body_yaw_deg += look_axis.x * self.sensitivity;

        match rig.mode() {
            ViewMode::FirstPerson => {
                self.pitch_deg -= look_axis.y * self.sensitivity;
                self.pitch_deg = self
                    .pitch_deg
                    .clamp(-self.pitch_limit_deg, self.pitch_limit_deg);
                // Pure pitch: yaw is inherited from the body, no roll.
                rig.first_person.rotation = Quat::from_rotation_x(-self.pitch_deg.to_radians());
            }
            ViewMode::ThirdPerson => {
                let camera_pos =
                    body_position + yaw_rotation(*body_yaw_deg) * rig.third_person.local_position;
                let target = body_position + Vec3::Y * self.look_target_height;
                rig.third_person.rotation = look_at_rotation(camera_pos, target);
            }
        }
    }
}

/// Rotation of the body about the vertical axis.
///
/// Yaw 0 faces -Z; positive yaw turns right, matching the forward/right
/// axes used by locomotion.
pub fn yaw_rotation(yaw_deg: f32) -> Quat {
    Quat::from_rotation_y(-yaw_deg.to_radians())
}

/// World-space orientation looking from `eye` toward `target`.
///
/// Decomposed into yaw-then-pitch so the result never rolls. Falls back to
/// identity when eye and target coincide.
fn look_at_rotation(eye: Vec3, target: Vec3) -> Quat {
    let to_target = target - eye;
    let distance = to_target.length();
    if distance <= 0.001 {
        return Quat::IDENTITY;
    }
    let dir = to_target / distance;
    let yaw = dir.x.atan2(-dir.z);
    let pitch = dir.y.asin();
    Quat::from_rotation_y(-yaw) * Quat::from_rotation_x(pitch)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn test_rig() -> CameraRig {
        CameraRig::new(Vec3::new(0.0, 1.6, 0.0), Vec3::new(0.0, 2.0, 4.0))
    }

    #[test]
    fn test_yaw_applies_in_first_person() {
        let mut look = LookController::new();
        let mut rig = test_rig();
        let mut yaw = 0.0;

        // Delta 10 at sensitivity 0.2 -> 2 degrees of yaw.
        look.update(Vec2::new(10.0, 0.0), &mut yaw, Vec3::ZERO, &mut rig);
        assert!(approx_eq(yaw, 2.0));
        assert!(approx_eq(look.pitch_deg(), 0.0));
    }

    #[test]
    fn test_yaw_applies_in_third_person_too() {
        let mut look = LookController::new();
        let mut rig = test_rig();
        rig.toggle_view();
        let mut yaw = 0.0;

        look.update(Vec2::new(10.0, 0.0), &mut yaw, Vec3::ZERO, &mut rig);
        assert!(approx_eq(yaw, 2.0));
    }

    #[test]
    fn test_pitch_decrements_with_upward_delta() {
        let mut look = LookController::new();
        let mut rig = test_rig();
        let mut yaw = 0.0;

        look.update(Vec2::new(0.0, 10.0), &mut yaw, Vec3::ZERO, &mut rig);
        assert!(approx_eq(look.pitch_deg(), -2.0));
        assert!(approx_eq(yaw, 0.0));
    }

    #[test]
    fn test_pitch_clamped_to_limit() {
        let mut look = LookController::new();
        let mut rig = test_rig();
        let mut yaw = 0.0;

        look.update(Vec2::new(0.0, -100000.0), &mut yaw, Vec3::ZERO, &mut rig);
        assert!(approx_eq(look.pitch_deg(), 80.0));

        look.update(Vec2::new(0.0, 100000.0), &mut yaw, Vec3::ZERO, &mut rig);
        assert!(approx_eq(look.pitch_deg(), -80.0));
    }

    #[test]
    fn test_pitch_stays_clamped_under_repeated_input() {
        let mut look = LookController::new();
        let mut rig = test_rig();
        let mut yaw = 0.0;

        for _ in 0..1000 {
            look.update(Vec2::new(0.0, 37.0), &mut yaw, Vec3::ZERO, &mut rig);
            assert!(look.pitch_deg() >= -80.0 && look.pitch_deg() <= 80.0);
        }
    }

    #[test]
    fn test_first_person_rotation_is_pure_pitch() {
        let mut look = LookController::new();
        let mut rig = test_rig();
        let mut yaw = 0.0;

        look.update(Vec2::new(0.0, 50.0), &mut yaw, Vec3::ZERO, &mut rig);
        let expected = Quat::from_rotation_x(-look.pitch_deg().to_radians());
        assert!(rig.first_person.rotation.abs_diff_eq(expected, EPSILON));
    }

    #[test]
    fn test_pitch_frozen_in_third_person() {
        let mut look = LookController::new();
        let mut rig = test_rig();
        let mut yaw = 0.0;

        look.update(Vec2::new(0.0, 100.0), &mut yaw, Vec3::ZERO, &mut rig);
        let pitch_before = look.pitch_deg();

        rig.toggle_view();
        look.update(Vec2::new(0.0, 100.0), &mut yaw, Vec3::ZERO, &mut rig);

        // Pitch does not move while third-person, and is not reset either.
        assert!(approx_eq(look.pitch_deg(), pitch_before));
    }

    #[test]
    fn test_pitch_resumes_after_mode_round_trip() {
        let mut look = LookController::new();
        let mut rig = test_rig();
        let mut yaw = 0.0;

        look.update(Vec2::new(0.0, 100.0), &mut yaw, Vec3::ZERO, &mut rig);
        let pitch_before = look.pitch_deg();

        rig.toggle_view();
        rig.toggle_view();
        look.update(Vec2::ZERO, &mut yaw, Vec3::ZERO, &mut rig);
        assert!(approx_eq(look.pitch_deg(), pitch_before));
    }

    #[test]
    fn test_third_person_looks_at_target() {
        let mut look = LookController::new();
        let mut rig = test_rig();
        rig.toggle_view();
        // Chase camera 4m behind (+Z) and 2m above the body.
        let mut yaw = 0.0;
        let body_pos = Vec3::new(3.0, 0.0, -7.0);

        look.update(Vec2::ZERO, &mut yaw, body_pos, &mut rig);

        // The camera's forward axis must point at body + 1.5*up.
        let camera_pos = body_pos + rig.third_person.local_position;
        let target = body_pos + Vec3::Y * 1.5;
        let expected_dir = (target - camera_pos).normalize();
        let forward = rig.third_person.rotation * Vec3::NEG_Z;
        assert!(forward.abs_diff_eq(expected_dir, EPSILON));
    }

    #[test]
    fn test_look_at_never_rolls() {
        let mut look = LookController::new();
        let mut rig = test_rig();
        rig.toggle_view();
        let mut yaw = 123.0;

        look.update(Vec2::new(5.0, 5.0), &mut yaw, Vec3::new(1.0, 2.0, 3.0), &mut rig);

        // Right axis stays horizontal if there is no roll.
        let right = rig.third_person.rotation * Vec3::X;
        assert!(right.y.abs() < EPSILON);
    }

    #[test]
    fn test_yaw_rotation_turns_forward_axis() {
        // Yaw 0 faces -Z; yaw 90 faces +X.
        let forward = yaw_rotation(90.0) * Vec3::NEG_Z;
        assert!(forward.abs_diff_eq(Vec3::X, EPSILON));
    }

    #[test]
    fn test_custom_sensitivity_from_tuning() {
        let tuning = PlayerTuning {
            mouse_sensitivity: 0.5,
            ..Default::default()
        };
        let mut look = LookController::from_tuning(&tuning);
        let mut rig = test_rig();
        let mut yaw = 0.0;

        look.update(Vec2::new(10.0, 0.0), &mut yaw, Vec3::ZERO, &mut rig);
        assert!(approx_eq(yaw, 5.0));
    }
}
