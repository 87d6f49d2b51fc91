//! Character Controller
//!
//! The top-level facade a host wires its loop to. Owns the input state, the
//! locomotion integrator, the look controller, the head bob and the camera
//! rig, and runs them in fixed frame order: Movement -> Rotation -> HeadBob,
//! with the bob gated on first-person view. Everything runs synchronously
//! inside one frame callback; input samples arriving between frames are
//! last-write-wins field updates with no queuing.
//!
//! # Usage
//!
//! ```rust,ignore
//! use forest_walker::{CameraRig, CharacterController, FlatGroundMover};
//! use glam::{Vec2, Vec3};
//!
//! let rig = CameraRig::new(Vec3::new(0.0, 1.6, 0.0), Vec3::new(0.0, 2.0, 4.0));
//! let mut player = CharacterController::new(rig);
//! let mut mover = FlatGroundMover::new(Vec3::ZERO, 0.0);
//!
//! // Event loop:
//! player.input_mut().apply_move(Vec2::new(0.0, 1.0));
//!
//! // Frame loop:
//! while !player.quit_requested() {
//!     let body_position = mover.position();
//!     player.update(dt, &mut mover, body_position);
//! }
//! ```

use glam::Vec3;

use crate::camera::{CameraRig, HeadBob, LookController, ViewMode};
use crate::config::PlayerTuning;
use crate::input::{CursorLock, InputState};
use crate::physics::KinematicMover;
use crate::player::locomotion::LocomotionIntegrator;

/// The playable character: per-frame state machine over input, motion and
/// cameras.
#[derive(Debug, Clone)]
pub struct CharacterController {
    input: InputState,
    locomotion: LocomotionIntegrator,
    look: LookController,
    head_bob: HeadBob,
    rig: CameraRig,
    cursor: CursorLock,
    /// Body heading in degrees, accumulated unclamped.
    yaw_deg: f32,
    quit_requested: bool,
}

impl CharacterController {
    /// Create a controller with the default tuning.
    ///
    /// The character wakes up with input enabled and the cursor locked.
    pub fn new(rig: CameraRig) -> Self {
        Self::with_tuning(&PlayerTuning::default(), rig)
    }

    /// Create a controller from a tuning struct.
    pub fn with_tuning(tuning: &PlayerTuning, rig: CameraRig) -> Self {
        Self {
            input: InputState::new(),
            locomotion: LocomotionIntegrator::from_tuning(tuning),
            look: LookController::from_tuning(tuning),
            head_bob: HeadBob::from_tuning(tuning),
            rig,
            cursor: CursorLock::new(),
            yaw_deg: 0.0,
            quit_requested: false,
        }
    }

    /// The live input state, for the host's event layer to feed.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Read-only view of the input state.
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// The camera rig.
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Cursor lock state, for the host to apply to its window.
    pub fn cursor(&self) -> &CursorLock {
        &self.cursor
    }

    /// Mutable cursor lock state (focus events).
    pub fn cursor_mut(&mut self) -> &mut CursorLock {
        &mut self.cursor
    }

    /// Body heading in degrees.
    pub fn yaw_deg(&self) -> f32 {
        self.yaw_deg
    }

    /// Head pitch in degrees (positive = looking down).
    pub fn pitch_deg(&self) -> f32 {
        self.look.pitch_deg()
    }

    /// Vertical velocity in m/s.
    pub fn vertical_velocity(&self) -> f32 {
        self.locomotion.vertical_velocity()
    }

    /// Run one frame: Movement -> Rotation -> HeadBob.
    ///
    /// `body_position` is the character's current world position (the mover
    /// owns it); it feeds the third-person look-at. Movement runs first, so
    /// this frame's look input affects next frame's movement direction.
    pub fn update<M: KinematicMover>(&mut self, dt: f32, mover: &mut M, body_position: Vec3) {
        self.locomotion
            .update(dt, self.input.move_axis(), self.yaw_deg, mover);

        self.look.update(
            self.input.look_axis(),
            &mut self.yaw_deg,
            body_position,
            &mut self.rig,
        );

        if self.rig.mode() == ViewMode::FirstPerson {
            let y = self.head_bob.update(
                dt,
                self.input.move_axis(),
                mover.is_grounded(),
                self.rig.rest_height(),
                self.rig.first_person.local_position.y,
            );
            self.rig.first_person.local_position.y = y;
        }
    }

    /// Jump trigger. Grounded-gated; airborne triggers are silent no-ops.
    pub fn jump<M: KinematicMover>(&mut self, mover: &M) -> bool {
        self.locomotion.jump(mover)
    }

    /// View-switch trigger: flip between first- and third-person.
    pub fn toggle_view(&mut self) {
        self.rig.toggle_view();
    }

    /// Quit trigger.
    ///
    /// Sets the quit flag for the host loop to observe. In release builds
    /// this additionally terminates the process, matching shipped-game
    /// behavior; debug builds behave like an editor stop and leave the host
    /// process alive.
    pub fn quit(&mut self) {
        self.quit_requested = true;
        #[cfg(not(debug_assertions))]
        std::process::exit(0);
    }

    /// Whether the quit trigger has fired.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Resume play: accept input samples and lock the cursor.
    pub fn enable(&mut self) {
        self.input.enable();
        self.cursor.lock();
    }

    /// Suspend play (menus): drop input samples and release the cursor.
    pub fn disable(&mut self) {
        self.input.disable();
        self.cursor.release();
    }
}
