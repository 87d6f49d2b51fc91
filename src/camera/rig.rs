//! Camera Rig
//!
//! Two always-allocated camera sockets - a head camera parented to the body
//! and a chase camera - with an explicit [`ViewMode`] selecting which one is
//! live. The switch is instantaneous and mutually exclusive: exactly one
//! socket is active at all times, never both, never neither.

use glam::{Quat, Vec3};

/// Which camera presents the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Look-with-head: the head camera pitches, yaw comes from the body.
    #[default]
    FirstPerson,
    /// Look-at-target: the chase camera orients toward the character.
    ThirdPerson,
}

impl ViewMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::FirstPerson => ViewMode::ThirdPerson,
            ViewMode::ThirdPerson => ViewMode::FirstPerson,
        }
    }
}

/// One camera output: a transform plus an active/inactive flag.
///
/// For the first-person socket both fields are local to the body (the body's
/// yaw is inherited); for the third-person socket `rotation` is world-space,
/// written by the look-at each frame.
#[derive(Debug, Clone, Copy)]
pub struct CameraSocket {
    /// Position offset from the body origin.
    pub local_position: Vec3,
    /// Orientation (local for first-person, world for third-person).
    pub rotation: Quat,
    /// Whether this camera is the live render target.
    pub active: bool,
}

impl CameraSocket {
    fn new(local_position: Vec3, active: bool) -> Self {
        Self {
            local_position,
            rotation: Quat::IDENTITY,
            active,
        }
    }
}

/// The dual-camera rig owned by the character.
#[derive(Debug, Clone)]
pub struct CameraRig {
    mode: ViewMode,
    /// Head camera, a child of the body.
    pub first_person: CameraSocket,
    /// Chase camera offset behind/above the body.
    pub third_person: CameraSocket,
    rest_height: f32,
}

impl CameraRig {
    /// Create a rig starting in first-person.
    ///
    /// The head camera's initial local height is captured once here as the
    /// head-bob rest height and never changes afterwards.
    pub fn new(first_person_offset: Vec3, third_person_offset: Vec3) -> Self {
        Self {
            mode: ViewMode::FirstPerson,
            first_person: CameraSocket::new(first_person_offset, true),
            third_person: CameraSocket::new(third_person_offset, false),
            rest_height: first_person_offset.y,
        }
    }

    /// The current view mode.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// The head camera's resting local height, captured at construction.
    pub fn rest_height(&self) -> f32 {
        self.rest_height
    }

    /// Flip between first- and third-person.
    ///
    /// Always legal; activates exactly one socket and deactivates the other.
    pub fn toggle_view(&mut self) {
        self.mode = self.mode.toggled();
        let fps = self.mode == ViewMode::FirstPerson;
        self.first_person.active = fps;
        self.third_person.active = !fps;
    }

    /// The socket currently presenting the scene.
    pub fn active_socket(&self) -> &CameraSocket {
        match self.mode {
            ViewMode::FirstPerson => &self.first_person,
            ViewMode::ThirdPerson => &self.third_person,
        }
    }
}
