//! Character Input State
//!
//! Two live input vectors, overwritten on every sample and read once per
//! frame. There is no queuing and no history: if several samples for the
//! same axis arrive between frames, only the latest is observed
//! (last-write-wins), matching how device events race a fixed update loop.
//!
//! # Example
//!
//! ```rust,ignore
//! use forest_walker::InputState;
//! use glam::Vec2;
//!
//! let mut input = InputState::new();
//!
//! // From the host's event loop:
//! input.apply_move(Vec2::new(0.0, 1.0)); // stick pushed forward
//! input.apply_look(Vec2::new(12.0, -3.0)); // raw mouse delta
//!
//! // On release events:
//! input.cancel_move();
//! ```

use glam::Vec2;

/// Live input state owned by the character.
///
/// `move_axis` is a direction in roughly [-1, 1] per component (x = strafe,
/// y = forward); `look_axis` is a raw per-frame device delta of unbounded
/// magnitude. While disabled, samples are dropped and both axes read zero,
/// mirroring an input subscription being torn down for a menu.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    move_axis: Vec2,
    look_axis: Vec2,
    disabled: bool,
}

impl InputState {
    /// Create an enabled input state with both axes at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current movement direction (x = strafe, y = forward).
    #[inline]
    pub fn move_axis(&self) -> Vec2 {
        self.move_axis
    }

    /// The current look delta (raw device units).
    #[inline]
    pub fn look_axis(&self) -> Vec2 {
        self.look_axis
    }

    /// Overwrite the movement axis with a new sample.
    #[inline]
    pub fn apply_move(&mut self, axis: Vec2) {
        if !self.disabled {
            self.move_axis = axis;
        }
    }

    /// Zero the movement axis (input-cancel event).
    #[inline]
    pub fn cancel_move(&mut self) {
        self.move_axis = Vec2::ZERO;
    }

    /// Overwrite the look axis with a new sample.
    #[inline]
    pub fn apply_look(&mut self, axis: Vec2) {
        if !self.disabled {
            self.look_axis = axis;
        }
    }

    /// Zero the look axis (input-cancel event).
    #[inline]
    pub fn cancel_look(&mut self) {
        self.look_axis = Vec2::ZERO;
    }

    /// Resume accepting samples.
    pub fn enable(&mut self) {
        self.disabled = false;
    }

    /// Stop accepting samples and zero both axes.
    ///
    /// Zeroing matters: a key held down while a menu opens must not keep
    /// the character walking underneath it.
    pub fn disable(&mut self) {
        self.disabled = true;
        self.move_axis = Vec2::ZERO;
        self.look_axis = Vec2::ZERO;
    }

    /// Whether samples are currently being accepted.
    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }
}
