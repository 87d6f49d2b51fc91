//! Head Bob Effect
//!
//! A low-amplitude sinusoidal vertical offset on the head camera while the
//! character walks, simulating footstep rhythm. The waveform phase only
//! advances while grounded and moving; stopping freezes the phase (never
//! resets it) so the next movement burst continues the rhythm instead of
//! restarting mid-step. When idle the camera eases back to its rest height.
//!
//! Frequency and amplitude are fixed tuning constants, deliberately not
//! derived from actual velocity magnitude.

use glam::Vec2;

use crate::config::{BOB_AMPLITUDE, BOB_FREQUENCY, IDLE_RETURN_RATE, MOVE_DEAD_ZONE, PlayerTuning};

/// Procedural head-bob state.
#[derive(Debug, Clone)]
pub struct HeadBob {
    frequency: f32,
    amplitude: f32,
    return_rate: f32,
    dead_zone: f32,
    phase: f32,
}

impl Default for HeadBob {
    fn default() -> Self {
        Self {
            frequency: BOB_FREQUENCY,
            amplitude: BOB_AMPLITUDE,
            return_rate: IDLE_RETURN_RATE,
            dead_zone: MOVE_DEAD_ZONE,
            phase: 0.0,
        }
    }
}

impl HeadBob {
    /// Create a head bob with the default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a head bob from a tuning struct.
    pub fn from_tuning(tuning: &PlayerTuning) -> Self {
        Self {
            frequency: tuning.bob_frequency,
            amplitude: tuning.bob_amplitude,
            return_rate: tuning.idle_return_rate,
            dead_zone: tuning.move_dead_zone,
            phase: 0.0,
        }
    }

    /// Current waveform phase in radians.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Advance one frame and return the head camera's new local height.
    ///
    /// `camera_y` is the camera's current local height and `rest_height`
    /// its resting height. Airborne frames return `camera_y` unchanged:
    /// the offset is left exactly as last computed until landing.
    pub fn update(
        &mut self,
        dt: f32,
        move_axis: Vec2,
        grounded: bool,
        rest_height: f32,
        camera_y: f32,
    ) -> f32 {
        if !grounded {
            return camera_y;
        }

        // Clamp delta time to prevent lerp overshoot on frame hitches.
        let dt = dt.clamp(0.0001, 0.1);

        if move_axis.length() > self.dead_zone {
            self.phase += dt * self.frequency;
            rest_height + self.phase.sin() * self.amplitude
        } else {
            // Ease back to rest; the phase stays frozen for the next burst.
            // A factor above 1 would overshoot past rest and oscillate, so
            // aggressive return rates saturate into an instant snap.
            lerp(camera_y, rest_height, (dt * self.return_rate).min(1.0))
        }
    }
}

/// Linear interpolation between two values.
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
