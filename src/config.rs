//! Player Tuning Configuration
//!
//! Defines every gameplay constant of the controller as a data structure,
//! enabling designers to retune a build from a JSON file instead of editing
//! source. `PlayerTuning::default()` returns the shipped values; the same
//! struct round-trips through `serde_json` for on-disk tuning files.

use std::path::Path;

use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

/// Horizontal walk speed in meters per second.
pub const MOVE_SPEED: f32 = 5.0;

/// Look sensitivity in degrees per raw input count.
pub const MOUSE_SENSITIVITY: f32 = 0.2;

/// Upward velocity applied on jump, in m/s.
pub const JUMP_IMPULSE: f32 = 5.0;

/// Gravity acceleration in m/s^2 (negative = downward).
pub const GRAVITY: f32 = -9.81;

/// Vertical velocity while standing on ground, in m/s.
///
/// A small downward bias rather than zero, so the next vertical move keeps
/// the mover pressed against the floor and the grounded query stays true.
pub const GROUNDED_VELOCITY: f32 = -1.0;

/// Head-bob oscillation rate in radians per second of movement.
pub const BOB_FREQUENCY: f32 = 5.0;

/// Head-bob peak vertical offset in meters.
pub const BOB_AMPLITUDE: f32 = 0.05;

/// Rate at which the camera settles back to rest height when idle (1/s).
pub const IDLE_RETURN_RATE: f32 = 10.0;

/// Head pitch limit in degrees, applied symmetrically.
pub const PITCH_LIMIT_DEG: f32 = 80.0;

/// Height above the body origin the third-person camera looks at, in meters.
pub const LOOK_TARGET_HEIGHT: f32 = 1.5;

/// Movement input magnitude below which analog drift is ignored.
pub const MOVE_DEAD_ZONE: f32 = 0.1;

// The pitch clamp must stay short of gimbal lock, and the bob must oscillate.
const_assert!(PITCH_LIMIT_DEG < 90.0);
const_assert!(BOB_FREQUENCY > 0.0);
const_assert!(BOB_AMPLITUDE >= 0.0);

/// All tunable controller values in one struct.
///
/// Fields map one-to-one onto the constants above; `Default` carries the
/// shipped values. Loaded files are validated before use, so a bad tuning
/// file fails at load time rather than producing NaN motion at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerTuning {
    pub move_speed: f32,
    pub mouse_sensitivity: f32,
    pub jump_impulse: f32,
    pub gravity: f32,
    pub grounded_velocity: f32,
    pub bob_frequency: f32,
    pub bob_amplitude: f32,
    pub idle_return_rate: f32,
    pub pitch_limit_deg: f32,
    pub look_target_height: f32,
    pub move_dead_zone: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            mouse_sensitivity: MOUSE_SENSITIVITY,
            jump_impulse: JUMP_IMPULSE,
            gravity: GRAVITY,
            grounded_velocity: GROUNDED_VELOCITY,
            bob_frequency: BOB_FREQUENCY,
            bob_amplitude: BOB_AMPLITUDE,
            idle_return_rate: IDLE_RETURN_RATE,
            pitch_limit_deg: PITCH_LIMIT_DEG,
            look_target_height: LOOK_TARGET_HEIGHT,
            move_dead_zone: MOVE_DEAD_ZONE,
        }
    }
}

impl PlayerTuning {
    /// Check that every value is usable by the controller.
    ///
    /// The per-frame code performs no defensive checks, so everything that
    /// could misbehave is rejected here instead.
    pub fn validate(&self) -> Result<(), TuningError> {
        if !self.move_speed.is_finite() || self.move_speed < 0.0 {
            return Err(TuningError::InvalidValue("move_speed must be >= 0"));
        }
        if !self.mouse_sensitivity.is_finite() {
            return Err(TuningError::InvalidValue("mouse_sensitivity must be finite"));
        }
        if !self.gravity.is_finite() || self.gravity > 0.0 {
            return Err(TuningError::InvalidValue("gravity must be <= 0"));
        }
        if !self.grounded_velocity.is_finite() || self.grounded_velocity >= 0.0 {
            return Err(TuningError::InvalidValue("grounded_velocity must be < 0"));
        }
        if !self.jump_impulse.is_finite() || self.jump_impulse < 0.0 {
            return Err(TuningError::InvalidValue("jump_impulse must be >= 0"));
        }
        if !self.pitch_limit_deg.is_finite()
            || self.pitch_limit_deg <= 0.0
            || self.pitch_limit_deg >= 90.0
        {
            return Err(TuningError::InvalidValue(
                "pitch_limit_deg must be in (0, 90)",
            ));
        }
        if !self.bob_frequency.is_finite() || self.bob_frequency <= 0.0 {
            return Err(TuningError::InvalidValue("bob_frequency must be > 0"));
        }
        if !self.bob_amplitude.is_finite() || self.bob_amplitude < 0.0 {
            return Err(TuningError::InvalidValue("bob_amplitude must be >= 0"));
        }
        if !self.idle_return_rate.is_finite() || self.idle_return_rate <= 0.0 {
            return Err(TuningError::InvalidValue("idle_return_rate must be > 0"));
        }
        if !self.move_dead_zone.is_finite() || self.move_dead_zone < 0.0 {
            return Err(TuningError::InvalidValue("move_dead_zone must be >= 0"));
        }
        Ok(())
    }

    /// Load and validate a tuning file from disk.
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let data = std::fs::read_to_string(path)?;
        let tuning: Self = serde_json::from_str(&data)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Write the tuning to disk as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), TuningError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Errors that can occur loading or validating a tuning file.
#[derive(Debug)]
pub enum TuningError {
    /// A value is outside the range the controller can integrate.
    InvalidValue(&'static str),
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningError::InvalidValue(msg) => write!(f, "invalid tuning value: {msg}"),
            TuningError::IoError(e) => write!(f, "IO error: {e}"),
            TuningError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for TuningError {}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::IoError(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::JsonError(e)
    }
}
