//! Contact Diagnostics
//!
//! The collision layer reports what the capsule ran into or walked over.
//! Layer names and tag strings never reach this crate: the host resolves
//! contacted geometry to the closed enums below before calling in. Contact
//! events are purely diagnostic - nothing in the controller mutates state
//! because of them.

/// Solid geometry the capsule can collide with during a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolidKind {
    /// Rock obstacles.
    Rock,
    /// Forest trees.
    Tree,
    /// The tagged blue boulder variant.
    BlueRock,
}

/// Overlap-only geometry the capsule can pass through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    /// Mushroom pickups scattered on the forest floor.
    Mushroom,
}

/// Capability interface for contact notifications.
///
/// Implement this to surface collisions to the player (HUD, audio, logs).
/// The collision layer calls `on_solid_contact` when a sweep is blocked by
/// solid geometry and `on_trigger_enter` when the capsule enters an overlap
/// volume.
pub trait ContactEvents {
    /// The most recent move hit solid geometry of `kind`.
    fn on_solid_contact(&mut self, kind: SolidKind);

    /// The capsule entered a trigger volume of `kind`.
    fn on_trigger_enter(&mut self, kind: TriggerKind);
}

/// Console-logging implementation of [`ContactEvents`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactLogger;

impl ContactEvents for ContactLogger {
    fn on_solid_contact(&mut self, kind: SolidKind) {
        match kind {
            SolidKind::Rock => println!("[Contact] bumped into a solid rock"),
            SolidKind::Tree => println!("[Contact] bumped into a forest tree"),
            SolidKind::BlueRock => println!("[Contact] bumped into the blue rock"),
        }
    }

    fn on_trigger_enter(&mut self, kind: TriggerKind) {
        match kind {
            TriggerKind::Mushroom => println!("[Contact] walked over a mushroom"),
        }
    }
}
