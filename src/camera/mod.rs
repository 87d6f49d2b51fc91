//! Camera Module
//!
//! Everything the controller does to cameras: body/head rotation from look
//! input, the procedural head-bob offset, and the two-camera rig with its
//! first-person / third-person switch.

pub mod head_bob;
pub mod look;
pub mod rig;

pub use head_bob::HeadBob;
pub use look::LookController;
pub use rig::{CameraRig, CameraSocket, ViewMode};
