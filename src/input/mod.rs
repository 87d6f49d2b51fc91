//! Input Module
//!
//! Holds the live input state for the character and the cursor-lock state
//! for the host window. The module is decoupled from any event-dispatch
//! mechanism: whatever input layer the host uses (winit, gilrs, a replay
//! file) feeds the state through discrete apply/cancel sample calls.

pub mod cursor;
pub mod state;

pub use cursor::CursorLock;
pub use state::InputState;
