//! Cursor Lock State
//!
//! Tracks whether the cursor should be captured and hidden for play, or
//! released for menus. This is pure state - applying it to a window
//! (grab mode, visibility) is the host's job, queried through
//! `should_be_visible` / `should_be_grabbed`.

/// Cursor capture state for FPS-style play.
///
/// Starts locked: the game captures the cursor to the window center the
/// moment the character wakes up. Focus loss releases the grab without
/// forgetting the player's preference.
#[derive(Debug, Clone)]
pub struct CursorLock {
    locked: bool,
    has_focus: bool,
}

impl Default for CursorLock {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorLock {
    /// Create a cursor lock in the locked (playing) state.
    pub fn new() -> Self {
        Self {
            locked: true,
            has_focus: true,
        }
    }

    /// Whether the cursor is logically locked for play.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Capture the cursor for play.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Release the cursor for menu interaction.
    pub fn release(&mut self) {
        self.locked = false;
    }

    /// Record a window focus change.
    ///
    /// The lock preference is kept across focus loss so play resumes
    /// seamlessly when the window regains focus.
    pub fn set_focus(&mut self, has_focus: bool) {
        self.has_focus = has_focus;
    }

    /// Whether the host should show the OS cursor.
    pub fn should_be_visible(&self) -> bool {
        !(self.locked && self.has_focus)
    }

    /// Whether the host should grab/confine the OS cursor.
    pub fn should_be_grabbed(&self) -> bool {
        self.locked && self.has_focus
    }
}
