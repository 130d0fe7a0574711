//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Transient presentation flags live here, away from theme and loading
//! state, so navigation chrome can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the splash gate and navigation chrome.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Set once the loading screen reports completion.
    pub loaded: bool,
    /// Mobile navigation drawer.
    pub menu_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn finish_loading(&mut self) {
        self.loaded = true;
        self.menu_open = false;
    }

    /// Bring the splash overlay back.
    pub fn replay_intro(&mut self) {
        self.loaded = false;
        self.menu_open = false;
    }
}
