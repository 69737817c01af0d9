//! Local UI chrome state (emoji picker visibility).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`session`,
//! `chat`) so rendering controls can evolve independently of protocol data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub emoji_picker_open: bool,
}

impl UiState {
    pub fn toggle_emoji_picker(&mut self) {
        self.emoji_picker_open = !self.emoji_picker_open;
    }

    pub fn close_emoji_picker(&mut self) {
        self.emoji_picker_open = false;
    }
}
