//! UI Model
//!
//! This sub-model contains state that belongs to neither form:
//! focus, preferences, toast and quit flag.

use std::time::Instant;

use crate::Pane;

#[derive(Clone, Debug)]
pub struct UiModel {
    /// Pane receiving keystrokes
    pub focus: Pane,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool, focus: Pane) -> Self {
        Self {
            focus,
            vim_mode,
            toast_message: None,
            should_quit: false,
        }
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        self.toast_message.as_ref().is_some_and(|(_, timestamp)| {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        })
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
