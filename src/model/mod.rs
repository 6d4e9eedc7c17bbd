//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models, one per pane:
//!
//! - **UploadModel**: Upload form fields, busy indicator, result panel
//! - **SearchModel**: Query, result panel, request sequencing
//! - **UiModel**: Focus, preferences, toast
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the App runtime
//! - Each pane mutates only its own sub-model

pub mod search;
pub mod ui;
pub mod upload;

pub use search::{SearchModel, SearchPanel};
pub use ui::UiModel;
pub use upload::{UploadField, UploadModel, UploadPanel};

use crate::Pane;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub upload: UploadModel,

    pub search: SearchModel,

    pub ui: UiModel,
}

impl Model {
    /// Create initial model; disabled panes are never focused
    pub fn new(vim_mode: bool, upload_enabled: bool, search_enabled: bool) -> Self {
        Self {
            upload: UploadModel::new(upload_enabled),
            search: SearchModel::new(search_enabled, vim_mode),
            ui: UiModel::new(
                vim_mode,
                crate::logic::ui::initial_pane(upload_enabled, search_enabled),
            ),
        }
    }

    /// Whether the pane is attached
    pub fn is_enabled(&self, pane: Pane) -> bool {
        match pane {
            Pane::Upload => self.upload.enabled,
            Pane::Search => self.search.enabled,
        }
    }

    /// Move focus to the next attached pane
    pub fn cycle_focus(&mut self) {
        self.ui.focus = crate::logic::ui::next_pane(
            self.ui.focus,
            self.upload.enabled,
            self.search.enabled,
        );
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}
