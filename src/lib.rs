//! dcastui library
//!
//! Exposes modules for testing

pub mod api;
pub mod model;
pub mod logic;

// Re-export common types from main.rs that are needed by other modules
// These will be made available at crate:: level

/// Which form currently receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Upload,
    Search,
}

impl Pane {
    pub fn as_str(&self) -> &str {
        match self {
            Pane::Upload => "Upload",
            Pane::Search => "Search",
        }
    }
}
