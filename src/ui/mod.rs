// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, panes, legend)
// - render: Main orchestration function that coordinates all rendering
// - status_bar: Renders top header (service URL, focus, in-flight requests)
// - upload: Renders the upload form, busy indicator and result panel
// - search: Renders the search input and result blocks
// - legend: Renders hotkey legend
// - toast: Renders toast notifications (brief pop-up messages)

pub mod layout;
pub mod legend;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod toast;
pub mod upload;

// Re-export main render function for convenience
pub use render::render;
