use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top bar with the service URL
    pub header_area: Rect,
    /// Upload pane area (if attached)
    pub upload_area: Option<Rect>,
    /// Search pane area (if attached)
    pub search_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
}

/// Calculate the screen layout for all UI components
///
/// Both panes share the content row side by side; a single attached pane
/// takes the full width.
pub fn calculate_layout(
    terminal_size: Rect,
    upload_enabled: bool,
    search_enabled: bool,
    legend_height: u16,
) -> LayoutInfo {
    // Create main layout: header (top) + content area + legend (bottom)
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header (3 lines: top border, text, bottom border)
            Constraint::Min(6),                // Content area (panes)
            Constraint::Length(legend_height), // Legend area (dynamic height, exact fit for wrapped content)
        ])
        .split(terminal_size);

    let content_area = main_chunks[1];

    let (upload_area, search_area) = match (upload_enabled, search_enabled) {
        (true, true) => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
                .split(content_area);
            (Some(chunks[0]), Some(chunks[1]))
        }
        (true, false) => (Some(content_area), None),
        (false, true) => (None, Some(content_area)),
        (false, false) => (None, None),
    };

    LayoutInfo {
        header_area: main_chunks[0],
        upload_area,
        search_area,
        legend_area: main_chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_panes_split_width() {
        let info = calculate_layout(Rect::new(0, 0, 100, 40), true, true, 3);
        let upload = info.upload_area.unwrap();
        let search = info.search_area.unwrap();
        assert_eq!(upload.width + search.width, 100);
        assert_eq!(upload.y, 3);
        assert_eq!(info.legend_area.height, 3);
    }

    #[test]
    fn test_single_pane_full_width() {
        let info = calculate_layout(Rect::new(0, 0, 100, 40), false, true, 3);
        assert!(info.upload_area.is_none());
        assert_eq!(info.search_area.unwrap().width, 100);
    }
}
