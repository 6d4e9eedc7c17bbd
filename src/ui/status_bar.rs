use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::Pane;

/// Render the top header bar: service URL, focused pane, in-flight requests
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    base_url: &str,
    focus: Pane,
    upload_busy: bool,
    search_busy: bool,
) {
    let mut spans = vec![
        Span::styled("Server: ", Style::default().fg(Color::Gray)),
        Span::raw(base_url.to_string()),
        Span::raw("  │  "),
        Span::styled("Focus: ", Style::default().fg(Color::Gray)),
        Span::styled(focus.as_str().to_string(), Style::default().fg(Color::Cyan)),
    ];

    let busy: Vec<&str> = [(upload_busy, "uploading"), (search_busy, "searching")]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, label)| *label)
        .collect();
    if !busy.is_empty() {
        spans.push(Span::raw("  │  "));
        spans.push(Span::styled(busy.join(", "), Style::default().fg(Color::Yellow)));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" dcastui ")
            .style(Style::default().fg(Color::White)),
    );

    f.render_widget(header, area);
}
