use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::logic::formatting::truncate_to_width;

/// Toast styling: error toasts start with "Error:"
fn toast_style(message: &str) -> (&'static str, Color) {
    if message.starts_with("Error:") {
        ("✗ ", Color::Red)
    } else {
        ("✓ ", Color::Green)
    }
}

/// Render a toast notification (brief pop-up message) above the legend
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    let max_text = (area.width as usize).min(80).saturating_sub(6);
    let text = truncate_to_width(message, max_text);

    let toast_width = (text.width() + 6).min(area.width as usize) as u16;
    let toast_height = 3;

    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(toast_width) / 2,
        y: area.y + area.height.saturating_sub(toast_height + 1),
        width: toast_width,
        height: toast_height.min(area.height),
    };

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    let (icon, color) = toast_style(message);
    let toast_line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(text),
    ]);

    let toast = Paragraph::new(vec![toast_line])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        )
        .alignment(Alignment::Center);

    f.render_widget(toast, toast_area);
}
