use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::Pane;

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(
    vim_mode: bool,
    focus: Pane,
    search_editing: bool,
    has_results: bool,
    both_panes: bool,
) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    if both_panes {
        hotkey_spans.extend(vec![key("Tab"), Span::raw(":Switch pane  ")]);
    }

    match focus {
        Pane::Upload => {
            hotkey_spans.extend(vec![
                key("↑/↓"),
                Span::raw(":Field  "),
                key("Enter"),
                Span::raw(":Upload  "),
                key("^u"),
                Span::raw(":Clear field  "),
                key("Esc"),
                Span::raw(":Dismiss  "),
            ]);
        }
        Pane::Search if vim_mode && !search_editing => {
            hotkey_spans.extend(vec![
                key("i or /"),
                Span::raw(":Edit query  "),
                key("j/k"),
                Span::raw(":Select  "),
                key("Enter"),
                Span::raw(":Search  "),
                key("r"),
                Span::raw(":Receive by code word  "),
            ]);
            if has_results {
                hotkey_spans.extend(vec![key("d"), Span::raw(":Download  ")]);
            }
            hotkey_spans.extend(vec![key("Esc"), Span::raw(":Dismiss  ")]);
        }
        Pane::Search => {
            hotkey_spans.extend(vec![
                key("Enter"),
                Span::raw(":Search  "),
                key("^r"),
                Span::raw(":Receive by code word  "),
            ]);
            if has_results {
                hotkey_spans.extend(vec![key("↑/↓"), Span::raw(":Select  ")]);
            }
            hotkey_spans.extend(vec![
                key("Esc"),
                Span::raw(if vim_mode { ":Stop editing  " } else { ":Dismiss  " }),
            ]);
        }
    }

    if has_results {
        hotkey_spans.extend(vec![key("^d"), Span::raw(":Download selected  ")]);
    }

    hotkey_spans.extend(vec![key("^q"), Span::raw(":Quit")]);

    hotkey_spans
}

fn build_legend_paragraph(
    vim_mode: bool,
    focus: Pane,
    search_editing: bool,
    has_results: bool,
    both_panes: bool,
) -> Paragraph<'static> {
    let hotkey_spans =
        build_hotkey_spans(vim_mode, focus, search_editing, has_results, both_panes);

    Paragraph::new(vec![Line::from(hotkey_spans)])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Hotkeys")
                .style(Style::default().fg(Color::Gray)),
        )
        .wrap(ratatui::widgets::Wrap { trim: false })
}

pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    vim_mode: bool,
    focus: Pane,
    search_editing: bool,
    has_results: bool,
    both_panes: bool,
) {
    let legend =
        build_legend_paragraph(vim_mode, focus, search_editing, has_results, both_panes);
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    vim_mode: bool,
    focus: Pane,
    search_editing: bool,
    has_results: bool,
    both_panes: bool,
) -> u16 {
    // Build paragraph WITHOUT block borders for accurate line counting
    // (line_count() doesn't account for borders correctly when block is attached)
    let hotkey_line = Line::from(build_hotkey_spans(
        vim_mode,
        focus,
        search_editing,
        has_results,
        both_panes,
    ));

    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    // Calculate available width (subtract left + right borders)
    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add 2 for top and bottom borders
    (line_count as u16).saturating_add(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn test_upload_legend() {
        let text = spans_to_text(&build_hotkey_spans(false, Pane::Upload, true, false, true));
        assert!(text.contains("Enter:Upload"), "got: {}", text);
        assert!(text.contains("Tab:Switch pane"), "got: {}", text);
        assert!(!text.contains("Download"), "got: {}", text);
    }

    #[test]
    fn test_single_pane_hides_switch() {
        let text = spans_to_text(&build_hotkey_spans(false, Pane::Search, true, false, false));
        assert!(!text.contains("Switch pane"), "got: {}", text);
    }

    #[test]
    fn test_download_shown_with_results() {
        let text = spans_to_text(&build_hotkey_spans(false, Pane::Search, true, true, true));
        assert!(text.contains("^d:Download selected"), "got: {}", text);
    }

    #[test]
    fn test_vim_normal_mode_keys() {
        let text = spans_to_text(&build_hotkey_spans(true, Pane::Search, false, true, true));
        assert!(text.contains("j/k:Select"), "got: {}", text);
        assert!(text.contains("d:Download"), "got: {}", text);
    }

    #[test]
    fn test_legend_height_wraps_on_narrow_terminal() {
        let wide = calculate_legend_height(200, false, Pane::Upload, true, false, true);
        let narrow = calculate_legend_height(30, false, Pane::Upload, true, false, true);
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }

    #[test]
    fn test_receive_key_in_search_pane() {
        let text = spans_to_text(&build_hotkey_spans(false, Pane::Search, true, false, true));
        assert!(text.contains("^r:Receive by code word"), "got: {}", text);

        let text = spans_to_text(&build_hotkey_spans(true, Pane::Search, false, false, true));
        assert!(text.contains("r:Receive by code word"), "got: {}", text);
    }
}
