//! Search Pane UI
//!
//! Renders the query input and the result area: warning, spinner, result
//! blocks, "no results" or error.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::api::{download_path, SearchResultItem};
use crate::logic::search::code_word_label;
use crate::model::{SearchModel, SearchPanel};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// One result block: filename, hash, code word, download link
pub(crate) fn result_block(item: &SearchResultItem, base_url: &str) -> Text<'static> {
    Text::from(vec![
        Line::from(Span::styled(
            item.filename.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("  Hash: {}", item.hash)),
        Line::from(format!("  Code Word: {}", code_word_label(item))),
        Line::from(Span::styled(
            format!("  {}{}", base_url, download_path(&item.hash)),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
    ])
}

/// Message panel for every non-result state: (text, border color)
pub(crate) fn status_message(panel: &SearchPanel, tick: usize) -> Option<(String, Color)> {
    match panel {
        SearchPanel::Idle => None,
        SearchPanel::Warning => Some(("Please enter a search term".to_string(), Color::Yellow)),
        SearchPanel::Loading => Some((
            format!("{} Loading...", SPINNER[tick % SPINNER.len()]),
            Color::Cyan,
        )),
        SearchPanel::NoResults => Some(("No results found".to_string(), Color::Blue)),
        SearchPanel::Error { message } => Some((format!("Search failed: {}", message), Color::Red)),
        SearchPanel::Results(_) => None,
    }
}

/// Render the search input box
///
/// # Arguments
/// - `query`: Current search query
/// - `active`: Whether input is actively receiving keystrokes
fn render_search_input(f: &mut Frame, area: Rect, query: &str, active: bool) {
    let border_color = if active { Color::Cyan } else { Color::DarkGray };

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if active {
        Line::from(vec![
            Span::raw("Query: "),
            Span::raw(query),
            Span::styled("█", cursor_style), // Blinking cursor
        ])
    } else {
        Line::from(vec![Span::styled(
            format!("Query: {}", query),
            Style::default().fg(Color::Gray),
        )])
    };

    let paragraph = Paragraph::new(vec![input_line]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );

    f.render_widget(paragraph, area);
}

pub fn render_search_pane(
    f: &mut Frame,
    area: Rect,
    search: &SearchModel,
    focused: bool,
    base_url: &str,
    tick: usize,
) {
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let title = match &search.panel {
        SearchPanel::Results(items) => format!(" Search ({} results) ", items.len()),
        _ => " Search ".to_string(),
    };
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    render_search_input(f, chunks[0], &search.query, focused && search.editing);

    if let SearchPanel::Results(items) = &search.panel {
        let list_items: Vec<ListItem> = items
            .iter()
            .map(|item| ListItem::new(result_block(item, base_url)))
            .collect();

        let list = List::new(list_items)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("> ");

        let mut state = ListState::default();
        state.select(search.selected);
        f.render_stateful_widget(list, chunks[1], &mut state);
        return;
    }

    if let Some((message, color)) = status_message(&search.panel, tick) {
        let paragraph = Paragraph::new(message)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, chunks[1]);
    }
}
