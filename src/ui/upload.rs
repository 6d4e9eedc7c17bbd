//! Upload Pane UI
//!
//! Renders the upload form (file path + code word), the busy indicator while
//! a request is in flight, and the result panel of the last submission.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph, Wrap},
    Frame,
};

use crate::model::{UploadField, UploadModel, UploadPanel};
use crate::utils;

/// Period of the busy indicator sweep
const BUSY_PERIOD_MS: u128 = 1200;

fn input_line<'a>(label: &'a str, value: &'a str, active: bool) -> Line<'a> {
    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let mut spans = vec![
        Span::styled(label, Style::default().fg(Color::Gray)),
        Span::raw(value),
    ];
    if active {
        spans.push(Span::styled("█", cursor_style));
    }
    Line::from(spans)
}

/// Build the lines of the result panel (extracted for testability)
pub(crate) fn panel_lines(panel: &UploadPanel, base_url: &str) -> (Vec<Line<'static>>, Color) {
    match panel {
        UploadPanel::Success {
            hash,
            download_link,
            filename,
            size,
            code_word,
        } => {
            let mut lines = vec![
                Line::from(Span::styled(
                    "File uploaded successfully!",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("Hash: {}", hash)),
            ];
            if let Some(name) = filename {
                let size_text = size.map(utils::format_bytes).unwrap_or_default();
                lines.push(Line::from(format!("File: {} {}", name, size_text)));
            }
            if let Some(word) = code_word {
                lines.push(Line::from(format!("Code Word: {}", word)));
            }
            lines.push(Line::from(vec![
                Span::raw("Download: "),
                Span::styled(
                    format!("{}{}", base_url, download_link),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
                ),
            ]));
            (lines, Color::Green)
        }
        UploadPanel::Failure { message } | UploadPanel::Error { message } => (
            vec![Line::from(vec![
                Span::styled("Upload failed: ", Style::default().fg(Color::Red)),
                Span::raw(message.clone()),
            ])],
            Color::Red,
        ),
    }
}

pub fn render_upload_pane(
    f: &mut Frame,
    area: Rect,
    upload: &UploadModel,
    focused: bool,
    base_url: &str,
) {
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(" Upload ")
        .border_style(Style::default().fg(border_color));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let busy_height = if upload.in_progress { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // File path
            Constraint::Length(3),           // Code word
            Constraint::Length(busy_height), // Busy indicator
            Constraint::Min(0),              // Result panel
        ])
        .split(inner);

    for (idx, (field, label, value)) in [
        (UploadField::FilePath, "File: ", upload.form.file_path.as_str()),
        (UploadField::CodeWord, "Code word: ", upload.form.code_word.as_str()),
    ]
    .into_iter()
    .enumerate()
    {
        let active = focused && upload.focused_field == field;
        let style = if active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let input = Paragraph::new(input_line(label, value, active))
            .block(Block::default().borders(Borders::ALL).border_style(style));
        f.render_widget(input, chunks[idx]);
    }

    if upload.in_progress {
        let elapsed = upload
            .started_at
            .map(|t| t.elapsed().as_millis())
            .unwrap_or(0);
        let gauge = LineGauge::default()
            .filled_style(Style::default().fg(Color::Cyan))
            .label("Uploading ")
            .ratio(crate::logic::ui::busy_sweep_ratio(elapsed, BUSY_PERIOD_MS));
        f.render_widget(gauge, chunks[2]);
    }

    if let Some(panel) = &upload.panel {
        let (lines, color) = panel_lines(panel, base_url);
        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, chunks[3]);
    }
}
