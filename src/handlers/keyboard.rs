//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions.
//! Keys go to the focused pane; a few are global (quit, focus switch).

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{App, Pane};

/// Handle keyboard input
///
/// Processes all keyboard events and dispatches to appropriate actions.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Quit from anywhere
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    // Download works from either pane as long as a result is selected
    if ctrl && key.code == KeyCode::Char('d') {
        app.download_selected();
        return Ok(());
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.model.cycle_focus();
        return Ok(());
    }

    match app.model.ui.focus {
        Pane::Upload => handle_upload_key(app, key, ctrl),
        Pane::Search => handle_search_key(app, key, ctrl),
    }

    Ok(())
}

fn handle_upload_key(app: &mut App, key: KeyEvent, ctrl: bool) {
    if !app.model.is_enabled(Pane::Upload) {
        return;
    }

    match key.code {
        KeyCode::Enter => app.submit_upload(),
        KeyCode::Up | KeyCode::Down => {
            app.model.upload.focused_field = app.model.upload.focused_field.toggle();
        }
        KeyCode::Esc => app.model.upload.clear_panel(),
        KeyCode::Backspace => {
            app.model.upload.focused_text_mut().pop();
        }
        // Ctrl-U clears the focused field, as in a shell prompt
        KeyCode::Char('u') if ctrl => app.model.upload.focused_text_mut().clear(),
        KeyCode::Char(c) if !ctrl => app.model.upload.focused_text_mut().push(c),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent, ctrl: bool) {
    if !app.model.is_enabled(Pane::Search) {
        return;
    }

    // Receive by code word works in both edit and normal mode
    if ctrl && key.code == KeyCode::Char('r') {
        app.receive_by_code_word();
        return;
    }

    let vim_mode = app.model.ui.vim_mode;

    if app.model.search.editing {
        match key.code {
            KeyCode::Enter => {
                app.submit_search();
                if vim_mode {
                    app.model.search.editing = false;
                }
            }
            KeyCode::Esc => {
                if vim_mode {
                    app.model.search.editing = false;
                } else {
                    app.model.search.clear_panel();
                }
            }
            KeyCode::Up => app.model.search.select_previous(),
            KeyCode::Down => app.model.search.select_next(),
            KeyCode::Backspace => {
                app.model.search.query.pop();
            }
            KeyCode::Char('u') if ctrl => app.model.search.query.clear(),
            KeyCode::Char(c) if !ctrl => app.model.search.query.push(c),
            _ => {}
        }
        return;
    }

    // Vim normal mode
    match key.code {
        KeyCode::Char('i') | KeyCode::Char('/') => app.model.search.editing = true,
        KeyCode::Char('j') | KeyCode::Down => app.model.search.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.model.search.select_previous(),
        KeyCode::Char('d') => app.download_selected(),
        KeyCode::Char('r') => app.receive_by_code_word(),
        KeyCode::Enter => app.submit_search(),
        KeyCode::Esc => app.model.search.clear_panel(),
        _ => {}
    }
}
