use crate::model::SearchPanel;
use crate::App;
use ratatui::Frame;

use super::{layout, legend, search, status_bar, toast, upload};

/// Spinner frame length
const SPINNER_FRAME_MS: u128 = 150;

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let model = &app.model;

    let has_results = !model.search.results().is_empty();
    let both_panes = model.upload.enabled && model.search.enabled;

    let legend_height = legend::calculate_legend_height(
        size.width,
        model.ui.vim_mode,
        model.ui.focus,
        model.search.editing,
        has_results,
        both_panes,
    );

    let layout_info = layout::calculate_layout(
        size,
        model.upload.enabled,
        model.search.enabled,
        legend_height,
    );

    status_bar::render_header(
        f,
        layout_info.header_area,
        app.client.base_url(),
        model.ui.focus,
        model.upload.in_progress,
        model.search.panel == SearchPanel::Loading,
    );

    if let Some(area) = layout_info.upload_area {
        upload::render_upload_pane(
            f,
            area,
            &model.upload,
            model.ui.focus == crate::Pane::Upload,
            app.client.base_url(),
        );
    }

    if let Some(area) = layout_info.search_area {
        let tick = (app.started_at.elapsed().as_millis() / SPINNER_FRAME_MS) as usize;
        search::render_search_pane(
            f,
            area,
            &model.search,
            model.ui.focus == crate::Pane::Search,
            app.client.base_url(),
            tick,
        );
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        model.ui.vim_mode,
        model.ui.focus,
        model.search.editing,
        has_results,
        both_panes,
    );

    // Toast is drawn last so it sits on top of the panes
    if let Some((message, _)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
