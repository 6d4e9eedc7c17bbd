//! API Response Handler
//!
//! Applies settled upload, search and download requests to the model.

use crate::logic;
use crate::services::api::ApiResponse;
use crate::App;

/// Handle API response from background service
///
/// Response types:
/// - UploadResult: Settles the upload pane (busy indicator always hidden)
/// - SearchResult: Fills the search pane unless a newer search superseded it
/// - DownloadResult / ReceiveResult: Report the saved path (or failure) as a toast
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::UploadResult { result } => {
            if let Err(e) = &result {
                crate::log_debug(&format!(
                    "DEBUG [UploadResult]: {:?}: {:#}",
                    logic::errors::classify_error(e),
                    e
                ));
            }

            let toast = match &result {
                Ok(r) if r.success => r
                    .hash
                    .as_deref()
                    .map(|h| format!("Uploaded ({})", logic::formatting::short_hash(h))),
                _ => None,
            };

            app.model.upload.finish(result);

            if let Some(message) = toast {
                app.model.show_toast(message);
            }
        }

        ApiResponse::SearchResult {
            seq,
            query,
            response,
        } => {
            if let Err(e) = &response {
                crate::log_debug(&format!(
                    "DEBUG [SearchResult]: #{} {:?}: {:#}",
                    seq,
                    logic::errors::classify_error(e),
                    e
                ));
            }

            if !app.model.search.apply_response(seq, response) {
                crate::log_debug(&format!(
                    "DEBUG [SearchResult]: discarding stale #{} q={:?} (latest #{})",
                    seq, query, app.model.search.latest_seq
                ));
            }
        }

        ApiResponse::DownloadResult { hash, path } => report_saved_file(app, &hash, path),

        ApiResponse::ReceiveResult { code_word, path } => {
            report_saved_file(app, &code_word, path)
        }
    }
}

/// Toast the saved path of a download or receive, or its failure
fn report_saved_file(app: &mut App, key: &str, path: anyhow::Result<std::path::PathBuf>) {
    match path {
        Ok(path) => {
            app.model
                .show_toast(format!("Saved {}", path.display()));
        }
        Err(e) => {
            crate::log_debug(&format!("DEBUG [SavedFile]: {} failed: {:#}", key, e));
            app.model.show_toast(format!(
                "Error: {}",
                logic::formatting::sanitize_display(&logic::errors::format_error_message(&e))
            ));
        }
    }
}
