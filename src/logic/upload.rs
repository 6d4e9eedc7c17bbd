//! Upload Logic
//!
//! Pure functions deciding what the upload pane shows for a given outcome.

use crate::api::{download_path, UploadResult};
use crate::logic::formatting::sanitize_display;
use crate::model::upload::{UploadForm, UploadPanel};

/// Error shown when the service reports failure without saying why
const UNKNOWN_FAILURE: &str = "Unknown error";

/// Validate the form before any request is made
///
/// # Arguments
/// - `form`: Current field values
/// - `file_len`: Size of the file at `form.file_path`, or None if it is not a readable file
/// - `max_bytes`: Upload size limit
///
/// # Returns
/// Err with a user-facing message if the upload must not be sent
pub fn validate_upload_form(
    form: &UploadForm,
    file_len: Option<u64>,
    max_bytes: u64,
) -> Result<(), String> {
    if form.file_path.trim().is_empty() {
        return Err("Please choose a file to upload".to_string());
    }

    let Some(len) = file_len else {
        return Err(format!("Cannot read file: {}", form.file_path));
    };

    if len > max_bytes {
        return Err(format!(
            "File too large ({} bytes). Maximum size is {} bytes",
            len, max_bytes
        ));
    }

    Ok(())
}

/// Map a decoded upload response to the panel that should be shown
///
/// A success without a hash is treated as a failure: there is nothing to
/// link to.
pub fn panel_for_result(result: &UploadResult) -> UploadPanel {
    match (result.success, result.hash.as_deref()) {
        (true, Some(hash)) => UploadPanel::Success {
            hash: sanitize_display(hash),
            download_link: download_path(hash),
            filename: result.filename.as_deref().map(sanitize_display),
            size: result.size,
            code_word: result.code_word.as_deref().map(sanitize_display),
        },
        (true, None) => UploadPanel::Failure {
            message: "Server reported success but returned no hash".to_string(),
        },
        (false, _) => UploadPanel::Failure {
            message: sanitize_display(result.error.as_deref().unwrap_or(UNKNOWN_FAILURE)),
        },
    }
}

/// Whether the form should be cleared after this outcome
pub fn should_reset_form(panel: &UploadPanel) -> bool {
    matches!(panel, UploadPanel::Success { .. })
}
