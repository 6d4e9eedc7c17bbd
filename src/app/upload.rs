//! Upload submission
//!
//! Validates the form locally, then hands the upload to the API worker.

use std::path::PathBuf;

use crate::{log_debug, logic, services, App};

impl App {
    /// Submit the upload form
    ///
    /// Exactly one request is sent per accepted submission. Validation
    /// failures are shown in the result panel and send nothing.
    pub(crate) fn submit_upload(&mut self) {
        if !self.model.upload.enabled {
            return;
        }

        if self.model.upload.in_progress {
            self.model
                .show_toast("Error: An upload is already in progress".to_string());
            return;
        }

        // Path is used exactly as typed
        let form = self.model.upload.form.clone();
        let file_path = PathBuf::from(&form.file_path);

        let file_len = std::fs::metadata(&file_path)
            .ok()
            .filter(|m| m.is_file())
            .map(|m| m.len());

        if let Err(message) =
            logic::upload::validate_upload_form(&form, file_len, self.max_upload_bytes)
        {
            log_debug(&format!("DEBUG [submit_upload]: rejected locally: {}", message));
            self.model.upload.reject(message);
            return;
        }

        if !self.model.upload.begin() {
            return;
        }

        log_debug(&format!(
            "DEBUG [submit_upload]: sending {} ({} bytes)",
            file_path.display(),
            file_len.unwrap_or(0)
        ));

        let request = services::api::ApiRequest::Upload {
            file_path,
            code_word: form.code_word,
        };
        if self.api_tx.send(request).is_err() {
            self.model.upload.finish(Err(anyhow::anyhow!("API worker stopped")));
        }
    }
}
