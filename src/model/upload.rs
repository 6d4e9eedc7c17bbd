//! Upload Model
//!
//! State owned by the upload pane: form fields, busy indicator and the
//! result panel of the last submission.

use std::time::Instant;

use crate::api::UploadResult;
use crate::logic;

/// Current values of the upload form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadForm {
    /// Path of the local file to send
    pub file_path: String,

    /// Optional label sent as `code_word`
    pub code_word: String,
}

impl UploadForm {
    pub fn reset(&mut self) {
        self.file_path.clear();
        self.code_word.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.file_path.is_empty() && self.code_word.is_empty()
    }
}

/// Form field receiving keystrokes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadField {
    FilePath,
    CodeWord,
}

impl UploadField {
    pub fn toggle(self) -> Self {
        match self {
            UploadField::FilePath => UploadField::CodeWord,
            UploadField::CodeWord => UploadField::FilePath,
        }
    }
}

/// Rendered outcome of the last upload
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadPanel {
    /// Stored; the hash is the download key
    Success {
        hash: String,
        download_link: String,
        filename: Option<String>,
        size: Option<u64>,
        code_word: Option<String>,
    },

    /// Rejected, either by the service (`success: false`) or before sending
    Failure { message: String },

    /// Transport or parse failure
    Error { message: String },
}

#[derive(Clone, Debug)]
pub struct UploadModel {
    /// Pane attached at startup
    pub enabled: bool,

    pub form: UploadForm,

    pub focused_field: UploadField,

    /// Busy indicator visibility
    pub in_progress: bool,

    /// When the in-flight upload started (drives the indicator animation)
    pub started_at: Option<Instant>,

    pub panel: Option<UploadPanel>,
}

impl UploadModel {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            form: UploadForm::default(),
            focused_field: UploadField::FilePath,
            in_progress: false,
            started_at: None,
            panel: None,
        }
    }

    /// Mutable access to the focused field's text
    pub fn focused_text_mut(&mut self) -> &mut String {
        match self.focused_field {
            UploadField::FilePath => &mut self.form.file_path,
            UploadField::CodeWord => &mut self.form.code_word,
        }
    }

    /// Show the busy indicator and clear the previous result
    ///
    /// Returns false (and changes nothing) if an upload is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.in_progress {
            return false;
        }
        self.in_progress = true;
        self.started_at = Some(Instant::now());
        self.panel = None;
        true
    }

    /// Record a validation failure raised before any request was sent
    pub fn reject(&mut self, message: String) {
        self.panel = Some(UploadPanel::Failure { message });
    }

    /// Apply the settled outcome of an upload
    ///
    /// The busy indicator is hidden on every path. The form is cleared only
    /// on success.
    pub fn finish(&mut self, outcome: anyhow::Result<UploadResult>) {
        let panel = match outcome {
            Ok(result) => logic::upload::panel_for_result(&result),
            Err(e) => UploadPanel::Error {
                message: logic::formatting::sanitize_display(
                    &logic::errors::format_error_message(&e),
                ),
            },
        };

        if logic::upload::should_reset_form(&panel) {
            self.form.reset();
            self.focused_field = UploadField::FilePath;
        }

        self.panel = Some(panel);
        self.hide_busy();
    }

    /// Hide the busy indicator (idempotent)
    pub fn hide_busy(&mut self) {
        self.in_progress = false;
        self.started_at = None;
    }

    pub fn clear_panel(&mut self) {
        self.panel = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> UploadModel {
        let mut model = UploadModel::new(true);
        model.form.file_path = "/tmp/a.txt".to_string();
        model.form.code_word = "alpha".to_string();
        model
    }

    #[test]
    fn test_begin_rejects_second_upload() {
        let mut model = filled();
        assert!(model.begin());
        assert!(model.in_progress);
        assert!(!model.begin());
    }

    #[test]
    fn test_begin_clears_previous_panel() {
        let mut model = filled();
        model.reject("old".to_string());
        assert!(model.begin());
        assert!(model.panel.is_none());
    }

    #[test]
    fn test_transport_error_keeps_form() {
        let mut model = filled();
        model.begin();
        model.finish(Err(anyhow::anyhow!("connection refused")));

        assert!(!model.in_progress);
        assert_eq!(
            model.panel,
            Some(UploadPanel::Error {
                message: "connection refused".to_string()
            })
        );
        assert_eq!(model.form.code_word, "alpha");
    }

    #[test]
    fn test_hide_busy_idempotent() {
        let mut model = filled();
        model.hide_busy();
        model.hide_busy();
        assert!(!model.in_progress);
        assert!(model.started_at.is_none());
    }

    #[test]
    fn test_focused_text_mut() {
        let mut model = UploadModel::new(true);
        model.focused_text_mut().push('x');
        model.focused_field = model.focused_field.toggle();
        model.focused_text_mut().push('y');
        assert_eq!(model.form.file_path, "x");
        assert_eq!(model.form.code_word, "y");
    }
}
