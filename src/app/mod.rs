//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by pane.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in src/model/)
//! - Services (background API worker)
//! - Logic (pure business logic in src/logic/)
//!
//! Methods are kept as `impl App` but organized by functional domain
//! for better discoverability and maintainability.

pub(crate) mod search;
pub(crate) mod upload;

/// Build an `App` whose API requests land in the returned receiver instead of a worker
#[cfg(test)]
pub(crate) fn test_app(
    max_upload_bytes: u64,
) -> (
    crate::App,
    tokio::sync::mpsc::UnboundedReceiver<crate::services::api::ApiRequest>,
) {
    let (api_tx, requests) = tokio::sync::mpsc::unbounded_channel();
    let (_response_tx, api_rx) = tokio::sync::mpsc::unbounded_channel();

    let app = crate::App {
        model: crate::model::Model::new(false, true, true),
        client: crate::api::DcasClient::new("http://localhost:8080".to_string()),
        api_tx,
        api_rx,
        download_dir: std::env::temp_dir(),
        max_upload_bytes,
        started_at: std::time::Instant::now(),
    };

    (app, requests)
}
