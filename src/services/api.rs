use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::api::{DcasClient, SearchResponse, UploadResult};
use crate::log_debug;

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// Upload a local file with an optional code word
    Upload { file_path: PathBuf, code_word: String },

    /// Search by query; `seq` comes back with the response
    Search { seq: u64, query: String },

    /// Download a file by content hash into `dest_dir`
    Download {
        hash: String,
        filename: String,
        dest_dir: PathBuf,
    },

    /// Retrieve a file by code word and/or hash into `dest_dir`
    Receive {
        code_word: String,
        hash: String,
        dest_dir: PathBuf,
    },
}

impl ApiRequest {
    /// Short description for the debug log
    fn describe(&self) -> String {
        match self {
            ApiRequest::Upload { file_path, .. } => format!("Upload {}", file_path.display()),
            ApiRequest::Search { seq, query } => format!("Search #{} q={:?}", seq, query),
            ApiRequest::Download { hash, .. } => format!("Download {}", hash),
            ApiRequest::Receive { code_word, hash, .. } => {
                format!("Receive code_word={:?} hash={:?}", code_word, hash)
            }
        }
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    UploadResult {
        result: Result<UploadResult, anyhow::Error>,
    },

    SearchResult {
        seq: u64,
        query: String,
        response: Result<SearchResponse, anyhow::Error>,
    },

    DownloadResult {
        hash: String,
        path: Result<PathBuf, anyhow::Error>,
    },

    ReceiveResult {
        code_word: String,
        path: Result<PathBuf, anyhow::Error>,
    },
}

/// Internal message for tracking completed requests
pub(crate) enum InternalMessage {
    Completed(u64),
}

/// API service worker that runs requests in the background
///
/// Every request is attempted exactly once and produces exactly one response.
/// There is no queueing or deduplication: superseded searches are filtered by
/// sequence number on the receiving side.
pub struct ApiService {
    client: DcasClient,
    in_flight: usize,
    next_id: u64,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
}

impl ApiService {
    pub fn new(
        client: DcasClient,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            client,
            in_flight: 0,
            next_id: 0,
            response_tx,
            completion_tx,
        }
    }

    /// Spawn a task for the request
    fn dispatch(&mut self, request: ApiRequest) {
        self.next_id += 1;
        self.in_flight += 1;

        let id = self.next_id;
        let client = self.client.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();

        log_debug(&format!(
            "DEBUG [API Service]: START #{} {} ({} in flight)",
            id,
            request.describe(),
            self.in_flight
        ));

        // No per-request retries or timeout
        tokio::spawn(async move {
            let response = Self::execute_request(&client, request).await;

            let ok = match &response {
                ApiResponse::UploadResult { result } => result.is_ok(),
                ApiResponse::SearchResult { response, .. } => response.is_ok(),
                ApiResponse::DownloadResult { path, .. } => path.is_ok(),
                ApiResponse::ReceiveResult { path, .. } => path.is_ok(),
            };
            log_debug(&format!("DEBUG [API Service]: END #{} success={}", id, ok));

            let _ = response_tx.send(response);

            // Notify service that this request is complete
            let _ = completion_tx.send(InternalMessage::Completed(id));
        });
    }

    /// Execute an API request and return the response
    async fn execute_request(client: &DcasClient, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::Upload {
                file_path,
                code_word,
            } => {
                let result = client.upload(&file_path, &code_word).await;
                ApiResponse::UploadResult { result }
            }

            ApiRequest::Search { seq, query } => {
                let response = client.search(&query).await;
                ApiResponse::SearchResult {
                    seq,
                    query,
                    response,
                }
            }

            ApiRequest::Download {
                hash,
                filename,
                dest_dir,
            } => {
                let path = client.download(&hash, &filename, &dest_dir).await;
                ApiResponse::DownloadResult { hash, path }
            }

            ApiRequest::Receive {
                code_word,
                hash,
                dest_dir,
            } => {
                let path = client.receive(&code_word, &hash, &dest_dir).await;
                ApiResponse::ReceiveResult { code_word, path }
            }
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: DcasClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, response_tx, completion_tx);

        loop {
            tokio::select! {
                request = request_rx.recv() => {
                    match request {
                        Some(request) => service.dispatch(request),
                        // UI dropped its sender: shut down
                        None => break,
                    }
                }

                Some(InternalMessage::Completed(id)) = completion_rx.recv() => {
                    service.in_flight = service.in_flight.saturating_sub(1);
                    if service.in_flight > 0 {
                        log_debug(&format!(
                            "DEBUG [API Service]: #{} done, {} still in flight",
                            id, service.in_flight
                        ));
                    }
                }
            }
        }
    });

    (request_tx, response_rx)
}
