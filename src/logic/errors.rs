use anyhow::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    NotFound,        // HTTP 404
    ServerError,     // HTTP 500+
    NetworkError,    // DNS, routing, etc.
    InvalidResponse, // Body was not the expected JSON
    Other,
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    if error.chain().any(|e| e.is::<serde_json::Error>()) {
        return ErrorType::InvalidResponse;
    }

    let error_msg = format!("{:#}", error).to_lowercase();

    // Check for connection-specific errors
    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }

    // Check for HTTP status codes (via reqwest error chain)
    if let Some(reqwest_err) = error.chain().find_map(|e| e.downcast_ref::<reqwest::Error>()) {
        if let Some(status) = reqwest_err.status() {
            return match status.as_u16() {
                404 => ErrorType::NotFound,
                500..=599 => ErrorType::ServerError,
                _ => ErrorType::Other,
            };
        }
    }

    // Network-level errors
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Format error message for display - show raw error details
///
/// Parse failures keep their context ("Failed to parse ... (HTTP 404)") since
/// the bare serde message says nothing about which request failed.
pub fn format_error_message(error: &Error) -> String {
    if error.chain().any(|e| e.is::<serde_json::Error>()) {
        return format!("{:#}", error);
    }

    // Walk the error chain to find reqwest::Error (most informative for network errors)
    for err in error.chain() {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
    }

    error.root_cause().to_string()
}
