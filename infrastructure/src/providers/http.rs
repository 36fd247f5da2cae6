//! Shared HTTP plumbing for the backend adapters

use campus_application::ports::text_generator::GenerationError;
use reqwest::StatusCode;
use std::time::Duration;

/// Longest error body excerpt carried into an error message
const MAX_ERROR_BODY: usize = 300;

/// Build a client with the per-call timeout
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, GenerationError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("campus-faq/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| GenerationError::Other(format!("Failed to build HTTP client: {}", e)))
}

/// Join a base URL and a path without doubling slashes
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Map a transport-level failure
pub fn map_transport_error(e: reqwest::Error) -> GenerationError {
    if e.is_timeout() {
        GenerationError::Timeout
    } else if e.is_connect() {
        GenerationError::ConnectionError(e.to_string())
    } else {
        GenerationError::RequestFailed(e.to_string())
    }
}

/// Map a non-success HTTP status
pub fn map_status_error(status: StatusCode, body: &str) -> GenerationError {
    let excerpt: String = body.chars().take(MAX_ERROR_BODY).collect();
    let detail = format!(
        "HTTP {} {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown"),
        excerpt.trim()
    );

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenerationError::Unauthorized(detail),
        StatusCode::NOT_FOUND => GenerationError::ModelNotAvailable(detail),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => GenerationError::Timeout,
        _ => GenerationError::RequestFailed(detail),
    }
}
