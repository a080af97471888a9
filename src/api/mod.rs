// TrustLens backend API client.
//
// Thin typed wrappers over the backend's JSON endpoints. All risk scoring
// and storage live server-side; this module only speaks the wire contract
// and sorts failures into the three buckets the UI layer cares about.

pub mod checks;
pub mod client;
pub mod metrics;
pub mod session;

pub use checks::{CheckResult, EmailCheckData, MobileCheckData, UrlCheckData};
pub use client::ApiClient;
pub use metrics::{Article, UsageMetrics};
pub use session::Session;

/// Failure taxonomy for backend calls.
///
/// Transport and Status failures are recoverable by user retry.
/// UnexpectedPayload means the wire contract itself is off — retrying
/// without a deploy fixing something won't help.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request never completed: connect failure, timeout, abort.
    #[error("network error — check your connection and try again")]
    Transport(#[source] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("{detail}")]
    Status { status: u16, detail: String },

    /// 2xx response whose body doesn't match the contract.
    #[error("unexpected API response")]
    UnexpectedPayload,
}

impl ApiError {
    /// Build a Status error, preferring the server's `detail` message and
    /// falling back to "HTTP <status>".
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("detail")?.as_str().map(String::from))
            .unwrap_or_else(|| format!("HTTP {status}"));
        ApiError::Status { status, detail }
    }
}
