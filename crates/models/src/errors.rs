use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed user-facing message for network failures and 5xx responses.
pub const INTERNAL_ERROR_MESSAGE: &str =
    "Sorry for the inconvenience. Internal server error. Try after sometime!";

/// Fallback message for sub-500 errors whose body carries no message.
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Fallback error label when the server supplies none.
pub const UNKNOWN_ERROR_LABEL: &str = "Unknown Error";

/// Error label for failures with no HTTP response at all.
pub const NETWORK_ERROR_LABEL: &str = "Network Error";

/// The single normalized failure shape surfaced by the client.
///
/// Every failed call rejects with exactly one of these, whether the failure
/// was transport-level (no response; `status == 0`) or an error status from
/// the server. Mirrors the backend's own error envelope so server-produced
/// bodies deserialize directly into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{error} ({status}): {message}")]
pub struct ApiError {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    #[serde(default)]
    pub path: String,
}

impl ApiError {
    /// Failure with no underlying HTTP response (DNS, refused, timeout).
    pub fn network(path: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status: 0,
            error: NETWORK_ERROR_LABEL.to_string(),
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            path: path.into(),
        }
    }
}
