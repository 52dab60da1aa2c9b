//! Execution result shape.

use serde::{Deserialize, Serialize};

/// Uniform result of one job execution.
///
/// Always fully populated: a received HTTP response of any status maps its
/// own code and payload; a failure before or during transport maps to the
/// 500-coded request-error shape. Callers distinguish the two failure causes
/// only by the body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseData {
    /// HTTP status code, or 500 for transport and body-compilation failures.
    pub code: u16,
    /// Status line, e.g. `200 OK` or `500 Request Error`.
    pub status: String,
    /// Drained response body, or the error message on failure.
    pub body: String,
    /// JSON-serialized response headers; empty on failure.
    pub header: String,
}

impl ResponseData {
    /// The uniform shape for an attempt that produced no HTTP response.
    pub fn request_error(message: impl Into<String>) -> Self {
        Self {
            code: 500,
            status: "500 Request Error".to_string(),
            body: message.into(),
            header: String::new(),
        }
    }
}
