//! Request preparation errors.

use thiserror::Error;

/// Errors raised while preparing a request for transmission.
///
/// None of these escape the runner: each is folded into the uniform
/// 500-coded result shape before it reaches the caller.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The body is not valid JSON after compilation.
    #[error("body is not valid json: {0}")]
    MalformedBody(String),

    /// Normalization produced an empty payload for a non-empty body.
    #[error("compiled body is empty")]
    EmptyBody,

    /// The HTTP method is not a valid token.
    #[error("invalid http method '{0}'")]
    InvalidMethod(String),
}
