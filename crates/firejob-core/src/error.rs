//! Job error types.

use thiserror::Error;

/// Errors surfaced while constructing or serializing jobs.
#[derive(Debug, Error)]
pub enum JobError {
    /// The raw definition could not be decoded as JSON.
    #[error("invalid job definition: {0}")]
    Parse(serde_json::Error),

    /// The cron expression does not describe a valid schedule.
    #[error("invalid cron expression '{expr}': {reason}")]
    InvalidCron { expr: String, reason: String },

    /// The owner is missing from the member set.
    #[error("owner is not a member of the job")]
    NoAuthorization,

    /// The job could not be canonically serialized.
    #[error("job cannot be serialized: {0}")]
    Serialization(serde_json::Error),

    /// The job could not be created from the supplied source.
    #[error("job cannot be created: {0}")]
    Construction(String),
}
