//! # Firejob Core
//!
//! Core types for schedulable HTTP request jobs. A [`Job`] couples a cron
//! trigger, an ownership record, and one outbound HTTP request description.
//! The crate answers "should this job fire at time T?" ([`Job::is_run`]) and
//! "what is this job's identity?" ([`Job::compute_id`]), and leaves the
//! polling loop and request dispatch to the caller.
//!
//! ## Modules
//!
//! - [`job`]: the aggregate entity and its lifecycle operations
//! - [`trigger`]: cron parsing and trigger-instant matching
//! - [`identity`]: content-addressed hashing
//! - [`ownership`]: owner/member record and authorization predicates
//! - [`error`]: the closed error taxonomy

pub mod error;
pub mod identity;
pub mod job;
pub mod ownership;
pub mod trigger;

pub use error::JobError;
pub use job::{Extra, Job, JobOptions, RequestSpec};
pub use ownership::{Admin, DEFAULT_OWNER};
