//! # Firejob Store
//!
//! Persistence for firejob jobs: one JSON record per job, addressed by the
//! job's content-derived id. Loading always goes back through
//! `Job::from_json`, so stored records are subject to the same construction
//! invariants as freshly submitted ones.

use async_trait::async_trait;
use thiserror::Error;

use firejob_core::{Job, JobError};

mod file;
mod memory;

pub use file::FileJobStore;
pub use memory::MemoryJobStore;

/// Store error types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure.
    #[error("store i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The record failed job construction.
    #[error(transparent)]
    Job(#[from] JobError),
}

/// Job persistence trait.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Persist a job under its id.
    async fn save(&self, job: &Job) -> Result<(), StoreError>;

    /// Load and reconstruct the job with the given id.
    ///
    /// A missing or empty record is a construction error, not a distinct
    /// not-found case.
    async fn load(&self, id: &str) -> Result<Job, StoreError>;

    /// Load every readable job; entries that fail to parse or validate are
    /// skipped.
    async fn load_all(&self) -> Result<Vec<Job>, StoreError>;

    /// Remove the job with the given id.
    async fn remove(&self, id: &str) -> Result<(), StoreError>;
}
