//! In-memory job store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use firejob_core::{Job, JobError};

use crate::{JobStore, StoreError};

/// In-memory store for tests and embedding.
#[derive(Default)]
pub struct MemoryJobStore {
    jobs: RwLock<HashMap<String, Job>>,
}

impl MemoryJobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn save(&self, job: &Job) -> Result<(), StoreError> {
        let mut jobs = self.jobs.write().await;
        jobs.insert(job.id().to_string(), job.clone());
        Ok(())
    }

    async fn load(&self, id: &str) -> Result<Job, StoreError> {
        let jobs = self.jobs.read().await;
        match jobs.get(id) {
            Some(job) => Ok(job.clone()),
            None => Err(JobError::Construction(format!("no job record for '{}'", id)).into()),
        }
    }

    async fn load_all(&self) -> Result<Vec<Job>, StoreError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.values().cloned().collect())
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let mut jobs = self.jobs.write().await;
        jobs.remove(id);
        Ok(())
    }
}
