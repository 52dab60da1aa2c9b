//! File-system backed job store.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use firejob_core::{Job, JobError};

use crate::{JobStore, StoreError};

/// One pretty-printed `<id>.json` file per job under a single directory.
pub struct FileJobStore {
    dir: PathBuf,
}

impl FileJobStore {
    /// Create a store rooted at `dir`, creating the directory when missing.
    pub async fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        debug!("FileJobStore initialized at {:?}", dir);
        Ok(Self { dir })
    }

    fn job_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_id(id)))
    }
}

/// Keep ids safe to use as file names.
fn sanitize_id(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[async_trait]
impl JobStore for FileJobStore {
    async fn save(&self, job: &Job) -> Result<(), StoreError> {
        let path = self.job_path(job.id());
        let record = serde_json::to_string_pretty(job).map_err(JobError::Serialization)?;
        fs::write(&path, record).await?;
        debug!("Saved job '{}' to {:?}", job.id(), path);
        Ok(())
    }

    async fn load(&self, id: &str) -> Result<Job, StoreError> {
        let path = self.job_path(id);
        let raw = fs::read_to_string(&path).await.unwrap_or_default();
        if raw.is_empty() {
            return Err(JobError::Construction(format!("no job record at {:?}", path)).into());
        }
        Ok(Job::from_json(&raw, "")?)
    }

    async fn load_all(&self) -> Result<Vec<Job>, StoreError> {
        let mut jobs = Vec::new();
        let mut entries = fs::read_dir(&self.dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "json") {
                continue;
            }
            match fs::read_to_string(&path).await {
                Ok(raw) => match Job::from_json(&raw, "") {
                    Ok(job) => jobs.push(job),
                    Err(e) => warn!("Skipping job record {:?}: {}", path, e),
                },
                Err(e) => warn!("Failed to read job record {:?}: {}", path, e),
            }
        }

        debug!("Loaded {} jobs from {:?}", jobs.len(), self.dir);
        Ok(jobs)
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let path = self.job_path(id);
        if path.exists() {
            fs::remove_file(&path).await?;
            debug!("Removed job '{}' from {:?}", id, path);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
