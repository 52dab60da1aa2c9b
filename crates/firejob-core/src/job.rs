//! Job entity: construction, trigger check, serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::JobError;
use crate::identity;
use crate::ownership::{Admin, DEFAULT_OWNER};
use crate::trigger;

/// HTTP request description carried by a job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestSpec {
    /// Target URL.
    pub url: String,
    /// HTTP method; matched case-insensitively, upper-cased at execution.
    pub method: String,
    /// Declared content type, sent as `<contentType>; charset=utf-8`.
    pub content_type: String,
    /// Free-form body, normalized to JSON before transmission.
    pub body: String,
    /// Extra header block, carried verbatim with the record.
    pub header: String,
}

/// Free-form extension record; not interpreted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extra {
    /// Discriminator for embedding systems.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Construction options.
#[derive(Debug, Clone)]
pub struct JobOptions {
    /// Principal assigned when the incoming definition has no owner.
    pub default_owner: String,
}

impl Default for JobOptions {
    fn default() -> Self {
        Self {
            default_owner: DEFAULT_OWNER.to_string(),
        }
    }
}

/// A schedulable definition of one HTTP call plus trigger and ownership
/// metadata.
///
/// `id` and `createDate` are frozen at construction. `name`, `request`, the
/// active flag, and ownership may change over the job's lifetime; the id is
/// never re-derived from them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    id: String,
    /// Display label; no uniqueness constraint.
    pub name: String,
    cron: String,
    /// The request issued when the job fires.
    pub request: RequestSpec,
    inactive: bool,
    #[serde(rename = "createDate")]
    create_date: String,
    admin: Admin,
    /// Extension record, persisted but not interpreted.
    pub extra: Extra,
}

impl Job {
    /// Create a job in memory, owned by `owner` (default owner when empty).
    pub fn new(
        name: impl Into<String>,
        cron: impl Into<String>,
        request: RequestSpec,
        owner: &str,
    ) -> Result<Self, JobError> {
        let mut job = Job {
            name: name.into(),
            cron: cron.into(),
            request,
            ..Job::default()
        };
        trigger::parse(&job.cron)?;

        job.admin.assign_owner(owner, DEFAULT_OWNER);
        job.create_date = Utc::now().to_rfc3339();
        job.id = job.compute_id()?;
        Ok(job)
    }

    /// Reconstruct a job from its JSON record.
    ///
    /// `owner` is assigned (with the default-owner fallback) only when the
    /// record carries no owner of its own.
    pub fn from_json(data: &str, owner: &str) -> Result<Self, JobError> {
        Self::from_json_with(data, owner, &JobOptions::default())
    }

    /// Reconstruct a job from its JSON record with explicit options.
    ///
    /// Malformed JSON is rejected outright rather than producing a
    /// zero-valued job. The ownership invariant is checked after owner
    /// defaulting; `createDate` and `id` are stamped only when absent.
    pub fn from_json_with(
        data: &str,
        owner: &str,
        options: &JobOptions,
    ) -> Result<Self, JobError> {
        let mut job: Job = serde_json::from_str(data).map_err(JobError::Parse)?;
        trigger::parse(&job.cron)?;

        if job.admin.owner().is_empty() {
            job.admin.assign_owner(owner, &options.default_owner);
        }
        if !job.is_valid() {
            return Err(JobError::NoAuthorization);
        }
        if job.create_date.is_empty() {
            job.create_date = Utc::now().to_rfc3339();
        }
        if job.id.is_empty() {
            job.id = job.compute_id()?;
        }
        Ok(job)
    }

    /// Content-derived identifier, frozen at construction.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Cron expression driving the trigger.
    pub fn cron(&self) -> &str {
        &self.cron
    }

    /// Creation timestamp (RFC 3339), frozen at construction.
    pub fn created_at(&self) -> &str {
        &self.create_date
    }

    /// Whether the job participates in trigger matching.
    pub fn is_active(&self) -> bool {
        !self.inactive
    }

    /// Enable or disable the job.
    pub fn set_active(&mut self, active: bool) {
        self.inactive = !active;
    }

    /// Current owner.
    pub fn owner(&self) -> &str {
        self.admin.owner()
    }

    /// Members in insertion order.
    pub fn members(&self) -> &[String] {
        self.admin.members()
    }

    /// Assign the owner, adding them to the member set when absent.
    ///
    /// An empty name falls back to [`DEFAULT_OWNER`].
    pub fn set_owner(&mut self, member: &str) {
        self.admin.assign_owner(member, DEFAULT_OWNER);
    }

    /// Whether `member` has standard authorization over this job.
    pub fn has_authorization(&self, member: &str) -> bool {
        self.admin.has_authorization(member)
    }

    /// Whether `member` has admin authorization over this job.
    pub fn has_admin_authorization(&self, member: &str) -> bool {
        self.admin.has_admin_authorization(member)
    }

    /// Structural validity: the owner is listed among the members.
    pub fn is_valid(&self) -> bool {
        self.admin.is_valid()
    }

    /// Whether the job should fire at `at`.
    ///
    /// An inactive job never matches regardless of cron alignment.
    pub fn is_run(&self, at: DateTime<Utc>) -> bool {
        self.is_active() && trigger::matches(&self.cron, at)
    }

    /// First trigger instant strictly after `after`.
    pub fn next_run(&self, after: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let schedule = trigger::parse(&self.cron).ok()?;
        schedule.after(&after).next()
    }

    /// Compute the content hash of the job's canonical serialization.
    ///
    /// The `id` field is cleared before hashing so the digest stays stable
    /// across recomputation on an otherwise-unchanged job.
    pub fn compute_id(&self) -> Result<String, JobError> {
        let mut canonical = self.clone();
        canonical.id = String::new();
        let bytes = serde_json::to_vec(&canonical).map_err(JobError::Serialization)?;
        Ok(identity::content_hash(&bytes))
    }

    /// Serialize the job to its JSON record.
    pub fn to_json(&self) -> Result<String, JobError> {
        serde_json::to_string(self).map_err(JobError::Serialization)
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
