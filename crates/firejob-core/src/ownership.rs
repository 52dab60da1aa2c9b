//! Job ownership and authorization.

use serde::{Deserialize, Serialize};

/// Principal assigned when a job is created without an owner.
pub const DEFAULT_OWNER: &str = "admin";

/// Owner and member set attached to a job.
///
/// Invariant: a valid record always lists the owner among its members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Admin {
    owner: String,
    members: Vec<String>,
}

impl Admin {
    /// Create a record owned by `owner` (default owner when empty).
    pub fn new(owner: &str) -> Self {
        let mut admin = Self::default();
        admin.assign_owner(owner, DEFAULT_OWNER);
        admin
    }

    /// Current owner.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Members in insertion order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Assign the owner and ensure they appear in the member set.
    ///
    /// An empty `member` falls back to `fallback`, then to [`DEFAULT_OWNER`].
    /// Existing members are never removed and never duplicated.
    pub fn assign_owner(&mut self, member: &str, fallback: &str) {
        let owner = if !member.is_empty() {
            member
        } else if !fallback.is_empty() {
            fallback
        } else {
            DEFAULT_OWNER
        };

        self.owner = owner.to_string();
        if !self.members.iter().any(|m| m == owner) {
            self.members.push(owner.to_string());
        }
    }

    /// Whether `member` has standard authorization (owner or member).
    pub fn has_authorization(&self, member: &str) -> bool {
        self.owner == member || self.members.iter().any(|m| m == member)
    }

    /// Whether `member` has admin authorization (owner only).
    pub fn has_admin_authorization(&self, member: &str) -> bool {
        self.owner == member
    }

    /// Structural validity: the owner is listed among the members.
    pub fn is_valid(&self) -> bool {
        self.members.iter().any(|m| m == &self.owner)
    }
}
