//! Cron trigger matching.
//!
//! A job's trigger instant for a timestamp `t` is the first schedule
//! occurrence strictly after `t - 1s`, truncated to whole seconds. Stepping
//! back one second before asking for "next" keeps `t` itself a candidate
//! instead of skipping it as already past; second-level truncation keeps
//! sub-second clock noise out of the comparison.

use std::str::FromStr;

use chrono::{DateTime, Duration, Timelike, Utc};
use cron::Schedule;

use crate::error::JobError;

/// Parse a cron expression into a schedule.
///
/// Standard 5-field expressions are normalized by prepending a zero seconds
/// field; 6- and 7-field expressions pass through unchanged.
pub fn parse(expr: &str) -> Result<Schedule, JobError> {
    Schedule::from_str(&normalize(expr)).map_err(|e| JobError::InvalidCron {
        expr: expr.to_string(),
        reason: e.to_string(),
    })
}

fn normalize(expr: &str) -> String {
    let trimmed = expr.trim();
    if trimmed.split_whitespace().count() == 5 {
        format!("0 {}", trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Canonical trigger instant of `schedule` for the timestamp `at`.
///
/// Returns `None` when the schedule has no occurrence at or after `at`.
pub fn trigger_instant(schedule: &Schedule, at: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let now = truncate_to_second(at);
    schedule
        .after(&(now - Duration::seconds(1)))
        .next()
        .map(truncate_to_second)
}

/// Whether `at` falls exactly on a trigger instant of `schedule`.
pub fn matches_schedule(schedule: &Schedule, at: DateTime<Utc>) -> bool {
    trigger_instant(schedule, at) == Some(truncate_to_second(at))
}

/// Whether `at` falls exactly on a trigger instant of `expr`.
///
/// Expressions that fail to parse never match; construction is where they
/// are rejected.
pub fn matches(expr: &str, at: DateTime<Utc>) -> bool {
    match parse(expr) {
        Ok(schedule) => matches_schedule(&schedule, at),
        Err(_) => false,
    }
}

fn truncate_to_second(t: DateTime<Utc>) -> DateTime<Utc> {
    t.with_nanosecond(0).unwrap_or(t)
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod tests;
