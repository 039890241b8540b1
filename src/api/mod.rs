//! API client for the remote issue tracker.
//!
//! The submission side of jiratt is kept behind the narrow [`Worklog`]
//! capability so command flows can be exercised in tests with a fake
//! client instead of a live Jira instance.

use anyhow::Result;

pub mod jira;

pub use jira::Jira;

/// Capability for submitting one work-log record to a tracker issue.
#[allow(async_fn_in_trait)]
pub trait Worklog {
    /// Records `time_spent` against the issue identified by `issue_tag`.
    async fn add(&self, issue_tag: &str, time_spent: &str) -> Result<()>;
}
