//! Jira REST client for worklog submission.

use super::Worklog;
use crate::libs::config::Credentials;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_debug, msg_error_anyhow};
use anyhow::Result;
use reqwest::Client;
use serde::Serialize;

const ISSUE_URL: &str = "rest/api/2/issue";

/// Request body for the worklog endpoint.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WorklogRecord {
    pub time_spent: String,
}

#[derive(Debug)]
pub struct Jira {
    client: Client,
    credentials: Credentials,
}

impl Jira {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            client: Client::new(),
            credentials: credentials.clone(),
        }
    }
}

/// Builds the worklog endpoint URL for an issue.
pub fn worklog_url(host: &str, issue_tag: &str) -> String {
    format!("{}/{}/{}/worklog", host.trim_end_matches('/'), ISSUE_URL, issue_tag)
}

impl Worklog for Jira {
    async fn add(&self, issue_tag: &str, time_spent: &str) -> Result<()> {
        let url = worklog_url(&self.credentials.host, issue_tag);
        let record = WorklogRecord {
            time_spent: time_spent.to_string(),
        };
        msg_debug!(format!("POST {}", url));

        let res = self
            .client
            .post(&url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.token))
            .json(&record)
            .send()
            .await
            .map_err(|e| msg_error_anyhow!(Message::WorklogAddFailed(issue_tag.to_string(), e.to_string())))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            let reason = format!("{} {}", status, body.trim());
            msg_bail_anyhow!(Message::WorklogAddFailed(issue_tag.to_string(), reason.trim().to_string()));
        }

        Ok(())
    }
}
