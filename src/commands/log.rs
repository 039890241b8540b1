//! The worklog submission flow.
//!
//! Runs the four steps in order: load credentials, resolve the issue tag
//! from the current branch, prompt for the time spent, submit the record.
//! The first failing step aborts the run.

use crate::api::{Jira, Worklog};
use crate::libs::branch::{self, GitBranch};
use crate::libs::config::Credentials;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

pub async fn cmd() -> Result<()> {
    let credentials = Credentials::read()?;
    let issue_tag = branch::current_issue_tag(&GitBranch)?;

    // dialoguer renders the prompt on stderr, keeping stdout clean for
    // the confirmation message.
    let time_spent: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptWorktime.to_string())
        .interact_text()?;

    submit(&Jira::new(&credentials), &issue_tag, time_spent.trim()).await
}

/// Submits one record and prints the confirmation.
pub async fn submit(worklog: &impl Worklog, issue_tag: &str, time_spent: &str) -> Result<()> {
    worklog.add(issue_tag, time_spent).await?;
    msg_success!(Message::WorklogAdded(time_spent.to_string(), issue_tag.to_string()));
    Ok(())
}
