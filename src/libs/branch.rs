//! Issue tag resolution from the current git branch.
//!
//! Branches are expected to be named after the ticket they belong to,
//! e.g. `FNX-123-fix-login`. The leading `FNX-<digits>` part is the issue
//! tag that worklog entries are recorded against.

use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use regex::Regex;
use std::process::Command;

/// Branch naming convention, anchored at the start of the branch name.
pub const ISSUE_TAG_PATTERN: &str = r"^(FNX-\d+)";

/// Source of the currently checked-out branch name.
///
/// Abstracted so tests can supply a fake instead of shelling out to git.
pub trait BranchSource {
    fn current_branch(&self) -> Result<String>;
}

/// Reads the branch name from the git working copy.
#[derive(Debug, Default)]
pub struct GitBranch;

impl BranchSource for GitBranch {
    fn current_branch(&self) -> Result<String> {
        let output = Command::new("git")
            .args(["branch", "--show-current"])
            .output()
            .map_err(|e| msg_error_anyhow!(Message::BranchLookupFailed(e.to_string())))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            msg_bail_anyhow!(Message::BranchLookupFailed(stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Resolves the issue tag from the current branch name.
///
/// Returns the matched `FNX-<digits>` prefix, or an error when the branch
/// is not named by the ticket convention.
pub fn current_issue_tag(source: &impl BranchSource) -> Result<String> {
    let branch = source.current_branch()?;
    let pattern = Regex::new(ISSUE_TAG_PATTERN)?;

    match pattern.captures(&branch) {
        Some(captures) => Ok(captures[1].to_string()),
        None => msg_bail_anyhow!(Message::BranchConventionMismatch(branch)),
    }
}
