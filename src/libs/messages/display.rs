//! Display implementation turning `Message` variants into terminal text.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CREDENTIALS MESSAGES ===
            Message::HomeDirNotFound(e) => format!("Failed to get user home directory: {}", e),
            Message::CredentialsReadFailed(path, e) => format!("Failed to read credentials file '{}': {}", path, e),
            Message::UnknownCredentialsProperty(key) => format!("Unknown credentials property '{}'", key),
            Message::CredentialsPropertyMissingValue(key) => format!("Credentials property '{}' has no value", key),
            Message::CredentialsPropertyNotSet(key) => format!("Credentials property '{}' is not set", key),

            // === BRANCH MESSAGES ===
            Message::BranchLookupFailed(e) => format!("Failed to get issue tag from branch: {}", e),
            Message::BranchConventionMismatch(branch) => {
                format!("Branch '{}' does not follow the 'TAG-xxx' convention", branch)
            }

            // === WORKLOG MESSAGES ===
            Message::PromptWorktime => "Please enter worktime".to_string(),
            Message::WorklogAdded(time, tag) => format!("Logged '{}' to issue '{}'", time, tag),
            Message::WorklogAddFailed(tag, e) => format!("Failed to add time to {}. Error: {}", tag, e),
        };
        write!(f, "{}", text)
    }
}
