/// Every user-facing message produced by the application.
///
/// Keeping the variants in one enum gives a single place to review wording
/// and lets tests assert against message content without string duplication.
#[derive(Debug, Clone)]
pub enum Message {
    // === CREDENTIALS MESSAGES ===
    HomeDirNotFound(String),
    CredentialsReadFailed(String, String),
    UnknownCredentialsProperty(String),
    CredentialsPropertyMissingValue(String),
    CredentialsPropertyNotSet(String),

    // === BRANCH MESSAGES ===
    BranchLookupFailed(String),
    BranchConventionMismatch(String),

    // === WORKLOG MESSAGES ===
    PromptWorktime,
    WorklogAdded(String, String),
    WorklogAddFailed(String, String),
}
