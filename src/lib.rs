//! # Jiratt - Jira Time Tracker
//!
//! A command-line utility for logging work time to Jira issues, using the
//! current git branch name to decide which issue to log against.
//!
//! ## Features
//!
//! - **Credential File**: Reads host, user and API token from `~/.jiratt`
//! - **Branch Convention**: Derives the issue tag from branches named `FNX-<n>-...`
//! - **Interactive Prompt**: Asks for the time spent on the error stream
//! - **Worklog Submission**: Posts one work-log record over basic-auth HTTPS
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jiratt::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
