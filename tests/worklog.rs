#[cfg(test)]
mod tests {
    use anyhow::Result;
    use jiratt::api::jira::{worklog_url, WorklogRecord};
    use jiratt::api::Worklog;
    use jiratt::commands::log;
    use jiratt::libs::messages::Message;
    use std::cell::RefCell;

    /// Fake tracker client recording what was submitted.
    struct FakeWorklog {
        fail_with: Option<&'static str>,
        calls: RefCell<Vec<(String, String)>>,
    }

    impl FakeWorklog {
        fn new() -> Self {
            Self {
                fail_with: None,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing(reason: &'static str) -> Self {
            Self {
                fail_with: Some(reason),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Worklog for FakeWorklog {
        async fn add(&self, issue_tag: &str, time_spent: &str) -> Result<()> {
            self.calls.borrow_mut().push((issue_tag.to_string(), time_spent.to_string()));
            match self.fail_with {
                Some(reason) => Err(anyhow::anyhow!("{}", Message::WorklogAddFailed(issue_tag.to_string(), reason.to_string()))),
                None => Ok(()),
            }
        }
    }

    #[tokio::test]
    async fn test_submit_forwards_input_verbatim() {
        let worklog = FakeWorklog::new();
        log::submit(&worklog, "FNX-42", "30m").await.unwrap();

        let calls = worklog.calls.borrow();
        assert_eq!(calls.as_slice(), &[("FNX-42".to_string(), "30m".to_string())]);
    }

    #[tokio::test]
    async fn test_submit_failure_names_tag_and_reason() {
        let worklog = FakeWorklog::failing("401 Unauthorized");
        let err = log::submit(&worklog, "FNX-42", "30m").await.unwrap_err();

        let text = err.to_string();
        assert!(text.contains("FNX-42"));
        assert!(text.contains("401 Unauthorized"));
    }

    #[test]
    fn test_worklog_url_shape() {
        assert_eq!(
            worklog_url("https://jira.example.com", "FNX-42"),
            "https://jira.example.com/rest/api/2/issue/FNX-42/worklog"
        );
        // A trailing slash on the host must not produce a double slash.
        assert_eq!(
            worklog_url("https://jira.example.com/", "FNX-42"),
            "https://jira.example.com/rest/api/2/issue/FNX-42/worklog"
        );
    }

    #[test]
    fn test_worklog_record_wire_format() {
        let record = WorklogRecord {
            time_spent: "30m".to_string(),
        };
        assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"timeSpent":"30m"}"#);
    }

    #[test]
    fn test_confirmation_mentions_issue_tag() {
        let message = Message::WorklogAdded("30m".to_string(), "FNX-42".to_string()).to_string();
        assert_eq!(message, "Logged '30m' to issue 'FNX-42'");
    }
}
