use crate::errors::GitHubError;

/// Returns the last non-empty path segment of an API URL
/// (e.g. "https://api.github.com/repos/o/r/issues/42" -> "42")
pub fn last_path_segment(api_url: &str) -> Option<String> {
    let parsed = url::Url::parse(api_url).ok()?;
    parsed
        .path_segments()?
        .rfind(|segment| !segment.is_empty())
        .map(str::to_string)
}

fn parse_numeric_segment(api_url: &str, what: &str) -> Result<u64, GitHubError> {
    last_path_segment(api_url)
        .and_then(|segment| segment.parse::<u64>().ok())
        .ok_or_else(|| GitHubError::InvalidResponse {
            message: format!("cannot derive {} from URL '{}'", what, api_url),
        })
}

/// Thread id from a notification's own URL (".../notifications/threads/{id}")
pub fn parse_thread_id(notification_url: &str) -> Result<u64, GitHubError> {
    parse_numeric_segment(notification_url, "thread id")
}

/// Issue/PR number from a notification subject URL (".../issues/{n}" or ".../pulls/{n}")
pub fn parse_issue_number(subject_url: &str) -> Result<u64, GitHubError> {
    parse_numeric_segment(subject_url, "issue number")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_path_segment() {
        assert_eq!(
            last_path_segment("https://api.github.com/repos/o/r/pulls/17"),
            Some("17".to_string())
        );
        assert_eq!(
            last_path_segment("https://api.github.com/notifications/threads/99/"),
            Some("99".to_string())
        );
        assert_eq!(last_path_segment("not a url"), None);
    }

    #[test]
    fn test_parse_thread_id() {
        assert_eq!(
            parse_thread_id("https://api.github.com/notifications/threads/1234567").unwrap(),
            1234567
        );
    }

    #[test]
    fn test_parse_issue_number_rejects_non_numeric() {
        let result = parse_issue_number("https://api.github.com/repos/o/r/commits/abc123");
        assert!(matches!(result, Err(GitHubError::InvalidResponse { .. })));
    }
}
