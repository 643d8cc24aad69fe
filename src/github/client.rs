use crate::config::GitHubConfig;
use crate::errors::GitHubError;
use crate::github::GitHubApi;
use crate::github::types::*;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// コメント一覧APIの1ページあたりの件数
const COMMENTS_PER_PAGE: usize = 100;

/// GitHub REST APIクライアント
pub struct GitHubClient {
    client: Client,
    api_base_url: String,
    token: SecretString,
}

impl GitHubClient {
    /// 新しいGitHubクライアントを作成
    pub fn new(config: &GitHubConfig, token: SecretString) -> Result<Self, GitHubError> {
        let client = Client::builder()
            .user_agent(format!("gh-sanitizer/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_sec))
            .build()
            .map_err(|e| GitHubError::NetworkError { source: e })?;

        Ok(GitHubClient {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// APIベースURLを取得
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn authorized(&self, request_builder: RequestBuilder) -> RequestBuilder {
        request_builder
            .header(
                "Authorization",
                format!("Bearer {}", self.token.expose_secret()),
            )
            .header("Accept", "application/vnd.github+json")
    }

    /// 未読通知の先頭ページを取得
    pub async fn get_unread_notifications(
        &self,
        per_page: usize,
    ) -> Result<Vec<Notification>, GitHubError> {
        let url = format!("{}/notifications", self.api_base_url);
        let per_page = per_page.to_string();

        let response = self
            .authorized(self.client.get(&url))
            .query(&[("all", "false"), ("per_page", per_page.as_str())])
            .send()
            .await?;

        let response = check_status(response, "notifications", "unread").await?;
        parse_json(response).await
    }

    /// Issue/PR のコメントを全件取得（作成日時順）
    pub async fn get_issue_comments(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> Result<Vec<IssueComment>, GitHubError> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_base_url, owner, repo, issue_number
        );
        let resource_id = format!("{}/{}#{}", owner, repo, issue_number);
        let per_page = COMMENTS_PER_PAGE.to_string();

        let mut comments = Vec::new();
        let mut page: u32 = 1;
        loop {
            let page_param = page.to_string();
            let response = self
                .authorized(self.client.get(&url))
                .query(&[("per_page", per_page.as_str()), ("page", page_param.as_str())])
                .send()
                .await?;

            let response = check_status(response, "issue", &resource_id).await?;
            let batch: Vec<IssueComment> = parse_json(response).await?;
            let fetched = batch.len();
            comments.extend(batch);

            if fetched < COMMENTS_PER_PAGE {
                break;
            }
            page += 1;
        }

        // APIは作成日時順で返すが、ページをまたいだ場合も順序を保証する
        comments.sort_by_key(|c| c.created_at);
        Ok(comments)
    }

    /// Issueを取得（PRも Issues API で本文を取得できる）
    pub async fn get_issue(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> Result<Issue, GitHubError> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}",
            self.api_base_url, owner, repo, issue_number
        );

        let response = self.authorized(self.client.get(&url)).send().await?;

        let resource_id = format!("{}/{}#{}", owner, repo, issue_number);
        let response = check_status(response, "issue", &resource_id).await?;
        parse_json(response).await
    }

    /// 通知スレッドを既読にする
    pub async fn mark_thread_as_read(&self, thread_id: u64) -> Result<(), GitHubError> {
        let url = format!("{}/notifications/threads/{}", self.api_base_url, thread_id);

        let response = self.authorized(self.client.patch(&url)).send().await?;

        // 既読済みスレッドには 304 が返る
        if response.status() == StatusCode::NOT_MODIFIED {
            return Ok(());
        }

        check_status(response, "notification", &thread_id.to_string()).await?;
        Ok(())
    }
}

impl GitHubApi for GitHubClient {
    async fn list_unread_notifications(
        &self,
        per_page: usize,
    ) -> Result<Vec<Notification>, GitHubError> {
        self.get_unread_notifications(per_page).await
    }

    async fn list_issue_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<IssueComment>, GitHubError> {
        self.get_issue_comments(owner, repo, number).await
    }

    async fn get_issue(&self, owner: &str, repo: &str, number: u64) -> Result<Issue, GitHubError> {
        GitHubClient::get_issue(self, owner, repo, number).await
    }

    async fn mark_thread_as_read(&self, thread_id: u64) -> Result<(), GitHubError> {
        GitHubClient::mark_thread_as_read(self, thread_id).await
    }
}

/// ステータスコードをエラーに変換する
async fn check_status(
    response: Response,
    resource_type: &str,
    resource_id: &str,
) -> Result<Response, GitHubError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED => Err(GitHubError::AuthenticationError),
        StatusCode::NOT_FOUND | StatusCode::GONE => Err(GitHubError::NotFound {
            resource_type: resource_type.to_string(),
            resource_id: resource_id.to_string(),
        }),
        StatusCode::TOO_MANY_REQUESTS => Err(GitHubError::RateLimitExceeded),
        StatusCode::FORBIDDEN => {
            let text = response.text().await?;
            if text.to_lowercase().contains("rate limit") {
                Err(GitHubError::RateLimitExceeded)
            } else if text.contains("Bad credentials") || text.contains("Invalid token") {
                Err(GitHubError::AuthenticationError)
            } else {
                Err(GitHubError::ServerError {
                    status: status.as_u16(),
                    message: text,
                })
            }
        }
        _ => {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(GitHubError::ServerError {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, GitHubError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_client_creation_trims_base_url() {
        let config = GitHubConfig {
            api_base_url: "https://ghe.example.com/api/v3/".to_string(),
            ..Default::default()
        };
        let client = GitHubClient::new(&config, SecretString::new("t".to_string())).unwrap();
        assert_eq!(client.api_base_url(), "https://ghe.example.com/api/v3");
    }

    #[test]
    fn test_authorized_sets_headers() {
        let client =
            GitHubClient::new(&GitHubConfig::default(), SecretString::new("abc".to_string()))
                .unwrap();
        let request = client
            .authorized(client.client.get("https://example.com"))
            .build()
            .unwrap();
        assert_eq!(request.headers()["Authorization"], "Bearer abc");
        assert_eq!(request.headers()["Accept"], "application/vnd.github+json");
    }
}
