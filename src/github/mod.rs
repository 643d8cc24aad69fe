pub mod client;
pub mod types;

use crate::errors::GitHubError;
use std::future::Future;
use types::{Issue, IssueComment, Notification};

pub use client::GitHubClient;

/// サニタイザーが利用する GitHub REST API の操作
pub trait GitHubApi: Send + Sync {
    /// 認証ユーザーの未読通知の先頭ページ
    fn list_unread_notifications(
        &self,
        per_page: usize,
    ) -> impl Future<Output = Result<Vec<Notification>, GitHubError>> + Send;

    /// Issue/PR のコメント（作成日時順）
    fn list_issue_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> impl Future<Output = Result<Vec<IssueComment>, GitHubError>> + Send;

    fn get_issue(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> impl Future<Output = Result<Issue, GitHubError>> + Send;

    /// 冪等。既読のスレッドに対しても成功する
    fn mark_thread_as_read(
        &self,
        thread_id: u64,
    ) -> impl Future<Output = Result<(), GitHubError>> + Send;
}
