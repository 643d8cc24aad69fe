use crate::errors::{AppError, ConfigError, GitHubError};
use crate::filters::filter_candidates;
use crate::github::GitHubApi;
use crate::github::types::Notification;
use crate::progress::MarkProgress;
use crate::utils::{parse_issue_number, parse_thread_id};

/// 通知スレッドと、対応する Issue/PR の全コメント本文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub thread_id: u64,
    /// owner/repo
    pub repository: String,
    pub number: u64,
    pub text: String,
}

impl Thread {
    /// キーワードは大文字小文字を区別した部分一致
    pub fn mentions(&self, keyword: &str) -> bool {
        self.text.contains(keyword)
    }
}

/// 1回の実行結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizeReport {
    /// 既読にした（dry run では既読にする予定の）スレッド
    pub marked_read: Vec<u64>,
    /// キーワードを含むため未読のまま残したスレッド
    pub kept_unread: Vec<u64>,
}

impl SanitizeReport {
    pub fn total(&self) -> usize {
        self.marked_read.len() + self.kept_unread.len()
    }
}

/// キーワードを含まない通知スレッドを既読にする
///
/// すべてのAPI呼び出しは候補の順に1件ずつ行う。途中でエラーが起きた場合は
/// その時点で中断し、それまでに既読にしたスレッドはそのまま残る。
pub struct NotificationSanitizer<C: GitHubApi> {
    client: C,
    max_notifications_per_run: usize,
    show_progress: bool,
}

impl<C: GitHubApi> NotificationSanitizer<C> {
    pub fn new(client: C, max_notifications_per_run: usize) -> Self {
        Self {
            client,
            max_notifications_per_run,
            show_progress: false,
        }
    }

    /// 既読処理中にプログレスバーを表示する
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// 対象組織の未読 Issue/PR 通知（先頭ページのみ）
    pub async fn list_candidate_notifications(
        &self,
        org: &str,
    ) -> Result<Vec<Notification>, AppError> {
        require_non_empty("organization", org)?;

        let notifications = self
            .client
            .list_unread_notifications(self.max_notifications_per_run)
            .await?;
        let received = notifications.len();
        if received >= self.max_notifications_per_run {
            tracing::warn!(
                "Received a full page of {} unread notifications; older ones are not inspected in this run",
                received
            );
        }

        let candidates = filter_candidates(notifications, org);
        tracing::debug!(
            "{} of {} unread notifications are Issue/PR threads in '{}'",
            candidates.len(),
            received,
            org
        );
        Ok(candidates)
    }

    /// コメント（作成日時順）と本文を空白1つで連結したテキスト
    pub async fn fetch_thread_text(
        &self,
        org: &str,
        repo: &str,
        number: u64,
    ) -> Result<String, GitHubError> {
        let comments = self.client.list_issue_comments(org, repo, number).await?;
        let issue = self.client.get_issue(org, repo, number).await?;

        let parts: Vec<&str> = comments
            .iter()
            .map(|c| c.body.as_deref().unwrap_or_default())
            .chain(std::iter::once(issue.body.as_deref().unwrap_or_default()))
            .collect();

        Ok(parts.join(" "))
    }

    /// 候補通知ごとに Thread を作る。1件でも取得に失敗すれば全体が失敗する
    pub async fn build_threads(&self, org: &str) -> Result<Vec<Thread>, AppError> {
        let candidates = self.list_candidate_notifications(org).await?;

        let mut threads = Vec::with_capacity(candidates.len());
        for notification in &candidates {
            threads.push(self.build_thread(notification).await?);
        }
        Ok(threads)
    }

    async fn build_thread(&self, notification: &Notification) -> Result<Thread, GitHubError> {
        let subject_url =
            notification
                .subject
                .url
                .as_deref()
                .ok_or_else(|| GitHubError::InvalidResponse {
                    message: format!("notification {} has no subject URL", notification.id),
                })?;
        let number = parse_issue_number(subject_url)?;
        let thread_id = parse_thread_id(&notification.url)?;

        let owner = &notification.repository.owner.login;
        let repo = &notification.repository.name;
        tracing::debug!("Fetching comments for {}/{}#{}", owner, repo, number);
        let text = self.fetch_thread_text(owner, repo, number).await?;

        Ok(Thread {
            thread_id,
            repository: notification.repository.full_name.clone(),
            number,
            text,
        })
    }

    /// 既読にするスレッドを計算するだけで、APIには書き込まない
    pub async fn plan(&self, org: &str, keyword: &str) -> Result<SanitizeReport, AppError> {
        require_non_empty("keyword", keyword)?;
        let threads = self.build_threads(org).await?;
        Ok(partition(&threads, keyword))
    }

    /// キーワードを含まないスレッドをすべて既読にする
    pub async fn mark_unmatched_as_read(
        &self,
        org: &str,
        keyword: &str,
    ) -> Result<SanitizeReport, AppError> {
        require_non_empty("keyword", keyword)?;
        let threads = self.build_threads(org).await?;

        let progress = if self.show_progress {
            MarkProgress::new(threads.len())
        } else {
            MarkProgress::hidden()
        };

        let mut report = SanitizeReport::default();
        for thread in &threads {
            if thread.mentions(keyword) {
                tracing::debug!(
                    "Keeping thread {} ({}#{}) unread",
                    thread.thread_id,
                    thread.repository,
                    thread.number
                );
                report.kept_unread.push(thread.thread_id);
            } else {
                if let Err(e) = self.client.mark_thread_as_read(thread.thread_id).await {
                    progress.finish();
                    return Err(e.into());
                }
                tracing::info!(
                    "Marked thread {} ({}#{}) as read",
                    thread.thread_id,
                    thread.repository,
                    thread.number
                );
                report.marked_read.push(thread.thread_id);
            }
            progress.advance(thread.thread_id);
        }
        progress.finish();

        Ok(report)
    }
}

fn partition(threads: &[Thread], keyword: &str) -> SanitizeReport {
    let mut report = SanitizeReport::default();
    for thread in threads {
        if thread.mentions(keyword) {
            report.kept_unread.push(thread.thread_id);
        } else {
            report.marked_read.push(thread.thread_id);
        }
    }
    report
}

fn require_non_empty(name: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::ValidationError {
            reason: format!("{} must not be empty", name),
        });
    }
    Ok(())
}
