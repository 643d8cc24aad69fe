use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// リポジトリ所有者（ユーザーまたは組織）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryOwner {
    /// 所有者名
    pub login: String,
}

/// 通知に含まれるリポジトリ情報
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRepository {
    /// リポジトリID
    pub id: u64,
    /// リポジトリ名
    pub name: String,
    /// リポジトリ名（owner/repo形式）
    pub full_name: String,
    /// リポジトリ所有者
    pub owner: RepositoryOwner,
    #[serde(default)]
    pub private: bool,
}

/// 通知対象の種類
///
/// GitHubは `Issue`, `PullRequest`, `Commit`, `Release`, `Discussion` などを返す。
/// ここで扱うのは Issue と PullRequest のみで、それ以外は `Other` に落ちる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubjectKind {
    Issue,
    PullRequest,
    Other(String),
}

impl SubjectKind {
    /// コメントを持つ Issue/PR かどうか
    pub fn is_issue_like(&self) -> bool {
        matches!(self, SubjectKind::Issue | SubjectKind::PullRequest)
    }
}

impl From<String> for SubjectKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Issue" => SubjectKind::Issue,
            "PullRequest" => SubjectKind::PullRequest,
            _ => SubjectKind::Other(value),
        }
    }
}

impl From<SubjectKind> for String {
    fn from(kind: SubjectKind) -> Self {
        kind.to_string()
    }
}

impl std::fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubjectKind::Issue => write!(f, "Issue"),
            SubjectKind::PullRequest => write!(f, "PullRequest"),
            SubjectKind::Other(other) => write!(f, "{}", other),
        }
    }
}

/// Notification Subject
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSubject {
    /// Subject Title
    pub title: String,
    /// Subject URL（Issue/PRのAPI URL。末尾が番号）
    pub url: Option<String>,
    /// Subject Kind
    #[serde(rename = "type")]
    pub kind: SubjectKind,
}

/// Notification Reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationReason {
    Assign,
    Author,
    Comment,
    Invitation,
    Manual,
    Mention,
    ReviewRequested,
    SecurityAlert,
    StateChange,
    Subscribed,
    TeamMention,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for NotificationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationReason::Assign => write!(f, "assign"),
            NotificationReason::Author => write!(f, "author"),
            NotificationReason::Comment => write!(f, "comment"),
            NotificationReason::Invitation => write!(f, "invitation"),
            NotificationReason::Manual => write!(f, "manual"),
            NotificationReason::Mention => write!(f, "mention"),
            NotificationReason::ReviewRequested => write!(f, "review_requested"),
            NotificationReason::SecurityAlert => write!(f, "security_alert"),
            NotificationReason::StateChange => write!(f, "state_change"),
            NotificationReason::Subscribed => write!(f, "subscribed"),
            NotificationReason::TeamMention => write!(f, "team_mention"),
            NotificationReason::Unknown => write!(f, "unknown"),
        }
    }
}

/// GitHub Notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Notification ID（スレッドID）
    pub id: String,
    /// Repository
    pub repository: NotificationRepository,
    /// Subject
    pub subject: NotificationSubject,
    /// Notification Reason
    pub reason: NotificationReason,
    /// Notification Unread
    pub unread: bool,
    /// Notification Updated At
    pub updated_at: DateTime<Utc>,
    /// スレッドのAPI URL（末尾がスレッドID）
    pub url: String,
}

/// Issue/PR コメント
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueComment {
    /// Comment ID
    pub id: u64,
    /// Comment Body
    #[serde(default)]
    pub body: Option<String>,
    /// Comment Created At
    pub created_at: DateTime<Utc>,
}

/// Issue情報（PRも Issues API から同じ形で取得できる）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Issue 番号
    pub number: u64,
    /// Issue タイトル
    pub title: String,
    /// Issue Body
    #[serde(default)]
    pub body: Option<String>,
}
