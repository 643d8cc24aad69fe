//! Fixtures shared by unit tests.

use crate::github::types::{
    Notification, NotificationReason, NotificationRepository, NotificationSubject,
    RepositoryOwner, SubjectKind,
};

/// Builds an unread notification for `owner/repo` pointing at issue/PR `number`
pub fn notification(
    thread_id: u64,
    owner: &str,
    repo: &str,
    kind: SubjectKind,
    number: u64,
) -> Notification {
    let segment = match kind {
        SubjectKind::PullRequest => "pulls",
        _ => "issues",
    };

    Notification {
        id: thread_id.to_string(),
        repository: NotificationRepository {
            id: thread_id,
            name: repo.to_string(),
            full_name: format!("{}/{}", owner, repo),
            owner: RepositoryOwner {
                login: owner.to_string(),
            },
            private: false,
        },
        subject: NotificationSubject {
            title: format!("Notification {}", thread_id),
            url: Some(format!(
                "https://api.github.com/repos/{}/{}/{}/{}",
                owner, repo, segment, number
            )),
            kind,
        },
        reason: NotificationReason::Subscribed,
        unread: true,
        updated_at: chrono::Utc::now(),
        url: format!("https://api.github.com/notifications/threads/{}", thread_id),
    }
}
