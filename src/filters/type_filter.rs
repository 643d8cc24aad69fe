use crate::Notification;

/// Filters notifications based on subject type: only Issue and PullRequest carry comments
pub fn filter_by_subject_type(notification: &Notification) -> bool {
    if !notification.subject.kind.is_issue_like() {
        tracing::trace!(
            "Excluding notification type: '{}' for notification '{}' (ID: {})",
            notification.subject.kind,
            notification.subject.title,
            notification.id
        );
        return false;
    }

    true
}
