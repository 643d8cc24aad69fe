use crate::Notification;

/// Keeps notifications whose repository is owned by `org` (case-insensitive)
pub fn filter_by_organization(notification: &Notification, org: &str) -> bool {
    let owner = &notification.repository.owner.login;
    if !owner.eq_ignore_ascii_case(org) {
        tracing::trace!(
            "Excluding notification from '{}' (not in org '{}') (ID: {})",
            notification.repository.full_name,
            org,
            notification.id
        );
        return false;
    }

    true
}
