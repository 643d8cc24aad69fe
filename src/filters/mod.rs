pub mod organization_filter;
pub mod type_filter;

pub use organization_filter::filter_by_organization;
pub use type_filter::filter_by_subject_type;

use crate::Notification;

/// 対象組織の Issue/PR 通知かどうか
pub fn is_candidate(notification: &Notification, org: &str) -> bool {
    filter_by_organization(notification, org) && filter_by_subject_type(notification)
}

/// サーバーの返却順を保ったまま候補となる通知だけを抽出
pub fn filter_candidates(notifications: Vec<Notification>, org: &str) -> Vec<Notification> {
    notifications
        .into_iter()
        .filter(|n| is_candidate(n, org))
        .collect()
}
