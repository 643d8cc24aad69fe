pub mod cli;
pub mod config;
pub mod errors;
pub mod filters;
pub mod github;
pub mod logger;
pub mod progress;
pub mod sanitizer;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::Config;
pub use errors::{AppError, ConfigError, GitHubError};
pub use github::types::{Notification, SubjectKind};
pub use github::{GitHubApi, GitHubClient};
pub use sanitizer::{NotificationSanitizer, SanitizeReport, Thread};
