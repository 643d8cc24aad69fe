use crate::Config;
use clap::Parser;
use std::path::PathBuf;

/// Marks unread GitHub Issue/PR notifications of an organization as read
/// unless their comments mention a keyword.
#[derive(Parser, Debug)]
#[command(name = "gh-sanitizer", version)]
#[command(about = "Mark GitHub notifications as read unless they mention a keyword", long_about = None)]
pub struct Cli {
    /// Organization whose repositories' notifications are inspected
    #[arg(value_name = "ORG")]
    pub org: String,

    /// Threads whose comments contain this text (case-sensitive) stay unread, e.g. "@alice"
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,

    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Logging level (overrides the configuration file)
    #[arg(short, long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Maximum number of unread notifications fetched in this run (1-100)
    #[arg(short, long, value_name = "N")]
    pub max_notifications: Option<usize>,

    /// Show which threads would be marked as read without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Do not draw a progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(max) = self.max_notifications {
            config.github.max_notifications_per_run = max;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_arguments() {
        let cli = Cli::try_parse_from(["gh-sanitizer", "github", "@alice"]).unwrap();
        assert_eq!(cli.org, "github");
        assert_eq!(cli.keyword, "@alice");
        assert!(!cli.dry_run);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_missing_keyword_is_rejected() {
        assert!(Cli::try_parse_from(["gh-sanitizer", "github"]).is_err());
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let cli = Cli::try_parse_from([
            "gh-sanitizer",
            "--log-level",
            "debug",
            "--max-notifications",
            "25",
            "--dry-run",
            "github",
            "@alice",
        ])
        .unwrap();

        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert!(cli.dry_run);
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.max_notifications_per_run(), 25);
    }
}
