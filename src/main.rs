use clap::Parser;
use gh_sanitizer::cli::Cli;
use gh_sanitizer::config::load_config;
use gh_sanitizer::logger::setup_logging;
use gh_sanitizer::{AppError, GitHubClient, NotificationSanitizer, SanitizeReport};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = load_config(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    // Keep the guard alive to ensure log messages are flushed
    let _guard = setup_logging(&config);

    let token = config.github.resolve_token()?;
    let client = GitHubClient::new(&config.github, token)?;
    let sanitizer = NotificationSanitizer::new(client, config.max_notifications_per_run())
        .with_progress(!cli.no_progress);

    tracing::info!(
        "Sanitizing notifications for '{}' (keyword: '{}'{})",
        cli.org,
        cli.keyword,
        if cli.dry_run { ", dry run" } else { "" }
    );

    let report = if cli.dry_run {
        sanitizer.plan(&cli.org, &cli.keyword).await?
    } else {
        sanitizer.mark_unmatched_as_read(&cli.org, &cli.keyword).await?
    };

    print_report(&report, cli.dry_run);
    Ok(())
}

fn print_report(report: &SanitizeReport, dry_run: bool) {
    let verb = if dry_run { "Would mark" } else { "Marked" };
    println!(
        "{} {} of {} thread(s) as read; {} kept unread.",
        verb,
        report.marked_read.len(),
        report.total(),
        report.kept_unread.len()
    );
    for thread_id in &report.marked_read {
        println!("  read:   {}", thread_id);
    }
    for thread_id in &report.kept_unread {
        println!("  unread: {}", thread_id);
    }
}
