use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::Config;

/// Set up application logging based on configuration.
///
/// `RUST_LOG` wins over the configured level. Without a file path logs go to
/// stderr and no guard is returned.
pub fn setup_logging(config: &Config) -> Option<WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    match config.log_file_path() {
        None => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .finish();

            if tracing::subscriber::set_global_default(subscriber).is_err() {
                eprintln!("A global tracing subscriber is already installed");
            }
            None
        }
        Some(path) => {
            let (file_writer, guard) = create_file_logger(path);

            let subscriber = FmtSubscriber::builder()
                .with_env_filter(env_filter)
                .with_ansi(false)
                .with_writer(file_writer)
                .finish();

            if tracing::subscriber::set_global_default(subscriber).is_err() {
                eprintln!("A global tracing subscriber is already installed");
            }
            Some(guard)
        }
    }
}

// Non-rotating file appender at the configured path
fn create_file_logger(path: &str) -> (NonBlocking, WorkerGuard) {
    let log_path = std::path::PathBuf::from(path);
    let log_dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Failed to create log directory {}: {}", log_dir.display(), e);
    }

    let log_file_name = log_path
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("gh-sanitizer.log"));

    let file_appender = tracing_appender::rolling::never(&log_dir, log_file_name);
    tracing_appender::non_blocking(file_appender)
}
