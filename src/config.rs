use crate::errors::{ConfigError, GitHubError};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 通知一覧APIが1ページで返せる最大件数
pub const MAX_NOTIFICATIONS_PAGE_SIZE: usize = 100;

/// GitHub API設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// GitHub Personal Access Token（環境変数が優先される）
    #[serde(default)]
    pub token: Option<String>,

    /// トークンを読み込む環境変数名
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// APIベースURL（省略可、デフォルト: https://api.github.com）
    #[serde(default = "default_github_api_url")]
    pub api_base_url: String,

    /// 1回の実行で取得する未読通知の最大数（先頭ページのみ、これを超える通知は無視される）
    #[serde(default = "default_max_notifications_per_run")]
    pub max_notifications_per_run: usize,

    /// HTTPタイムアウト（秒）
    #[serde(default = "default_timeout_sec")]
    pub timeout_sec: u64,
}

fn default_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_max_notifications_per_run() -> usize {
    MAX_NOTIFICATIONS_PAGE_SIZE
}

fn default_timeout_sec() -> u64 {
    30
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: None,
            token_env: default_token_env(),
            api_base_url: default_github_api_url(),
            max_notifications_per_run: default_max_notifications_per_run(),
            timeout_sec: default_timeout_sec(),
        }
    }
}

impl GitHubConfig {
    /// 環境変数、設定ファイルの順にトークンを解決する
    pub fn resolve_token(&self) -> Result<SecretString, GitHubError> {
        self.resolve_token_with(|name| std::env::var(name).ok())
    }

    pub(crate) fn resolve_token_with<F>(&self, lookup: F) -> Result<SecretString, GitHubError>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(&self.token_env)
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.token.clone().filter(|t| !t.trim().is_empty()))
            .map(SecretString::new)
            .ok_or(GitHubError::AuthenticationError)
    }
}

/// ログ設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// ログレベル（省略可、デフォルト: info）
    #[serde(default = "default_log_level")]
    pub level: String,

    /// ログファイルのパス（省略時は標準エラー出力）
    #[serde(default)]
    pub file_path: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_path: None,
        }
    }
}

/// メイン設定構造体
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// GitHub API設定
    #[serde(default)]
    pub github: GitHubConfig,

    /// ログ設定
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn log_level(&self) -> &str {
        &self.logging.level
    }

    pub fn log_file_path(&self) -> &Option<String> {
        &self.logging.file_path
    }

    pub fn max_notifications_per_run(&self) -> usize {
        self.github.max_notifications_per_run
    }

    /// 値の範囲をチェックする
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = self.github.max_notifications_per_run;
        if max == 0 || max > MAX_NOTIFICATIONS_PAGE_SIZE {
            return Err(ConfigError::ValidationError {
                reason: format!(
                    "max_notifications_per_run must be between 1 and {}, got {}",
                    MAX_NOTIFICATIONS_PAGE_SIZE, max
                ),
            });
        }

        if url::Url::parse(&self.github.api_base_url).is_err() {
            return Err(ConfigError::ValidationError {
                reason: format!("invalid api_base_url: {}", self.github.api_base_url),
            });
        }

        Ok(())
    }
}

/// 設定ファイルのデフォルトパスを取得
fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push("gh-sanitizer");
        path.push("config.toml");
        path
    })
}

/// 設定ファイルを読み込む
///
/// パスが指定された場合はそのファイルが必須。指定がなければデフォルトの場所を探し、
/// 見つからなければデフォルト設定を返す。
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config = match path {
        Some(path) => parse_config(&fs::read_to_string(path)?)?,
        None => match config_file_path() {
            Some(default_path) if default_path.exists() => {
                tracing::debug!("Loading config from {}", default_path.display());
                parse_config(&fs::read_to_string(default_path)?)?
            }
            _ => Config::default(),
        },
    };

    config.validate()?;
    Ok(config)
}

fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(contents)?)
}
