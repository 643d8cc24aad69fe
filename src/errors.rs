use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug)]
pub enum AppError {
    /// GitHub API関連エラー
    #[error("GitHub API error: {0}")]
    GitHub(#[from] GitHubError),

    /// 設定関連エラー
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// GitHub API関連エラー
#[derive(Error, Debug)]
pub enum GitHubError {
    /// JSONパースエラー
    #[error("Response parsing failed: {source}")]
    ParseError {
        #[source]
        source: serde_json::Error,
    },

    /// APIレートリミット超過
    #[error("GitHub API rate limit exceeded. Please try again later.")]
    RateLimitExceeded,

    /// 認証エラー
    #[error("Authentication failed. Please check your GitHub token.")]
    AuthenticationError,

    /// リソースが見つからない（削除済み、またはアクセス不可）
    #[error("Resource not found: {resource_type} {resource_id}")]
    NotFound {
        resource_type: String,
        resource_id: String,
    },

    /// サーバーエラー
    #[error("GitHub server error: {status} {message}")]
    ServerError { status: u16, message: String },

    /// ネットワークエラー
    #[error("Network error: {source}")]
    NetworkError {
        #[source]
        source: reqwest::Error,
    },

    /// レスポンスの内容が想定外
    #[error("Unexpected API response: {message}")]
    InvalidResponse { message: String },
}

/// 設定関連エラー
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 設定ファイル読み込みエラー
    #[error("Failed to load config file: {source}")]
    LoadError {
        #[source]
        source: std::io::Error,
    },

    /// 設定ファイルパースエラー
    #[error("Failed to parse config file: {source}")]
    ParseError {
        #[source]
        source: toml::de::Error,
    },

    /// 設定バリデーションエラー
    #[error("Configuration validation failed: {reason}")]
    ValidationError { reason: String },
}

impl GitHubError {
    /// 削除済みの Issue/PR やリポジトリを参照した場合に true
    pub fn is_remote_lookup(&self) -> bool {
        matches!(self, GitHubError::NotFound { .. })
    }
}

impl From<reqwest::Error> for GitHubError {
    fn from(error: reqwest::Error) -> Self {
        GitHubError::NetworkError { source: error }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::GitHub(GitHubError::NetworkError { source: error })
    }
}

impl From<serde_json::Error> for GitHubError {
    fn from(error: serde_json::Error) -> Self {
        GitHubError::ParseError { source: error }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::LoadError { source: error }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        ConfigError::ParseError { source: error }
    }
}
