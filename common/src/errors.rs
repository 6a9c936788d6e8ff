//! Error types shared across the workspace.

use thiserror::Error;

/// Result alias used throughout the workspace.
pub type AppResult<T> = Result<T, AppError>;

/// Application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// The outbound request failed before a response was received.
    ///
    /// Covers timeouts, refused connections, DNS and TLS failures, malformed
    /// URLs and body read errors alike.
    #[error("外部服务请求失败: {0}")]
    ExternalService(String),

    /// The HTTP client could not be built.
    #[error("HTTP 客户端初始化失败: {0}")]
    HttpClient(String),

    /// Configuration could not be read.
    #[error("配置错误: {0}")]
    Config(String),
}

impl AppError {
    /// Returns a stable error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            AppError::HttpClient(_) => "HTTP_CLIENT_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }
}
