//! Configuration loading.
//!
//! Connection parameters come from `TOPOLOGRAPH_*` environment variables and
//! are read exactly once at startup. Nothing is validated: empty values flow
//! straight into the request URL.

use std::path::Path;
use std::time::Duration;

use serde::Serialize;

use crate::errors::{AppError, AppResult};

/// Environment variable holding the web API login (an e-mail address).
pub const ENV_LOGIN: &str = "TOPOLOGRAPH_WEB_API_USERNAME_EMAIL";
/// Environment variable holding the web API password.
pub const ENV_PASSWORD: &str = "TOPOLOGRAPH_WEB_API_PASSWORD";
/// Environment variable holding the web app host.
pub const ENV_HOST: &str = "TOPOLOGRAPH_HOST";
/// Environment variable holding the web app port.
pub const ENV_PORT: &str = "TOPOLOGRAPH_PORT";

/// Path of the credential-initialization endpoint.
pub const CREATE_CREDENTIALS_PATH: &str = "/create-default-credentials";

/// Target service address and credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConnectionConfig {
    /// Basic auth login.
    pub login: String,
    /// Basic auth password (never serialized).
    #[serde(skip_serializing)]
    pub password: String,
    /// Web app host.
    pub host: String,
    /// Web app port, kept verbatim.
    pub port: String,
}

impl ConnectionConfig {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through `lookup`. Missing keys become `""`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).unwrap_or_default();
        Self {
            login: get(ENV_LOGIN),
            password: get(ENV_PASSWORD),
            host: get(ENV_HOST),
            port: get(ENV_PORT),
        }
    }

    /// Full URL of the credential-initialization endpoint.
    pub fn endpoint_url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, CREATE_CREDENTIALS_PATH)
    }
}

/// Attempt budget and timeouts for the bootstrap loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of requests before giving up.
    pub max_attempts: u32,
    /// Pause after a failed attempt, skipped after the last one.
    pub retry_delay: Duration,
    /// TCP connect timeout per request.
    pub connect_timeout: Duration,
    /// Read timeout per request.
    pub read_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay: Duration::from_secs(2),
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with the given attempt count and delay, default timeouts.
    pub fn new(max_attempts: u32, retry_delay: Duration) -> Self {
        Self {
            max_attempts,
            retry_delay,
            ..Default::default()
        }
    }

    /// Overrides both timeouts.
    pub fn with_timeouts(mut self, connect_timeout: Duration, read_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self.read_timeout = read_timeout;
        self
    }
}

/// Parses `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_dotenv(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// Loads a `.env` file into the process environment.
///
/// A missing file is not an error. Variables already present in the
/// environment are left untouched. Returns how many variables were set.
pub fn load_dotenv(path: &Path) -> AppResult<usize> {
    if !path.exists() {
        return Ok(0);
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("无法读取 {}: {}", path.display(), e)))?;

    let mut applied = 0;
    for (key, value) in parse_dotenv(&content) {
        if std::env::var_os(&key).is_none() {
            std::env::set_var(&key, value);
            applied += 1;
        }
    }

    tracing::debug!(path = %path.display(), applied, "已加载 .env 文件");
    Ok(applied)
}
