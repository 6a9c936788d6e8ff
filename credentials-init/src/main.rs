//! Web 应用默认凭据初始化工具
//!
//! 启动时从 `TOPOLOGRAPH_*` 环境变量读取连接参数，
//! 反复调用 `/create-default-credentials` 直到 Web 应用可用或重试次数耗尽。

mod bootstrap;
mod client;

use std::path::Path;

use client::{CredentialsEndpoint, HttpCredentialsEndpoint};
use common::config::{load_dotenv, ConnectionConfig, RetryPolicy};
use common::models::BootstrapReport;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SERVICE_NAME: &str = "credentials-init";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 先加载 .env（已存在的环境变量优先）
    let dotenv = load_dotenv(Path::new(".env"));

    // 初始化日志追踪
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    if let Err(e) = dotenv {
        warn!(code = e.code(), error = %e, "忽略 .env 文件");
    }

    // 加载配置
    let config = ConnectionConfig::from_env();
    let policy = RetryPolicy::default();
    debug!(
        config = %serde_json::to_string(&config)?,
        ?policy,
        "已加载配置"
    );

    if let Some(report) = initialize(config, &policy).await {
        debug!(report = %serde_json::to_string(&report)?, "初始化结束");
    }

    Ok(())
}

/// Builds the HTTP endpoint and runs the bootstrap loop.
///
/// A client that cannot be built is logged and yields `None`; the process
/// still exits normally.
async fn initialize(config: ConnectionConfig, policy: &RetryPolicy) -> Option<BootstrapReport> {
    let endpoint = match HttpCredentialsEndpoint::new(config, policy) {
        Ok(endpoint) => endpoint,
        Err(e) => {
            error!(code = e.code(), error = %e, "无法创建 HTTP 客户端，跳过凭据初始化");
            return None;
        }
    };

    info!(service = SERVICE_NAME, url = %endpoint.target(), "开始初始化默认凭据");
    Some(bootstrap::run(&endpoint, policy).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{closed_addr, config_for, fast_policy};

    #[tokio::test]
    async fn test_initialize_returns_report_for_unreachable_service() {
        let addr = closed_addr().await;

        let report = initialize(config_for(addr), &fast_policy())
            .await
            .expect("client should build");

        assert_eq!(report.attempt_count(), 3);
        assert!(!report.is_available());
    }

    #[tokio::test]
    async fn test_initialize_with_empty_config_completes() {
        let report = initialize(ConnectionConfig::default(), &fast_policy())
            .await
            .expect("client should build");

        assert_eq!(report.attempt_count(), 3);
        assert_eq!(report.delay_count(), 2);
    }
}
