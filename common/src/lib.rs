//! 凭据初始化工具公共模块
//!
//! 提供配置加载、错误类型与结果模型。

pub mod config;
pub mod errors;
pub mod models;

pub use config::{ConnectionConfig, RetryPolicy};
pub use errors::{AppError, AppResult};
