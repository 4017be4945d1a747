use serde::Serialize;
use std::fmt;

// 服务常量
pub const SERVICE_NAME: &str = "api-gateway";
pub const HEALTH_PATH: &str = "/health";
pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_MODE: &str = "debug";

// 健康检查响应
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub message: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            service: SERVICE_NAME,
            message: "API Gateway is running",
        }
    }
}

/// Run mode of the gateway, named after the gin modes it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Debug,
    Release,
    Test,
}

impl RunMode {
    /// Returns `None` for anything other than the three known names.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "debug" => Some(RunMode::Debug),
            "release" => Some(RunMode::Release),
            "test" => Some(RunMode::Test),
            _ => None,
        }
    }

    /// Unknown modes are accepted and behave like debug.
    pub fn from_config(value: &str) -> Self {
        Self::parse(value).unwrap_or(RunMode::Debug)
    }

    pub fn is_debug(&self) -> bool {
        matches!(self, RunMode::Debug)
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            RunMode::Debug => "debug",
            RunMode::Release => "info",
            RunMode::Test => "warn",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunMode::Debug => "debug",
            RunMode::Release => "release",
            RunMode::Test => "test",
        };
        f.write_str(name)
    }
}

// 错误类型
#[derive(Debug, thiserror::Error)]
pub enum PageviewError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("listen tcp {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(std::io::Error),
}
