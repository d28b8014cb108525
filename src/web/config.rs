//! Web 服务器配置
//!
//! 使用类型安全的环境变量系统进行配置管理

use crate::env::{EnvError, EnvResult, EnvVar};
use crate::network::DEFAULT_BASE_URL;

/// 默认端口
pub const DEFAULT_PORT: u16 = 3001;

/// Web 服务器配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    /// 绑定地址
    pub bind_addr: String,
    /// 端口
    pub port: u16,
    /// 上游立法院 API 地址
    pub upstream_url: String,
}

impl WebConfig {
    /// 从环境变量创建配置
    pub fn from_env() -> EnvResult<Self> {
        use crate::env::{upstream, web};

        Ok(Self {
            bind_addr: web::BindAddress::get()?,
            port: web::Port::get()?,
            upstream_url: upstream::BaseUrl::get()?,
        })
    }

    /// 验证配置
    pub fn validate(&self) -> EnvResult<()> {
        if self.bind_addr.trim().is_empty() {
            return Err(EnvError {
                variable: "LYVIEW_BIND_ADDRESS".to_string(),
                message: "Bind address cannot be empty".to_string(),
            });
        }

        if self.port == 0 {
            return Err(EnvError {
                variable: "PORT".to_string(),
                message: "Port cannot be 0".to_string(),
            });
        }

        if url::Url::parse(&self.upstream_url).is_err() {
            return Err(EnvError {
                variable: "LYVIEW_UPSTREAM_URL".to_string(),
                message: format!("Invalid URL: {}", self.upstream_url),
            });
        }

        Ok(())
    }

    /// 获取完整的监听地址
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            tracing::warn!("Failed to load web config from environment: {}. Using defaults.", e);
            Self {
                bind_addr: "127.0.0.1".to_string(),
                port: DEFAULT_PORT,
                upstream_url: DEFAULT_BASE_URL.to_string(),
            }
        })
    }
}
