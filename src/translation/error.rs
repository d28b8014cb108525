//! 翻译模块统一错误处理
//!
//! 翻译层对调用方永远"失败即放行"：这里的错误只在解析器内部流转，
//! 由解析器记录日志后退回原文，不会越过解析器边界。

use thiserror::Error;

/// 翻译错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// 未配置外部翻译能力
    #[error("未配置外部翻译服务")]
    ConfigurationAbsent,

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 网络或服务端错误
    #[error("传输失败: {0}")]
    Transport(String),

    /// 响应格式错误（无法解码、长度不一致）
    #[error("响应格式错误: {0}")]
    MalformedResponse(String),
}

impl TranslationError {
    /// 获取错误类别
    pub fn category(&self) -> ErrorCategory {
        match self {
            TranslationError::ConfigurationAbsent => ErrorCategory::Configuration,
            TranslationError::Config(_) => ErrorCategory::Configuration,
            TranslationError::Transport(_) => ErrorCategory::Transport,
            TranslationError::MalformedResponse(_) => ErrorCategory::Transport,
        }
    }
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Configuration,
    Transport,
}

impl From<reqwest::Error> for TranslationError {
    fn from(error: reqwest::Error) -> Self {
        // 请求地址可能带有凭据，不进入错误文本
        let error = error.without_url();
        if error.is_decode() {
            TranslationError::MalformedResponse(error.to_string())
        } else {
            TranslationError::Transport(error.to_string())
        }
    }
}

impl From<serde_json::Error> for TranslationError {
    fn from(error: serde_json::Error) -> Self {
        TranslationError::MalformedResponse(format!("JSON解析错误: {}", error))
    }
}

impl From<toml::de::Error> for TranslationError {
    fn from(error: toml::de::Error) -> Self {
        TranslationError::Config(format!("TOML解析错误: {}", error))
    }
}

impl From<crate::env::EnvError> for TranslationError {
    fn from(error: crate::env::EnvError) -> Self {
        TranslationError::Config(error.to_string())
    }
}

/// 错误结果类型别名
pub type TranslationResult<T> = Result<T, TranslationError>;
