//! # 网络模块
//!
//! 与上游立法院开放资料 API 通信
//!
//! - `ly_api` - 上游 API 客户端和错误类型

pub mod ly_api;

pub use ly_api::{LyApiClient, UpstreamError, DEFAULT_BASE_URL};
