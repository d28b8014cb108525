//! # LyView Library
//!
//! 立法院开放资料的英文化服务：从上游 API 取得记录，映射成英文字段，
//! 再把中文值翻译成英文。
//!
//! ## 模块组织
//!
//! - `env` - 类型化的环境变量
//! - `network` - 上游立法院 API 客户端
//! - `records` - 记录类型和字段映射
//! - `translation` - 词典、缓存、解析器和记录重写
//! - `web` - Web服务器功能（可选）

pub mod env;
pub mod network;
pub mod records;
pub mod translation;
#[cfg(feature = "web")]
pub mod web;

pub use translation::{TranslationConfig, TranslationResolver};
