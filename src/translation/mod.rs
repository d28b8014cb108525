//! 翻译模块
//!
//! 把立法院资料中的中文值解析成英文，分三层：
//! - **storage**: 静态词典和有界 FIFO 缓存
//! - **core**: 解析器，依次查词典、缓存，剩余文本一次性交给外部翻译服务
//! - **provider**: 外部翻译服务客户端
//! - **pipeline**: 文本过滤规则和记录重写
//! - **config**: 配置管理
//! - **error**: 错误处理
//!
//! # 基本用法
//!
//! ```rust,no_run
//! use lyview::records::Legislator;
//! use lyview::translation::{translate_legislator, ConfigManager, TranslationResolver};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigManager::load(None)?.into_config();
//! let resolver = TranslationResolver::from_config(&config)?;
//!
//! let legislator = Legislator {
//!     party: Some("中國國民黨".into()),
//!     ..Default::default()
//! };
//! let translated = translate_legislator(&resolver, legislator).await;
//! assert_eq!(translated.party.as_ref().and_then(|p| p.as_str()), Some("Kuomintang (KMT)"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod pipeline;
pub mod provider;
pub mod storage;

pub use config::{constants, ConfigManager, TranslationConfig};
pub use core::{ResolverStatsSnapshot, TranslationResolver};
pub use error::{ErrorCategory, TranslationError, TranslationResult};
pub use pipeline::{
    translate_bill, translate_committee, translate_interpellation, translate_legislator,
    translate_record, translate_records, TranslatableRecord,
};
pub use provider::{ExternalTranslationClient, GoogleTranslateClient};
pub use storage::{CacheStats, StaticDictionary, TranslationCache};
